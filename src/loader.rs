//! Startup dataset loading. Expects CSV columns `ReviewId,ReviewBody,Location,Timestamp`;
//! extra columns are ignored and a blank `ReviewId` is read as absent.

use crate::error::DatasetError;
use crate::models::review::Review;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

pub fn load_reviews<R: Read>(reader: R) -> Result<Vec<Review>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);

    let mut reviews = Vec::new();
    for row in csv_reader.deserialize::<Review>() {
        let mut review = row?;
        if review.id.as_deref().is_some_and(|id| id.trim().is_empty()) {
            review.id = None;
        }
        reviews.push(review);
    }
    Ok(reviews)
}

pub fn load_reviews_from_path(path: impl AsRef<Path>) -> Result<Vec<Review>, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let reviews = load_reviews(file)?;
    info!("Loaded {} reviews from {}", reviews.len(), path.display());
    Ok(reviews)
}
