//! The review query/append engine. One `ReviewService` is built at startup and
//! shared by every request handler.

mod query;
mod submission;

use crate::models::review::Review;
use crate::sentiment::SentimentScorer;
use crate::store::ReviewStore;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

pub struct ReviewService {
    store: ReviewStore,
    valid_locations: HashSet<String>,
    scorer: Arc<dyn SentimentScorer>,
}

impl ReviewService {
    /// Seeds the store with `initial` and freezes the set of accepted locations
    /// to the ones present in it.
    pub fn new(initial: Vec<Review>, scorer: Arc<dyn SentimentScorer>) -> Self {
        let valid_locations: HashSet<String> =
            initial.iter().map(|review| review.location.clone()).collect();
        info!(
            "Review service ready with {} reviews across {} locations",
            initial.len(),
            valid_locations.len()
        );
        ReviewService {
            store: ReviewStore::new(initial),
            valid_locations,
            scorer,
        }
    }

    pub fn valid_locations(&self) -> &HashSet<String> {
        &self.valid_locations
    }

    pub fn store(&self) -> &ReviewStore {
        &self.store
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::review::{Review, SentimentScore, TIMESTAMP_FORMAT};
    use crate::sentiment::SentimentScorer;
    use chrono::NaiveDateTime;

    /// Scores every text by its length so results are predictable.
    pub struct LengthScorer;

    impl SentimentScorer for LengthScorer {
        fn score(&self, text: &str) -> SentimentScore {
            SentimentScore {
                neg: 0.0,
                neu: 0.0,
                pos: 1.0,
                compound: text.len() as f64 / 1000.0,
            }
        }
    }

    pub fn review(id: &str, location: &str, timestamp: &str, body: &str) -> Review {
        Review {
            id: Some(id.to_string()).filter(|id| !id.is_empty()),
            body: body.into(),
            location: location.into(),
            timestamp: NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).unwrap(),
        }
    }
}
