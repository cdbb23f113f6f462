use super::ReviewService;
use crate::error::ValidationError;
use crate::models::review::Review;
use chrono::{Local, NaiveDateTime, Timelike};
use tracing::{info, warn};
use uuid::Uuid;

impl ReviewService {
    /// Validates and appends a new review. Checks run in a fixed order and the
    /// first failure is returned; a rejected submission leaves the store untouched.
    pub async fn submit(
        &self,
        location: Option<&str>,
        body: Option<&str>,
    ) -> Result<Review, ValidationError> {
        let body = body.unwrap_or_default();
        let location = location.unwrap_or_default();

        if let Err(err) = self.validate(location, body) {
            warn!("Rejected review submission for location {:?}: {}", location, err);
            return Err(err);
        }

        let review = Review {
            id: Some(Uuid::new_v4().to_string()),
            body: body.to_string(),
            location: location.to_string(),
            timestamp: now_to_the_second(),
        };
        self.store.append(review.clone()).await;

        info!(
            "Stored review {} for {}",
            review.id.as_deref().unwrap_or_default(),
            review.location
        );
        Ok(review)
    }

    fn validate(&self, location: &str, body: &str) -> Result<(), ValidationError> {
        if body.is_empty() {
            return Err(ValidationError::MissingReviewBody);
        }
        if location.is_empty() {
            return Err(ValidationError::MissingLocation);
        }
        if !self.valid_locations.contains(location) {
            return Err(ValidationError::InvalidLocation);
        }
        Ok(())
    }
}

fn now_to_the_second() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
