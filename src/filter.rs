use crate::error::ApiError;
use crate::form::first_value;
use crate::models::review::Review;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Optional query predicates, combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Builds criteria from decoded query pairs. Unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, ApiError> {
        Ok(FilterCriteria {
            location: first_value(pairs, "location").map(str::to_string),
            start_date: parse_date(pairs, "start_date")?,
            end_date: parse_date(pairs, "end_date")?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.start_date.is_none() && self.end_date.is_none()
    }

    pub fn matches(&self, review: &Review) -> bool {
        if let Some(location) = &self.location {
            if review.location != *location {
                return false;
            }
        }
        // Both bounds sit at midnight, so end_date excludes later times on that same day.
        if let Some(start) = self.start_date {
            if review.timestamp < midnight(start) {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if review.timestamp > midnight(end) {
                return false;
            }
        }
        true
    }
}

/// Clones the reviews that satisfy `criteria`, preserving input order.
pub fn filter_reviews(reviews: &[Review], criteria: &FilterCriteria) -> Vec<Review> {
    if criteria.is_empty() {
        return reviews.to_vec();
    }
    reviews
        .iter()
        .filter(|review| criteria.matches(review))
        .cloned()
        .collect()
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn parse_date(pairs: &[(String, String)], param: &'static str) -> Result<Option<NaiveDate>, ApiError> {
    first_value(pairs, param)
        .map(|raw| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ApiError::InvalidDate {
                param,
                value: raw.to_string(),
            })
        })
        .transpose()
}
