// src/models/review.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fixed wire format for review timestamps, e.g. `2023-01-05 10:00:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    #[serde(rename = "ReviewId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,      // Absent on some historical rows
    #[serde(rename = "ReviewBody")]
    pub body: String,            // Free-form review text
    #[serde(rename = "Location")]
    pub location: String,        // Where the review was left
    #[serde(rename = "Timestamp", with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
}

/// Polarity summary attached to a review at query time.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct SentimentScore {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// A review as returned by a query. The sentiment is never written back to the store.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScoredReview {
    #[serde(flatten)]
    pub review: Review,
    pub sentiment: SentimentScore,
}

pub mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(|e| {
            de::Error::custom(format!(
                "invalid timestamp '{}': {} (expected YYYY-MM-DD HH:MM:SS)",
                raw, e
            ))
        })
    }
}
