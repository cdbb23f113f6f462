//! Sentiment scoring for review text.
//! The service only depends on the `SentimentScorer` contract; `VaderScorer` is the
//! lexicon-based implementation used by the server.

use crate::models::review::SentimentScore;
use vader_sentiment::SentimentIntensityAnalyzer;

pub trait SentimentScorer: Send + Sync {
    /// Must not fail for any input, including the empty string.
    fn score(&self, text: &str) -> SentimentScore;
}

/// VADER scoring with the crate's bundled lexicon (held in process-wide statics).
#[derive(Debug, Clone, Copy)]
pub struct VaderScorer;

impl VaderScorer {
    pub fn new() -> Self {
        VaderScorer
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> SentimentScore {
        if text.trim().is_empty() {
            return SentimentScore::default();
        }

        let analyzer = SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        let get = |key: &str| {
            scores
                .get(key)
                .copied()
                .filter(|v| v.is_finite())
                .unwrap_or(0.0)
        };

        // Proportions carry 3 decimals, compound carries 4.
        SentimentScore {
            neg: round_to(get("neg").clamp(0.0, 1.0), 3),
            neu: round_to(get("neu").clamp(0.0, 1.0), 3),
            pos: round_to(get("pos").clamp(0.0, 1.0), 3),
            compound: round_to(get("compound").clamp(-1.0, 1.0), 4),
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
