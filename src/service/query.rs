use super::ReviewService;
use crate::filter::{filter_reviews, FilterCriteria};
use crate::models::review::ScoredReview;
use tracing::info;

impl ReviewService {
    /// Filters the store under its read lock and attaches a sentiment score to each match.
    /// The store itself is never modified.
    pub async fn query(&self, criteria: &FilterCriteria) -> Vec<ScoredReview> {
        let (total, matched) = self
            .store
            .with_reviews(|reviews| (reviews.len(), filter_reviews(reviews, criteria)))
            .await;

        let results: Vec<ScoredReview> = matched
            .into_iter()
            .map(|review| {
                let sentiment = self.scorer.score(&review.body);
                ScoredReview { review, sentiment }
            })
            .collect();

        info!(
            "Query {:?} matched {} of {} reviews",
            criteria,
            results.len(),
            total
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{review, LengthScorer};
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn service() -> ReviewService {
        ReviewService::new(
            vec![review("r1", "Anytown", "2023-01-05 10:00:00", "Great coffee")],
            Arc::new(LengthScorer),
        )
    }

    #[tokio::test]
    async fn test_query_attaches_sentiment_in_range() {
        let service = service();
        let criteria = FilterCriteria {
            location: None,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2023, 1, 31),
        };

        let results = service.query(&criteria).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].review.id.as_deref(), Some("r1"));
        assert_eq!(results[0].sentiment.compound, "Great coffee".len() as f64 / 1000.0);
    }

    #[tokio::test]
    async fn test_unknown_location_is_empty_not_error() {
        let service = service();
        let criteria = FilterCriteria {
            location: Some("Nowhere".into()),
            ..FilterCriteria::default()
        };
        assert!(service.query(&criteria).await.is_empty());
    }

    #[tokio::test]
    async fn test_query_returns_only_matches_in_store_order() {
        let service = ReviewService::new(
            vec![
                review("a", "Anytown", "2023-01-05 10:00:00", "one"),
                review("b", "Springfield", "2023-01-06 10:00:00", "two"),
                review("c", "Anytown", "2023-01-07 10:00:00", "three"),
            ],
            Arc::new(LengthScorer),
        );
        let criteria = FilterCriteria {
            location: Some("Anytown".into()),
            ..FilterCriteria::default()
        };

        let ids: Vec<Option<String>> = service
            .query(&criteria)
            .await
            .into_iter()
            .map(|scored| scored.review.id)
            .collect();
        assert_eq!(ids, vec![Some("a".to_string()), Some("c".to_string())]);
        assert_eq!(service.store().len().await, 3);
    }

    #[tokio::test]
    async fn test_query_does_not_mutate_store() {
        let service = service();
        let before = service.store().snapshot().await;
        service.query(&FilterCriteria::default()).await;
        assert_eq!(service.store().snapshot().await, before);
    }
}
