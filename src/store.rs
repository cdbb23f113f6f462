use crate::models::review::Review;
use tokio::sync::RwLock;
use tracing::debug;

/// Append-only, insertion-ordered review collection held in memory.
/// Writers take the write lock for the duration of a push, so readers always
/// see a complete snapshot.
#[derive(Debug, Default)]
pub struct ReviewStore {
    reviews: RwLock<Vec<Review>>,
}

impl ReviewStore {
    pub fn new(initial: Vec<Review>) -> Self {
        debug!("Review store seeded with {} reviews", initial.len());
        ReviewStore {
            reviews: RwLock::new(initial),
        }
    }

    // Copy of every review in insertion order
    pub async fn snapshot(&self) -> Vec<Review> {
        self.reviews.read().await.clone()
    }

    /// Runs `read` against the current contents while holding the read lock, so a
    /// caller can copy out only the records it needs.
    pub async fn with_reviews<R>(&self, read: impl FnOnce(&[Review]) -> R) -> R {
        let reviews = self.reviews.read().await;
        read(&reviews)
    }

    pub async fn append(&self, review: Review) {
        let mut reviews = self.reviews.write().await;
        reviews.push(review);
        debug!("Review appended, store now holds {}", reviews.len());
    }

    pub async fn len(&self) -> usize {
        self.reviews.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.reviews.read().await.is_empty()
    }
}
