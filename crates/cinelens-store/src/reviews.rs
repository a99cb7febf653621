use crate::{write_atomic, StoreError};
use chrono::Utc;
use cinelens_models::{ReviewDraft, UserReview};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

const TABLE_VERSION: u32 = 1;

/// On-disk shape of the review table. Earlier versions wrote the bare
/// movie-id map with no envelope; reads fall back to that shape so old
/// device data keeps loading.
#[derive(Debug, Serialize, Deserialize)]
struct ReviewTable {
    version: u32,
    movies: HashMap<u64, Vec<UserReview>>,
}

impl Default for ReviewTable {
    fn default() -> Self {
        Self {
            version: TABLE_VERSION,
            movies: HashMap::new(),
        }
    }
}

/// Persisted mapping from movie id to its ordered list of user reviews.
///
/// Every review list is append-only and insertion order is the display
/// order. `add_review` is a whole-table read-modify-write: two concurrent
/// writers on the same device can lose the earlier append. The rename-based
/// write keeps the table well-formed either way; with single-process CLI
/// usage the race does not arise.
pub struct ReviewStore {
    path: PathBuf,
}

impl ReviewStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Ordered reviews for a movie. Empty when the movie has none or the
    /// table does not exist yet; never absent or an error for "unknown id".
    pub fn reviews(&self, movie_id: u64) -> Result<Vec<UserReview>, StoreError> {
        let table = self.load_table()?;
        Ok(table.movies.get(&movie_id).cloned().unwrap_or_default())
    }

    /// Append a review, assigning its time-derived id and creation
    /// timestamp, and rewrite the whole table.
    pub fn add_review(&self, movie_id: u64, draft: ReviewDraft) -> Result<UserReview, StoreError> {
        let mut table = self.load_table()?;

        let now = Utc::now();
        let review = UserReview {
            id: now.timestamp_millis().to_string(),
            user_id: draft.user_id,
            user_name: draft.user_name,
            user_photo_url: draft.user_photo_url,
            rating: draft.rating,
            review: draft.review,
            photo_url: draft.photo_url,
            created_at: now,
        };

        table.movies.entry(movie_id).or_default().push(review.clone());
        self.save_table(&table)?;

        Ok(review)
    }

    fn load_table(&self) -> Result<ReviewTable, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(ReviewTable::default()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if let Ok(table) = serde_json::from_str::<ReviewTable>(&content) {
            return Ok(table);
        }

        // Legacy unversioned shape: the bare movie-id map.
        let movies: HashMap<u64, Vec<UserReview>> = serde_json::from_str(&content)?;
        debug!("Read legacy review table from {:?}; next write adds the version envelope", self.path);
        Ok(ReviewTable {
            version: TABLE_VERSION,
            movies,
        })
    }

    fn save_table(&self, table: &ReviewTable) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(table)?;
        write_atomic(&self.path, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn draft(rating: u8, review: &str) -> ReviewDraft {
        ReviewDraft {
            user_id: "u-1".to_string(),
            user_name: "Ada".to_string(),
            user_photo_url: None,
            rating,
            review: review.to_string(),
            photo_url: None,
        }
    }

    #[test]
    fn test_first_review_on_empty_table() {
        let dir = tempdir().unwrap();
        let store = ReviewStore::new(dir.path().join("reviews.json"));

        store.add_review(42, draft(5, "great")).unwrap();

        let reviews = store.reviews(42).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].rating, 5);
        assert_eq!(reviews[0].review, "great");
        assert!(!reviews[0].id.is_empty());
    }

    #[test]
    fn test_append_preserves_prior_entries_and_order() {
        let dir = tempdir().unwrap();
        let store = ReviewStore::new(dir.path().join("reviews.json"));

        store.add_review(7, draft(3, "first")).unwrap();
        store.add_review(7, draft(4, "second")).unwrap();
        let created = store.add_review(7, draft(5, "third")).unwrap();

        let reviews = store.reviews(7).unwrap();
        assert_eq!(reviews.len(), 3);
        assert_eq!(
            reviews.iter().map(|r| r.review.as_str()).collect::<Vec<_>>(),
            vec!["first", "second", "third"]
        );
        // The returned record is the one that was persisted, fields intact.
        assert_eq!(reviews[2], created);
    }

    #[test]
    fn test_unknown_movie_returns_empty_list() {
        let dir = tempdir().unwrap();
        let store = ReviewStore::new(dir.path().join("reviews.json"));

        assert!(store.reviews(9999).unwrap().is_empty());

        store.add_review(1, draft(2, "meh")).unwrap();
        assert!(store.reviews(9999).unwrap().is_empty());
    }

    #[test]
    fn test_reviews_per_movie_are_independent() {
        let dir = tempdir().unwrap();
        let store = ReviewStore::new(dir.path().join("reviews.json"));

        store.add_review(1, draft(5, "movie one")).unwrap();
        store.add_review(2, draft(1, "movie two")).unwrap();

        assert_eq!(store.reviews(1).unwrap().len(), 1);
        assert_eq!(store.reviews(2).unwrap().len(), 1);
        assert_eq!(store.reviews(2).unwrap()[0].review, "movie two");
    }

    #[test]
    fn test_draft_fields_preserved_with_generated_metadata() {
        let dir = tempdir().unwrap();
        let store = ReviewStore::new(dir.path().join("reviews.json"));

        let input = ReviewDraft {
            user_id: "u-9".to_string(),
            user_name: "Grace".to_string(),
            user_photo_url: Some("https://example.com/g.png".to_string()),
            rating: 4,
            review: "solid".to_string(),
            photo_url: Some("data:image/png;base64,AAAA".to_string()),
        };
        let created = store.add_review(3, input.clone()).unwrap();

        assert_eq!(created.user_id, input.user_id);
        assert_eq!(created.user_name, input.user_name);
        assert_eq!(created.user_photo_url, input.user_photo_url);
        assert_eq!(created.rating, input.rating);
        assert_eq!(created.review, input.review);
        assert_eq!(created.photo_url, input.photo_url);
        assert!(!created.id.is_empty());
    }

    #[test]
    fn test_legacy_unversioned_table_reads_and_upgrades() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reviews.json");
        std::fs::write(
            &path,
            r#"{"42":[{"id":"1690000000000","userId":"u-1","userName":"Lin","rating":5,"review":"classic","createdAt":"2023-07-22T06:26:40Z"}]}"#,
        )
        .unwrap();

        let store = ReviewStore::new(path.clone());
        let reviews = store.reviews(42).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].user_name, "Lin");

        // The next write carries the version envelope, old entries intact.
        store.add_review(42, draft(4, "still holds up")).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"version\""));
        let reviews = store.reviews(42).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].review, "classic");
    }
}
