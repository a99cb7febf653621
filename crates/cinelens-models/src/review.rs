use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-authored review attached to a movie id. Never edited or deleted
/// once stored. Serialized camelCase to match the legacy persisted shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserReview {
    /// Time-derived id, assigned by the store at append time.
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_photo_url: Option<String>,
    /// Intended range 1-5; the store does not enforce it.
    pub rating: u8,
    pub review: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied review fields; id and timestamp are filled in by the
/// store when the review is appended.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub user_id: String,
    pub user_name: String,
    pub user_photo_url: Option<String>,
    pub rating: u8,
    pub review: String,
    pub photo_url: Option<String>,
}
