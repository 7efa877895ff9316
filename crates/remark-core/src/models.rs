use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored comment.
///
/// The `document` field is the comment body exactly as it was written into
/// the collection. The service never inspects it; its shape is owned by the
/// clients that produce comments.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Comment {
    pub id: Uuid,
    pub document: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// DTO for inserting a new comment into the database.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NewComment {
    pub document: serde_json::Value,
}
