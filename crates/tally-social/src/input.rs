use serde::Deserialize;
use tally_types::RecordId;

/// Client-supplied fields of a [`User`](tally_types::User).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserInput {
    pub username: String,
    pub email: String,
    pub bio: String,
}

/// Client-supplied fields of a new [`Post`](tally_types::Post).
///
/// `created_at` is assigned by the server.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostInput {
    pub user_id: RecordId,
    pub content: String,
}

/// Editable fields of an existing post. The author never changes.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostUpdate {
    pub content: String,
}

/// Client-supplied fields of a [`Like`](tally_types::Like).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LikeInput {
    pub user_id: RecordId,
    pub post_id: RecordId,
}

impl LikeInput {
    pub fn new(user_id: impl Into<RecordId>, post_id: impl Into<RecordId>) -> Self {
        Self {
            user_id: user_id.into(),
            post_id: post_id.into(),
        }
    }
}
