use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::record::{EntityKind, Record};

/// A member of the social domain. `username` and `email` are unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub email: String,
    pub bio: String,
}

/// A post authored by a [`User`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: RecordId,
    pub user_id: RecordId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A user's like of a post. At most one per `(user_id, post_id)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: RecordId,
    pub user_id: RecordId,
    pub post_id: RecordId,
}

impl Record for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Record for Post {
    const KIND: EntityKind = EntityKind::Post;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Record for Like {
    const KIND: EntityKind = EntityKind::Like;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn post_created_at_serializes_as_rfc3339() {
        let post = Post {
            id: "1".into(),
            user_id: "1".into(),
            content: "My first post!".into(),
            created_at: Utc.with_ymd_and_hms(2023, 10, 1, 12, 0, 0).unwrap(),
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["created_at"], "2023-10-01T12:00:00Z");
        assert_eq!(value["user_id"], "1");
    }

    #[test]
    fn like_roundtrips_through_json() {
        let like = Like {
            id: "5".into(),
            user_id: "2".into(),
            post_id: "1".into(),
        };
        let json = serde_json::to_string(&like).unwrap();
        let parsed: Like = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, like);
    }
}
