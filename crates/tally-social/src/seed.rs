//! Bootstrap records for demos and local runs.

use std::sync::Arc;

use chrono::Utc;
use tally_types::{IdAllocator, Post, User};

pub fn sample_users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            username: "john_doe".into(),
            email: "john@example.com".into(),
            bio: "Hello world!".into(),
        },
        User {
            id: "2".into(),
            username: "jane_smith".into(),
            email: "jane@example.com".into(),
            bio: "Love coding!".into(),
        },
    ]
}

/// Sample posts, stamped with the current time.
pub fn sample_posts() -> Vec<Post> {
    let now = Utc::now();
    vec![
        Post {
            id: "1".into(),
            user_id: "1".into(),
            content: "My first post!".into(),
            created_at: now,
        },
        Post {
            id: "2".into(),
            user_id: "2".into(),
            content: "Learning Go is fun!".into(),
            created_at: now,
        },
    ]
}

/// A social service preloaded with the sample users and posts.
pub fn sample(ids: Arc<IdAllocator>) -> crate::Social {
    crate::Social::from_records(ids, sample_users(), sample_posts(), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_advances_allocator_past_seeded_ids() {
        let ids = Arc::new(IdAllocator::new());
        let social = sample(Arc::clone(&ids));
        assert_eq!(ids.peek(), 3);
        let counts = social.counts();
        assert_eq!((counts.users, counts.posts, counts.likes), (2, 2, 0));
    }
}
