//! Cascading deletes for the social domain.
//!
//! Two independent rules, each one hop deep:
//!
//! - **Post rule**: removing a post removes every like whose `post_id` is
//!   that post.
//! - **User rule**: removing a user removes every post whose `user_id` is
//!   that user and every like whose `user_id` is that user. It does not by
//!   itself touch likes that *other* users left on the removed posts.
//!
//! [`user_removed`] composes them: after the User rule runs, the Post rule is
//! applied to each post it removed. Each rule terminates after one scan, so
//! the composition does too.

use tally_store::{EntityStore, MemoryTable};
use tally_types::{Like, Post, RecordId};

/// Dependents removed by a cascade, in store order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub posts: Vec<Post>,
    pub likes: Vec<Like>,
}

impl CascadeReport {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.likes.is_empty()
    }
}

/// Post rule: drop the likes of `post_id`.
pub fn post_removed(likes: &mut MemoryTable<Like>, post_id: &RecordId) -> Vec<Like> {
    likes.remove_where(&|like: &Like| &like.post_id == post_id)
}

/// User rule: drop the posts and the likes authored by `user_id`.
pub fn user_rule(
    posts: &mut MemoryTable<Post>,
    likes: &mut MemoryTable<Like>,
    user_id: &RecordId,
) -> CascadeReport {
    CascadeReport {
        posts: posts.remove_where(&|post: &Post| &post.user_id == user_id),
        likes: likes.remove_where(&|like: &Like| &like.user_id == user_id),
    }
}

/// Full cascade for a removed user: the User rule, then the Post rule for
/// every post the User rule removed.
pub fn user_removed(
    posts: &mut MemoryTable<Post>,
    likes: &mut MemoryTable<Like>,
    user_id: &RecordId,
) -> CascadeReport {
    let mut report = user_rule(posts, likes, user_id);
    for post in &report.posts {
        let dropped = post_removed(likes, &post.id);
        tracing::debug!(post_id = %post.id, likes = dropped.len(), "cascaded post removal");
        report.likes.extend(dropped);
    }
    report
}
