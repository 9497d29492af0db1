//! Social domain for Tally.
//!
//! [`Social`] owns the User, Post, and Like stores behind one lock and
//! enforces:
//! - unique `username` and `email` across users (case-sensitive),
//! - existing `user_id` on posts, existing `user_id` and `post_id` on likes,
//! - at most one like per `(user_id, post_id)` pair,
//! - cascading deletes, built from two rules in [`cascade`].
//!
//! Cascades run synchronously under the write guard. They are not
//! transactional across stores: a panic part-way through can leave orphaned
//! likes or posts behind.

pub mod cascade;
pub mod input;
pub mod seed;
pub mod service;
pub mod validation;

pub use cascade::CascadeReport;
pub use input::{LikeInput, PostInput, PostUpdate, UserInput};
pub use service::{Removed, Social, SocialCounts};
