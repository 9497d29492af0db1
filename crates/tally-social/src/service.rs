use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tally_store::{ensure_unique, require_reference, EntityStore, MemoryTable};
use tally_types::{
    DomainError, DomainResult, EntityKind, IdAllocator, Like, Post, RecordId, User,
};

use crate::cascade::{self, CascadeReport};
use crate::input::{LikeInput, PostInput, PostUpdate, UserInput};
use crate::validation::{validate_content, validate_user};

/// In-memory social service.
///
/// Owns the User, Post, and Like stores behind a single `RwLock`, so
/// uniqueness checks, reference checks, and cascades see and leave a
/// consistent view.
pub struct Social {
    ids: Arc<IdAllocator>,
    inner: RwLock<SocialState>,
}

#[derive(Debug, Default)]
struct SocialState {
    users: MemoryTable<User>,
    posts: MemoryTable<Post>,
    likes: MemoryTable<Like>,
}

/// A deleted record together with the dependents its cascade removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Removed<T> {
    pub record: T,
    pub cascade: CascadeReport,
}

/// Record counts per store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SocialCounts {
    pub users: usize,
    pub posts: usize,
    pub likes: usize,
}

impl Social {
    /// Create an empty service drawing ids from `ids`.
    pub fn new(ids: Arc<IdAllocator>) -> Self {
        Self {
            ids,
            inner: RwLock::new(SocialState::default()),
        }
    }

    /// Create a service holding pre-existing records, advancing the
    /// allocator past every id found.
    pub fn from_records(
        ids: Arc<IdAllocator>,
        users: Vec<User>,
        posts: Vec<Post>,
        likes: Vec<Like>,
    ) -> Self {
        users.iter().for_each(|r| ids.observe(&r.id));
        posts.iter().for_each(|r| ids.observe(&r.id));
        likes.iter().for_each(|r| ids.observe(&r.id));

        Self {
            ids,
            inner: RwLock::new(SocialState {
                users: MemoryTable::from_records(users),
                posts: MemoryTable::from_records(posts),
                likes: MemoryTable::from_records(likes),
            }),
        }
    }

    // ---- Users ----

    pub fn create_user(&self, input: UserInput) -> DomainResult<User> {
        validate_user(&input)?;
        let mut state = self.write();
        Self::check_user_unique(&state.users, &input, None)?;

        let user = User {
            id: self.ids.next_id(),
            username: input.username,
            email: input.email,
            bio: input.bio,
        };
        state.users.insert(user.clone());
        tracing::info!(id = %user.id, username = %user.username, "user created");
        Ok(user)
    }

    pub fn user(&self, id: &RecordId) -> DomainResult<User> {
        self.read()
            .users
            .find(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(EntityKind::User, id))
    }

    pub fn users(&self) -> Vec<User> {
        self.read().users.list()
    }

    pub fn update_user(&self, id: &RecordId, input: UserInput) -> DomainResult<User> {
        let mut state = self.write();
        if !state.users.contains(id) {
            return Err(DomainError::not_found(EntityKind::User, id));
        }
        validate_user(&input)?;
        Self::check_user_unique(&state.users, &input, Some(id))?;

        let user = User {
            id: id.clone(),
            username: input.username,
            email: input.email,
            bio: input.bio,
        };
        state.users.update(id, user.clone());
        tracing::info!(%id, "user updated");
        Ok(user)
    }

    /// Delete a user, their posts, their likes, and every like left on
    /// their posts.
    pub fn delete_user(&self, id: &RecordId) -> DomainResult<Removed<User>> {
        let mut state = self.write();
        let user = state
            .users
            .delete(id)
            .ok_or_else(|| DomainError::not_found(EntityKind::User, id))?;

        let SocialState { posts, likes, .. } = &mut *state;
        let report = cascade::user_removed(posts, likes, id);
        tracing::info!(
            %id,
            posts = report.posts.len(),
            likes = report.likes.len(),
            "user deleted"
        );
        Ok(Removed {
            record: user,
            cascade: report,
        })
    }

    fn check_user_unique(
        users: &MemoryTable<User>,
        input: &UserInput,
        exclude: Option<&RecordId>,
    ) -> DomainResult<()> {
        ensure_unique(users, exclude, "username", &|u: &User| u.username == input.username)?;
        ensure_unique(users, exclude, "email", &|u: &User| u.email == input.email)
    }

    // ---- Posts ----

    pub fn create_post(&self, input: PostInput) -> DomainResult<Post> {
        validate_content(&input.content)?;
        let mut state = self.write();
        require_reference(&state.users, &input.user_id)?;

        let post = Post {
            id: self.ids.next_id(),
            user_id: input.user_id,
            content: input.content,
            created_at: Utc::now(),
        };
        state.posts.insert(post.clone());
        tracing::info!(id = %post.id, user_id = %post.user_id, "post created");
        Ok(post)
    }

    pub fn post(&self, id: &RecordId) -> DomainResult<Post> {
        self.read()
            .posts
            .find(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(EntityKind::Post, id))
    }

    pub fn posts(&self) -> Vec<Post> {
        self.read().posts.list()
    }

    /// Posts authored by `user_id`. Fails with `NotFound` for an unknown user.
    pub fn posts_by_user(&self, user_id: &RecordId) -> DomainResult<Vec<Post>> {
        let state = self.read();
        if !state.users.contains(user_id) {
            return Err(DomainError::not_found(EntityKind::User, user_id));
        }
        Ok(state.posts.list_where(&|p: &Post| &p.user_id == user_id))
    }

    /// Replace a post's content. Author and creation time are unchanged.
    pub fn update_post(&self, id: &RecordId, update: PostUpdate) -> DomainResult<Post> {
        let mut state = self.write();
        let post = state
            .posts
            .find_mut(id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Post, id))?;
        validate_content(&update.content)?;

        post.content = update.content;
        let post = post.clone();
        tracing::info!(%id, "post updated");
        Ok(post)
    }

    /// Delete a post and every like referencing it.
    pub fn delete_post(&self, id: &RecordId) -> DomainResult<Removed<Post>> {
        let mut state = self.write();
        let post = state
            .posts
            .delete(id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Post, id))?;

        let likes = cascade::post_removed(&mut state.likes, id);
        tracing::info!(%id, likes = likes.len(), "post deleted");
        Ok(Removed {
            record: post,
            cascade: CascadeReport {
                posts: Vec::new(),
                likes,
            },
        })
    }

    // ---- Likes ----

    pub fn create_like(&self, input: LikeInput) -> DomainResult<Like> {
        let mut state = self.write();
        require_reference(&state.users, &input.user_id)?;
        require_reference(&state.posts, &input.post_id)?;

        let duplicate = state
            .likes
            .any(&|l: &Like| l.user_id == input.user_id && l.post_id == input.post_id);
        if duplicate {
            return Err(DomainError::validation(
                "post_id",
                "User already liked this post",
            ));
        }

        let like = Like {
            id: self.ids.next_id(),
            user_id: input.user_id,
            post_id: input.post_id,
        };
        state.likes.insert(like.clone());
        tracing::info!(id = %like.id, user_id = %like.user_id, post_id = %like.post_id, "like created");
        Ok(like)
    }

    pub fn like(&self, id: &RecordId) -> DomainResult<Like> {
        self.read()
            .likes
            .find(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(EntityKind::Like, id))
    }

    pub fn likes(&self) -> Vec<Like> {
        self.read().likes.list()
    }

    /// Likes on `post_id`. Fails with `NotFound` for an unknown post.
    pub fn likes_for_post(&self, post_id: &RecordId) -> DomainResult<Vec<Like>> {
        let state = self.read();
        if !state.posts.contains(post_id) {
            return Err(DomainError::not_found(EntityKind::Post, post_id));
        }
        Ok(state.likes.list_where(&|l: &Like| &l.post_id == post_id))
    }

    /// Likes left by `user_id`. Fails with `NotFound` for an unknown user.
    pub fn likes_by_user(&self, user_id: &RecordId) -> DomainResult<Vec<Like>> {
        let state = self.read();
        if !state.users.contains(user_id) {
            return Err(DomainError::not_found(EntityKind::User, user_id));
        }
        Ok(state.likes.list_where(&|l: &Like| &l.user_id == user_id))
    }

    pub fn delete_like(&self, id: &RecordId) -> DomainResult<Like> {
        let removed = self
            .write()
            .likes
            .delete(id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Like, id))?;
        tracing::info!(%id, "like deleted");
        Ok(removed)
    }

    // ---- Introspection ----

    pub fn counts(&self) -> SocialCounts {
        let state = self.read();
        SocialCounts {
            users: state.users.len(),
            posts: state.posts.len(),
            likes: state.likes.len(),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SocialState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SocialState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Social {
    fn default() -> Self {
        Self::new(Arc::new(IdAllocator::new()))
    }
}

impl std::fmt::Debug for Social {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Social")
            .field("counts", &self.counts())
            .field("next_id", &self.ids.peek())
            .finish()
    }
}
