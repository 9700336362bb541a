use crate::domain::{
    Category, CategoryId, Comment, Post, PostId, PostStatus, StoreStats, User, UserId,
};
use crate::error::StoreResult;

/// The blog store's public surface.
///
/// Mutating operations are atomic: they either apply fully and return `Ok`, or
/// return an error and leave every table unchanged. Reads never mutate and
/// never fail; unknown ids yield empty results.
pub trait BlogRepository: Send + Sync {
    /// Register a user. Username and email must be unused.
    fn add_user(
        &mut self,
        username: String,
        email: String,
        password_hash: String,
    ) -> StoreResult<User>;

    /// Create a post owned by an existing user. `status` defaults to draft.
    fn add_post(
        &mut self,
        user_id: UserId,
        title: String,
        content: String,
        status: Option<PostStatus>,
    ) -> StoreResult<Post>;

    /// Create a category with an unused name.
    fn add_category(&mut self, name: String, description: String) -> StoreResult<Category>;

    /// Link a post to a category. Re-linking an existing pair is a no-op.
    fn link_post_to_category(&mut self, post_id: PostId, category_id: CategoryId)
    -> StoreResult<()>;

    /// Leave a comment on an existing post as an existing user.
    fn add_comment(
        &mut self,
        post_id: PostId,
        user_id: UserId,
        content: String,
    ) -> StoreResult<Comment>;

    /// Remove a user with their posts, comments and the posts' dependents.
    /// Absent ids are a no-op.
    fn delete_user(&mut self, user_id: UserId);

    /// Remove a post with its comments and category links.
    /// Absent ids are a no-op.
    fn delete_post(&mut self, post_id: PostId);

    fn posts_by_user(&self, user_id: UserId) -> Vec<Post>;

    fn comments_by_post(&self, post_id: PostId) -> Vec<Comment>;

    fn categories_by_post(&self, post_id: PostId) -> Vec<Category>;

    fn find_user(&self, user_id: UserId) -> Option<User>;

    fn find_user_by_username(&self, username: &str) -> Option<User>;

    fn find_post(&self, post_id: PostId) -> Option<Post>;

    fn find_category(&self, category_id: CategoryId) -> Option<Category>;

    /// All categories in insertion order.
    fn categories(&self) -> Vec<Category>;

    fn stats(&self) -> StoreStats;
}
