//! Repository facade - the store's single public entry point.

use quill_core::domain::{
    Category, CategoryId, Comment, Post, PostCategoryLink, PostId, PostStatus, StoreStats, User,
    UserId,
};
use quill_core::ports::BlogRepository;
use quill_core::StoreResult;

use super::table::Tables;
use super::{cascade, query, validator};

/// In-memory blog store.
///
/// Owns every table exclusively. Callers only ever receive copies of rows.
/// Each mutating operation validates against the current state first and
/// writes only once every check has passed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogStore {
    tables: Tables,
}

impl BlogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlogRepository for BlogStore {
    fn add_user(
        &mut self,
        username: String,
        email: String,
        password_hash: String,
    ) -> StoreResult<User> {
        validator::check_new_user(&self.tables, &username, &email)?;

        let user = self
            .tables
            .users
            .insert_with(|id| User::new(id, username, email, password_hash));
        tracing::debug!(user_id = %user.id, "User added");
        Ok(user)
    }

    fn add_post(
        &mut self,
        user_id: UserId,
        title: String,
        content: String,
        status: Option<PostStatus>,
    ) -> StoreResult<Post> {
        validator::check_new_post(&self.tables, user_id)?;

        let status = status.unwrap_or_default();
        let post = self
            .tables
            .posts
            .insert_with(|id| Post::new(id, user_id, title, content, status));
        tracing::debug!(post_id = %post.id, %user_id, %status, "Post added");
        Ok(post)
    }

    fn add_category(&mut self, name: String, description: String) -> StoreResult<Category> {
        validator::check_new_category(&self.tables, &name)?;

        let category = self
            .tables
            .categories
            .insert_with(|id| Category::new(id, name, description));
        tracing::debug!(category_id = %category.id, "Category added");
        Ok(category)
    }

    fn link_post_to_category(
        &mut self,
        post_id: PostId,
        category_id: CategoryId,
    ) -> StoreResult<()> {
        validator::check_link(&self.tables, post_id, category_id)?;

        if self
            .tables
            .links
            .insert(PostCategoryLink::new(post_id, category_id))
        {
            tracing::debug!(%post_id, %category_id, "Post linked to category");
        }
        Ok(())
    }

    fn add_comment(
        &mut self,
        post_id: PostId,
        user_id: UserId,
        content: String,
    ) -> StoreResult<Comment> {
        validator::check_new_comment(&self.tables, post_id, user_id)?;

        let comment = self
            .tables
            .comments
            .insert_with(|id| Comment::new(id, post_id, user_id, content));
        tracing::debug!(comment_id = %comment.id, %post_id, %user_id, "Comment added");
        Ok(comment)
    }

    fn delete_user(&mut self, user_id: UserId) {
        let report = cascade::delete_user(&mut self.tables, user_id);
        if !report.is_empty() {
            tracing::debug!(
                %user_id,
                posts = report.posts,
                comments = report.comments,
                links = report.links,
                "User deleted"
            );
        }
    }

    fn delete_post(&mut self, post_id: PostId) {
        let report = cascade::delete_post(&mut self.tables, post_id);
        if !report.is_empty() {
            tracing::debug!(
                %post_id,
                comments = report.comments,
                links = report.links,
                "Post deleted"
            );
        }
    }

    fn posts_by_user(&self, user_id: UserId) -> Vec<Post> {
        query::posts_by_user(&self.tables, user_id)
    }

    fn comments_by_post(&self, post_id: PostId) -> Vec<Comment> {
        query::comments_by_post(&self.tables, post_id)
    }

    fn categories_by_post(&self, post_id: PostId) -> Vec<Category> {
        query::categories_by_post(&self.tables, post_id)
    }

    fn find_user(&self, user_id: UserId) -> Option<User> {
        self.tables.users.get(user_id).cloned()
    }

    fn find_user_by_username(&self, username: &str) -> Option<User> {
        self.tables.users.find(|u| u.username == username).cloned()
    }

    fn find_post(&self, post_id: PostId) -> Option<Post> {
        self.tables.posts.get(post_id).cloned()
    }

    fn find_category(&self, category_id: CategoryId) -> Option<Category> {
        self.tables.categories.get(category_id).cloned()
    }

    fn categories(&self) -> Vec<Category> {
        self.tables.categories.iter().cloned().collect()
    }

    fn stats(&self) -> StoreStats {
        self.tables.stats()
    }
}

#[cfg(test)]
impl BlogStore {
    pub(crate) fn tables(&self) -> &Tables {
        &self.tables
    }
}
