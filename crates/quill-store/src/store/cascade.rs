//! Cascade engine - removes dependent rows before their parent.
//!
//! Deletion is two-phase: collect the dependent ids from an immutable scan,
//! then remove them. Dependents always go before the parent row.

use quill_core::domain::{PostId, UserId};

use super::table::Tables;

/// Rows removed by one cascading delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub users: usize,
    pub posts: usize,
    pub comments: usize,
    pub links: usize,
}

impl CascadeReport {
    fn absorb(&mut self, other: CascadeReport) {
        self.users += other.users;
        self.posts += other.posts;
        self.comments += other.comments;
        self.links += other.links;
    }

    pub fn is_empty(&self) -> bool {
        *self == CascadeReport::default()
    }
}

/// Remove a post, its comments and its category links.
pub fn delete_post(tables: &mut Tables, post_id: PostId) -> CascadeReport {
    if !tables.posts.contains(post_id) {
        return CascadeReport::default();
    }

    let comment_ids = tables.comments.ids_where(|c| c.post_id == post_id);
    let comments = tables.comments.remove_all(&comment_ids);

    let links_before = tables.links.len();
    tables.links.retain(|link| link.post_id != post_id);
    let links = links_before - tables.links.len();

    tables.posts.remove(post_id);

    CascadeReport {
        users: 0,
        posts: 1,
        comments,
        links,
    }
}

/// Remove a user, every post they own (with its dependents) and every comment
/// they authored anywhere. Categories are never touched.
pub fn delete_user(tables: &mut Tables, user_id: UserId) -> CascadeReport {
    if !tables.users.contains(user_id) {
        return CascadeReport::default();
    }

    let mut report = CascadeReport::default();

    let owned_posts = tables.posts.ids_where(|p| p.user_id == user_id);
    for post_id in owned_posts {
        report.absorb(delete_post(tables, post_id));
    }

    let authored = tables.comments.ids_where(|c| c.user_id == user_id);
    report.comments += tables.comments.remove_all(&authored);

    tables.users.remove(user_id);
    report.users = 1;

    report
}
