//! Query index - derived, read-only views over the tables.
//!
//! Linear scans; no secondary index is maintained.

use std::collections::HashSet;

use quill_core::domain::{Category, CategoryId, Comment, Post, PostId, UserId};

use super::table::Tables;

pub fn posts_by_user(tables: &Tables, user_id: UserId) -> Vec<Post> {
    tables
        .posts
        .iter()
        .filter(|p| p.user_id == user_id)
        .cloned()
        .collect()
}

pub fn comments_by_post(tables: &Tables, post_id: PostId) -> Vec<Comment> {
    tables
        .comments
        .iter()
        .filter(|c| c.post_id == post_id)
        .cloned()
        .collect()
}

/// Categories linked to the post, in category insertion order.
pub fn categories_by_post(tables: &Tables, post_id: PostId) -> Vec<Category> {
    let linked: HashSet<CategoryId> = tables
        .links
        .iter()
        .filter(|link| link.post_id == post_id)
        .map(|link| link.category_id)
        .collect();

    if linked.is_empty() {
        return Vec::new();
    }

    tables
        .categories
        .iter()
        .filter(|c| linked.contains(&c.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::domain::{PostCategoryLink, PostStatus, User};

    #[test]
    fn test_categories_follow_category_insertion_order() {
        let mut tables = Tables::default();
        let user = tables
            .users
            .insert_with(|id| User::new(id, "u".into(), "u@x".into(), "h".into()))
            .id;
        let post = tables
            .posts
            .insert_with(|id| Post::new(id, user, "T".into(), "C".into(), PostStatus::Draft))
            .id;
        let first = tables
            .categories
            .insert_with(|id| Category::new(id, "first".into(), String::new()))
            .id;
        let second = tables
            .categories
            .insert_with(|id| Category::new(id, "second".into(), String::new()))
            .id;
        tables
            .categories
            .insert_with(|id| Category::new(id, "unlinked".into(), String::new()));

        // link in reverse order
        tables.links.insert(PostCategoryLink::new(post, second));
        tables.links.insert(PostCategoryLink::new(post, first));

        let names: Vec<_> = categories_by_post(&tables, post)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_unknown_ids_yield_empty() {
        let tables = Tables::default();
        assert!(posts_by_user(&tables, UserId::new(1)).is_empty());
        assert!(comments_by_post(&tables, PostId::new(1)).is_empty());
        assert!(categories_by_post(&tables, PostId::new(1)).is_empty());
    }
}
