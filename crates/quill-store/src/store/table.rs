//! Entity tables - one slot-indexed collection per entity type.

use std::collections::BTreeSet;

use quill_core::domain::{
    Category, CategoryId, Comment, CommentId, Post, PostCategoryLink, PostId, StoreStats, User,
    UserId,
};

/// A row that lives in a [`Table`] under its own surrogate id.
pub trait Record: Clone {
    type Id: Copy + Ord + From<u64> + Into<u64> + std::fmt::Debug;

    fn id(&self) -> Self::Id;
}

impl Record for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

impl Record for Post {
    type Id = PostId;

    fn id(&self) -> PostId {
        self.id
    }
}

impl Record for Category {
    type Id = CategoryId;

    fn id(&self) -> CategoryId {
        self.id
    }
}

impl Record for Comment {
    type Id = CommentId;

    fn id(&self) -> CommentId {
        self.id
    }
}

/// Rows stored in slots indexed by id, plus a monotonic id counter.
///
/// Ids are dense and never reused, so the row with id `n` lives in slot
/// `n - 1` and a removed row leaves an empty slot behind. Lookups are a
/// single index and iterating the slots yields rows in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<R: Record> {
    slots: Vec<Option<R>>,
    live: usize,
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            live: 0,
        }
    }
}

fn slot_of<I: Into<u64>>(id: I) -> Option<usize> {
    let raw: u64 = id.into();
    usize::try_from(raw.checked_sub(1)?).ok()
}

impl<R: Record> Table<R> {
    /// Id the next inserted row must carry. Does not reserve it.
    pub fn peek_id(&self) -> R::Id {
        R::Id::from(self.slots.len() as u64 + 1)
    }

    /// Insert a row built around the next id and return a copy of it.
    pub fn insert_with(&mut self, build: impl FnOnce(R::Id) -> R) -> R {
        let row = build(self.peek_id());
        self.slots.push(Some(row.clone()));
        self.live += 1;
        row
    }

    pub fn contains(&self, id: R::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.slots.get(slot_of(id)?)?.as_ref()
    }

    pub fn remove(&mut self, id: R::Id) -> Option<R> {
        let removed = self.slots.get_mut(slot_of(id)?)?.take();
        if removed.is_some() {
            self.live -= 1;
        }
        removed
    }

    /// Remove every listed id, returning how many rows were present.
    pub fn remove_all(&mut self, ids: &[R::Id]) -> usize {
        ids.iter().filter(|&&id| self.remove(id).is_some()).count()
    }

    /// Rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.slots.iter().flatten()
    }

    pub fn find(&self, predicate: impl Fn(&R) -> bool) -> Option<&R> {
        self.iter().find(|&row| predicate(row))
    }

    /// Ids of matching rows, collected so the caller may mutate afterwards.
    pub fn ids_where(&self, predicate: impl Fn(&R) -> bool) -> Vec<R::Id> {
        self.iter()
            .filter(|&row| predicate(row))
            .map(R::id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}

/// The full table set owned by one store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tables {
    pub users: Table<User>,
    pub posts: Table<Post>,
    pub categories: Table<Category>,
    pub links: BTreeSet<PostCategoryLink>,
    pub comments: Table<Comment>,
}

impl Tables {
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            users: self.users.len(),
            posts: self.posts.len(),
            categories: self.categories.len(),
            links: self.links.len(),
            comments: self.comments.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: CategoryId, name: &str) -> Category {
        Category::new(id, name.to_string(), String::new())
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let mut table: Table<Category> = Table::default();
        let a = table.insert_with(|id| category(id, "a"));
        let b = table.insert_with(|id| category(id, "b"));

        assert_eq!(a.id, CategoryId::new(1));
        assert_eq!(b.id, CategoryId::new(2));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut table: Table<Category> = Table::default();
        let a = table.insert_with(|id| category(id, "a"));
        table.remove(a.id);
        let b = table.insert_with(|id| category(id, "b"));

        assert_ne!(a.id, b.id);
        assert!(!table.contains(a.id));
        assert!(table.contains(b.id));
    }

    #[test]
    fn test_peek_does_not_reserve() {
        let mut table: Table<Category> = Table::default();
        let peeked = table.peek_id();
        assert_eq!(peeked, table.peek_id());
        let row = table.insert_with(|id| category(id, "a"));
        assert_eq!(row.id, peeked);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut table: Table<Category> = Table::default();
        for name in ["x", "y", "z"] {
            table.insert_with(|id| category(id, name));
        }
        let names: Vec<_> = table.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_remove_all_counts_present_rows() {
        let mut table: Table<Category> = Table::default();
        let a = table.insert_with(|id| category(id, "a"));
        let removed = table.remove_all(&[a.id, CategoryId::new(99)]);
        assert_eq!(removed, 1);
        assert!(table.is_empty());
    }

    #[test]
    fn test_removal_in_the_middle_keeps_order() {
        let mut table: Table<Category> = Table::default();
        let ids: Vec<_> = ["w", "x", "y", "z"]
            .into_iter()
            .map(|name| table.insert_with(|id| category(id, name)).id)
            .collect();

        table.remove(ids[1]);
        table.remove(ids[2]);
        table.insert_with(|id| category(id, "v"));

        let names: Vec<_> = table.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["w", "z", "v"]);
        assert_eq!(table.len(), 3);
        assert!(table.get(ids[3]).is_some());
        assert_eq!(table.remove(ids[1]), None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_out_of_range_ids_are_absent() {
        let mut table: Table<Category> = Table::default();
        table.insert_with(|id| category(id, "a"));

        assert!(!table.contains(CategoryId::new(0)));
        assert!(!table.contains(CategoryId::new(2)));
        assert!(!table.contains(CategoryId::new(u64::MAX)));
        assert_eq!(table.remove(CategoryId::new(0)), None);
    }
}
