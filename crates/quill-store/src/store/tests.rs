use std::collections::HashSet;

use quill_core::domain::{CategoryId, PostId, PostStatus, UserId};
use quill_core::ports::BlogRepository;
use quill_core::{ConstraintViolation, ReferenceError, StoreError};

use proptest::prelude::*;

use super::BlogStore;
use super::table::Tables;

/// Every FK of every live row resolves to a live row.
fn assert_no_dangling(tables: &Tables) {
    for post in tables.posts.iter() {
        assert!(tables.users.contains(post.user_id), "{} dangles", post.id);
    }
    for comment in tables.comments.iter() {
        assert!(tables.posts.contains(comment.post_id), "{} dangles", comment.id);
        assert!(tables.users.contains(comment.user_id), "{} dangles", comment.id);
    }
    for link in tables.links.iter() {
        assert!(tables.posts.contains(link.post_id));
        assert!(tables.categories.contains(link.category_id));
    }
}

fn assert_unique(tables: &Tables) {
    let mut usernames = HashSet::new();
    let mut emails = HashSet::new();
    for user in tables.users.iter() {
        assert!(usernames.insert(user.username.clone()));
        assert!(emails.insert(user.email.clone()));
    }
    let mut names = HashSet::new();
    for category in tables.categories.iter() {
        assert!(names.insert(category.name.clone()));
    }
}

#[test]
fn test_scenario_delete_user_cascades_everything_but_categories() {
    let mut store = BlogStore::new();

    let john = store
        .add_user("john".into(), "j@x.com".into(), "h".into())
        .unwrap();
    let post = store
        .add_post(john.id, "T".into(), "C".into(), Some(PostStatus::Published))
        .unwrap();
    store
        .add_comment(post.id, john.id, "nice".into())
        .unwrap();
    let tech = store.add_category("Tech".into(), "d".into()).unwrap();
    store.link_post_to_category(post.id, tech.id).unwrap();

    store.delete_user(john.id);

    let stats = store.stats();
    assert_eq!(stats.users, 0);
    assert_eq!(stats.posts, 0);
    assert_eq!(stats.comments, 0);
    assert_eq!(stats.links, 0);
    assert_eq!(stats.categories, 1);
}

#[test]
fn test_scenario_duplicate_username_keeps_single_user() {
    let mut store = BlogStore::new();
    store.add_user("a".into(), "a@x".into(), "h".into()).unwrap();

    let err = store
        .add_user("a".into(), "b@x".into(), "h".into())
        .unwrap_err();

    assert_eq!(
        err,
        StoreError::Constraint(ConstraintViolation::DuplicateUsername("a".into()))
    );
    assert_eq!(store.stats().users, 1);
}

#[test]
fn test_scenario_post_for_missing_user_is_rejected() {
    let mut store = BlogStore::new();

    let err = store
        .add_post(UserId::new(999), "T".into(), "C".into(), None)
        .unwrap_err();

    assert_eq!(
        err,
        StoreError::Reference(ReferenceError::UserNotFound(UserId::new(999)))
    );
    assert_eq!(store.stats().posts, 0);
}

#[test]
fn test_post_status_defaults_to_draft() {
    let mut store = BlogStore::new();
    let user = store.add_user("u".into(), "u@x".into(), "h".into()).unwrap();

    let post = store
        .add_post(user.id, "T".into(), "C".into(), None)
        .unwrap();

    assert_eq!(post.status, PostStatus::Draft);
}

#[test]
fn test_failed_operations_leave_state_unchanged() {
    let mut store = BlogStore::new();
    let user = store.add_user("u".into(), "u@x".into(), "h".into()).unwrap();
    let post = store
        .add_post(user.id, "T".into(), "C".into(), None)
        .unwrap();
    store.add_category("Tech".into(), "d".into()).unwrap();

    let before = store.clone();

    assert!(store.add_user("u".into(), "new@x".into(), "h".into()).is_err());
    assert!(store.add_user("new".into(), "u@x".into(), "h".into()).is_err());
    assert!(store.add_category("Tech".into(), "other".into()).is_err());
    assert!(
        store
            .add_post(UserId::new(77), "T".into(), "C".into(), None)
            .is_err()
    );
    assert!(
        store
            .add_comment(PostId::new(77), user.id, "x".into())
            .is_err()
    );
    assert!(
        store
            .add_comment(post.id, UserId::new(77), "x".into())
            .is_err()
    );
    assert!(
        store
            .link_post_to_category(post.id, CategoryId::new(77))
            .is_err()
    );

    assert_eq!(store, before);

    // failed inserts must not burn ids either
    let next = store.add_user("v".into(), "v@x".into(), "h".into()).unwrap();
    assert_eq!(next.id, UserId::new(2));
}

#[test]
fn test_link_is_idempotent() {
    let mut store = BlogStore::new();
    let user = store.add_user("u".into(), "u@x".into(), "h".into()).unwrap();
    let post = store
        .add_post(user.id, "T".into(), "C".into(), None)
        .unwrap();
    let tech = store.add_category("Tech".into(), "d".into()).unwrap();

    store.link_post_to_category(post.id, tech.id).unwrap();
    let once = store.clone();
    store.link_post_to_category(post.id, tech.id).unwrap();

    assert_eq!(store, once);
    assert_eq!(store.categories_by_post(post.id), vec![tech]);
}

#[test]
fn test_link_reports_missing_post_first() {
    let mut store = BlogStore::new();

    let err = store
        .link_post_to_category(PostId::new(1), CategoryId::new(1))
        .unwrap_err();

    assert_eq!(
        err,
        StoreError::Reference(ReferenceError::PostNotFound(PostId::new(1)))
    );
}

#[test]
fn test_delete_is_idempotent() {
    let mut store = BlogStore::new();
    let user = store.add_user("u".into(), "u@x".into(), "h".into()).unwrap();
    let post = store
        .add_post(user.id, "T".into(), "C".into(), None)
        .unwrap();

    store.delete_post(post.id);
    let after_first = store.clone();
    store.delete_post(post.id);
    store.delete_post(PostId::new(12345));
    assert_eq!(store, after_first);

    store.delete_user(user.id);
    let after_user = store.clone();
    store.delete_user(user.id);
    store.delete_user(UserId::new(12345));
    assert_eq!(store, after_user);
}

#[test]
fn test_delete_post_keeps_owner_and_categories() {
    let mut store = BlogStore::new();
    let user = store.add_user("u".into(), "u@x".into(), "h".into()).unwrap();
    let post = store
        .add_post(user.id, "T".into(), "C".into(), None)
        .unwrap();
    let tech = store.add_category("Tech".into(), "d".into()).unwrap();
    store.link_post_to_category(post.id, tech.id).unwrap();
    store.add_comment(post.id, user.id, "c".into()).unwrap();

    store.delete_post(post.id);

    assert!(store.find_user(user.id).is_some());
    assert!(store.find_category(tech.id).is_some());
    assert!(store.comments_by_post(post.id).is_empty());
    assert!(store.categories_by_post(post.id).is_empty());
    assert_eq!(store.stats().links, 0);
}

#[test]
fn test_cascade_touches_only_the_deleted_users_rows() {
    let mut store = BlogStore::new();
    let alice = store.add_user("alice".into(), "a@x".into(), "h".into()).unwrap();
    let bob = store.add_user("bob".into(), "b@x".into(), "h".into()).unwrap();
    let tech = store.add_category("Tech".into(), "d".into()).unwrap();

    let alice_post = store
        .add_post(alice.id, "A".into(), "a".into(), None)
        .unwrap();
    let bob_post = store
        .add_post(bob.id, "B".into(), "b".into(), None)
        .unwrap();
    store.link_post_to_category(alice_post.id, tech.id).unwrap();
    store.link_post_to_category(bob_post.id, tech.id).unwrap();

    store.add_comment(alice_post.id, bob.id, "bob on alice".into()).unwrap();
    store.add_comment(bob_post.id, alice.id, "alice on bob".into()).unwrap();
    let kept = store.add_comment(bob_post.id, bob.id, "bob on bob".into()).unwrap();

    store.delete_user(alice.id);

    assert_eq!(store.posts_by_user(bob.id), vec![bob_post.clone()]);
    assert_eq!(store.comments_by_post(bob_post.id), vec![kept]);
    assert_eq!(store.categories_by_post(bob_post.id), vec![tech]);
    assert!(store.posts_by_user(alice.id).is_empty());
    assert_no_dangling(store.tables());
}

#[test]
fn test_queries_return_insertion_order() {
    let mut store = BlogStore::new();
    let user = store.add_user("u".into(), "u@x".into(), "h".into()).unwrap();
    let titles = ["one", "two", "three"];
    for title in titles {
        store
            .add_post(user.id, title.into(), "C".into(), None)
            .unwrap();
    }

    let got: Vec<_> = store
        .posts_by_user(user.id)
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(got, titles);
}

#[test]
fn test_ids_are_never_reused() {
    let mut store = BlogStore::new();
    let first = store.add_user("a".into(), "a@x".into(), "h".into()).unwrap();
    store.delete_user(first.id);
    let second = store.add_user("a".into(), "a@x".into(), "h".into()).unwrap();

    assert_ne!(first.id, second.id);
    assert!(store.find_user(first.id).is_none());
}

#[derive(Debug, Clone)]
enum Op {
    AddUser { name: u8, email: u8 },
    AddPost { user: u64 },
    AddCategory { name: u8 },
    Link { post: u64, category: u64 },
    Comment { post: u64, user: u64 },
    DeletePost(u64),
    DeleteUser(u64),
}

// Small id and name spaces so collisions and misses are frequent.
fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..8, 0u8..8).prop_map(|(name, email)| Op::AddUser { name, email }),
        (1u64..=12).prop_map(|user| Op::AddPost { user }),
        (0u8..5).prop_map(|name| Op::AddCategory { name }),
        (1u64..=30, 1u64..=6).prop_map(|(post, category)| Op::Link { post, category }),
        (1u64..=30, 1u64..=12).prop_map(|(post, user)| Op::Comment { post, user }),
        (1u64..=30).prop_map(Op::DeletePost),
        (1u64..=12).prop_map(Op::DeleteUser),
    ]
}

fn apply(store: &mut BlogStore, step: usize, op: &Op) -> Result<(), StoreError> {
    match *op {
        Op::AddUser { name, email } => store
            .add_user(format!("user{name}"), format!("{email}@x"), "h".into())
            .map(|_| ()),
        Op::AddPost { user } => store
            .add_post(UserId::new(user), format!("post {step}"), "C".into(), None)
            .map(|_| ()),
        Op::AddCategory { name } => store
            .add_category(format!("cat{name}"), String::new())
            .map(|_| ()),
        Op::Link { post, category } => {
            store.link_post_to_category(PostId::new(post), CategoryId::new(category))
        }
        Op::Comment { post, user } => store
            .add_comment(PostId::new(post), UserId::new(user), format!("comment {step}"))
            .map(|_| ()),
        Op::DeletePost(post) => {
            store.delete_post(PostId::new(post));
            Ok(())
        }
        Op::DeleteUser(user) => {
            store.delete_user(UserId::new(user));
            Ok(())
        }
    }
}

proptest! {
    #[test]
    fn test_invariants_hold_across_mixed_operations(
        ops in prop::collection::vec(op(), 1..300)
    ) {
        let mut store = BlogStore::new();

        for (step, op) in ops.iter().enumerate() {
            let before = store.clone();

            if apply(&mut store, step, op).is_err() {
                prop_assert_eq!(&store, &before, "failed {:?} mutated state at step {}", op, step);
            }
            assert_no_dangling(store.tables());
            assert_unique(store.tables());
        }
    }
}
