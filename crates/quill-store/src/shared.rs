//! Shared handle for multi-threaded hosts.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::store::BlogStore;

/// Cloneable handle to one [`BlogStore`] behind a single lock.
///
/// The lock guards every table at once. Hold the write guard for the whole of
/// a mutating request, including any checks made before the mutation, so a
/// cascade is never observed half-applied.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<BlogStore>>,
}

impl SharedStore {
    pub fn new(store: BlogStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Shared access for read-only operations.
    pub async fn read(&self) -> RwLockReadGuard<'_, BlogStore> {
        self.inner.read().await
    }

    /// Exclusive access for mutating operations.
    pub async fn write(&self) -> RwLockWriteGuard<'_, BlogStore> {
        self.inner.write().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use quill_core::domain::{PostId, UserId};
    use quill_core::ports::BlogRepository;
    use tokio::sync::Barrier;

    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registrations_keep_usernames_unique() {
        let store = SharedStore::default();

        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .write()
                    .await
                    .add_user("same".to_string(), format!("{i}@x"), "h".to_string())
                    .is_ok()
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(store.read().await.stats().users, 1);
    }

    const USERS: u64 = 16;

    /// Every user writes two posts, comments on the next user's posts and
    /// links each post to a shared category.
    fn seeded() -> BlogStore {
        let mut store = BlogStore::new();
        let tech = store.add_category("Tech".into(), String::new()).unwrap();
        for n in 1..=USERS {
            store
                .add_user(format!("user{n}"), format!("{n}@x"), "h".into())
                .unwrap();
        }
        for n in 1..=USERS {
            for _ in 0..2 {
                let post = store
                    .add_post(UserId::new(n), "T".into(), "C".into(), None)
                    .unwrap();
                store.link_post_to_category(post.id, tech.id).unwrap();
                store.add_comment(post.id, UserId::new(n), "own".into()).unwrap();
                let neighbour = UserId::new(n % USERS + 1);
                store.add_comment(post.id, neighbour, "other".into()).unwrap();
            }
        }
        store
    }

    fn assert_consistent(store: &BlogStore) {
        let stats = store.stats();
        let mut posts = 0;
        let mut comments = 0;
        for n in 1..=USERS {
            let user = UserId::new(n);
            let owned = store.posts_by_user(user);
            assert!(owned.is_empty() || store.find_user(user).is_some());
            for post in owned {
                for comment in store.comments_by_post(post.id) {
                    assert!(store.find_user(comment.user_id).is_some());
                    comments += 1;
                }
                posts += 1;
            }
        }
        for raw in 1..=USERS * 2 {
            let post = PostId::new(raw);
            if store.find_post(post).is_none() {
                assert!(store.comments_by_post(post).is_empty());
                assert!(store.categories_by_post(post).is_empty());
            }
        }
        assert_eq!(stats.posts, posts);
        assert_eq!(stats.comments, comments);
        assert_eq!(stats.links, posts);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_readers_never_see_partial_cascade() {
        let store = SharedStore::new(seeded());
        let done = Arc::new(AtomicBool::new(false));
        let start = Arc::new(Barrier::new(9));

        let mut readers = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            let done = done.clone();
            let start = start.clone();
            readers.push(tokio::spawn(async move {
                start.wait().await;
                let mut checks = 0;
                loop {
                    let finished = done.load(Ordering::Acquire);
                    assert_consistent(&*store.read().await);
                    checks += 1;
                    if finished {
                        break checks;
                    }
                    tokio::task::yield_now().await;
                }
            }));
        }

        start.wait().await;
        for n in (1..=USERS).step_by(2) {
            store.write().await.delete_user(UserId::new(n));
            tokio::task::yield_now().await;
        }
        store.write().await.delete_post(PostId::new(4));
        done.store(true, Ordering::Release);

        for reader in readers {
            assert!(reader.await.unwrap() > 0);
        }

        let guard = store.read().await;
        assert_consistent(&guard);
        assert_eq!(guard.stats().users, (USERS / 2) as usize);
        assert_eq!(guard.stats().posts, USERS as usize - 1);
    }
}
