//! In-memory user repository

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::error::{RepositoryError, RepositoryOperation};
use super::traits::{RepositoryResult, UserRepository};
use crate::models::{now, seed_users, NewUser, User, UserChanges};

#[derive(Debug)]
struct Store {
    next_id: u64,
    users: BTreeMap<u64, User>,
}

impl Store {
    fn insert(&mut self, data: NewUser) -> User {
        let user = User {
            id: self.next_id,
            name: data.name,
            email: data.email,
            created_at: now(),
            updated_at: None,
        };
        self.next_id += 1;
        self.users.insert(user.id, user.clone());
        user
    }
}

/// Process-lifetime user store
///
/// Ids come from a counter that only moves forward, so an id freed by a
/// delete is never handed out again. Because ids grow monotonically the
/// id-ordered map also preserves insertion order.
///
/// Cloning is cheap and shares the underlying store.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<Store>>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    /// Create an empty repository; the first id assigned is 1
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Store {
                next_id: 1,
                users: BTreeMap::new(),
            })),
        }
    }

    /// Create a repository pre-populated with the seed users (ids 1 and 2)
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    /// Create a repository holding the given users in order
    pub fn with_users(users: impl IntoIterator<Item = NewUser>) -> Self {
        let mut store = Store {
            next_id: 1,
            users: BTreeMap::new(),
        };
        for user in users {
            store.insert(user);
        }
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        let store = self.inner.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: u64) -> RepositoryResult<Option<User>> {
        let store = self.inner.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn create(&self, data: NewUser) -> RepositoryResult<User> {
        if data.name.is_empty() || data.email.is_empty() {
            return Err(RepositoryError::validation_failed(
                RepositoryOperation::Create,
                "User",
                "Name and email are required",
            ));
        }

        let mut store = self.inner.write().await;
        let user = store.insert(data);
        tracing::debug!(id = user.id, "Stored new user");
        Ok(user)
    }

    async fn update(&self, id: u64, changes: UserChanges) -> RepositoryResult<User> {
        let mut store = self.inner.write().await;
        let user = store
            .users
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found(RepositoryOperation::Update, "User", id))?;

        user.apply(changes);
        Ok(user.clone())
    }

    async fn delete(&self, id: u64) -> RepositoryResult<bool> {
        let mut store = self.inner.write().await;
        Ok(store.users.remove(&id).is_some())
    }
}
