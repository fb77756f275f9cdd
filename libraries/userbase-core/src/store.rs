//! In-memory user record store
//!
//! The collection and the next-identifier counter live behind one
//! `RwLock`, so identifier allocation and insertion happen as a single step
//! and readers never observe a partially applied write.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Result, UserError};
use crate::types::{now_timestamp, CreateUser, UpdateUser, User, UserId};

/// Records and the counter, always mutated together
#[derive(Debug)]
struct Collection {
    // Ids are allocated in increasing order, so key order is insertion order
    users: BTreeMap<UserId, User>,
    // None once u64::MAX has been handed out
    next_id: Option<UserId>,
}

/// Concurrency-safe CRUD over the user collection
#[derive(Debug)]
pub struct UserStore {
    inner: RwLock<Collection>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Empty store; the first record gets id 1
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Store pre-populated with `users`, counter seeded above the highest id
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users: BTreeMap<UserId, User> = users.into_iter().map(|u| (u.id, u)).collect();
        let next_id = match users.keys().next_back() {
            Some(highest) => highest.checked_next(),
            None => Some(UserId::FIRST),
        };

        Self {
            inner: RwLock::new(Collection { users, next_id }),
        }
    }

    /// Store holding the three demo records, next id 4
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collection>> {
        self.inner.read().map_err(|_| UserError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collection>> {
        self.inner.write().map_err(|_| UserError::LockPoisoned)
    }

    /// All records in insertion order
    pub fn list(&self) -> Result<Vec<User>> {
        Ok(self.read()?.users.values().cloned().collect())
    }

    /// Number of records currently held
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.users.len())
    }

    /// True when no records are held
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Identifier the next successful create will receive
    pub fn next_id(&self) -> Result<Option<UserId>> {
        Ok(self.read()?.next_id)
    }

    /// Record for `id`
    pub fn get(&self, id: UserId) -> Result<User> {
        self.read()?
            .users
            .get(&id)
            .cloned()
            .ok_or(UserError::NotFound(id))
    }

    /// Validate, allocate the next id, stamp the creation time and insert
    ///
    /// A rejected payload leaves both the collection and the counter as they
    /// were.
    pub fn create(&self, new_user: CreateUser) -> Result<User> {
        let (name, email) = new_user.validate()?;

        let mut collection = self.write()?;
        let id = collection.next_id.ok_or(UserError::IdsExhausted)?;

        let user = User::new(id, name, email, now_timestamp());
        collection.users.insert(id, user.clone());
        collection.next_id = id.checked_next();

        tracing::info!("Created new user with ID: {}", id);
        Ok(user)
    }

    /// Apply the fields present in `patch` to the record for `id`
    ///
    /// An empty patch is a successful no-op returning the unchanged record.
    pub fn update(&self, id: UserId, patch: UpdateUser) -> Result<User> {
        let mut collection = self.write()?;
        let user = collection
            .users
            .get_mut(&id)
            .ok_or(UserError::NotFound(id))?;

        patch.apply(user);

        tracing::info!("Updated user with ID: {}", id);
        Ok(user.clone())
    }

    /// Remove and return the record for `id`; the id is never handed out again
    pub fn delete(&self, id: UserId) -> Result<User> {
        let removed = self
            .write()?
            .users
            .remove(&id)
            .ok_or(UserError::NotFound(id))?;

        tracing::info!("Deleted user with ID: {}", id);
        Ok(removed)
    }
}

/// The demo records every fresh service starts with
pub fn seed_users() -> Vec<User> {
    [
        (1, "Alice Johnson", "alice@example.com", "2026-01-01T10:00:00Z"),
        (2, "Bob Smith", "bob@example.com", "2026-01-02T11:30:00Z"),
        (3, "Charlie Brown", "charlie@example.com", "2026-01-03T09:15:00Z"),
    ]
    .into_iter()
    .filter_map(|(id, name, email, created_at)| {
        UserId::new(id).map(|id| User::new(id, name, email, created_at))
    })
    .collect()
}
