//! User store with a secondary email index

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::types::{StoreError, StoreResult, User, UserId};
use crate::validation::normalize_email;

use super::{Sequence, UserRepository};

#[derive(Debug, Default)]
struct UserTable {
    seq: Sequence,
    users: HashMap<UserId, User>,
    /// normalized email → owning user id
    email_index: HashMap<String, UserId>,
}

/// Thread-safe in-memory user repository
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    table: RwLock<UserTable>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserRepository for InMemoryUserStore {
    fn create(&self, user: User) -> StoreResult<User> {
        let key = normalize_email(user.email());
        let mut table = self.table.write();

        if table.email_index.contains_key(&key) {
            warn!(email = %key, "rejected user with duplicate email");
            return Err(StoreError::duplicate_key(key));
        }

        let id = UserId(table.seq.next_value());
        let user = user.with_id(id);
        table.users.insert(id, user.clone());
        table.email_index.insert(key, id);

        debug!(user_id = %id, "user created");
        Ok(user)
    }

    fn update(&self, user: User) -> StoreResult<()> {
        let id = user.id().ok_or_else(|| StoreError::not_found("user", 0))?;
        let new_key = normalize_email(user.email());
        let mut table = self.table.write();

        let old_key = match table.users.get(&id) {
            Some(existing) => normalize_email(existing.email()),
            None => return Err(StoreError::not_found("user", id.0)),
        };

        if let Some(owner) = table.email_index.get(&new_key) {
            if *owner != id {
                warn!(user_id = %id, email = %new_key, "rejected email already owned by another user");
                return Err(StoreError::duplicate_key(new_key));
            }
        }

        if old_key != new_key {
            table.email_index.remove(&old_key);
            table.email_index.insert(new_key, id);
        }
        table.users.insert(id, user);

        debug!(user_id = %id, "user updated");
        Ok(())
    }

    fn find_by_id(&self, id: UserId) -> Option<User> {
        self.table.read().users.get(&id).cloned()
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        let table = self.table.read();
        let id = table.email_index.get(&normalize_email(email))?;
        table.users.get(id).cloned()
    }

    fn list_all(&self) -> Vec<User> {
        let table = self.table.read();
        let mut users: Vec<User> = table.users.values().cloned().collect();
        users.sort_by_key(|u| u.id());
        users
    }
}
