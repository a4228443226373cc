//! User business rules

use std::sync::Arc;

use tracing::info;

use crate::store::UserRepository;
use crate::types::{Role, StoreError, StoreResult, User, UserId};
use crate::validation::normalize_email;

/// Registration and lifecycle of users
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Register a new active user.
    ///
    /// The email pre-check answers early; the store's index check
    /// stays authoritative under concurrent registrations.
    pub fn register_user(&self, name: &str, email: &str, role: Role) -> StoreResult<User> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(StoreError::validation("email must not be empty"));
        }
        if self.repo.find_by_email(&email).is_some() {
            return Err(StoreError::duplicate_key(email));
        }

        let user = User::new(name, &email, role)?;
        let user = self.repo.create(user)?;
        info!(user_id = ?user.id(), role = %user.role(), "user registered");
        Ok(user)
    }

    pub fn change_user_role(&self, id: UserId, role: Role) -> StoreResult<User> {
        let user = self.require(id)?.with_role(role);
        self.repo.update(user.clone())?;
        Ok(user)
    }

    pub fn deactivate_user(&self, id: UserId) -> StoreResult<User> {
        let user = self.require(id)?.deactivated();
        self.repo.update(user.clone())?;
        info!(user_id = %id, "user deactivated");
        Ok(user)
    }

    pub fn get_user(&self, id: UserId) -> Option<User> {
        self.repo.find_by_id(id)
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.repo.find_by_email(email)
    }

    pub fn list_users(&self) -> Vec<User> {
        self.repo.list_all()
    }

    fn require(&self, id: UserId) -> StoreResult<User> {
        self.repo
            .find_by_id(id)
            .ok_or_else(|| StoreError::not_found("user", id.0))
    }
}
