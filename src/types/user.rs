//! User types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{StoreError, StoreResult, UserId};
use crate::utils::time::current_time;
use crate::validation::{normalize_email, require_non_empty, validate_email, validate_id};

/// Role of a user within the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Reader,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::Reader];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Reader => "READER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Role::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| StoreError::validation(format!("unknown role '{}'", s)))
    }
}

/// A library user.
///
/// Values are immutable: state transitions such as [`User::deactivated`]
/// return a new value which the caller persists with `update`.
/// Deserialization is validated by [`User::new`] as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UserRecord")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<UserId>,
    name: String,
    email: String,
    role: Role,
    active: bool,
    created_at: DateTime<Utc>,
}

impl User {
    /// Build a validated, active user without an identifier
    pub fn new(name: &str, email: &str, role: Role) -> StoreResult<Self> {
        let name = require_non_empty("name", name)?;
        let email = normalize_email(email);
        validate_email(&email)?;

        Ok(Self {
            id: None,
            name,
            email,
            role,
            active: true,
            created_at: current_time(),
        })
    }

    /// Identifier assigned by the store, `None` before `create`
    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Copy of this user with a different role
    pub fn with_role(&self, role: Role) -> Self {
        Self {
            role,
            ..self.clone()
        }
    }

    /// Copy of this user with a different (validated) email
    pub fn with_email(&self, email: &str) -> StoreResult<Self> {
        let email = normalize_email(email);
        validate_email(&email)?;
        Ok(Self {
            email,
            ..self.clone()
        })
    }

    /// Copy of this user with the active flag cleared
    pub fn deactivated(&self) -> Self {
        Self {
            active: false,
            ..self.clone()
        }
    }

    pub(crate) fn with_id(self, id: UserId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    #[serde(default)]
    id: Option<UserId>,
    name: String,
    email: String,
    role: Role,
    #[serde(default = "default_active")]
    active: bool,
    #[serde(default = "current_time")]
    created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl TryFrom<UserRecord> for User {
    type Error = StoreError;

    fn try_from(record: UserRecord) -> StoreResult<Self> {
        if let Some(id) = record.id {
            validate_id("user id", id.0)?;
        }
        let user = User::new(&record.name, &record.email, record.role)?;
        Ok(Self {
            id: record.id,
            active: record.active,
            created_at: record.created_at,
            ..user
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_normalizes_input() {
        let user = User::new("  Ana  ", " Ana@Example.COM ", Role::Reader).unwrap();
        assert_eq!(user.name(), "Ana");
        assert_eq!(user.email(), "ana@example.com");
        assert!(user.is_active());
        assert!(user.id().is_none());
    }

    #[test]
    fn test_new_user_rejects_bad_input() {
        assert!(matches!(
            User::new("", "ana@example.com", Role::Reader),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            User::new("Ana", "not-an-email", Role::Reader),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn test_transitions_return_new_values() {
        let user = User::new("Ana", "ana@example.com", Role::Reader).unwrap();
        let admin = user.with_role(Role::Admin);
        let gone = user.deactivated();

        assert_eq!(user.role(), Role::Reader);
        assert!(user.is_active());
        assert_eq!(admin.role(), Role::Admin);
        assert!(!gone.is_active());
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" READER ".parse::<Role>().unwrap(), Role::Reader);
        assert!("librarian".parse::<Role>().is_err());
    }

    #[test]
    fn test_deserialize_goes_through_constructor() {
        let user: User = serde_json::from_value(serde_json::json!({
            "name": " Ana ",
            "email": "ANA@Example.com",
            "role": "READER"
        }))
        .unwrap();
        assert_eq!(user.name(), "Ana");
        assert_eq!(user.email(), "ana@example.com");
        assert!(user.is_active());

        let bad_email = serde_json::from_value::<User>(serde_json::json!({
            "name": "Ana", "email": "nope", "role": "ADMIN"
        }));
        assert!(bad_email.is_err());

        let no_name = serde_json::from_value::<User>(serde_json::json!({
            "name": " ", "email": "ana@example.com", "role": "ADMIN"
        }));
        assert!(no_name.is_err());
    }

    #[test]
    fn test_user_serialization() {
        let user = User::new("Ana", "ana@example.com", Role::Admin)
            .unwrap()
            .with_id(UserId(4));
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["role"], "ADMIN");
        assert!(json.get("createdAt").is_some());
    }
}
