//! User entity representing a registered account in the credential domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity owned by the credential store.
///
/// The `login` is the natural key of the credential domain; it is what a
/// signed token binds to. The secret itself never appears on this entity:
/// hashing and comparison happen inside the store implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique login name
    pub login: String,

    /// Optional human-facing display name
    pub display_name: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(login: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            login: login.into(),
            display_name,
            created_at: Utc::now(),
        }
    }

    /// Projects this user to the identity carried across services
    pub fn identity(&self) -> crate::domain::value_objects::Identity {
        crate::domain::value_objects::Identity {
            login: self.login.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let user = User::new("alice", Some("Alice".to_string()));

        assert_eq!(user.login, "alice");
        assert_eq!(user.display_name, Some("Alice".to_string()));
    }

    #[test]
    fn test_identity_projection() {
        let user = User::new("bob", None);
        let identity = user.identity();

        assert_eq!(identity.login, "bob");
        assert_eq!(identity.display_name, None);
    }
}
