//! User types

use serde::{Deserialize, Serialize};

/// Numeric user identifier, assigned by the backend
pub type UserId = i64;

/// User record
///
/// The id is fixed once a backend assigns it; only the name changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(rename = "user_name")]
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Replace the display name, keeping the id
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_with_wire_field_names() {
        let user = User::new(1, "alice");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "user_name": "alice"}));
    }

    #[test]
    fn test_rename_keeps_id() {
        let mut user = User::new(7, "bob");
        user.rename("robert");
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "robert");
    }
}
