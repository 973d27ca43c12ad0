//! Request and response bodies for the HTTP surface

use serde::{Deserialize, Serialize};

pub const MSG_USER_NOT_FOUND: &str = "user not found";
pub const MSG_NO_USER_NAME: &str = "no user_name";
pub const MSG_USER_DELETED: &str = "user deleted";

/// Body of create and update requests
///
/// `user_name` stays optional so a missing field can be reported as a normal
/// response instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserNameRequest {
    #[serde(default)]
    pub user_name: Option<String>,
}

impl UserNameRequest {
    /// The requested name, if present and non-empty
    pub fn name(&self) -> Option<&str> {
        self.user_name.as_deref().filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
    pub backend: String,
}
