//! Response shaping for user routes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::Outcome;
use roster_types::{
    ErrorBody, MessageBody, User, MSG_NO_USER_NAME, MSG_USER_DELETED, MSG_USER_NOT_FOUND,
};

/// Every body a user route can send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    User(User),
    Deleted,
    NotFound,
    NoUserName,
    Failed(String),
}

impl Reply {
    /// Status used when status codes are enabled
    pub fn status(&self) -> StatusCode {
        match self {
            Reply::User(_) | Reply::Deleted => StatusCode::OK,
            Reply::NotFound => StatusCode::NOT_FOUND,
            Reply::NoUserName => StatusCode::BAD_REQUEST,
            Reply::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render the reply; without `status_codes` every body goes out as 200
    pub fn render(self, status_codes: bool) -> Response {
        let status = if status_codes {
            self.status()
        } else {
            StatusCode::OK
        };

        match self {
            Reply::User(user) => (status, Json(user)).into_response(),
            Reply::Deleted => (status, Json(MessageBody::new(MSG_USER_DELETED))).into_response(),
            Reply::NotFound => (status, Json(ErrorBody::new(MSG_USER_NOT_FOUND))).into_response(),
            Reply::NoUserName => (status, Json(ErrorBody::new(MSG_NO_USER_NAME))).into_response(),
            Reply::Failed(reason) => (status, Json(ErrorBody::new(reason))).into_response(),
        }
    }
}

impl From<Outcome<User>> for Reply {
    fn from(outcome: Outcome<User>) -> Self {
        match outcome {
            Outcome::Found(user) => Reply::User(user),
            Outcome::NotFound => Reply::NotFound,
            Outcome::Failed(reason) => Reply::Failed(reason),
        }
    }
}

impl From<Outcome<()>> for Reply {
    fn from(outcome: Outcome<()>) -> Self {
        match outcome {
            Outcome::Found(()) => Reply::Deleted,
            Outcome::NotFound => Reply::NotFound,
            Outcome::Failed(reason) => Reply::Failed(reason),
        }
    }
}
