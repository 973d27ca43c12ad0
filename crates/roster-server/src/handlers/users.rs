//! User handlers

use crate::handlers::reply::Reply;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use roster_types::{UserId, UserNameRequest};
use tracing::debug;

/// Name from a create/update body; a missing, unparsable or empty body yields None
fn requested_name(body: Option<Json<UserNameRequest>>) -> Option<String> {
    body.and_then(|Json(req)| req.name().map(str::to_string))
}

pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<UserNameRequest>>,
) -> Response {
    let Some(name) = requested_name(body) else {
        debug!("Rejected create: no user_name");
        return Reply::NoUserName.render(state.status_codes);
    };

    Reply::from(state.users.create_user(&name).await).render(state.status_codes)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    body: Option<Json<UserNameRequest>>,
) -> Response {
    let Some(name) = requested_name(body) else {
        debug!("Rejected update of user {}: no user_name", id);
        return Reply::NoUserName.render(state.status_codes);
    };

    Reply::from(state.users.update_user(id, &name).await).render(state.status_codes)
}

pub async fn get(State(state): State<AppState>, Path(id): Path<UserId>) -> Response {
    Reply::from(state.users.get_user(id).await).render(state.status_codes)
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<UserId>) -> Response {
    Reply::from(state.users.delete_user(id).await).render(state.status_codes)
}
