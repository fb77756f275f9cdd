/// User CRUD API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use userbase_core::{CreateUser, UpdateUser, User, UserId};

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub success: bool,
    pub count: usize,
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct UserChangedResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: User,
}

impl UserChangedResponse {
    fn new(message: &'static str, user: User) -> Self {
        Self {
            success: true,
            message,
            user,
        }
    }
}

/// Body extraction result; the rejection is kept so handlers decide ordering
pub type Payload = std::result::Result<Json<Value>, JsonRejection>;

/// Turn a raw body into `T`, requiring a JSON object
fn decode_payload<T: DeserializeOwned>(payload: Payload) -> Result<T> {
    let Json(value) = payload.map_err(|rejection| {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        ServerError::InvalidJson
    })?;

    if !value.is_object() {
        return Err(ServerError::InvalidJson);
    }

    serde_json::from_value(value)
        .map_err(|_| ServerError::BadRequest("Fields name and email must be strings".to_string()))
}

/// `:id` segment extraction result; undecodable segments are kept as rejections
pub type IdParam = std::result::Result<Path<String>, PathRejection>;

/// Path segments that are not positive integers cannot name a user
fn parse_user_id(id: IdParam) -> Result<UserId> {
    let Path(raw) = id.map_err(|rejection| {
        tracing::debug!("Rejected user id segment: {}", rejection.body_text());
        ServerError::UserNotFound("<undecodable>".to_string())
    })?;

    raw.parse().map_err(|_| ServerError::UserNotFound(raw))
}

/// GET /api/users
/// List all users in insertion order
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<UsersResponse>> {
    tracing::info!("Fetching all users");

    let users = app_state.store.list()?;
    Ok(Json(UsersResponse {
        success: true,
        count: users.len(),
        users,
    }))
}

/// GET /api/users/:id
/// Get a specific user
pub async fn get_user(
    id: IdParam,
    State(app_state): State<AppState>,
) -> Result<Json<UserResponse>> {
    let user_id = parse_user_id(id)?;
    tracing::info!("Fetching user with ID: {}", user_id);

    let user = app_state.store.get(user_id)?;
    Ok(Json(UserResponse {
        success: true,
        user,
    }))
}

/// POST /api/users
/// Create a new user from `{name, email}`
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: Payload,
) -> Result<(StatusCode, Json<UserChangedResponse>)> {
    let new_user: CreateUser = decode_payload(payload)?;
    let user = app_state.store.create(new_user)?;

    Ok((
        StatusCode::CREATED,
        Json(UserChangedResponse::new("User created successfully", user)),
    ))
}

/// PUT /api/users/:id
/// Update name and/or email; absent fields are left unchanged
pub async fn update_user(
    id: IdParam,
    State(app_state): State<AppState>,
    payload: Payload,
) -> Result<Json<UserChangedResponse>> {
    let user_id = parse_user_id(id)?;

    let patch: UpdateUser = match decode_payload(payload) {
        Ok(patch) => patch,
        Err(err) => {
            // An unknown id is reported ahead of a bad body
            app_state.store.get(user_id)?;
            return Err(err);
        }
    };

    let user = app_state.store.update(user_id, patch)?;
    Ok(Json(UserChangedResponse::new("User updated successfully", user)))
}

/// DELETE /api/users/:id
/// Delete a user and return the removed record
pub async fn delete_user(
    id: IdParam,
    State(app_state): State<AppState>,
) -> Result<Json<UserChangedResponse>> {
    let user = app_state.store.delete(parse_user_id(id)?)?;
    Ok(Json(UserChangedResponse::new("User deleted successfully", user)))
}

/// Any unmatched route or method
pub async fn endpoint_not_found() -> ServerError {
    ServerError::EndpointNotFound
}
