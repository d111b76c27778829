//! Users resource handlers

use axum::extract::{Path, State};

use super::JsonBody;
use crate::{
    error::{Error, Result},
    models::{CreateUserRequest, UpdateUserRequest, User},
    repository::{RepositoryError, RepositoryOperation, UserRepository},
    responses::ApiResponse,
    state::AppState,
};

/// Parse a path id the way the route contract expects
///
/// Segments without a usable id can never match a record, so they are
/// reported as not found rather than as a bad request.
fn parse_id(raw: &str, operation: RepositoryOperation) -> Result<u64> {
    leading_integer(raw).ok_or_else(|| RepositoryError::not_found(operation, "User", raw).into())
}

/// Read the integer at the start of a path segment
///
/// Leading whitespace and a sign are skipped and anything after the digits
/// is ignored, so `"2abc"` reads as 2 and `"1.5"` as 1. A `0x` prefix
/// switches to hex. Negative values and segments without digits give `None`.
fn leading_integer(raw: &str) -> Option<u64> {
    let s = raw.trim_start();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (radix, s) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = s.find(|c: char| !c.is_digit(radix)).unwrap_or(s.len());
    let digits = &s[..end];
    if digits.is_empty() || negative {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

/// List all users
pub async fn list_users<R: UserRepository>(
    State(state): State<AppState<R>>,
) -> Result<ApiResponse<Vec<User>>> {
    let users = state.users().find_all().await?;
    tracing::debug!("Returning {} users", users.len());

    Ok(ApiResponse::list(users))
}

/// Get a user by ID
pub async fn get_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    Path(raw_id): Path<String>,
) -> Result<ApiResponse<User>> {
    let id = parse_id(&raw_id, RepositoryOperation::FindById)?;

    match state.users().find_by_id(id).await? {
        Some(user) => Ok(ApiResponse::ok(user)),
        None => {
            tracing::debug!(id, "User not found");
            Err(RepositoryError::not_found(RepositoryOperation::FindById, "User", id).into())
        }
    }
}

/// Create a new user
pub async fn create_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> Result<ApiResponse<User>> {
    let new_user = request.validate().map_err(Error::BadRequest)?;

    let user = state.users().create(new_user).await?;
    tracing::info!(id = user.id, "User created");

    let location = format!("/api/users/{}", user.id);
    Ok(ApiResponse::created(user)
        .with_message("User created successfully")
        .with_location(location))
}

/// Update a user
///
/// Only the non-empty fields present in the body are overwritten.
pub async fn update_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    Path(raw_id): Path<String>,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> Result<ApiResponse<User>> {
    let id = parse_id(&raw_id, RepositoryOperation::Update)?;

    let user = state.users().update(id, request.into_changes()).await?;
    tracing::info!(id, "User updated");

    Ok(ApiResponse::ok(user).with_message("User updated"))
}

/// Delete a user
pub async fn delete_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    Path(raw_id): Path<String>,
) -> Result<ApiResponse<()>> {
    let id = parse_id(&raw_id, RepositoryOperation::Delete)?;

    if !state.users().delete(id).await? {
        return Err(RepositoryError::not_found(RepositoryOperation::Delete, "User", id).into());
    }
    tracing::info!(id, "User deleted");

    Ok(ApiResponse::message("User deleted"))
}
