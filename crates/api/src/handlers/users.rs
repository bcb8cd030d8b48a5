use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use slotbook_core::{
    errors::BookingError,
    models::user::{CreateUserRequest, UpdateUserRequest, User, UserListResponse},
};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, validation, ApiState};

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    validation::validate_email(&payload.email)?;
    validation::validate_name(&payload.name)?;
    validation::validate_age(payload.age)?;

    let user = slotbook_db::repositories::user::create_user(
        &state.store,
        &payload.email,
        &payload.name,
        payload.age,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<UserListResponse>, AppError> {
    let users = slotbook_db::repositories::user::get_all_users(&state.store)
        .await
        .map_err(BookingError::Database)?;

    let count = users.len();
    Ok(Json(UserListResponse { data: users, count }))
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let user = slotbook_db::repositories::user::get_user_by_id(&state.store, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("User with ID {id} not found")))?;

    Ok(Json(user))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<User>, AppError> {
    if let Some(email) = &payload.email {
        validation::validate_email(email)?;
    }
    if let Some(name) = &payload.name {
        validation::validate_name(name)?;
    }
    validation::validate_age(payload.age)?;

    let user = slotbook_db::repositories::user::update_user(
        &state.store,
        id,
        payload.email.as_deref(),
        payload.name.as_deref(),
        payload.age,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| BookingError::NotFound(format!("User with ID {id} not found")))?;

    Ok(Json(user))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = slotbook_db::repositories::user::delete_user(&state.store, id)
        .await
        .map_err(BookingError::Database)?;

    if !deleted {
        return Err(AppError(BookingError::NotFound(format!(
            "User with ID {id} not found"
        ))));
    }

    Ok(StatusCode::NO_CONTENT)
}
