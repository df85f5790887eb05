//! # REST API for account management

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use shared::{SuccessResponse, UpdateUserStatusRequest, UsersResponse};
use tracing::info;

use super::mappers::UserMapper;
use super::ApiError;
use crate::domain::commands::users::SetUserDisabledCommand;
use crate::domain::validation::{require_non_blank, ValidationError};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_users).patch(update_user_status))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<UsersResponse>, ApiError> {
    info!("GET /api/users");
    let users = state.user_service.list_users().await?;
    Ok(Json(UsersResponse {
        users: UserMapper::to_dto_list(users),
    }))
}

/// Enable or disable an account
pub async fn update_user_status(
    State(state): State<AppState>,
    body: Result<Json<UpdateUserStatusRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Json(request) = body?;
    info!("PATCH /api/users - request: {:?}", request);

    let command = SetUserDisabledCommand {
        uid: require_non_blank("uid", request.uid)?,
        disabled: request
            .disabled
            .ok_or(ValidationError::MissingField("disabled"))?,
    };
    state.user_service.set_user_disabled(command).await?;

    Ok(Json(SuccessResponse { success: true }))
}
