//! User service handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::user::{NewUser, UserService};
use crate::web::dto::{ApiPath, SignUpRequest, UserIdsQuery, UserResponse, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::handlers::UserAppState;

/// POST /users/sign-up - Register a user.
pub async fn sign_up(
    State(state): State<Arc<UserAppState>>,
    ValidatedJson(req): ValidatedJson<SignUpRequest>,
) -> Result<StatusCode, ApiError> {
    UserService::new(&state.db)
        .sign_up(NewUser::new(req.email, req.name, req.password))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /users/:user_id - Get one user.
pub async fn get_user(
    State(state): State<Arc<UserAppState>>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserService::new(&state.db).get_user(user_id).await?;
    Ok(Json(user.into()))
}

/// GET /users?ids=1,2,3 - Batch lookup, or every user without `ids`.
///
/// Unknown IDs are left out of the result.
pub async fn list_users(
    State(state): State<Arc<UserAppState>>,
    Query(query): Query<UserIdsQuery>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let service = UserService::new(&state.db);
    let users = match query.parse_ids()? {
        Some(ids) => service.get_users(&ids).await?,
        None => service.list_users().await?,
    };

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
