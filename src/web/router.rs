//! Router configuration for the user and board services.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_board, get_board, get_user, list_boards, list_users, sign_up, BoardAppState,
    UserAppState,
};
use crate::directory::UserDirectory;

/// Create the user service router.
pub fn create_user_router(state: Arc<UserAppState>) -> Router {
    Router::new()
        .route("/users/sign-up", post(sign_up))
        .route("/users", get(list_users))
        .route("/users/:user_id", get(get_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create the board service router.
pub fn create_board_router<D>(state: Arc<BoardAppState<D>>) -> Router
where
    D: UserDirectory + 'static,
{
    Router::new()
        .route("/boards", post(create_board::<D>).get(list_boards::<D>))
        .route("/boards/:board_id", get(get_board::<D>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::user::MIGRATIONS;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let response = create_health_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn test_user_router_unknown_user() {
        let db = Database::open_in_memory(MIGRATIONS).await.unwrap();
        let router = create_user_router(Arc::new(UserAppState::new(db)));

        let response = router
            .oneshot(Request::get("/users/99").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_user_router_invalid_path_id() {
        let db = Database::open_in_memory(MIGRATIONS).await.unwrap();
        let router = create_user_router(Arc::new(UserAppState::new(db)));

        let response = router
            .oneshot(Request::get("/users/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"]["code"], "BAD_REQUEST");
    }
}
