//! Board service handlers.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::board::{BoardService, NewPost};
use crate::directory::UserDirectory;
use crate::web::dto::{ApiPath, BoardResponse, CreateBoardRequest, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::handlers::BoardAppState;

/// POST /boards - Create a post.
pub async fn create_board<D: UserDirectory>(
    State(state): State<Arc<BoardAppState<D>>>,
    ValidatedJson(req): ValidatedJson<CreateBoardRequest>,
) -> Result<StatusCode, ApiError> {
    BoardService::new(&state.db, &state.directory)
        .create(NewPost::new(req.title, req.content, req.user_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /boards - List every post with its author.
pub async fn list_boards<D: UserDirectory>(
    State(state): State<Arc<BoardAppState<D>>>,
) -> Result<Json<Vec<BoardResponse>>, ApiError> {
    let posts = BoardService::new(&state.db, &state.directory)
        .list_all()
        .await?;

    Ok(Json(posts.into_iter().map(BoardResponse::from).collect()))
}

/// GET /boards/:board_id - Get one post with its author.
pub async fn get_board<D: UserDirectory>(
    State(state): State<Arc<BoardAppState<D>>>,
    ApiPath(board_id): ApiPath<i64>,
) -> Result<Json<BoardResponse>, ApiError> {
    let post = BoardService::new(&state.db, &state.directory)
        .get_one(board_id)
        .await?;

    Ok(Json(post.into()))
}
