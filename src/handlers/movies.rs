//! 电影相关的 HTTP 处理器

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    middleware::AppState,
    models::movie::{MovieListResponse, TopMovieListResponse, TOP_MOVIES},
    repository::MovieRepository,
};
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

/// 列出所有电影（需要认证）
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(requested_by = %auth_context.username, "Listing movies");

    let repo = MovieRepository::new(state.db.clone());
    let movies = repo.list().await?;

    Ok(Json(MovieListResponse { movies }))
}

/// 静态 Top 电影列表（公开端点，不查询存储）
pub async fn top_movies() -> Json<TopMovieListResponse> {
    Json(TopMovieListResponse {
        movies: TOP_MOVIES.to_vec(),
    })
}
