// handlers/protected/articles/list.rs - GET /api/blog-articles handler

use axum::extract::{Query, State};
use serde::Deserialize;

use crate::app::AppState;
use crate::database::models::{ArticleStatus, BlogArticle};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Only list articles in this state; soft-deleted ones are listed only this way
    pub status: Option<String>,
}

pub async fn article_list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<BlogArticle>> {
    let status = match query.status.as_deref() {
        Some(raw) => Some(
            raw.parse::<ArticleStatus>()
                .map_err(|e| ApiError::bad_request(e.to_string()))?,
        ),
        None => None,
    };

    let articles = state.store.list(status).await?;
    Ok(ApiResponse::success(articles))
}
