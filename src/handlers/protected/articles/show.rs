// handlers/protected/articles/show.rs - GET /api/blog-articles/:id handler

use axum::extract::{rejection::PathRejection, Path, State};

use crate::app::AppState;
use crate::database::models::BlogArticle;
use crate::middleware::{ApiResponse, ApiResult};

pub async fn article_show(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<BlogArticle> {
    let Path(id) = id?;
    let article = state.store.find(id).await?;
    Ok(ApiResponse::success(article))
}
