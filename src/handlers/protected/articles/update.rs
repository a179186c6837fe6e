// handlers/protected/articles/update.rs - PATCH /api/blog-articles/:id handler

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use crate::app::AppState;
use crate::database::models::{BlogArticle, UpdateArticleRequest};
use crate::middleware::{ApiResponse, ApiResult};

/// Partial update of title, content, status, slug, publicationDate and
/// coverPictureRef. New content replaces the stored keywords.
pub async fn article_update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateArticleRequest>, JsonRejection>,
) -> ApiResult<BlogArticle> {
    let Path(id) = id?;
    let Json(request) = payload?;

    let changes = request.validate(&state.keywords)?;
    let article = state.store.update(id, changes).await?;

    tracing::info!("Updated blog article {}", article.id);
    Ok(ApiResponse::success(article))
}
