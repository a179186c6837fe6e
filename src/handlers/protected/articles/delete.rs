// handlers/protected/articles/delete.rs - DELETE /api/blog-articles/:id handler

use axum::extract::{rejection::PathRejection, Path, State};

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};

/// Soft delete: the row stays with status `deleted` and disappears from reads
pub async fn article_delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<()> {
    let Path(id) = id?;
    state.store.soft_delete(id).await?;
    tracing::info!("Soft-deleted blog article {}", id);
    Ok(ApiResponse::no_content())
}
