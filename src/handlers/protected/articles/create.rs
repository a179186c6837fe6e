// handlers/protected/articles/create.rs - POST /api/blog-articles handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use chrono::Utc;

use crate::app::AppState;
use crate::database::models::{BlogArticle, CreateArticleRequest};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/**
 * POST /api/blog-articles - Create a blog article
 *
 * Expected Input:
 * ```json
 * {
 *   "authorId": 1,
 *   "title": "Test Article",
 *   "publicationDate": "2024-10-20T00:00:00Z",
 *   "content": "This is a test article.",
 *   "slug": "test-article",
 *   "coverPictureRef": "covers/test.jpg",   // optional
 *   "status": "draft"
 * }
 * ```
 *
 * `creationDate` is set to the current time and `keywords` are extracted
 * from `content`; client values for either are ignored.
 *
 * @returns 201 with the stored article, 400 with field errors on invalid input
 */
pub async fn article_create(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> ApiResult<BlogArticle> {
    let Json(request) = payload?;

    let new_article = request.validate(&state.keywords, Utc::now())?;
    let article = state.store.create(new_article).await?;

    match user {
        Some(Extension(user)) => {
            tracing::info!("Created blog article {} ({}) for {}", article.id, article.slug, user.username)
        }
        None => tracing::info!("Created blog article {} ({})", article.id, article.slug),
    }

    Ok(ApiResponse::created(article))
}
