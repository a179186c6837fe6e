use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{AppConfig, SecurityConfig};
use crate::database::ArticleStore;
use crate::handlers::{protected::articles, public};
use crate::keywords::KeywordExtractor;
use crate::middleware::jwt_auth_middleware;

/// Shared handler context, cloned per request
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ArticleStore>,
    pub keywords: Arc<KeywordExtractor>,
    pub security: Arc<SecurityConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn ArticleStore>, keywords: KeywordExtractor, security: SecurityConfig) -> Self {
        Self {
            store,
            keywords: Arc::new(keywords),
            security: Arc::new(security),
        }
    }

    /// State wired from application config around an existing store
    pub fn from_config(store: Arc<dyn ArticleStore>, config: &AppConfig) -> Self {
        Self::new(
            store,
            KeywordExtractor::new(&config.keywords.banned_words),
            config.security.clone(),
        )
    }
}

/// Full router with global layers taken from config
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = build_router(state).layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if config.security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

/// Routes only, no global layers; tests drive this directly
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(public::service::root))
        .route("/health", get(public::service::health))
        .route("/api/login", post(public::auth::login_post))
        // Articles
        .merge(article_read_routes())
        .merge(article_write_routes(state.clone()))
        .with_state(state)
}

fn article_read_routes() -> Router<AppState> {
    Router::new()
        .route("/api/blog-articles", get(articles::article_list))
        .route("/api/blog-articles/:id", get(articles::article_show))
}

fn article_write_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/blog-articles", post(articles::article_create))
        .route(
            "/api/blog-articles/:id",
            axum::routing::patch(articles::article_update).delete(articles::article_delete),
        )
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}
