pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod keywords;
pub mod middleware;

pub use app::{app, build_router, AppState};
pub use keywords::{extract_top_keywords, KeywordExtractor};
