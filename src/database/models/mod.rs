pub mod blog_article;

pub use blog_article::{
    ArticleChanges, ArticleStatus, BlogArticle, CreateArticleRequest, FieldErrors, NewArticle,
    UpdateArticleRequest,
};
