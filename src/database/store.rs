use async_trait::async_trait;
use sqlx::{types::Json, PgPool};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::database::manager::DatabaseError;
use crate::database::models::{ArticleChanges, ArticleStatus, BlogArticle, NewArticle};

/// Persistence for blog articles.
///
/// Soft-deleted articles (status `deleted`) are invisible to `find`, `update`
/// and `soft_delete`, and are only listed when asked for by status.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Check the backing store is reachable
    async fn ping(&self) -> Result<(), DatabaseError>;

    /// Articles ordered by id; `None` lists everything except soft-deleted ones
    async fn list(&self, status: Option<ArticleStatus>) -> Result<Vec<BlogArticle>, DatabaseError>;

    async fn find(&self, id: i32) -> Result<BlogArticle, DatabaseError>;

    async fn create(&self, article: NewArticle) -> Result<BlogArticle, DatabaseError>;

    async fn update(&self, id: i32, changes: ArticleChanges) -> Result<BlogArticle, DatabaseError>;

    async fn soft_delete(&self, id: i32) -> Result<(), DatabaseError>;
}

fn not_found(id: i32) -> DatabaseError {
    DatabaseError::NotFound(format!("Blog article {} not found", id))
}

const ARTICLE_COLUMNS: &str = "id, author_id, title, publication_date, creation_date, content, \
     keywords, slug, cover_picture_ref, status";

/// Postgres-backed store over the `blog_article` table
pub struct PgArticleStore {
    pool: PgPool,
}

impl PgArticleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self, status: Option<ArticleStatus>) -> Result<Vec<BlogArticle>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM blog_article \
             WHERE ($1::text IS NULL AND status <> 'deleted') OR status = $1 \
             ORDER BY id",
            ARTICLE_COLUMNS
        );
        let rows = sqlx::query_as::<_, BlogArticle>(&sql)
            .bind(status.map(|s| s.as_str()))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find(&self, id: i32) -> Result<BlogArticle, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM blog_article WHERE id = $1 AND status <> 'deleted'",
            ARTICLE_COLUMNS
        );
        sqlx::query_as::<_, BlogArticle>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, article: NewArticle) -> Result<BlogArticle, DatabaseError> {
        let sql = format!(
            "INSERT INTO blog_article \
             (author_id, title, publication_date, creation_date, content, keywords, slug, cover_picture_ref, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {}",
            ARTICLE_COLUMNS
        );
        let created = sqlx::query_as::<_, BlogArticle>(&sql)
            .bind(article.author_id)
            .bind(&article.title)
            .bind(article.publication_date)
            .bind(article.creation_date)
            .bind(&article.content)
            .bind(Json(&article.keywords))
            .bind(&article.slug)
            .bind(&article.cover_picture_ref)
            .bind(article.status.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn update(&self, id: i32, changes: ArticleChanges) -> Result<BlogArticle, DatabaseError> {
        let sql = format!(
            "UPDATE blog_article SET \
                title = COALESCE($2, title), \
                content = COALESCE($3, content), \
                keywords = COALESCE($4, keywords), \
                status = COALESCE($5, status), \
                slug = COALESCE($6, slug), \
                publication_date = COALESCE($7, publication_date), \
                cover_picture_ref = CASE WHEN $9 THEN $8 ELSE cover_picture_ref END \
             WHERE id = $1 AND status <> 'deleted' \
             RETURNING {}",
            ARTICLE_COLUMNS
        );
        sqlx::query_as::<_, BlogArticle>(&sql)
            .bind(id)
            .bind(changes.title)
            .bind(changes.content)
            .bind(changes.keywords.map(Json))
            .bind(changes.status.map(|s| s.as_str()))
            .bind(changes.slug)
            .bind(changes.publication_date)
            .bind(changes.cover_picture_ref.clone().flatten())
            .bind(changes.cover_picture_ref.is_some())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn soft_delete(&self, id: i32) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            "UPDATE blog_article SET status = 'deleted' WHERE id = $1 AND status <> 'deleted'",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

/// Process-local store, used by tests and for running without Postgres
#[derive(Default)]
pub struct MemoryArticleStore {
    inner: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    next_id: i32,
    articles: BTreeMap<i32, BlogArticle>,
}

impl MemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleStore for MemoryArticleStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }

    async fn list(&self, status: Option<ArticleStatus>) -> Result<Vec<BlogArticle>, DatabaseError> {
        let state = self.inner.read().await;
        let articles = state
            .articles
            .values()
            .filter(|a| match status {
                Some(wanted) => a.status == wanted,
                None => !a.is_deleted(),
            })
            .cloned()
            .collect();
        Ok(articles)
    }

    async fn find(&self, id: i32) -> Result<BlogArticle, DatabaseError> {
        let state = self.inner.read().await;
        state
            .articles
            .get(&id)
            .filter(|a| !a.is_deleted())
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, article: NewArticle) -> Result<BlogArticle, DatabaseError> {
        let mut state = self.inner.write().await;
        state.next_id += 1;
        let stored = BlogArticle::from_new(state.next_id, article);
        state.articles.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i32, changes: ArticleChanges) -> Result<BlogArticle, DatabaseError> {
        let mut state = self.inner.write().await;
        let article = state
            .articles
            .get_mut(&id)
            .filter(|a| !a.is_deleted())
            .ok_or_else(|| not_found(id))?;
        article.apply(changes);
        Ok(article.clone())
    }

    async fn soft_delete(&self, id: i32) -> Result<(), DatabaseError> {
        let mut state = self.inner.write().await;
        let article = state
            .articles
            .get_mut(&id)
            .filter(|a| !a.is_deleted())
            .ok_or_else(|| not_found(id))?;
        article.status = ArticleStatus::Deleted;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn new_article(title: &str) -> NewArticle {
        NewArticle {
            author_id: 1,
            title: title.to_string(),
            publication_date: Utc::now(),
            creation_date: Utc::now(),
            content: "content".to_string(),
            keywords: vec!["content".to_string()],
            slug: title.to_lowercase(),
            cover_picture_ref: None,
            status: ArticleStatus::Draft,
        }
    }

    #[tokio::test]
    async fn memory_store_assigns_sequential_ids() {
        let store = MemoryArticleStore::new();
        let first = store.create(new_article("First")).await.unwrap();
        let second = store.create(new_article("Second")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.find(2).await.unwrap().title, "Second");
    }

    #[tokio::test]
    async fn soft_deleted_articles_are_hidden() {
        let store = MemoryArticleStore::new();
        let article = store.create(new_article("Gone")).await.unwrap();
        store.create(new_article("Kept")).await.unwrap();

        store.soft_delete(article.id).await.unwrap();

        assert!(matches!(store.find(article.id).await, Err(DatabaseError::NotFound(_))));
        assert!(matches!(store.soft_delete(article.id).await, Err(DatabaseError::NotFound(_))));
        assert!(matches!(
            store.update(article.id, ArticleChanges::default()).await,
            Err(DatabaseError::NotFound(_))
        ));

        let listed = store.list(None).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Kept");

        let deleted = store.list(Some(ArticleStatus::Deleted)).await.unwrap();
        assert_eq!(deleted.len(), 1);
        assert_eq!(deleted[0].id, article.id);
    }

    #[tokio::test]
    async fn update_applies_changes() {
        let store = MemoryArticleStore::new();
        let article = store.create(new_article("Draft")).await.unwrap();
        let updated = store
            .update(
                article.id,
                ArticleChanges {
                    title: Some("Published".into()),
                    status: Some(ArticleStatus::Published),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Published");
        assert_eq!(updated.status, ArticleStatus::Published);
        assert_eq!(store.find(article.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let store = MemoryArticleStore::new();
        assert!(matches!(store.find(42).await, Err(DatabaseError::NotFound(_))));
    }
}
