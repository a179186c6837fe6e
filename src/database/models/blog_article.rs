use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::{postgres::PgRow, types::Json, FromRow, Row};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::keywords::KeywordExtractor;

pub const TITLE_MAX_CHARS: usize = 100;
pub const SLUG_MAX_CHARS: usize = 255;
pub const COVER_PICTURE_REF_MAX_CHARS: usize = 255;

/// Publication state of an article; `Deleted` marks a soft delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Draft,
    Published,
    Deleted,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
            ArticleStatus::Deleted => "deleted",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid status '{0}', expected one of: draft, published, deleted")]
pub struct InvalidStatus(pub String);

impl FromStr for ArticleStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ArticleStatus::Draft),
            "published" => Ok(ArticleStatus::Published),
            "deleted" => Ok(ArticleStatus::Deleted),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

/// A stored blog article, serialized with camelCase field names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogArticle {
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    pub publication_date: DateTime<Utc>,
    pub creation_date: DateTime<Utc>,
    pub content: String,
    pub keywords: Vec<String>,
    pub slug: String,
    pub cover_picture_ref: Option<String>,
    pub status: ArticleStatus,
}

impl BlogArticle {
    pub fn is_deleted(&self) -> bool {
        self.status == ArticleStatus::Deleted
    }

    /// Build a stored article from validated input and its assigned id
    pub fn from_new(id: i32, new: NewArticle) -> Self {
        Self {
            id,
            author_id: new.author_id,
            title: new.title,
            publication_date: new.publication_date,
            creation_date: new.creation_date,
            content: new.content,
            keywords: new.keywords,
            slug: new.slug,
            cover_picture_ref: new.cover_picture_ref,
            status: new.status,
        }
    }

    /// Apply a validated partial update in place
    pub fn apply(&mut self, changes: ArticleChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(keywords) = changes.keywords {
            self.keywords = keywords;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(slug) = changes.slug {
            self.slug = slug;
        }
        if let Some(publication_date) = changes.publication_date {
            self.publication_date = publication_date;
        }
        if let Some(cover_picture_ref) = changes.cover_picture_ref {
            self.cover_picture_ref = cover_picture_ref;
        }
    }
}

impl<'r> FromRow<'r, PgRow> for BlogArticle {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let status: String = row.try_get("status")?;
        let status = status.parse::<ArticleStatus>().map_err(|e| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(e),
        })?;
        let Json(keywords): Json<Vec<String>> = row.try_get("keywords")?;

        Ok(Self {
            id: row.try_get("id")?,
            author_id: row.try_get("author_id")?,
            title: row.try_get("title")?,
            publication_date: row.try_get("publication_date")?,
            creation_date: row.try_get("creation_date")?,
            content: row.try_get("content")?,
            keywords,
            slug: row.try_get("slug")?,
            cover_picture_ref: row.try_get("cover_picture_ref")?,
            status,
        })
    }
}

/// Validated data for inserting a new article
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub author_id: i32,
    pub title: String,
    pub publication_date: DateTime<Utc>,
    pub creation_date: DateTime<Utc>,
    pub content: String,
    pub keywords: Vec<String>,
    pub slug: String,
    pub cover_picture_ref: Option<String>,
    pub status: ArticleStatus,
}

/// Validated partial update; `None` leaves a column untouched.
/// `cover_picture_ref` is `Some(None)` when the reference should be cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub status: Option<ArticleStatus>,
    pub slug: Option<String>,
    pub publication_date: Option<DateTime<Utc>>,
    pub cover_picture_ref: Option<Option<String>>,
}

/// Per-field validation messages keyed by wire field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(pub HashMap<String, String>);

impl FieldErrors {
    fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// POST /api/blog-articles body. `keywords` and `creationDate` are accepted but ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub author_id: Option<i32>,
    pub title: Option<String>,
    pub publication_date: Option<String>,
    pub content: Option<String>,
    pub slug: Option<String>,
    pub cover_picture_ref: Option<String>,
    pub status: Option<String>,
}

impl CreateArticleRequest {
    /// Check every constraint and compute keywords from the content
    pub fn validate(
        self,
        extractor: &KeywordExtractor,
        now: DateTime<Utc>,
    ) -> Result<NewArticle, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.author_id.is_none() {
            errors.add("authorId", "Author ID is required.");
        }

        let title = required_text(&mut errors, "title", self.title, "Title is required.");
        if let Some(title) = &title {
            check_title(&mut errors, title);
        }

        let publication_date = match self.publication_date.as_deref().map(str::trim) {
            None | Some("") => {
                errors.add("publicationDate", "Publication date is required.");
                None
            }
            Some(raw) => parse_timestamp(&mut errors, "publicationDate", raw),
        };

        let content = required_text(&mut errors, "content", self.content, "Content cannot be blank.");

        let slug = required_text(&mut errors, "slug", self.slug, "Slug is required.");
        if let Some(slug) = &slug {
            check_max_chars(&mut errors, "slug", slug, SLUG_MAX_CHARS, "Slug cannot be longer than 255 characters.");
        }

        if let Some(cover) = &self.cover_picture_ref {
            check_max_chars(
                &mut errors,
                "coverPictureRef",
                cover,
                COVER_PICTURE_REF_MAX_CHARS,
                "Cover picture reference cannot be longer than 255 characters.",
            );
        }

        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => {
                errors.add("status", "Status is required.");
                None
            }
            Some(raw) => parse_status(&mut errors, raw),
        };

        errors.into_result(|| {
            // every Option below is Some when no errors were recorded
            let content = content.unwrap_or_default();
            NewArticle {
                author_id: self.author_id.unwrap_or_default(),
                title: title.unwrap_or_default(),
                publication_date: publication_date.unwrap_or(now),
                creation_date: now,
                keywords: extractor.extract(&content),
                content,
                slug: slug.unwrap_or_default(),
                cover_picture_ref: self.cover_picture_ref,
                status: status.unwrap_or(ArticleStatus::Draft),
            }
        })
    }
}

/// PATCH /api/blog-articles/{id} body; absent fields are left unchanged,
/// an explicit `"coverPictureRef": null` clears the reference
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
    pub slug: Option<String>,
    pub publication_date: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub cover_picture_ref: Option<Option<String>>,
}

/// Keep a present-but-null field distinct from a missing one
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl UpdateArticleRequest {
    /// Check the fields that are present; new content gets fresh keywords
    pub fn validate(self, extractor: &KeywordExtractor) -> Result<ArticleChanges, FieldErrors> {
        let mut errors = FieldErrors::default();

        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                errors.add("title", "Title is required.");
            }
            check_title(&mut errors, title);
        }

        if let Some(content) = &self.content {
            if content.trim().is_empty() {
                errors.add("content", "Content cannot be blank.");
            }
        }

        if let Some(slug) = &self.slug {
            if slug.trim().is_empty() {
                errors.add("slug", "Slug is required.");
            }
            check_max_chars(&mut errors, "slug", slug, SLUG_MAX_CHARS, "Slug cannot be longer than 255 characters.");
        }

        if let Some(Some(cover)) = &self.cover_picture_ref {
            check_max_chars(
                &mut errors,
                "coverPictureRef",
                cover,
                COVER_PICTURE_REF_MAX_CHARS,
                "Cover picture reference cannot be longer than 255 characters.",
            );
        }

        let status = self
            .status
            .as_deref()
            .and_then(|raw| parse_status(&mut errors, raw.trim()));

        let publication_date = self
            .publication_date
            .as_deref()
            .and_then(|raw| parse_timestamp(&mut errors, "publicationDate", raw.trim()));

        errors.into_result(|| ArticleChanges {
            keywords: self.content.as_deref().map(|content| extractor.extract(content)),
            title: self.title,
            content: self.content,
            status,
            slug: self.slug,
            publication_date,
            cover_picture_ref: self.cover_picture_ref,
        })
    }
}

fn required_text(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
    message: &str,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            errors.add(field, message);
            None
        }
    }
}

fn check_title(errors: &mut FieldErrors, title: &str) {
    check_max_chars(errors, "title", title, TITLE_MAX_CHARS, "Title cannot be longer than 100 characters.");
}

fn check_max_chars(errors: &mut FieldErrors, field: &str, value: &str, max: usize, message: &str) {
    if value.chars().count() > max {
        errors.add(field, message);
    }
}

fn parse_timestamp(errors: &mut FieldErrors, field: &str, raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(_) => {
            errors.add(field, format!("Invalid timestamp format: {}", raw));
            None
        }
    }
}

fn parse_status(errors: &mut FieldErrors, raw: &str) -> Option<ArticleStatus> {
    match raw.parse::<ArticleStatus>() {
        Ok(status) => Some(status),
        Err(e) => {
            errors.add("status", e.to_string());
            None
        }
    }
}
