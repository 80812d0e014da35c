//! Post use cases: create, list by author.

use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use chrono::Utc;
use rusqlite::params;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreateReq {
    pub title: String,
    pub content: Option<String>,
    pub published: Option<bool>,
    pub author_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub author_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Create a new post
pub fn post_create(pool: &DbPool, req: PostCreateReq) -> Result<PostDto, AppError> {
    let title = req.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title is required".into()));
    }

    let conn = get_connection(pool);
    let author_exists: bool = conn
        .query_row(
            "SELECT 1 FROM users WHERE id = ?",
            params![&req.author_id],
            |_| Ok(true),
        )
        .unwrap_or(false);
    if !author_exists {
        return Err(AppError::NotFound("Author not found".into()));
    }

    let id = Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();
    let content = req.content.unwrap_or_default();
    let published = req.published.unwrap_or(false);

    conn.execute(
        "INSERT INTO posts (id, title, content, published, author_id, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
        params![&id, title, &content, published as i32, &req.author_id, &now],
    )?;

    Ok(PostDto {
        id,
        title: title.to_string(),
        content,
        published,
        author_id: req.author_id,
        created_at: now.clone(),
        updated_at: now,
    })
}

/// List all posts by one author, oldest first.
pub fn post_list_by_author(pool: &DbPool, author_id: &str) -> Result<Vec<PostDto>, AppError> {
    let conn = get_connection(pool);
    posts_by_author(&conn, author_id)
}

pub(crate) fn posts_by_author(
    conn: &rusqlite::Connection,
    author_id: &str,
) -> Result<Vec<PostDto>, AppError> {
    let mut stmt = conn
        .prepare(
            "SELECT id, title, content, published, author_id, created_at, updated_at
             FROM posts WHERE author_id = ?1 ORDER BY created_at, id",
        )
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([author_id], |row| {
        Ok(PostDto {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            published: row.get::<_, i32>(3)? != 0,
            author_id: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
