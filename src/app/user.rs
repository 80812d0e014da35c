//! User use cases.

use crate::domain::Role;
use crate::error::AppError;
use crate::infra::get_connection;
use crate::infra::DbPool;
use chrono::Utc;
use rusqlite::params;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::post::{posts_by_author, PostDto};
use super::profile::{profile_by_user, ProfileDto};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateReq {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A user together with its posts and profile.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
    pub updated_at: String,
    pub posts: Vec<PostDto>,
    pub profile: Option<ProfileDto>,
}

pub fn user_create(pool: &DbPool, req: UserCreateReq) -> Result<UserDto, AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }
    let email = req.email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("email is required".into()));
    }
    let role = req.role.unwrap_or_default();
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    let conn = get_connection(pool);
    // UNIQUE(email) violation surfaces as Conflict via the From impl
    conn.execute(
        "INSERT INTO users (id, name, email, role, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
        params![id, name, email, role.as_str(), &now],
    )?;

    Ok(UserDto {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role: role.as_str().to_string(),
        created_at: now.clone(),
        updated_at: now,
    })
}

pub fn user_get(pool: &DbPool, id: &str) -> Result<UserDto, AppError> {
    let conn = get_connection(pool);
    conn.query_row(
        "SELECT id, name, email, role, created_at, updated_at FROM users WHERE id = ?1",
        [id],
        |row| {
            Ok(UserDto {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                role: row.get(3)?,
                created_at: row.get(4)?,
                updated_at: row.get(5)?,
            })
        },
    )
    .map_err(|_| AppError::NotFound(format!("user {}", id)))
}

/// All users, each with its posts (possibly empty) and profile (possibly absent).
pub fn user_list_with_relations(pool: &DbPool) -> Result<Vec<UserDetailDto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn
        .prepare(
            "SELECT id, name, email, role, created_at, updated_at FROM users ORDER BY created_at, id",
        )
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([], |row| {
        Ok(UserDto {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            role: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    })?;

    let users = rows.collect::<Result<Vec<_>, _>>()?;

    let mut out = Vec::with_capacity(users.len());
    for user in users {
        let posts = posts_by_author(&conn, &user.id)?;
        let profile = profile_by_user(&conn, &user.id)?;
        out.push(UserDetailDto {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
            posts,
            profile,
        });
    }
    Ok(out)
}
