//! Profile use cases: one profile per user, set and read.

use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use chrono::Utc;
use rusqlite::params;
use rusqlite::OptionalExtension;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSetReq {
    pub user_id: String,
    pub bio: Option<String>,
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: String,
    pub bio: String,
    pub date_of_birth: Option<String>,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Create or replace the profile of a user.
pub fn profile_set(pool: &DbPool, req: ProfileSetReq) -> Result<ProfileDto, AppError> {
    let conn = get_connection(pool);
    let user_exists: bool = conn
        .query_row(
            "SELECT 1 FROM users WHERE id = ?",
            params![&req.user_id],
            |_| Ok(true),
        )
        .unwrap_or(false);
    if !user_exists {
        return Err(AppError::NotFound("User not found".into()));
    }

    let id = Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();
    let bio = req.bio.unwrap_or_default();

    conn.execute(
        "INSERT INTO profiles (id, bio, date_of_birth, user_id, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)
         ON CONFLICT(user_id) DO UPDATE SET
             bio = excluded.bio,
             date_of_birth = excluded.date_of_birth,
             updated_at = excluded.updated_at",
        params![&id, &bio, &req.date_of_birth, &req.user_id, &now],
    )?;

    profile_by_user(&conn, &req.user_id)?
        .ok_or_else(|| AppError::NotFound(format!("profile for user {}", req.user_id)))
}

/// Profile of a user, or None when it has none.
pub fn profile_get(pool: &DbPool, user_id: &str) -> Result<Option<ProfileDto>, AppError> {
    let conn = get_connection(pool);
    profile_by_user(&conn, user_id)
}

pub(crate) fn profile_by_user(
    conn: &rusqlite::Connection,
    user_id: &str,
) -> Result<Option<ProfileDto>, AppError> {
    let profile = conn
        .query_row(
            "SELECT id, bio, date_of_birth, user_id, created_at, updated_at
             FROM profiles WHERE user_id = ?1",
            [user_id],
            |row| {
                Ok(ProfileDto {
                    id: row.get(0)?,
                    bio: row.get(1)?,
                    date_of_birth: row.get(2)?,
                    user_id: row.get(3)?,
                    created_at: row.get(4)?,
                    updated_at: row.get(5)?,
                })
            },
        )
        .optional()?;
    Ok(profile)
}
