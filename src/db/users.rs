// src/db/users.rs

use crate::db::connection::Database;
use crate::domain::accounts::{User, UserRole};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, OptionalExtension, Row};

fn user_from_row(row: &Row) -> rusqlite::Result<User> {
    let role: String = row.get("role")?;
    Ok(User {
        id: row.get("id")?,
        email: row.get("email")?,
        display_name: row.get("display_name")?,
        role: UserRole::parse(&role).unwrap_or(UserRole::Client),
        suspended_at: row.get("suspended_at")?,
        suspension_ends_at: row.get("suspension_ends_at")?,
        trial_ends_at: row.get("trial_ends_at")?,
        created_at: row.get("created_at")?,
    })
}

pub fn list_users(db: &Database) -> Result<Vec<User>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            r#"
            SELECT id, email, display_name, role,
                   suspended_at, suspension_ends_at, trial_ends_at, created_at
            FROM users
            ORDER BY created_at DESC, id DESC
            "#,
        )?;
        let rows = stmt.query_map([], user_from_row)?;

        let mut users = Vec::new();
        for row in rows {
            users.push(row?);
        }
        Ok(users)
    })
}

pub fn get_user(db: &Database, id: i64) -> Result<Option<User>, ServerError> {
    db.with_conn(|conn| {
        let user = conn
            .query_row(
                r#"
                SELECT id, email, display_name, role,
                       suspended_at, suspension_ends_at, trial_ends_at, created_at
                FROM users
                WHERE id = ?1
                "#,
                params![id],
                user_from_row,
            )
            .optional()?;
        Ok(user)
    })
}

pub fn insert_user(
    db: &Database,
    email: &str,
    display_name: &str,
    role: UserRole,
    trial_ends_at: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO users (email, display_name, role, trial_ends_at, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![email, display_name, role.as_str(), trial_ends_at, now],
        )?;
        Ok(conn.last_insert_rowid())
    })
}

/// Suspends the account, indefinitely when `until` is None.
pub fn suspend_user(
    db: &Database,
    id: i64,
    until: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let updated = conn.execute(
            "UPDATE users SET suspended_at = ?1, suspension_ends_at = ?2 WHERE id = ?3",
            params![now, until, id],
        )?;
        if updated == 0 {
            return Err(ServerError::NotFound);
        }
        Ok(())
    })
}

pub fn lift_suspension(db: &Database, id: i64) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let updated = conn.execute(
            "UPDATE users SET suspended_at = NULL, suspension_ends_at = NULL WHERE id = ?1",
            params![id],
        )?;
        if updated == 0 {
            return Err(ServerError::NotFound);
        }
        Ok(())
    })
}
