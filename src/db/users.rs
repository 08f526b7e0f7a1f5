use rusqlite::{params, OptionalExtension};
use serde::Serialize;

use crate::db::connection::Database;
use crate::errors::ServerError;

/// Seeded demo account. The login endpoint is a lookup, nothing more.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub role: String,
    pub room_id: Option<String>,
}

pub fn find_by_username(db: &Database, username: &str) -> Result<Option<User>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            "SELECT username, name, role, room_id FROM users WHERE username = ?",
            params![username],
            |row| {
                Ok(User {
                    username: row.get(0)?,
                    name: row.get(1)?,
                    role: row.get(2)?,
                    room_id: row.get(3)?,
                })
            },
        )
        .optional()
        .map_err(|e| ServerError::DbError(e.to_string()))
    })
}
