use chrono::{NaiveDateTime, Utc};
use rusqlite::Connection;

use crate::db::connection::Database;
use crate::db::{issues, rooms};
use crate::domain::room::RoomStatus;
use crate::errors::ServerError;

/// Emitted by the ledger whenever a mutation changes a room's open-issue
/// set. The projector is its only consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomChanged {
    pub room_id: String,
}

/// Re-derives the room's status from its open issues and persists it along
/// with `last_updated`. Called inside the ledger's mutation transaction so
/// the stored status can never trail the open-issue set.
pub fn apply(
    conn: &Connection,
    event: &RoomChanged,
    now: NaiveDateTime,
) -> Result<RoomStatus, ServerError> {
    let (open, red) = issues::open_counts(conn, &event.room_id)?;
    let status = RoomStatus::from_open_issues(open, red);
    rooms::set_status(conn, &event.room_id, status, now)?;
    Ok(status)
}

/// Standalone recompute for one room. Idempotent; repeating it without an
/// intervening ledger mutation yields the same status.
pub fn recompute(db: &Database, room_id: &str) -> Result<RoomStatus, ServerError> {
    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        if !rooms::room_exists(&tx, room_id)? {
            return Err(ServerError::NotFound(format!("unknown room '{room_id}'")));
        }

        let status = apply(
            &tx,
            &RoomChanged {
                room_id: room_id.to_string(),
            },
            Utc::now().naive_utc(),
        )?;

        tx.commit()
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(status)
    })
}
