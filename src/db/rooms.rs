use chrono::NaiveDateTime;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use crate::db::connection::Database;
use crate::domain::room::{Room, RoomStatus};
use crate::errors::ServerError;

/// Optional narrowing for the room listing endpoint.
#[derive(Debug, Default, Clone)]
pub struct RoomFilter {
    pub block: Option<String>,
    pub floor: Option<String>,
}

pub fn room_exists(conn: &Connection, room_id: &str) -> Result<bool, ServerError> {
    conn.query_row(
        "SELECT 1 FROM rooms WHERE id = ?",
        params![room_id],
        |_| Ok(()),
    )
    .optional()
    .map(|row| row.is_some())
    .map_err(|e| ServerError::DbError(e.to_string()))
}

pub fn get_room(db: &Database, room_id: &str) -> Result<Option<Room>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            "SELECT id, block, floor, number, status, last_updated FROM rooms WHERE id = ?",
            params![room_id],
            map_room_row,
        )
        .optional()
        .map_err(|e| ServerError::DbError(e.to_string()))
    })
}

pub fn list_rooms(db: &Database, filter: &RoomFilter) -> Result<Vec<Room>, ServerError> {
    db.with_conn(|conn| {
        let mut sql =
            String::from("SELECT id, block, floor, number, status, last_updated FROM rooms");
        let mut conds: Vec<&str> = Vec::new();
        let mut vals: Vec<String> = Vec::new();

        if let Some(block) = &filter.block {
            conds.push("block = ?");
            vals.push(block.clone());
        }
        if let Some(floor) = &filter.floor {
            conds.push("floor = ?");
            vals.push(floor.clone());
        }
        if !conds.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conds.join(" AND "));
        }
        sql.push_str(" ORDER BY block, floor, CAST(number AS INTEGER)");

        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map(params_from_iter(vals.iter()), map_room_row)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}

/// Only the projector writes these two columns.
pub fn set_status(
    conn: &Connection,
    room_id: &str,
    status: RoomStatus,
    now: NaiveDateTime,
) -> Result<(), ServerError> {
    conn.execute(
        "UPDATE rooms SET status = ?, last_updated = ? WHERE id = ?",
        params![status, now, room_id],
    )
    .map_err(|e| ServerError::DbError(e.to_string()))?;
    Ok(())
}

fn map_room_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        block: row.get(1)?,
        floor: row.get(2)?,
        number: row.get(3)?,
        status: row.get(4)?,
        last_updated: row.get(5)?,
    })
}
