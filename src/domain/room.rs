use chrono::NaiveDateTime;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::Serialize;

/// Derived occupancy-health signal for a room. Never set directly by a
/// request; always recomputed from the room's open issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Green,
    Yellow,
    Red,
}

impl RoomStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomStatus::Green => "green",
            RoomStatus::Yellow => "yellow",
            RoomStatus::Red => "red",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "green" => Some(RoomStatus::Green),
            "yellow" => Some(RoomStatus::Yellow),
            "red" => Some(RoomStatus::Red),
            _ => None,
        }
    }

    /// The projection rule: one red open issue outweighs any number of
    /// yellows; any open issue at all rules out green.
    pub fn from_open_issues(open: i64, red: i64) -> Self {
        if red > 0 {
            RoomStatus::Red
        } else if open > 0 {
            RoomStatus::Yellow
        } else {
            RoomStatus::Green
        }
    }
}

impl FromSql for RoomStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        RoomStatus::parse(s)
            .ok_or_else(|| FromSqlError::Other(format!("unknown room status '{s}'").into()))
    }
}

impl ToSql for RoomStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: String,
    pub block: String,
    pub floor: String,
    pub number: String,
    pub status: RoomStatus,
    pub last_updated: NaiveDateTime,
}
