use chrono::NaiveDateTime;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use crate::domain::issue::{Issue, IssueStatus, NewIssue};
use crate::errors::ServerError;

const ISSUE_COLUMNS: &str = "id, title, description, room_id, reporter, severity, status, \
                             created_at, deadline, resolved_at, resolved_by";

/// Inserts an open issue and returns the id SQLite allocated for it.
pub fn insert(
    conn: &Connection,
    input: &NewIssue,
    created_at: NaiveDateTime,
    deadline: NaiveDateTime,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        INSERT INTO issues (title, description, room_id, reporter, severity, status, created_at, deadline)
        VALUES (?1, ?2, ?3, ?4, ?5, 'open', ?6, ?7)
        "#,
        params![
            input.title,
            input.description,
            input.room_id,
            input.reporter,
            input.severity,
            created_at,
            deadline
        ],
    )
    .map_err(|e| ServerError::DbError(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

/// Room and lifecycle status of one issue, or None if the id is unknown.
pub fn get_lifecycle(
    conn: &Connection,
    issue_id: i64,
) -> Result<Option<(String, IssueStatus)>, ServerError> {
    conn.query_row(
        "SELECT room_id, status FROM issues WHERE id = ?",
        params![issue_id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .optional()
    .map_err(|e| ServerError::DbError(e.to_string()))
}

pub fn mark_resolved(
    conn: &Connection,
    issue_id: i64,
    resolver: &str,
    resolved_at: NaiveDateTime,
) -> Result<(), ServerError> {
    conn.execute(
        "UPDATE issues SET status = 'resolved', resolved_at = ?, resolved_by = ? WHERE id = ?",
        params![resolved_at, resolver, issue_id],
    )
    .map_err(|e| ServerError::DbError(e.to_string()))?;
    Ok(())
}

/// (open count, open red count) for one room. The projector's only read.
pub fn open_counts(conn: &Connection, room_id: &str) -> Result<(i64, i64), ServerError> {
    conn.query_row(
        r#"
        SELECT COUNT(*),
               COALESCE(SUM(CASE WHEN severity = 'red' THEN 1 ELSE 0 END), 0)
        FROM issues
        WHERE room_id = ? AND status = 'open'
        "#,
        params![room_id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .map_err(|e| ServerError::DbError(e.to_string()))
}

/// Snapshot listing, most recent first; ties keep insertion order.
pub fn list(
    conn: &Connection,
    room_id: Option<&str>,
    status: Option<IssueStatus>,
) -> Result<Vec<Issue>, ServerError> {
    let mut sql = format!("SELECT {ISSUE_COLUMNS} FROM issues");
    let mut conds: Vec<&str> = Vec::new();
    let mut vals: Vec<String> = Vec::new();

    if let Some(room_id) = room_id {
        conds.push("room_id = ?");
        vals.push(room_id.to_string());
    }
    if let Some(status) = status {
        conds.push("status = ?");
        vals.push(status.as_str().to_string());
    }
    if !conds.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conds.join(" AND "));
    }
    sql.push_str(" ORDER BY created_at DESC, id");

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params_from_iter(vals.iter()), map_issue_row)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

fn map_issue_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Issue> {
    Ok(Issue {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        room_id: row.get(3)?,
        reporter: row.get(4)?,
        severity: row.get(5)?,
        status: row.get(6)?,
        created_at: row.get(7)?,
        deadline: row.get(8)?,
        resolved_at: row.get(9)?,
        resolved_by: row.get(10)?,
    })
}
