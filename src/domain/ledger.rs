use chrono::{Duration, Utc};

use crate::db::connection::Database;
use crate::db::{issues, rooms};
use crate::domain::issue::{Issue, IssueStatus, NewIssue, DEADLINE_DAYS};
use crate::domain::projector::{self, RoomChanged};
use crate::errors::ServerError;

/// Optional narrowing for `list_issues`.
#[derive(Debug, Default, Clone)]
pub struct IssueFilter {
    pub room_id: Option<String>,
    pub status: Option<IssueStatus>,
}

/// Appends an open issue for the room and returns its id.
///
/// The insert and the room-status projection run in one transaction, so a
/// concurrent report or resolve on the same room can never leave the room
/// showing a status derived from a stale open-issue set. The deadline is
/// fixed here, 30 days out, and never recomputed.
pub fn report(db: &Database, input: &NewIssue) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        if !rooms::room_exists(&tx, &input.room_id)? {
            return Err(ServerError::NotFound(format!(
                "unknown room '{}'",
                input.room_id
            )));
        }

        let now = Utc::now().naive_utc();
        let deadline = now + Duration::days(DEADLINE_DAYS);
        let issue_id = issues::insert(&tx, input, now, deadline)?;

        projector::apply(
            &tx,
            &RoomChanged {
                room_id: input.room_id.clone(),
            },
            now,
        )?;

        tx.commit()
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(issue_id)
    })
}

/// Marks an open issue resolved and reprojects its room's status.
///
/// Fails with `NotFound` for an unknown id and `InvalidState` for an issue
/// that is already resolved; in both cases nothing is written.
pub fn resolve(db: &Database, issue_id: i64, resolver: &str) -> Result<(), ServerError> {
    let resolver = resolver.trim();
    let resolver = if resolver.is_empty() { "unknown" } else { resolver };

    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let (room_id, status) = issues::get_lifecycle(&tx, issue_id)?
            .ok_or_else(|| ServerError::NotFound(format!("unknown issue {issue_id}")))?;

        if status != IssueStatus::Open {
            return Err(ServerError::InvalidState(format!(
                "issue {issue_id} is already resolved"
            )));
        }

        let now = Utc::now().naive_utc();
        issues::mark_resolved(&tx, issue_id, resolver, now)?;
        projector::apply(&tx, &RoomChanged { room_id }, now)?;

        tx.commit()
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
}

/// Snapshot of issues matching the filter, most recent first.
pub fn list_issues(db: &Database, filter: &IssueFilter) -> Result<Vec<Issue>, ServerError> {
    db.with_conn(|conn| issues::list(conn, filter.room_id.as_deref(), filter.status))
}
