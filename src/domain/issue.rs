use chrono::NaiveDateTime;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::Serialize;

use crate::errors::ServerError;

pub const TITLE_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 4000;
pub const DEADLINE_DAYS: i64 = 30;

/// Urgency of a reported issue. Fixed at report time; resolution never
/// changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Yellow,
    Red,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Yellow => "yellow",
            Severity::Red => "red",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "yellow" => Some(Severity::Yellow),
            "red" => Some(Severity::Red),
            _ => None,
        }
    }
}

impl FromSql for Severity {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        Severity::parse(s)
            .ok_or_else(|| FromSqlError::Other(format!("unknown severity '{s}'").into()))
    }
}

impl ToSql for Severity {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    Open,
    Resolved,
}

impl IssueStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueStatus::Open => "open",
            IssueStatus::Resolved => "resolved",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(IssueStatus::Open),
            "resolved" => Some(IssueStatus::Resolved),
            _ => None,
        }
    }
}

impl FromSql for IssueStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        IssueStatus::parse(s)
            .ok_or_else(|| FromSqlError::Other(format!("unknown issue status '{s}'").into()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub room_id: String,
    pub reporter: String,
    pub severity: Severity,
    pub status: IssueStatus,
    pub created_at: NaiveDateTime,
    pub deadline: NaiveDateTime,
    pub resolved_at: Option<NaiveDateTime>,
    pub resolved_by: Option<String>,
}

/// Validated report input. `from_parts` is the single validation point for
/// the report operation; handlers pass raw strings straight through.
#[derive(Debug, Clone)]
pub struct NewIssue {
    pub room_id: String,
    pub title: String,
    pub description: String,
    pub reporter: String,
    pub severity: Severity,
}

impl NewIssue {
    pub fn from_parts(
        room_id: &str,
        title: &str,
        description: &str,
        reporter: &str,
        severity: &str,
    ) -> Result<Self, ServerError> {
        let room_id = room_id.trim();
        if room_id.is_empty() {
            return Err(ServerError::InvalidInput("room_id is required".into()));
        }

        let title = title.trim();
        if title.is_empty() {
            return Err(ServerError::InvalidInput("title must not be empty".into()));
        }

        let description = description.trim();
        if description.is_empty() {
            return Err(ServerError::InvalidInput(
                "description must not be empty".into(),
            ));
        }

        let reporter = reporter.trim();
        if reporter.is_empty() {
            return Err(ServerError::InvalidInput("reporter is required".into()));
        }

        // Unrecognized severity values fall back to yellow instead of
        // failing; over-long text is truncated instead of rejected.
        let severity = Severity::parse(severity.trim()).unwrap_or(Severity::Yellow);

        Ok(NewIssue {
            room_id: room_id.to_string(),
            title: truncate_chars(title, TITLE_MAX_CHARS),
            description: truncate_chars(description, DESCRIPTION_MAX_CHARS),
            reporter: reporter.to_string(),
            severity,
        })
    }
}

// Truncates on character boundaries, not bytes.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
