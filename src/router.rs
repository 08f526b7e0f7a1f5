use astra::Request;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

use crate::db::connection::Database;
use crate::db::rooms::{self, RoomFilter};
use crate::db::users;
use crate::domain::issue::{IssueStatus, NewIssue};
use crate::domain::ledger::{self, IssueFilter};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{assets, error_to_json_response, html_response, json_response};
use crate::templates;

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") | ("GET", "/index.html") => html_response(templates::pages::home_page()),
        ("GET", "/styles.css") => assets::styles_css(),
        ("GET", "/app.js") => assets::app_js(),

        ("GET", "/api/rooms") => api(rooms_index(&req, db)),
        ("GET", "/api/issues") => api(issues_index(&req, db)),
        ("POST", "/api/login") => api(login(req, db)),
        ("POST", "/api/issues") => api(report_issue(req, db)),
        ("POST", p) if p.starts_with("/api/issues/") && p.ends_with("/resolve") => {
            api(resolve_issue(req, db, p))
        }

        _ => Err(ServerError::NotFound("no such route".into())),
    }
}

// API failures render as JSON instead of bubbling up to the HTML error page.
fn api(result: ResultResp) -> ResultResp {
    result.or_else(|err| Ok(error_to_json_response(err)))
}

fn rooms_index(req: &Request, db: &Database) -> ResultResp {
    let params = parse_query(req);
    let filter = RoomFilter {
        block: params.get("block").cloned(),
        floor: params.get("floor").cloned(),
    };
    json_response(&rooms::list_rooms(db, &filter)?)
}

fn issues_index(req: &Request, db: &Database) -> ResultResp {
    let params = parse_query(req);
    let filter = IssueFilter {
        room_id: params.get("room_id").cloned(),
        // unrecognized status values are ignored rather than rejected
        status: params.get("status").and_then(|s| IssueStatus::parse(s)),
    };
    json_response(&ledger::list_issues(db, &filter)?)
}

#[derive(Deserialize)]
struct LoginPayload {
    #[serde(default)]
    username: String,
}

fn login(req: Request, db: &Database) -> ResultResp {
    let payload: LoginPayload = read_json(req)?;
    let username = payload.username.trim();
    if username.is_empty() {
        return Err(ServerError::InvalidInput("username required".into()));
    }

    let user = users::find_by_username(db, username)?
        .ok_or_else(|| ServerError::NotFound(format!("user '{username}' not found")))?;
    json_response(&user)
}

#[derive(Deserialize)]
struct ReportPayload {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    room_id: String,
    #[serde(default)]
    reporter: String,
    #[serde(default)]
    severity: String,
}

fn report_issue(req: Request, db: &Database) -> ResultResp {
    let payload: ReportPayload = read_json(req)?;
    let input = NewIssue::from_parts(
        &payload.room_id,
        &payload.title,
        &payload.description,
        &payload.reporter,
        &payload.severity,
    )?;

    let issue_id = ledger::report(db, &input)?;
    json_response(&serde_json::json!({ "ok": true, "issue_id": issue_id }))
}

#[derive(Deserialize)]
struct ResolvePayload {
    #[serde(default)]
    resolver: String,
}

fn resolve_issue(req: Request, db: &Database, path: &str) -> ResultResp {
    let id_str = path
        .strip_prefix("/api/issues/")
        .and_then(|rest| rest.strip_suffix("/resolve"))
        .unwrap_or_default();
    let issue_id: i64 = id_str
        .parse()
        .map_err(|_| ServerError::InvalidInput(format!("bad issue id '{id_str}'")))?;

    let payload: ResolvePayload = read_json(req)?;
    ledger::resolve(db, issue_id, &payload.resolver)?;
    json_response(&serde_json::json!({ "ok": true }))
}

fn read_json<T: serde::de::DeserializeOwned>(req: Request) -> Result<T, ServerError> {
    let mut body = req.into_body();
    let mut raw = String::new();
    body.reader()
        .read_to_string(&mut raw)
        .map_err(|e| ServerError::InvalidInput(format!("unreadable request body: {e}")))?;

    // An absent body counts as an empty object; field-level validation
    // decides what is actually required.
    if raw.trim().is_empty() {
        raw = "{}".to_string();
    }

    serde_json::from_str(&raw)
        .map_err(|e| ServerError::InvalidInput(format!("invalid JSON body: {e}")))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for pair in q.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                map.insert(k.to_string(), v.to_string());
            }
        }
    }

    map
}
