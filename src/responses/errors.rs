use astra::{Body, Response, ResponseBuilder};

use crate::errors::ServerError;

fn status_and_message(err: &ServerError) -> (u16, String) {
    match err {
        ServerError::NotFound(msg) => (404, msg.clone()),
        ServerError::InvalidInput(msg) => (400, msg.clone()),
        ServerError::InvalidState(msg) => (409, msg.clone()),
        ServerError::DbError(msg) => (500, format!("Database Error: {msg}")),
        ServerError::InternalError => (500, "Internal Server Error".to_string()),
    }
}

/// API failure as JSON, the shape the frontend expects: {"error": reason}
pub fn error_to_json_response(err: ServerError) -> Response {
    let (status, message) = status_and_message(&err);
    let body = serde_json::json!({ "error": message }).to_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error".to_string())))
}

/// Non-API failure as a basic HTML error page
pub fn error_to_html_response(err: ServerError) -> Response {
    let (status, message) = status_and_message(&err);
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Error {status}</title></head>
<body>
  <h1>Error {status}</h1>
  <p>{message}</p>
  <p><a href="/">Back to home</a></p>
</body>
</html>"#
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(html))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error".to_string())))
}
