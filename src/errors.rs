use astra::Response;
use std::fmt;

/// Failures surfaced by route handlers and the issue ledger.
///
/// The first three are the domain taxonomy (unknown room/issue, bad client
/// input, illegal lifecycle transition); the rest are infrastructure.
#[derive(Debug)]
pub enum ServerError {
    NotFound(String),
    InvalidInput(String),
    InvalidState(String),
    DbError(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            ServerError::InvalidInput(msg) => write!(f, "Invalid Input: {msg}"),
            ServerError::InvalidState(msg) => write!(f, "Invalid State: {msg}"),
            ServerError::DbError(msg) => write!(f, "Database Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
