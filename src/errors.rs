use astra::Response;
// errors.rs
use std::fmt;

/// Errors that escape a route handler. Catalog load failures never show up
/// here: page handlers catch them and render an in-page error panel instead.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
        }
    }
}

impl std::error::Error for ServerError {}
