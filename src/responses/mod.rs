pub mod assets;
pub mod errors;
pub mod html;
pub mod json;

pub use errors::{error_to_html_response, error_to_json_response};
pub use html::html_response;
pub use json::json_response;
