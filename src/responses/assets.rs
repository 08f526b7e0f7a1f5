use astra::{Body, ResponseBuilder};

use crate::errors::{ResultResp, ServerError};

const STYLES_CSS: &str = include_str!("../../static/styles.css");
const APP_JS: &str = include_str!("../../static/app.js");

pub fn styles_css() -> ResultResp {
    static_response(STYLES_CSS, mime::TEXT_CSS_UTF_8.as_ref())
}

pub fn app_js() -> ResultResp {
    static_response(APP_JS, mime::APPLICATION_JAVASCRIPT_UTF_8.as_ref())
}

fn static_response(content: &'static str, content_type: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .body(Body::from(content.to_string()))
        .map_err(|_| ServerError::InternalError)
}
