use askama::Template;
use axum::{
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
};
use service_core::error::AppError;

/// Instance identifier set by the proxy.
pub const INST_HEADER: &str = "x-tuc-inst";
/// Client address the proxy forwarded for.
pub const FORWARDED_FOR_HEADER: &str = "x-tuc-fwd-for";

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub inst: &'a str,
    pub forwarded_for: &'a str,
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Serves every path that isn't an ops endpoint.
pub async fn index(headers: HeaderMap) -> Response {
    let page = IndexTemplate {
        inst: header_value(&headers, INST_HEADER),
        forwarded_for: header_value(&headers, FORWARDED_FOR_HEADER),
    };

    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => AppError::InternalError(anyhow::Error::new(e)).into_response(),
    }
}
