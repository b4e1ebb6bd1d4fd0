use crate::errors::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_response_with_status(markup, 200)
}

/// Same builder with an explicit status; not-found views render a full page
/// but still carry a 404.
pub fn html_response_with_status(markup: Markup, status: u16) -> ResultResp {
    let body = markup.into_string();

    let resp = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap();

    Ok(resp)
}

pub fn bytes_response(bytes: Vec<u8>, content_type: &str) -> Response {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .body(Body::from(bytes))
        .unwrap()
}
