// src/responses/html.rs

use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    let body = markup.into_string();

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap();

    Ok(resp)
}

/// 302 back to `location`, used by the back-office form posts.
pub fn redirect_response(location: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .body(Body::empty())
        .unwrap();

    Ok(resp)
}
