use std::sync::Arc;

use axum::{
    http::{StatusCode, Uri},
    response::Html,
    Extension,
};
use percent_encoding::percent_decode_str;
use tracing::{instrument, warn};

use crate::{routes::RouteInfo, site::sitemap};

pub const MAX_WORD_LEN: usize = 10;
pub const WORD_TOO_LARGE: &str = "La palabra es demasiado grande";

const SEARCH_FORM: &str = r#"
        <form action="/search">
            <label for="planet_id">Planet ID </label>
            <input type="number" id="planet_id" name="planet_id">
            <input type="submit" value="Search">
        </form>
        "#;

pub async fn get_sitemap(Extension(routes): Extension<Arc<Vec<RouteInfo>>>) -> Html<String> {
    Html(sitemap::render(&routes))
}

/// Submitting the form navigates back here; the query string is ignored.
pub async fn get_search_form() -> Html<&'static str> {
    Html(SEARCH_FORM)
}

/// Number of characters in `word`, or `None` once it exceeds [`MAX_WORD_LEN`].
pub fn word_size(word: &str) -> Option<usize> {
    let len = word.chars().count();
    (len <= MAX_WORD_LEN).then_some(len)
}

/// Percent-decodes a raw path segment. Byte sequences that are not UTF-8
/// become U+FFFD instead of failing the request.
pub fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// GET /word-size/:word
///
/// The segment is read from the URI rather than through `Path`, which would
/// reject words that do not decode to UTF-8.
#[instrument(skip_all, fields(uri = %uri))]
pub async fn get_word_size(uri: Uri) -> (StatusCode, String) {
    let raw = uri.path().rsplit('/').next().unwrap_or_default();
    let word = decode_segment(raw);
    match word_size(&word) {
        Some(len) => (StatusCode::OK, len.to_string()),
        None => {
            warn!(len = word.chars().count(), "word too large");
            (StatusCode::BAD_REQUEST, WORD_TOO_LARGE.to_string())
        }
    }
}
