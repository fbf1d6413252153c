use crate::http::response::Response;

const SUCCESS_BODY: &str = "The \"Server Running Successfully!\" page.";
const NOT_FOUND_BODY: &str = "The \"404 Resource Not Found\" page.";

/// Maps a request path to its response.
///
/// The route table has exactly one rule: `/` is the success page, every
/// other path falls through to [`unmatched`]. Matching is an exact string
/// comparison; the method plays no part.
pub fn route(path: &str) -> Response {
    match path {
        "/" => Response::ok(SUCCESS_BODY),
        _ => unmatched(),
    }
}

/// Response for any path (or non-path) the table does not know.
pub fn unmatched() -> Response {
    Response::not_found(NOT_FOUND_BODY)
}
