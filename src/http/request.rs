/// The parsed first line of an HTTP request.
///
/// Only the method and path survive parsing; the version token, when
/// present, is discarded. Headers and bodies are never interpreted.
/// Parsed fresh from each read and dropped once the response is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The method token, kept verbatim (routing does not depend on it).
    pub method: String,
    /// The request path, matched exactly against the route table.
    pub path: String,
}
