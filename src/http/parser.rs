use std::fmt;

use crate::http::request::RequestLine;

/// Why a read buffer failed to yield a request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    InvalidEncoding,
    MissingMethod,
    MissingPath,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidEncoding => write!(f, "request is not valid UTF-8"),
            ParseError::MissingMethod => write!(f, "request line is empty"),
            ParseError::MissingPath => write!(f, "request line has no path"),
        }
    }
}

/// Extracts method and path from the first line of `buf`.
///
/// The buffer is split on the first line terminator; the request line is
/// then split on whitespace into at most three tokens, of which the third
/// (the version) is discarded. Fewer than two tokens is an error, never a
/// panic; the caller answers it with a 404.
pub fn parse_request_line(buf: &[u8]) -> Result<RequestLine, ParseError> {
    let text = std::str::from_utf8(buf).map_err(|_| ParseError::InvalidEncoding)?;

    let line = text.lines().next().unwrap_or("");
    let mut tokens = line.split_whitespace();

    let method = tokens.next().ok_or(ParseError::MissingMethod)?;
    let path = tokens.next().ok_or(ParseError::MissingPath)?;

    Ok(RequestLine {
        method: method.to_string(),
        path: path.to_string(),
    })
}
