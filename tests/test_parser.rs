use uniplex::http::parser::{ParseError, parse_request_line};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let line = parse_request_line(req).unwrap();

    assert_eq!(line.method, "GET");
    assert_eq!(line.path, "/");
}

#[test]
fn test_parse_uses_only_the_first_line() {
    let req = b"GET /a HTTP/1.1\r\nX-Path: /b\r\nPOST /c HTTP/1.1\r\n\r\n";
    let line = parse_request_line(req).unwrap();

    assert_eq!(line.path, "/a");
}

#[test]
fn test_parse_discards_version_token() {
    let req = b"GET /index HTTP/1.0\r\n\r\n";
    let line = parse_request_line(req).unwrap();

    assert_eq!(line.method, "GET");
    assert_eq!(line.path, "/index");
}

#[test]
fn test_parse_accepts_two_token_line() {
    // No version at all still yields a routable line.
    let req = b"GET /\r\n\r\n";
    let line = parse_request_line(req).unwrap();

    assert_eq!(line.path, "/");
}

#[test]
fn test_parse_keeps_unknown_method_verbatim() {
    let req = b"BREW /pot HTTP/1.1\r\n\r\n";
    let line = parse_request_line(req).unwrap();

    assert_eq!(line.method, "BREW");
    assert_eq!(line.path, "/pot");
}

#[test]
fn test_parse_path_with_query_string() {
    let req = b"GET /search?q=rust HTTP/1.1\r\n\r\n";
    let line = parse_request_line(req).unwrap();

    assert_eq!(line.path, "/search?q=rust");
}

#[test]
fn test_parse_single_token_is_missing_path() {
    let req = b"GET\r\n\r\n";
    let result = parse_request_line(req);

    assert_eq!(result, Err(ParseError::MissingPath));
}

#[test]
fn test_parse_empty_buffer_is_missing_method() {
    let result = parse_request_line(b"");

    assert_eq!(result, Err(ParseError::MissingMethod));
}

#[test]
fn test_parse_whitespace_only_line_is_missing_method() {
    let result = parse_request_line(b"   \r\n");

    assert_eq!(result, Err(ParseError::MissingMethod));
}

#[test]
fn test_parse_non_utf8_is_invalid_encoding() {
    let result = parse_request_line(&[0xff, 0xfe, b'G', b'E', b'T']);

    assert_eq!(result, Err(ParseError::InvalidEncoding));
}

#[test]
fn test_parse_bare_lf_terminated_line() {
    let req = b"GET /plain HTTP/1.1\nHost: example.com\n";
    let line = parse_request_line(req).unwrap();

    assert_eq!(line.path, "/plain");
}
