use uniplex::http::response::StatusCode;
use uniplex::http::router::{route, unmatched};

#[test]
fn test_route_root_is_success() {
    let response = route("/");

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(
        response.body,
        b"The \"Server Running Successfully!\" page.".to_vec()
    );
}

#[test]
fn test_route_unknown_path_is_not_found() {
    let response = route("/missing");

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(
        response.body,
        b"The \"404 Resource Not Found\" page.".to_vec()
    );
}

#[test]
fn test_route_matching_is_exact() {
    // Prefixes and suffixes of the root path do not match it.
    assert_eq!(route("/index.html").status, StatusCode::NotFound);
    assert_eq!(route("//").status, StatusCode::NotFound);
    assert_eq!(route("").status, StatusCode::NotFound);
}

#[test]
fn test_unmatched_is_not_found() {
    let response = unmatched();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.headers.get("Connection").unwrap(), "close");
}

#[test]
fn test_routed_responses_carry_fixed_headers() {
    for response in [route("/"), route("/elsewhere")] {
        assert_eq!(response.headers.get("Content-Type").unwrap(), "text/plain");
        assert_eq!(response.headers.get("Connection").unwrap(), "close");
        assert_eq!(
            response.headers.get("Content-Length").unwrap(),
            &response.body.len().to_string()
        );
    }
}
