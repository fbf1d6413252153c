//! Minimal HTTP/1.1 implementation.
//!
//! Only what one request/response cycle needs: the request line is parsed,
//! routed by exact path, answered with a fixed plain-text response, and the
//! connection is closed. No keep-alive, no bodies, no header handling
//! beyond the fixed set every response carries.
//!
//! # Request lifecycle
//!
//! ```text
//! raw bytes ── parser ──▶ RequestLine ── router ──▶ Response ── writer ──▶ wire
//! ```
//!
//! - **`parser`**: extracts method and path from the first request line
//! - **`request`**: the parsed request-line representation
//! - **`router`**: the fixed route table (`/` and everything else)
//! - **`response`**: status codes and response construction
//! - **`writer`**: serializes a response and writes it in one call

pub mod parser;
pub mod request;
pub mod response;
pub mod router;
pub mod writer;
