use std::io::{self, Write};

use mio::net::TcpStream;

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a response into wire format:
/// `status-line CRLF headers CRLF CRLF body`.
pub fn serialize(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    for (key, value) in &resp.headers {
        buf.extend_from_slice(key.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(value.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    buf.extend_from_slice(b"\r\n");
    buf.extend_from_slice(&resp.body);

    buf
}

/// Writes the full serialized response in exactly one `write` call.
///
/// There is no retry loop: a short write to a slow peer sends a truncated
/// response, and the connection is closed either way.
pub fn write_response(stream: &mut TcpStream, resp: &Response) -> io::Result<usize> {
    stream.write(&serialize(resp))
}
