use std::net::SocketAddr;

use anyhow::{Context, Result};
use mio::net::TcpListener;
use socket2::{Domain, Protocol, Socket, Type};

/// Pending connections the OS queues for the listening socket.
pub const BACKLOG: i32 = 5;

/// Creates the server's accept endpoint.
///
/// Opens a TCP stream socket for the address family of `addr`, enables
/// address reuse so a restarted process can rebind immediately, binds,
/// and marks the socket listening with the given backlog. The result is
/// non-blocking, ready to register with the poller.
///
/// Every failure here is fatal: no client state exists yet to protect.
pub fn bind(addr: SocketAddr, backlog: i32) -> Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))
        .context("failed to create listening socket")?;

    socket
        .set_reuse_address(true)
        .context("failed to enable address reuse")?;

    socket
        .bind(&addr.into())
        .with_context(|| format!("failed to bind {addr}"))?;

    socket
        .listen(backlog)
        .with_context(|| format!("failed to listen on {addr}"))?;

    socket
        .set_nonblocking(true)
        .context("failed to make listening socket non-blocking")?;

    Ok(TcpListener::from_std(socket.into()))
}
