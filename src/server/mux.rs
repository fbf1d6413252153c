use std::collections::HashMap;
use std::io::{self, Read};
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use mio::net::{TcpListener, TcpStream};
use mio::{Events, Interest, Poll, Token};
use tracing::{info, warn};

use crate::http::{parser, router, writer};

/// Token reserved for the listening socket.
const LISTENER: Token = Token(0);

/// Upper bound on one poll wait. Keeps the loop responsive without
/// busy-spinning when no socket has activity.
const POLL_TIMEOUT: Duration = Duration::from_millis(10);

/// Events drained per poll cycle.
const EVENT_CAPACITY: usize = 128;

/// Largest request we read. A request that does not fit in one read is
/// serviced with whatever bytes arrived.
pub const READ_BUF_SIZE: usize = 2048;

/// One accepted connection under poll.
struct Client {
    stream: TcpStream,
    peer: SocketAddr,
}

/// The connection multiplexer: the program's only long-running control
/// structure.
///
/// Owns the listening socket and every accepted connection, polls them
/// for read-readiness, and services each readable client with a single
/// read → parse → route → respond → close cycle. Single-threaded; the
/// connection set is only touched between poll cycles.
pub struct Server {
    poll: Poll,
    listener: TcpListener,
    clients: HashMap<Token, Client>,
    next_token: usize,
}

impl Server {
    /// Registers `listener` with a fresh poller. Failures are fatal.
    pub fn new(mut listener: TcpListener) -> Result<Self> {
        let poll = Poll::new().context("failed to create poller")?;

        poll.registry()
            .register(&mut listener, LISTENER, Interest::READABLE)
            .context("failed to register listener with poller")?;

        Ok(Self {
            poll,
            listener,
            clients: HashMap::new(),
            next_token: LISTENER.0 + 1,
        })
    }

    /// Address the listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .context("failed to read listener address")
    }

    /// Drives the accept/service loop. Never returns except on a fatal
    /// error; the listening socket closes only when the process dies.
    pub fn run(&mut self) -> Result<()> {
        let mut events = Events::with_capacity(EVENT_CAPACITY);

        loop {
            self.poll
                .poll(&mut events, Some(POLL_TIMEOUT))
                .context("readiness poll failed")?;

            // Accept phase: the listener is serviced before any client.
            if events.iter().any(|e| e.token() == LISTENER) {
                self.accept_pending()?;
            }

            // Service phase: clients in event-report order. Connections
            // accepted above are not in this cycle's events; they are
            // serviced once they report readable.
            for event in events.iter() {
                if event.token() != LISTENER {
                    self.service(event.token());
                }
            }
        }
    }

    /// Accepts every pending connection and puts it under poll.
    ///
    /// Drains until `WouldBlock`: the registration is edge-style, so a
    /// connection left in the backlog would not wake the poller again.
    fn accept_pending(&mut self) -> Result<()> {
        loop {
            match self.listener.accept() {
                Ok((mut stream, peer)) => {
                    let token = Token(self.next_token);
                    self.next_token += 1;

                    self.poll
                        .registry()
                        .register(&mut stream, token, Interest::READABLE)
                        .context("failed to register client with poller")?;

                    self.clients.insert(token, Client { stream, peer });
                    info!("Client connected: {}", peer);
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) => return Err(e).context("accept failed"),
            }
        }

        Ok(())
    }

    /// One read → respond → close cycle for a readable client.
    ///
    /// The connection leaves the set whatever happens, except on a
    /// spurious wakeup, where it stays registered for a later cycle.
    /// A request is never serviced twice and a connection is never kept
    /// open past its first response.
    fn service(&mut self, token: Token) {
        let Some(mut client) = self.clients.remove(&token) else {
            return;
        };

        let mut buf = [0u8; READ_BUF_SIZE];
        match client.stream.read(&mut buf) {
            Ok(0) => info!("Client disconnected: {}", client.peer),
            Ok(n) => Self::respond(&mut client, &buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                self.clients.insert(token, client);
                return;
            }
            Err(e) => warn!("Read failed for {}: {}", client.peer, e),
        }

        let _ = self.poll.registry().deregister(&mut client.stream);
    }

    /// Parses the request line, routes it, and writes the response.
    ///
    /// A malformed line still gets a well-formed 404; a failed write is
    /// logged and the connection closes like any other.
    fn respond(client: &mut Client, raw: &[u8]) {
        let response = match parser::parse_request_line(raw) {
            Ok(line) => {
                let response = router::route(&line.path);
                info!("{} {} -> {}", line.method, line.path, response.status.as_u16());
                response
            }
            Err(e) => {
                warn!("Malformed request from {}: {}", client.peer, e);
                router::unmatched()
            }
        };

        if let Err(e) = writer::write_response(&mut client.stream, &response) {
            warn!("Write failed for {}: {}", client.peer, e);
        }
    }
}
