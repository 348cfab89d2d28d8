//! UDP transport for the DNS server (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Each inbound datagram of up to
//! 512 bytes is one complete request; each reply is one datagram. Requests
//! are served strictly one at a time on the calling thread.

use crate::dns::server::DnsServerHandler;
use std::io;
use std::net::{SocketAddr, UdpSocket};
use stubdns_domain::{WireError, MAX_DATAGRAM_LEN};
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind UDP socket to {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },

    #[error("UDP socket unusable: {0}")]
    Receive(#[source] io::Error),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] WireError),
}

/// Blocking, single-threaded DNS server over one owned UDP socket.
pub struct UdpDnsServer {
    socket: UdpSocket,
    handler: DnsServerHandler,
}

impl UdpDnsServer {
    pub fn bind(addr: SocketAddr, handler: DnsServerHandler) -> Result<Self, ServerError> {
        let socket = UdpSocket::bind(addr).map_err(|source| ServerError::Bind { addr, source })?;
        Ok(Self::from_socket(socket, handler))
    }

    pub fn from_socket(socket: UdpSocket, handler: DnsServerHandler) -> Self {
        Self { socket, handler }
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Receive, respond, repeat.
    ///
    /// Returns only on a fatal error: the socket can no longer receive, or a
    /// response could not be encoded. Send failures are logged and skipped.
    pub fn run(self) -> Result<(), ServerError> {
        if let Ok(addr) = self.local_addr() {
            info!(bind_address = %addr, "DNS server ready (UDP)");
        }

        let mut recv_buf = [0u8; MAX_DATAGRAM_LEN];

        loop {
            let (n, peer) = match self.socket.recv_from(&mut recv_buf) {
                Ok(received) => received,
                Err(e) if is_transient(&e) => {
                    debug!(error = %e, "Transient UDP recv error");
                    continue;
                }
                Err(e) => {
                    error!(error = %e, "UDP recv error");
                    return Err(ServerError::Receive(e));
                }
            };

            debug!(bytes = n, %peer, "Received {} bytes from {}", n, peer);

            let response = match self.handler.handle_raw_udp(&recv_buf[..n], peer) {
                Ok(Some(response)) => response,
                Ok(None) => continue,
                Err(e) => {
                    error!(error = %e, %peer, "Response encoding failed");
                    return Err(e.into());
                }
            };

            if let Err(e) = self.socket.send_to(&response, peer) {
                warn!(error = %e, %peer, "Failed to send response");
            }
        }
    }
}

/// Receive errors that leave the socket usable. `ConnectionReset` shows up
/// on some platforms after an ICMP port-unreachable for an earlier reply.
fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
            | io::ErrorKind::TimedOut
            | io::ErrorKind::ConnectionReset
    )
}
