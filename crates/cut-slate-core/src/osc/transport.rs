//! Fire-and-forget datagram delivery of encoded messages.
//!
//! Success only means the local send call completed. There is no
//! acknowledgment, so a missing receiver is indistinguishable from a
//! listening one.

use crate::{
    CoreResult, SlateError,
    osc::{DEFAULT_HOST, DEFAULT_PORT},
};

use std::{
    fmt, io,
    net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket},
    panic::Location,
};

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Host and UDP port of the remote recorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// IPv4/IPv6 literal or hostname.
    pub host: String,
    /// UDP port.
    pub port: u16,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Endpoint {
    /// Creates an endpoint.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Sends an encoded payload to an endpoint.
///
/// Implemented by [`UdpTransport`] in production and by in-memory fakes in
/// tests, which keeps dialect selection testable without a socket.
pub trait Transport {
    /// Sends `payload` to `endpoint`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`SlateError::TransportFailure`] when the local send fails.
    fn send(&mut self, payload: &[u8], endpoint: &Endpoint) -> CoreResult<usize>;
}

/// Connectionless UDP transport.
///
/// The socket is bound lazily on first send and reused afterwards; it is
/// rebound only if the destination's address family changes.
#[derive(Debug, Default)]
pub struct UdpTransport {
    socket: Option<UdpSocket>,
}

impl UdpTransport {
    /// Creates a transport with no socket bound yet.
    pub fn new() -> Self {
        Self::default()
    }

    fn socket_for(&mut self, target: &SocketAddr) -> io::Result<&UdpSocket> {
        let reusable = match &self.socket {
            Some(socket) => socket.local_addr()?.is_ipv4() == target.is_ipv4(),
            None => false,
        };

        if !reusable {
            let bind_addr = if target.is_ipv4() {
                SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
            } else {
                SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
            };
            let socket = UdpSocket::bind(bind_addr)?;
            debug!(local_addr = ?socket.local_addr(), "Bound UDP socket");
            self.socket = Some(socket);
        }

        self.socket
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "socket not bound"))
    }
}

impl Transport for UdpTransport {
    #[track_caller]
    #[instrument(skip(self, payload), fields(len = payload.len()))]
    fn send(&mut self, payload: &[u8], endpoint: &Endpoint) -> CoreResult<usize> {
        let target = resolve(endpoint).map_err(|e| transport_failure(endpoint, e))?;
        let sent = self
            .socket_for(&target)
            .and_then(|socket| socket.send_to(payload, target))
            .map_err(|e| transport_failure(endpoint, e))?;

        debug!(%target, bytes = sent, "Datagram sent");

        Ok(sent)
    }
}

#[track_caller]
fn transport_failure(endpoint: &Endpoint, source: io::Error) -> SlateError {
    SlateError::TransportFailure {
        endpoint: endpoint.to_string(),
        source,
        location: ErrorLocation::from(Location::caller()),
    }
}

fn resolve(endpoint: &Endpoint) -> io::Result<SocketAddr> {
    prefer_ipv4((endpoint.host.as_str(), endpoint.port).to_socket_addrs()?)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("no address found for {endpoint}"),
            )
        })
}

/// First IPv4 address, else the first address of any family.
///
/// Recorders typically listen on IPv4 only, while `localhost` may resolve
/// to `::1` first.
pub(crate) fn prefer_ipv4(addrs: impl IntoIterator<Item = SocketAddr>) -> Option<SocketAddr> {
    let mut fallback = None;
    for addr in addrs {
        if addr.is_ipv4() {
            return Some(addr);
        }
        fallback.get_or_insert(addr);
    }
    fallback
}
