//! Origin resolution - identifies the party submitting input.
//!
//! The monitor keys escalation state on an opaque origin string. Resolution
//! is an injected capability so a real deployment can supply per-connection
//! identity; the bundled [`LocalHostResolver`] is a single-session
//! placeholder that reports the machine's own address.

use std::net::UdpSocket;

/// Identity returned when resolution fails.
pub const FALLBACK_ORIGIN: &str = "127.0.0.1";

/// Supplies the origin identity for the current caller.
///
/// Implementations must never fail: on any internal error they return
/// [`FALLBACK_ORIGIN`] so threat classification can never crash the caller.
pub trait OriginResolver: Send + Sync {
    fn resolve(&self) -> String;
}

/// Best-effort local interface address, falling back to [`FALLBACK_ORIGIN`].
pub struct LocalHostResolver;

impl OriginResolver for LocalHostResolver {
    fn resolve(&self) -> String {
        local_address().unwrap_or_else(|| FALLBACK_ORIGIN.to_string())
    }
}

/// Reads the routed local address without sending traffic: the connect call
/// only selects a route, no packet leaves the host.
fn local_address() -> Option<String> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    Some(socket.local_addr().ok()?.ip().to_string())
}

/// Fixed origin identity, for tests and single-tenant embeddings.
pub struct StaticOrigin(pub String);

impl StaticOrigin {
    pub fn new(origin: impl Into<String>) -> Self {
        Self(origin.into())
    }
}

impl OriginResolver for StaticOrigin {
    fn resolve(&self) -> String {
        self.0.clone()
    }
}
