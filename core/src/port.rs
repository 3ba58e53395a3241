//! Free TCP port lookup.
//!
//! Binds port 0 on the configured host so the kernel picks an unused port,
//! then releases it. Another process may claim the port before the caller
//! binds it again.

use std::net::TcpListener;

use tracing::debug;

use crate::error::PortError;

pub const DEFAULT_HOST: &str = "localhost";

/// Where to look for a free port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortFinder {
    pub host: String,
}

impl Default for PortFinder {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
        }
    }
}

impl PortFinder {
    /// An empty host means the default.
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        if host.is_empty() {
            Self::default()
        } else {
            Self { host }
        }
    }

    pub fn find(&self) -> Result<u16, PortError> {
        let addr = format!("{}:0", self.host);
        let listener = TcpListener::bind(addr.as_str()).map_err(|source| PortError::Bind {
            addr: addr.clone(),
            source,
        })?;
        let port = listener
            .local_addr()
            .map_err(|source| PortError::Bind { addr, source })?
            .port();

        if port == 0 {
            return Err(PortError::NoPortAvailable);
        }
        debug!(host = %self.host, port, "found free port");
        Ok(port)
    }
}

/// Free port on `localhost`.
pub fn find_empty_port() -> Result<u16, PortError> {
    PortFinder::default().find()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_host_uses_default() {
        assert_eq!(PortFinder::new(""), PortFinder::default());
        assert_eq!(PortFinder::default().host, "localhost");
    }

    #[test]
    fn finds_a_port_on_loopback() {
        let port = PortFinder::new("127.0.0.1").find().unwrap();
        assert_ne!(port, 0);
        TcpListener::bind(("127.0.0.1", port)).unwrap();
    }

    #[test]
    fn default_finder_works() {
        assert_ne!(find_empty_port().unwrap(), 0);
    }

    #[test]
    fn unresolvable_host_is_an_error() {
        let err = PortFinder::new("invalid-address.invalid").find().unwrap_err();
        assert!(matches!(err, PortError::Bind { .. }));
    }
}
