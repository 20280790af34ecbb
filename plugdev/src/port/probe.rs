//! Port availability probing.
//!
//! A probe answers one question: can a TCP listener be bound on this port
//! right now? The answer is only valid at the instant of the check; another
//! process may take the port as soon as the probe releases it.
//!
//! Probing sits behind the [`PortProbe`] trait so the allocator can run
//! against the real network stack ([`TcpPortProbe`]) or a deterministic
//! stand-in ([`MockPortProbe`]).

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::io::ErrorKind;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Mutex;

use tokio::net::TcpListener;

use crate::error::{Error, Result};
use crate::Port;

/// Result of a successful probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Nothing is bound on the port.
    Available,
    /// Binding failed because the address is in use.
    Taken,
}

impl ProbeOutcome {
    /// Returns `true` for [`ProbeOutcome::Available`].
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Checks whether a port can currently be bound.
///
/// Implementations must classify "address in use" as
/// [`ProbeOutcome::Taken`] and every other failure as an error, so the
/// allocator retries only on contention.
pub trait PortProbe: Send + Sync {
    /// Probe a single port.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProbeFailed`] when binding fails for any reason other
    /// than the address being in use (e.g. permission denied).
    fn probe(&self, port: Port) -> impl Future<Output = Result<ProbeOutcome>> + Send;
}

/// Probes by binding a TCP listener on the unspecified IPv4 address, then on
/// the unspecified IPv6 address, closing each again straight away.
///
/// A port is taken when either bind reports the address in use, so a holder
/// on an IPv6-only socket is seen too. Hosts without IPv6 only get the IPv4
/// check.
///
/// # Examples
///
/// ```no_run
/// use plugdev::port::{PortProbe, TcpPortProbe};
/// use plugdev::Port;
///
/// # async fn run() -> plugdev::Result<()> {
/// let outcome = TcpPortProbe.probe(Port::try_from(8080)?).await?;
/// println!("8080 available: {}", outcome.is_available());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpPortProbe;

impl PortProbe for TcpPortProbe {
    fn probe(&self, port: Port) -> impl Future<Output = Result<ProbeOutcome>> + Send {
        async move {
            let v4 = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port.value()));
            match try_bind(v4).await {
                Ok(ProbeOutcome::Available) => {}
                Ok(ProbeOutcome::Taken) => return Ok(ProbeOutcome::Taken),
                Err(source) => {
                    return Err(Error::ProbeFailed {
                        port: port.value(),
                        source,
                    })
                }
            }

            let v6 = SocketAddr::from((Ipv6Addr::UNSPECIFIED, port.value()));
            match try_bind(v6).await {
                Ok(outcome) => Ok(outcome),
                Err(e) if ipv6_unsupported(&e) => {
                    log::debug!("IPv6 unavailable while probing {port}: {e}");
                    Ok(ProbeOutcome::Available)
                }
                Err(source) => Err(Error::ProbeFailed {
                    port: port.value(),
                    source,
                }),
            }
        }
    }
}

async fn try_bind(addr: SocketAddr) -> std::io::Result<ProbeOutcome> {
    match TcpListener::bind(addr).await {
        Ok(listener) => {
            drop(listener);
            Ok(ProbeOutcome::Available)
        }
        Err(e) if e.kind() == ErrorKind::AddrInUse => Ok(ProbeOutcome::Taken),
        Err(e) => Err(e),
    }
}

fn ipv6_unsupported(error: &std::io::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::AddrNotAvailable | ErrorKind::Unsupported
    )
}

/// Deterministic probe for tests.
///
/// Ports marked occupied report [`ProbeOutcome::Taken`], ports marked failing
/// return [`Error::ProbeFailed`] with the configured error kind, and every
/// other port is available. Each probed port is recorded in order.
///
/// # Examples
///
/// ```
/// use plugdev::port::{MockPortProbe, PortProbe, ProbeOutcome};
/// use plugdev::Port;
///
/// # tokio_test_block(async {
/// let mut probe = MockPortProbe::empty();
/// let port = Port::try_from(8080).unwrap();
/// probe.mark_occupied(port);
///
/// assert_eq!(probe.probe(port).await.unwrap(), ProbeOutcome::Taken);
/// assert_eq!(probe.probed(), vec![port]);
/// # });
/// # fn tokio_test_block(f: impl std::future::Future<Output = ()>) {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MockPortProbe {
    occupied: HashSet<Port>,
    failing: HashMap<Port, ErrorKind>,
    probed: Mutex<Vec<Port>>,
}

impl MockPortProbe {
    /// Create a mock probe with the given occupied ports.
    #[must_use]
    pub fn new(occupied: HashSet<Port>) -> Self {
        Self {
            occupied,
            ..Self::default()
        }
    }

    /// Create a mock probe where every port is available.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Report `port` as taken.
    pub fn mark_occupied(&mut self, port: Port) {
        self.occupied.insert(port);
    }

    /// Report `port` as available again.
    pub fn mark_free(&mut self, port: Port) {
        self.occupied.remove(&port);
    }

    /// Make probes of `port` fail with an error of the given kind.
    pub fn fail_with(&mut self, port: Port, kind: ErrorKind) {
        self.failing.insert(port, kind);
    }

    /// Ports probed so far, in call order.
    #[must_use]
    pub fn probed(&self) -> Vec<Port> {
        self.probed
            .lock()
            .map(|probed| probed.clone())
            .unwrap_or_default()
    }
}

impl PortProbe for MockPortProbe {
    fn probe(&self, port: Port) -> impl Future<Output = Result<ProbeOutcome>> + Send {
        if let Ok(mut probed) = self.probed.lock() {
            probed.push(port);
        }

        let outcome = if let Some(kind) = self.failing.get(&port) {
            Err(Error::ProbeFailed {
                port: port.value(),
                source: std::io::Error::from(*kind),
            })
        } else if self.occupied.contains(&port) {
            Ok(ProbeOutcome::Taken)
        } else {
            Ok(ProbeOutcome::Available)
        };

        std::future::ready(outcome)
    }
}
