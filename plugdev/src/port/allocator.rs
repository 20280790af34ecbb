//! Dev-server port allocation with a remembered last choice.
//!
//! The allocator prefers the port it handed out last time (read from the
//! store under [`SERVER_PORT_KEY`]) so a developer's bookmarks and proxy
//! settings keep working across restarts. When that port is gone it draws
//! uniformly random candidates from the requested range until one probes
//! free, then remembers the new choice.
//!
//! Allocation is best-effort: the probe releases the port before returning,
//! so callers must still handle a bind failure when they use it.

use rand::Rng;

use crate::error::{Error, Result};
use crate::store::Store;
use crate::{Port, PortRange};

use super::probe::{PortProbe, ProbeOutcome, TcpPortProbe};

/// Store key under which the last allocated port is persisted.
pub const SERVER_PORT_KEY: &str = "server-port";

/// Options for port allocation.
///
/// # Examples
///
/// ```
/// use plugdev::port::AllocationOptions;
///
/// let bounded = AllocationOptions { max_attempts: Some(100) };
/// assert_eq!(AllocationOptions::default().max_attempts, None);
/// # let _ = bounded;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationOptions {
    /// Give up after this many random candidates were all taken.
    /// `None` retries until a free port turns up.
    pub max_attempts: Option<u32>,
}

/// Port allocator.
///
/// Stateless apart from its probe; everything remembered between runs lives
/// in the [`Store`] passed to [`allocate`](Self::allocate).
///
/// # Type Parameters
///
/// * `P` - The probe implementation (defaults to [`TcpPortProbe`])
///
/// # Examples
///
/// ```no_run
/// use plugdev::port::PortAllocator;
/// use plugdev::store::LazyStore;
///
/// # async fn run() -> plugdev::Result<()> {
/// let lazy = LazyStore::new("/tmp/plugdev/storage");
/// let store = lazy.get().await?;
///
/// let port = PortAllocator::new().allocate_port(&store, 8000.0, 9000.0).await?;
/// println!("dev server on {port}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortAllocator<P: PortProbe = TcpPortProbe> {
    probe: P,
    options: AllocationOptions,
}

impl PortAllocator<TcpPortProbe> {
    /// Create an allocator that probes the real network stack.
    #[must_use]
    pub fn new() -> Self {
        Self::with_probe(TcpPortProbe)
    }
}

impl<P: PortProbe> PortAllocator<P> {
    /// Create an allocator with a custom probe.
    #[must_use]
    pub fn with_probe(probe: P) -> Self {
        Self {
            probe,
            options: AllocationOptions::default(),
        }
    }

    /// Replace the allocation options.
    #[must_use]
    pub fn with_options(mut self, options: AllocationOptions) -> Self {
        self.options = options;
        self
    }

    /// The probe used by this allocator.
    #[must_use]
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Allocate a port from numeric bounds.
    ///
    /// `min` is rounded up and `max` rounded down; see
    /// [`PortRange::from_bounds`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPortRange`] for unusable bounds, plus every
    /// error [`allocate`](Self::allocate) can return.
    pub async fn allocate_port(&self, store: &Store, min: f64, max: f64) -> Result<Port> {
        let range = PortRange::from_bounds(min, max)?;
        self.allocate(store, range).await
    }

    /// Allocate a port within `range`.
    ///
    /// 1. If the store remembers a port and it probes free, use it. The
    ///    remembered port is not checked against `range`.
    /// 2. Otherwise draw random ports from `range` until one probes free.
    /// 3. Persist the chosen port under [`SERVER_PORT_KEY`].
    ///
    /// A candidate that is in use is skipped. Any other probe failure aborts
    /// the allocation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A probe fails for a reason other than the port being in use
    /// - `max_attempts` random candidates were all taken
    /// - The store cannot be read or written
    pub async fn allocate(&self, store: &Store, range: PortRange) -> Result<Port> {
        let port = match self.cached_candidate(store).await? {
            Some(cached) => cached,
            None => self.draw_until_free(range).await?,
        };

        store.set(SERVER_PORT_KEY, &port.to_string()).await?;
        log::debug!("allocated dev-server port {port}");
        Ok(port)
    }

    /// Returns the remembered port if it is still free.
    async fn cached_candidate(&self, store: &Store) -> Result<Option<Port>> {
        let Some(raw) = store.get(SERVER_PORT_KEY).await? else {
            return Ok(None);
        };
        let Some(cached) = Port::parse_stored(&raw) else {
            log::debug!("ignoring unparsable cached port {raw:?}");
            return Ok(None);
        };

        match self.probe.probe(cached).await? {
            ProbeOutcome::Available => Ok(Some(cached)),
            ProbeOutcome::Taken => {
                log::debug!("cached port {cached} is taken, drawing a new one");
                Ok(None)
            }
        }
    }

    async fn draw_until_free(&self, range: PortRange) -> Result<Port> {
        let mut attempts: u32 = 0;
        loop {
            if let Some(limit) = self.options.max_attempts {
                if attempts >= limit {
                    return Err(Error::PortExhausted {
                        min: range.min().value(),
                        max: range.max().value(),
                        attempts,
                    });
                }
            }
            attempts += 1;

            let candidate = random_port(range);
            if self.probe.probe(candidate).await?.is_available() {
                return Ok(candidate);
            }
        }
    }
}

/// Draws a port uniformly from `range`.
fn random_port(range: PortRange) -> Port {
    let value = rand::rng().random_range(range.min().value()..=range.max().value());
    // Both bounds are non-zero ports, so every draw is too.
    Port::try_from(value).unwrap_or(range.min())
}
