//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use hostel::domain::AllocationPolicy;
use hostel::outbound::persistence::DbPool;
use zeroize::Zeroizing;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Everything the server needs once settings are resolved and the store is
/// migrated.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) signing_secret: Zeroizing<Vec<u8>>,
    pub(crate) cookie_secure: bool,
    pub(crate) allocation_policy: AllocationPolicy,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        db_pool: DbPool,
        signing_secret: Zeroizing<Vec<u8>>,
    ) -> Self {
        Self {
            bind_addr,
            db_pool,
            signing_secret,
            cookie_secure: true,
            allocation_policy: AllocationPolicy::default(),
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Set the `Secure` flag on session cookies.
    #[must_use]
    pub fn with_cookie_secure(mut self, cookie_secure: bool) -> Self {
        self.cookie_secure = cookie_secure;
        self
    }

    /// Choose how allocation treats room capacity.
    #[must_use]
    pub fn with_allocation_policy(mut self, policy: AllocationPolicy) -> Self {
        self.allocation_policy = policy;
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
