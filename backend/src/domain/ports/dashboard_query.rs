//! Driving port for dashboard aggregates.

use async_trait::async_trait;

use crate::domain::{AdminStats, Error, WardenStats};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardQuery: Send + Sync {
    async fn warden_stats(&self) -> Result<WardenStats, Error>;

    async fn admin_stats(&self) -> Result<AdminStats, Error>;
}
