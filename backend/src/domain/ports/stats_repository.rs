//! Driven port for dashboard aggregates.
use async_trait::async_trait;

use crate::domain::{AdminCounts, RecentComplaint, WardenStats};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by stats repository adapters.
    pub enum StatsRepositoryError {
        Connection { message: String } => "stats repository connection failed: {message}",
        Query { message: String } => "stats repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn warden_stats(&self) -> Result<WardenStats, StatsRepositoryError>;

    async fn admin_counts(&self) -> Result<AdminCounts, StatsRepositoryError>;

    /// The `limit` most recently created complaints.
    async fn recent_complaints(
        &self,
        limit: i64,
    ) -> Result<Vec<RecentComplaint>, StatsRepositoryError>;
}
