//! Dashboard aggregates for wardens and admins.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{DashboardQuery, StatsRepository, StatsRepositoryError};
use crate::domain::{AdminStats, Error, RECENT_ACTIVITY_LIMIT, WardenStats};

fn map_repository_error(error: StatsRepositoryError) -> Error {
    match error {
        StatsRepositoryError::Connection { message } => {
            Error::internal(format!("stats repository unavailable: {message}"))
        }
        StatsRepositoryError::Query { message } => {
            Error::internal(format!("stats repository error: {message}"))
        }
    }
}

/// Dashboard service implementing [`DashboardQuery`].
#[derive(Clone)]
pub struct DashboardService<S> {
    stats: Arc<S>,
}

impl<S> DashboardService<S> {
    pub fn new(stats: Arc<S>) -> Self {
        Self { stats }
    }
}

#[async_trait]
impl<S> DashboardQuery for DashboardService<S>
where
    S: StatsRepository,
{
    async fn warden_stats(&self) -> Result<WardenStats, Error> {
        self.stats.warden_stats().await.map_err(map_repository_error)
    }

    async fn admin_stats(&self) -> Result<AdminStats, Error> {
        let counts = self.stats.admin_counts().await.map_err(map_repository_error)?;
        let recent = self
            .stats
            .recent_complaints(RECENT_ACTIVITY_LIMIT)
            .await
            .map_err(map_repository_error)?;
        Ok(AdminStats::new(counts, recent))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::ports::MockStatsRepository;
    use crate::domain::{AdminCounts, RecentComplaint};

    #[tokio::test]
    async fn admin_stats_requests_four_recent_complaints() {
        let mut stats = MockStatsRepository::new();
        stats.expect_admin_counts().return_once(|| {
            Ok(AdminCounts {
                total_students: 12,
                total_rooms: 6,
                occupied_rooms: 2,
                vacant_rooms: 3,
                maintenance_rooms: 1,
                pending_fees: 4500.0,
                open_complaints: 1,
            })
        });
        stats
            .expect_recent_complaints()
            .withf(|limit| *limit == 4)
            .return_once(|_| {
                Ok(vec![RecentComplaint {
                    category: "Maintenance".to_owned(),
                    description: "Door hinge".to_owned(),
                    created_at: NaiveDate::from_ymd_opt(2024, 2, 1)
                        .and_then(|day| day.and_hms_opt(8, 0, 0))
                        .expect("valid timestamp"),
                }])
            });

        let admin = DashboardService::new(Arc::new(stats))
            .admin_stats()
            .await
            .expect("stats succeed");
        assert_eq!(admin.total_students, 12);
        assert_eq!(admin.recent_activity.len(), 1);
        assert_eq!(admin.recent_activity[0].color, "bg-amber-500");
    }
}
