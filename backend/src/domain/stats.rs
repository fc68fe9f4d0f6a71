//! Dashboard aggregates. Recomputed on every request; nothing is cached.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of recent complaints surfaced on the admin dashboard.
pub const RECENT_ACTIVITY_LIMIT: i64 = 4;

const PREVIEW_CHARS: usize = 20;

/// Counts shown on the warden dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WardenStats {
    pub total_students: i64,
    /// Complaints whose status is not `Resolved`.
    pub open_complaints: i64,
    pub pending_leaves: i64,
}

/// Room and complaint counts read in one pass for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AdminCounts {
    pub total_students: i64,
    pub total_rooms: i64,
    pub occupied_rooms: i64,
    /// Rooms with zero occupants that are not under maintenance.
    pub vacant_rooms: i64,
    pub maintenance_rooms: i64,
    /// Sum of `Pending` payment amounts.
    pub pending_fees: f64,
    pub open_complaints: i64,
}

/// Complaint fields needed to describe recent activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentComplaint {
    pub category: String,
    pub description: String,
    pub created_at: NaiveDateTime,
}

/// One entry in the admin activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActivityItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub time: NaiveDate,
    /// Presentation hint: amber for maintenance issues, red otherwise.
    pub color: String,
}

impl From<RecentComplaint> for ActivityItem {
    fn from(value: RecentComplaint) -> Self {
        let preview: String = value.description.chars().take(PREVIEW_CHARS).collect();
        let color = if value.category == "Maintenance" {
            "bg-amber-500"
        } else {
            "bg-red-500"
        };
        Self {
            kind: "alert".to_owned(),
            text: format!("Issue: {} - {preview}...", value.category),
            time: value.created_at.date(),
            color: color.to_owned(),
        }
    }
}

/// Admin dashboard payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_students: i64,
    pub total_rooms: i64,
    pub occupied_rooms: i64,
    pub vacant_rooms: i64,
    pub maintenance_rooms: i64,
    pub pending_fees: f64,
    pub open_complaints: i64,
    pub recent_activity: Vec<ActivityItem>,
}

impl AdminStats {
    /// Combine counts with the recent complaint feed.
    pub fn new(counts: AdminCounts, recent: Vec<RecentComplaint>) -> Self {
        let AdminCounts {
            total_students,
            total_rooms,
            occupied_rooms,
            vacant_rooms,
            maintenance_rooms,
            pending_fees,
            open_complaints,
        } = counts;
        Self {
            total_students,
            total_rooms,
            occupied_rooms,
            vacant_rooms,
            maintenance_rooms,
            pending_fees,
            open_complaints,
            recent_activity: recent.into_iter().map(ActivityItem::from).collect(),
        }
    }
}
