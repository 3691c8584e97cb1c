//! Aggregation row types.

use sqlx::FromRow;

/// Per-owner task counters, computed in a single scan.
#[derive(Debug, Clone, FromRow)]
pub struct TaskStatsRow {
    pub total: i64,
    pub completed: i64,
    pub high_priority: i64,
}

/// Platform-wide counters for the admin dashboard. Unscoped.
#[derive(Debug, Clone, FromRow)]
pub struct GlobalStatsRow {
    pub total_users: i64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub total_categories: i64,
}
