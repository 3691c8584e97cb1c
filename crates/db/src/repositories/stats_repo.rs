//! Platform-wide aggregation queries for the admin dashboard.

use sqlx::PgPool;

use crate::models::stats::GlobalStatsRow;

/// Read-only counters across all owners. Counts are taken in one
/// statement; they are not transactionally consistent with concurrent
/// writes, which is acceptable for dashboard display.
pub struct StatsRepo;

impl StatsRepo {
    /// Global user/task/category counters.
    pub async fn global(pool: &PgPool) -> Result<GlobalStatsRow, sqlx::Error> {
        sqlx::query_as::<_, GlobalStatsRow>(
            "SELECT (SELECT COUNT(*) FROM users) AS total_users,
                    (SELECT COUNT(*) FROM tasks) AS total_tasks,
                    (SELECT COUNT(*) FROM tasks WHERE is_completed) AS completed_tasks,
                    (SELECT COUNT(*) FROM categories) AS total_categories",
        )
        .fetch_one(pool)
        .await
    }
}
