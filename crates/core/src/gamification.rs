//! Point arithmetic and achievement criteria evaluation.
//!
//! The catalog of achievements lives in the database (seeded by migration);
//! this module owns the fixed point formula and the criteria grammar so
//! both the aggregator and the leaderboard recomputation agree on them.

/// Points credited per completed task, on top of badge points.
pub const POINTS_PER_COMPLETED_TASK: i64 = 10;

/// Total points for a user: held-badge points plus the per-task credit.
pub fn total_points(badge_points: i64, tasks_completed: i64) -> i64 {
    badge_points + tasks_completed * POINTS_PER_COMPLETED_TASK
}

/// Extract the completed-task threshold from an achievement's criteria JSON.
///
/// Criteria are stored as a JSON object, e.g. `{"tasks": 100}`. Only the
/// `tasks` criterion is satisfiable from the aggregates the platform
/// currently tracks; criteria keyed on anything else (referrals, approval
/// rate, tasks per day) return `None` and are skipped by the aggregator.
pub fn tasks_threshold(criteria: Option<&str>) -> Option<i64> {
    let raw = criteria?;
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    value.get("tasks")?.as_i64()
}

/// Whether a `tasks >= threshold` criterion is met.
pub fn meets_task_threshold(tasks_completed: i64, threshold: i64) -> bool {
    tasks_completed >= threshold
}
