//! Streak computation for the leaderboard.
//!
//! Streak rule: the number of consecutive UTC calendar days, ending at the
//! user's most recent completion day, on which the user completed at least
//! one task. A user with no completed tasks has a streak of zero. The rule
//! is a pure function over completion dates so an alternative definition
//! can be swapped in without touching the recomputation path.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Compute the streak, in days, from a list of task completion dates.
///
/// Input may be unsorted and may contain duplicates (several completions on
/// the same day count once).
pub fn streak_days(completion_days: &[NaiveDate]) -> i64 {
    let days: BTreeSet<NaiveDate> = completion_days.iter().copied().collect();

    let Some(&latest) = days.iter().next_back() else {
        return 0;
    };

    let mut streak = 1;
    let mut cursor = latest;
    while let Some(prev) = cursor.pred_opt() {
        if !days.contains(&prev) {
            break;
        }
        streak += 1;
        cursor = prev;
    }
    streak
}
