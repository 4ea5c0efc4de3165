//! Streak calculation over completion days.

use chrono::NaiveDate;

/// Result of a streak scan over one completion log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakSummary {
    /// Distinct completed days.
    pub total: usize,
    /// Longest run of consecutive calendar days.
    pub streak: usize,
}

/// Compute total distinct days and the longest consecutive-day run.
///
/// Input may arrive in any order and may contain duplicates. A repeated day
/// is not "the next day": a zero-day gap resets the current run instead of
/// extending it, and duplicates are not double-counted in `total`.
pub fn calculate(days: &[NaiveDate]) -> StreakSummary {
    if days.is_empty() {
        return StreakSummary::default();
    }

    let mut sorted = days.to_vec();
    sorted.sort();

    let mut total = 1usize;
    let mut best = 0usize;
    let mut current = 1usize;

    for pair in sorted.windows(2) {
        let gap = (pair[1] - pair[0]).num_days();
        if gap != 0 {
            total += 1;
        }
        if gap == 1 {
            current += 1;
        } else {
            best = best.max(current);
            current = 1;
        }
    }

    StreakSummary {
        total,
        streak: best.max(current),
    }
}
