use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// Calendar days on which a habit was marked complete.
///
/// Day granularity only: time of day is never stored. Set semantics are
/// enforced, so each day appears at most once and toggling an already
/// marked day unmarks it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompletionLog {
    days: BTreeSet<NaiveDate>,
}

impl CompletionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle `day`: insert when absent, remove when present.
    /// Returns true when the day is now marked.
    pub fn toggle(&mut self, day: NaiveDate) -> bool {
        if self.days.remove(&day) {
            false
        } else {
            self.days.insert(day);
            true
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.days.contains(&day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Marked days in ascending order.
    pub fn sorted_days(&self) -> Vec<NaiveDate> {
        self.days.iter().copied().collect()
    }
}
