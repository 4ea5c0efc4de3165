use serde::Serialize;

use crate::models::habit::HabitId;

/// Aggregate progress for one habit, as shown by the `progress` command.
#[derive(Debug, Clone, Serialize)]
pub struct HabitProgress {
    pub id: HabitId,
    pub title: String,
    /// Distinct days on which the habit was completed.
    pub total: usize,
    /// Longest run of consecutive calendar days with a completion.
    pub streak: usize,
}
