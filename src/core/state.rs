//! In-memory application state and its named mutation operations.
//! All habit data lives here for the lifetime of the process; nothing is
//! ever written to disk.

use chrono::NaiveDate;

use crate::core::streak;
use crate::models::completion::CompletionLog;
use crate::models::habit::{Habit, HabitId};
use crate::models::progress::HabitProgress;

/// A habit together with its completion log.
#[derive(Debug, Clone)]
pub struct HabitEntry {
    pub habit: Habit,
    pub log: CompletionLog,
}

/// Whole application state. Mutations go through the named operations
/// below; presentation code never touches the fields directly.
#[derive(Debug)]
pub struct AppState {
    entries: Vec<HabitEntry>,
    next_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a habit with an empty completion log and return its id.
    pub fn add_habit(&mut self, title: &str, place_note: &str, persona_note: &str) -> HabitId {
        let id = HabitId(self.next_id);
        self.next_id += 1;
        self.entries.push(HabitEntry {
            habit: Habit::new(id, title, place_note, persona_note),
            log: CompletionLog::new(),
        });
        id
    }

    /// Update the given fields of an existing habit in place.
    /// An unknown id is a no-op and returns false.
    pub fn edit_habit(
        &mut self,
        id: HabitId,
        title: Option<&str>,
        place_note: Option<&str>,
        persona_note: Option<&str>,
    ) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                if let Some(t) = title {
                    entry.habit.title = t.to_string();
                }
                if let Some(p) = place_note {
                    entry.habit.place_note = p.to_string();
                }
                if let Some(p) = persona_note {
                    entry.habit.persona_note = p.to_string();
                }
                true
            }
            None => false,
        }
    }

    /// Remove a habit together with its completion log.
    /// An unknown id is a no-op and returns false.
    pub fn remove_habit(&mut self, id: HabitId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.habit.id != id);
        self.entries.len() != before
    }

    /// Toggle the completion mark of habit `id` for `day`.
    /// Returns None for an unknown id, otherwise whether the day is now marked.
    pub fn toggle_completion(&mut self, id: HabitId, day: NaiveDate) -> Option<bool> {
        self.entry_mut(id).map(|e| e.log.toggle(day))
    }

    pub fn entry(&self, id: HabitId) -> Option<&HabitEntry> {
        self.entries.iter().find(|e| e.habit.id == id)
    }

    fn entry_mut(&mut self, id: HabitId) -> Option<&mut HabitEntry> {
        self.entries.iter_mut().find(|e| e.habit.id == id)
    }

    /// All entries, in creation order.
    pub fn entries(&self) -> &[HabitEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Per-habit progress report, in creation order.
    pub fn progress(&self) -> Vec<HabitProgress> {
        self.entries
            .iter()
            .map(|e| {
                let summary = streak::calculate(&e.log.sorted_days());
                HabitProgress {
                    id: e.habit.id,
                    title: e.habit.title.clone(),
                    total: summary.total,
                    streak: summary.streak,
                }
            })
            .collect()
    }
}
