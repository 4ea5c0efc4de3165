use serde::Serialize;
use std::fmt;

/// Opaque habit identifier.
/// Assigned once at creation from the state's monotonic counter and never
/// reused within a session, even after deletions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HabitId(pub u64);

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user-defined recurring action tracked for completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Habit {
    pub id: HabitId,
    pub title: String,
    /// Free-text "when and where" note (e.g. "07:00, park").
    pub place_note: String,
    /// Free-text "type of person this makes you" note.
    pub persona_note: String,
}

impl Habit {
    pub fn new(id: HabitId, title: &str, place_note: &str, persona_note: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            place_note: place_note.to_string(),
            persona_note: persona_note.to_string(),
        }
    }
}
