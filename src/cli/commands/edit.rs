use std::io::Write;

use crate::cli::parser::SessionCommand;
use crate::core::session::{Flow, Session};
use crate::errors::AppResult;
use crate::models::habit::HabitId;
use crate::ui::messages;

/// Edit an existing habit in place. An unknown id is a warning, not an error.
pub fn handle<W: Write>(cmd: &SessionCommand, session: &mut Session, out: &mut W) -> AppResult<Flow> {
    if let SessionCommand::Edit {
        id,
        title,
        place,
        persona,
    } = cmd
    {
        let id = HabitId(*id);
        let updated = session.state.edit_habit(
            id,
            title.as_deref(),
            place.as_deref(),
            persona.as_deref(),
        );

        if updated {
            session
                .journal
                .record("edit", format!("habit {id}"), "Updated habit fields");
            messages::success(out, session.cfg.use_colors, format!("Updated habit {id}"))?;
        } else {
            messages::warning(
                out,
                session.cfg.use_colors,
                format!("No habit with id {id}, nothing to edit"),
            )?;
        }
    }
    Ok(Flow::Continue)
}
