use std::io::Write;

use crate::cli::parser::SessionCommand;
use crate::core::session::{Flow, Session};
use crate::errors::AppResult;
use crate::models::habit::HabitId;
use crate::ui::messages;

/// Delete a habit together with its completion log.
pub fn handle<W: Write>(cmd: &SessionCommand, session: &mut Session, out: &mut W) -> AppResult<Flow> {
    if let SessionCommand::Del { id } = cmd {
        let id = HabitId(*id);
        if session.state.remove_habit(id) {
            session
                .journal
                .record("del", format!("habit {id}"), "Deleted habit and its log");
            messages::success(out, session.cfg.use_colors, format!("Deleted habit {id}"))?;
        } else {
            messages::warning(
                out,
                session.cfg.use_colors,
                format!("No habit with id {id}, nothing to delete"),
            )?;
        }
    }
    Ok(Flow::Continue)
}
