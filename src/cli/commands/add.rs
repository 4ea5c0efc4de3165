use std::io::Write;

use crate::cli::parser::SessionCommand;
use crate::core::session::{Flow, Session};
use crate::errors::AppResult;
use crate::ui::messages;

/// Create a new habit.
pub fn handle<W: Write>(cmd: &SessionCommand, session: &mut Session, out: &mut W) -> AppResult<Flow> {
    if let SessionCommand::Add {
        title,
        place,
        persona,
    } = cmd
    {
        let id = session.state.add_habit(
            title,
            place.as_deref().unwrap_or_default(),
            persona.as_deref().unwrap_or_default(),
        );

        session.journal.record(
            "add",
            format!("habit {id}"),
            format!("Created \"{title}\""),
        );
        messages::success(
            out,
            session.cfg.use_colors,
            format!("Added habit {id}: {title}"),
        )?;
    }
    Ok(Flow::Continue)
}
