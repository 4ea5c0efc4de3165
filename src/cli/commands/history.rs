use std::io::Write;

use crate::cli::parser::SessionCommand;
use crate::core::session::{Flow, Session};
use crate::errors::AppResult;

/// Print the journal of operations performed in this session.
pub fn handle<W: Write>(cmd: &SessionCommand, session: &mut Session, out: &mut W) -> AppResult<Flow> {
    if let SessionCommand::History = cmd {
        if session.journal.is_empty() {
            writeln!(out, "No operations in this session.")?;
        } else {
            write!(out, "{}", session.journal.render(session.cfg.use_colors))?;
        }
    }
    Ok(Flow::Continue)
}
