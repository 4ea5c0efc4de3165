use std::io::Write;

use crate::cli::parser::SessionCommand;
use crate::core::session::{Flow, Session};
use crate::errors::{AppError, AppResult};
use crate::models::habit::HabitId;
use crate::ui::messages;
use crate::utils::date;

/// Toggle a completion mark for today, yesterday, or an explicit day.
pub fn handle<W: Write>(cmd: &SessionCommand, session: &mut Session, out: &mut W) -> AppResult<Flow> {
    if let SessionCommand::Done {
        id,
        yesterday,
        date: day_arg,
    } = cmd
    {
        //
        // 1. Resolve the target day (today is the default)
        //
        let day = match day_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None if *yesterday => date::yesterday(),
            None => date::today(),
        };

        //
        // 2. Toggle, warn on unknown id
        //
        let id = HabitId(*id);
        match session.state.toggle_completion(id, day) {
            Some(true) => {
                session
                    .journal
                    .record("done", format!("habit {id}"), format!("Marked {day}"));
                messages::success(
                    out,
                    session.cfg.use_colors,
                    format!("Marked habit {id} complete for {day}"),
                )?;
            }
            Some(false) => {
                session
                    .journal
                    .record("undone", format!("habit {id}"), format!("Unmarked {day}"));
                messages::info(
                    out,
                    session.cfg.use_colors,
                    format!("Removed completion for habit {id} on {day}"),
                )?;
            }
            None => {
                messages::warning(
                    out,
                    session.cfg.use_colors,
                    format!("No habit with id {id}, nothing to toggle"),
                )?;
            }
        }
    }
    Ok(Flow::Continue)
}
