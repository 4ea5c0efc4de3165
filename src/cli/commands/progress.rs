use std::io::Write;

use crate::cli::parser::SessionCommand;
use crate::core::session::{Flow, Session};
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{RESET, color_for_streak};
use crate::utils::table::Table;

/// Show total completed days and the consecutive-day streak per habit.
pub fn handle<W: Write>(cmd: &SessionCommand, session: &mut Session, out: &mut W) -> AppResult<Flow> {
    if let SessionCommand::Progress { json } = cmd {
        let report = session.state.progress();

        if *json {
            let rendered =
                serde_json::to_string_pretty(&report).map_err(|e| AppError::Other(e.to_string()))?;
            writeln!(out, "{rendered}")?;
            return Ok(Flow::Continue);
        }

        if report.is_empty() {
            writeln!(out, "No habits yet.")?;
            return Ok(Flow::Continue);
        }

        let rows: Vec<Vec<String>> = report
            .iter()
            .map(|p| {
                let streak = if session.cfg.use_colors {
                    format!("{}{}{RESET}", color_for_streak(p.streak), p.streak)
                } else {
                    p.streak.to_string()
                };
                vec![
                    p.id.to_string(),
                    p.title.clone(),
                    p.total.to_string(),
                    streak,
                ]
            })
            .collect();

        let table = Table::fit(&["ID", "Habit", "Total days", "Streak"], rows);
        write!(out, "{}", table.render(&session.cfg.separator_char))?;
    }
    Ok(Flow::Continue)
}
