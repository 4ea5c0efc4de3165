use std::io::Write;

use crate::cli::parser::SessionCommand;
use crate::core::session::{Flow, Session};
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_mark};
use crate::utils::date;
use crate::utils::formatting::completion_mark;
use crate::utils::table::Table;

/// List habits with their completion mark for the chosen day.
pub fn handle<W: Write>(cmd: &SessionCommand, session: &mut Session, out: &mut W) -> AppResult<Flow> {
    if let SessionCommand::List { yesterday } = cmd {
        if session.state.is_empty() {
            writeln!(out, "No habits yet. Use `add` to create one.")?;
            return Ok(Flow::Continue);
        }

        let day = if *yesterday {
            date::yesterday()
        } else {
            date::today()
        };
        let day_header = if *yesterday { "Yesterday" } else { "Today" };

        let rows: Vec<Vec<String>> = session
            .state
            .entries()
            .iter()
            .map(|e| {
                let done = e.log.contains(day);
                let mark = if session.cfg.use_colors {
                    format!("{}{}{RESET}", color_for_mark(done), completion_mark(done))
                } else {
                    completion_mark(done).to_string()
                };
                vec![
                    e.habit.id.to_string(),
                    e.habit.title.clone(),
                    e.habit.place_note.clone(),
                    e.habit.persona_note.clone(),
                    mark,
                ]
            })
            .collect();

        let table = Table::fit(&["ID", "Habit", "Place", "Persona", day_header], rows);
        write!(out, "{}", table.render(&session.cfg.separator_char))?;
    }
    Ok(Flow::Continue)
}
