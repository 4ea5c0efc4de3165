use std::io::Write;

use crate::cli::parser::SessionCommand;
use crate::core::session::{Flow, Session};
use crate::errors::{AppError, AppResult};

/// Show the configuration the session is running with.
pub fn handle<W: Write>(cmd: &SessionCommand, session: &mut Session, out: &mut W) -> AppResult<Flow> {
    if let SessionCommand::Config { print_config } = cmd {
        if *print_config {
            let yaml =
                serde_yaml::to_string(&session.cfg).map_err(|_| AppError::ConfigSave)?;
            write!(out, "{yaml}")?;
        } else {
            writeln!(out, "Use `config --print` to show the loaded configuration.")?;
        }
    }
    Ok(Flow::Continue)
}
