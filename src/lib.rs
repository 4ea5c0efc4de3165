//! habitrack library root.
//! Exposes CLI parsers, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use std::io::{self, Write};

use clap::Parser;
use cli::parser::{Cli, SessionCommand};
use config::Config;
use errors::AppResult;

use crate::core::session::{Flow, Session};

/// Central command dispatcher: routes one parsed session command to its handler.
pub fn dispatch<W: Write>(
    cmd: &SessionCommand,
    session: &mut Session,
    out: &mut W,
) -> AppResult<Flow> {
    match cmd {
        SessionCommand::Add { .. } => cli::commands::add::handle(cmd, session, out),
        SessionCommand::Edit { .. } => cli::commands::edit::handle(cmd, session, out),
        SessionCommand::Del { .. } => cli::commands::del::handle(cmd, session, out),
        SessionCommand::Done { .. } => cli::commands::done::handle(cmd, session, out),
        SessionCommand::List { .. } => cli::commands::list::handle(cmd, session, out),
        SessionCommand::Progress { .. } => cli::commands::progress::handle(cmd, session, out),
        SessionCommand::History => cli::commands::history::handle(cmd, session, out),
        SessionCommand::Config { .. } => cli::commands::config::handle(cmd, session, out),
        SessionCommand::Quit => Ok(Flow::Quit),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse outer CLI
    let cli = Cli::parse();

    // 2. load config ONCE, honoring an explicit --config override
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(&utils::path::expand_tilde(path))?,
        None => Config::load()?,
    };

    // 3. --no-splash skips the startup delay (used by tests)
    if cli.no_splash {
        cfg.splash_millis = 0;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // 4. splash greeting, then hand over to the interactive session
    crate::core::splash::show(&cfg, &mut out)?;

    let stdin = io::stdin();
    let mut session = Session::new(cfg);
    session.run(&mut stdin.lock(), &mut out)
}
