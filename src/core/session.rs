//! Interactive session loop.
//! Reads commands line by line, mutates the in-memory state, and writes
//! replies to the given output. Generic over the reader and writer so
//! tests can drive it with in-memory buffers.

use std::io::{BufRead, Write};

use clap::Parser;

use crate::cli::parser::SessionLine;
use crate::config::Config;
use crate::core::journal::Journal;
use crate::core::state::AppState;
use crate::dispatch;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::line;

/// Loop control returned by command handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    pub cfg: Config,
    pub state: AppState,
    pub journal: Journal,
}

impl Session {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            state: AppState::new(),
            journal: Journal::new(),
        }
    }

    /// Run until `quit`, `exit`, or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> AppResult<()> {
        let mut buf = String::new();

        loop {
            write!(out, "habitrack> ")?;
            out.flush()?;

            buf.clear();
            if input.read_line(&mut buf)? == 0 {
                // EOF ends the session like `quit`
                writeln!(out)?;
                return Ok(());
            }

            let tokens = line::split(buf.trim());
            if tokens.is_empty() {
                continue;
            }

            match SessionLine::try_parse_from(tokens.iter().map(String::as_str)) {
                Ok(parsed) => match dispatch(&parsed.command, self, out) {
                    Ok(Flow::Quit) => return Ok(()),
                    Ok(Flow::Continue) => {}
                    // command-level failures (e.g. a bad --date) are
                    // reported and the session keeps going
                    Err(e) => messages::error(out, self.cfg.use_colors, e)?,
                },
                Err(e) => {
                    writeln!(out, "{}", e.render())?;
                }
            }
        }
    }
}
