//! Splash greeting shown before the session becomes interactive.
//! A plain timer-based state transition: after the configured delay the
//! screen flips from Loading to Ready. No cancellation, no retry.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::colors::{BLUE, RESET};
use crate::utils::formatting::bold;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashState {
    Loading,
    Ready,
}

#[derive(Debug)]
pub struct Splash {
    delay: Duration,
    state: SplashState,
}

impl Splash {
    pub fn new(millis: u64) -> Self {
        Self {
            delay: Duration::from_millis(millis),
            state: SplashState::Loading,
        }
    }

    pub fn state(&self) -> SplashState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == SplashState::Ready
    }

    /// Advance the transition: Loading flips to Ready once `elapsed`
    /// reaches the configured delay. Ready is terminal.
    pub fn tick(&mut self, elapsed: Duration) -> SplashState {
        if self.state == SplashState::Loading && elapsed >= self.delay {
            self.state = SplashState::Ready;
        }
        self.state
    }
}

/// Print the greeting, wait out the configured delay, and return once the
/// splash is ready. With `splash_millis = 0` there is no wait at all.
pub fn show<W: Write>(cfg: &Config, out: &mut W) -> AppResult<()> {
    let mut splash = Splash::new(cfg.splash_millis);

    let banner = if cfg.use_colors {
        format!("{BLUE}{}{RESET}", bold(&cfg.greeting))
    } else {
        cfg.greeting.clone()
    };
    writeln!(out, "{banner}")?;
    out.flush()?;

    if cfg.splash_millis > 0 {
        thread::sleep(Duration::from_millis(cfg.splash_millis));
    }
    splash.tick(Duration::from_millis(cfg.splash_millis));

    if splash.is_ready() {
        writeln!(out, "Type `help` for available commands.")?;
    }
    Ok(())
}
