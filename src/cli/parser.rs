use clap::{Parser, Subcommand};

/// Outer command-line interface for habitrack.
/// Running the binary enters the interactive session; there are no
/// top-level subcommands.
#[derive(Parser)]
#[command(
    name = "habitrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "An interactive habit tracker: mark daily completions and follow your streaks",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(long = "config")]
    pub config: Option<String>,

    /// Skip the splash delay (used by tests)
    #[arg(long = "no-splash", hide = true)]
    pub no_splash: bool,
}

/// One line of session input, parsed in multicall mode: the first token is
/// the command name itself.
#[derive(Parser)]
#[command(name = "habitrack", multicall = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Create a new habit
    Add {
        /// Habit title (quote multi-word titles)
        title: String,

        /// Time/location note, e.g. "07:00, park"
        #[arg(long = "place", help = "Time/location note")]
        place: Option<String>,

        /// Type-of-person note, e.g. "an early riser"
        #[arg(long = "persona", help = "Type-of-person note")]
        persona: Option<String>,
    },

    /// Edit an existing habit (unknown ids are a no-op)
    Edit {
        /// Habit id (see `list`)
        id: u64,

        #[arg(long = "title", help = "New title")]
        title: Option<String>,

        #[arg(long = "place", help = "New time/location note")]
        place: Option<String>,

        #[arg(long = "persona", help = "New type-of-person note")]
        persona: Option<String>,
    },

    /// Delete a habit and its completion log (unknown ids are a no-op)
    Del {
        /// Habit id to delete
        id: u64,
    },

    /// Toggle a completion mark, for today unless told otherwise
    Done {
        /// Habit id to toggle
        id: u64,

        /// Toggle yesterday instead of today
        #[arg(long = "yesterday", conflicts_with = "date")]
        yesterday: bool,

        /// Toggle an explicit day (YYYY-MM-DD)
        #[arg(long = "date", value_name = "DATE")]
        date: Option<String>,
    },

    /// List habits with their completion mark for the chosen day
    List {
        /// Show yesterday's marks instead of today's
        #[arg(long = "yesterday")]
        yesterday: bool,
    },

    /// Show total completed days and consecutive-day streak per habit
    Progress {
        /// Print the report as JSON instead of a table
        #[arg(long = "json")]
        json: bool,
    },

    /// Show the operations performed in this session
    History,

    /// Show the loaded configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Leave the session (state is discarded)
    #[command(alias = "exit")]
    Quit,
}
