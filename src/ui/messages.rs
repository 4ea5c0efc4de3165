//! User-facing status messages for the interactive session.

use std::fmt;
use std::io::{self, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn emit<W: Write, T: fmt::Display>(
    out: &mut W,
    colors: bool,
    fg: &str,
    icon: &str,
    msg: T,
) -> io::Result<()> {
    if colors {
        writeln!(out, "{fg}{BOLD}{icon} {RESET}{msg}")
    } else {
        writeln!(out, "{icon} {msg}")
    }
}

pub fn info<W: Write, T: fmt::Display>(out: &mut W, colors: bool, msg: T) -> io::Result<()> {
    emit(out, colors, FG_BLUE, ICON_INFO, msg)
}

pub fn success<W: Write, T: fmt::Display>(out: &mut W, colors: bool, msg: T) -> io::Result<()> {
    emit(out, colors, FG_GREEN, ICON_OK, msg)
}

pub fn warning<W: Write, T: fmt::Display>(out: &mut W, colors: bool, msg: T) -> io::Result<()> {
    emit(out, colors, FG_YELLOW, ICON_WARN, msg)
}

pub fn error<W: Write, T: fmt::Display>(out: &mut W, colors: bool, msg: T) -> io::Result<()> {
    emit(out, colors, FG_RED, ICON_ERR, msg)
}
