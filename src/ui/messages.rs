//! Status lines shown to the user. Diagnostic output goes through `tracing`
//! (see `logging`) and never mixes with these.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const CYAN: &str = "\x1b[36m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Info,
    Success,
    Warning,
    Error,
}

impl Status {
    /// (color, icon)
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Status::Info => ("\x1b[34m", "ℹ️"),
            Status::Success => ("\x1b[32m", "✅"),
            Status::Warning => ("\x1b[33m", "⚠️"),
            Status::Error => ("\x1b[31m", "❌"),
        }
    }
}

fn status_line<T: fmt::Display>(status: Status, msg: T) -> String {
    let (color, icon) = status.style();
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", status_line(Status::Info, msg));
}

/// Quiet outcome, e.g. no lineup under swap pressure.
pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", status_line(Status::Success, msg));
}

/// Something worth a look: leverage alerts, flagged lineups, empty exports.
pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", status_line(Status::Warning, msg));
}

/// Fatal errors, on stderr so report tables on stdout stay parseable.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", status_line(Status::Error, msg));
}

/// Report banner printed once per command.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{CYAN}{BOLD}=== {msg} ==={RESET}\n");
}
