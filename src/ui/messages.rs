use std::fmt;
use std::io::{self, IsTerminal};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Prefixes `msg` with a coloured icon, or returns it bare when the output is piped.
fn decorate(tty: bool, color: &str, icon: &str, msg: impl fmt::Display) -> String {
    if tty {
        format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
    } else {
        msg.to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", decorate(io::stdout().is_terminal(), FG_BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", decorate(io::stdout().is_terminal(), FG_GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}", decorate(io::stderr().is_terminal(), FG_YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!(
        "{}",
        decorate(io::stderr().is_terminal(), FG_RED, ICON_ERR, format_args!("Error: {}", msg))
    );
}
