// UI module for consistent terminal output
//
// All printing goes through here so the rest of the crate stays free of print macros.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use console::{Term, style};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Check if stderr is a TTY (for interactive output)
fn is_tty() -> bool {
    Term::stderr().is_term()
}

/// Create a styled spinner for catalog loading
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if !is_tty() {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }

    if let Ok(spinner_style) = ProgressStyle::default_spinner()
        .tick_chars(SPINNER_CHARS)
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(spinner_style);
    }
    pb.set_message(message.to_string());

    if is_tty() {
        pb.enable_steady_tick(Duration::from_millis(80));
    }

    pb
}

/// Clear a spinner without leaving a message
pub fn clear_spinner(pb: &ProgressBar) {
    pb.finish_and_clear();
}

/// Plain line on stdout (JSON documents, table rows)
pub fn line(message: &str) {
    println!("{}", message);
}

pub fn success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn action(message: &str) {
    println!("{} {}", style("→").cyan(), message);
}

pub fn warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}

pub fn header(message: &str) {
    println!("{}", style(message).bold());
}

pub fn dim(message: &str) {
    println!("{}", style(message).dim());
}

/// Print a status message with a highlighted prefix
pub fn status(prefix: &str, message: &str) {
    println!("{} {}", style(prefix).cyan().bold(), message);
}
