use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes status lines to stderr so they never mix with a report written
/// to stdout. Warnings and the completion line are colored when stderr is
/// a terminal and `NO_COLOR` is unset.
pub struct StderrProgressReporter {
    color: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            color: std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Reporter that never emits ANSI escapes
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn render_error(&self, message: &str) -> String {
        if self.color {
            message.yellow().to_string()
        } else {
            message.to_string()
        }
    }

    fn render_completion(&self, message: &str) -> String {
        if self.color {
            message.green().bold().to_string()
        } else {
            message.to_string()
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", self.render_error(message));
    }

    fn report_completion(&self, message: &str) {
        eprintln!();
        eprintln!("{}", self.render_completion(message));
    }
}
