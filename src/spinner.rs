//! Terminal spinner shown while a step runs.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

pub struct Spinner(ProgressBar);

impl Spinner {
    /// Starts a spinner on stderr. Nothing is drawn if stderr is not a terminal
    #[must_use]
    pub fn start(message: impl Into<String>) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.cyan} {msg}")
        {
            pb.set_style(style);
        }
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(80));
        Spinner(pb)
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.0.set_message(message.into());
    }

    /// Stops the spinner leaving `message` behind
    pub fn succeed(self, message: impl std::fmt::Display) {
        let mark = "✓".if_supports_color(owo_colors::Stream::Stderr, |s| s.green());
        self.0.finish_with_message(format!("{mark} {message}"));
    }

    /// Stops and erases the spinner
    pub fn fail(self) {
        self.0.finish_and_clear();
    }
}
