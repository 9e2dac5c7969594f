use inquire::{Confirm, Text};

use crate::error::Result;

/// Interactive questions asked while scaffolding.
///
/// Both calls block until the user answers.
pub trait Prompt {
    /// Asks a yes/no question
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Asks for a line of text. An empty answer yields `default`
    fn text(&mut self, message: &str, default: &str) -> Result<String>;
}

/// [`Prompt`] backed by the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl Prompt for Terminal {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(message).with_default(default).prompt()?)
    }

    fn text(&mut self, message: &str, default: &str) -> Result<String> {
        Ok(Text::new(message).with_default(default).prompt()?)
    }
}
