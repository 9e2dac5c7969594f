pub mod args;
pub mod config;
pub mod error;
pub mod fetch;
pub mod init;
pub mod log;
pub mod name;
pub mod prompt;
pub mod reference;
pub mod scaffold;
pub mod spinner;
pub mod vcs;

pub use error::{Error, Result};
pub use reference::TemplateRef;
pub use scaffold::{Created, Outcome, Scaffold};
