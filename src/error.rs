//! Errors raised while scaffolding a project.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// The template reference is neither a known URL, an `owner/name` pair nor empty
    #[error("invalid template reference '{0}', expected a GitHub URL or owner/name")]
    InvalidReferenceFormat(String),

    /// `git clone` could not be spawned or exited with a non-zero status
    #[error("failed to clone {url}: {message}")]
    CloneFailure { url: String, message: String },

    /// The staged template could not be moved into the target directory
    #[error("failed to move {} to {}: {message}", .from.display(), .to.display())]
    RelocationFailure {
        from: PathBuf,
        to: PathBuf,
        message: String,
    },

    /// `git init` failed. Never fatal
    #[error("failed to initialize git repository: {0}")]
    RepoInitFailure(String),

    #[error("failed to remove existing {}: {source}", .path.display())]
    RemoveExisting {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the scaffold can still be reported as successful after this error
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::RepoInitFailure(_))
    }
}
