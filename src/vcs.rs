//! Version control operations, run through the `git` executable.

use std::{
    path::Path,
    process::{Command, Output, Stdio},
};

use crate::error::{Error, Result};

pub trait Vcs {
    /// Clones only the latest commit of `url` into `dest`. `dest` must not exist
    fn clone_shallow(&self, url: &str, dest: &Path) -> Result<()>;

    /// Creates an empty repository in `dir`, without remote or commits
    fn init(&self, dir: &Path) -> Result<()>;
}

/// [`Vcs`] that shells out to `git`
#[derive(Debug, Clone)]
pub struct Git {
    program: String,
}

impl Default for Git {
    fn default() -> Self {
        Git {
            program: "git".to_string(),
        }
    }
}

impl Git {
    /// Use a `git` executable other than the one found in `PATH`
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Git {
            program: program.into(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    fn run(mut cmd: Command) -> std::io::Result<Output> {
        crate::trace!("Running {cmd:?}");
        cmd.output()
    }
}

/// Message of a failed command, preferring what it wrote to stderr
fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();

    if stderr.is_empty() {
        format!("exited with {}", output.status)
    } else {
        stderr.to_string()
    }
}

impl Vcs for Git {
    fn clone_shallow(&self, url: &str, dest: &Path) -> Result<()> {
        let mut cmd = self.command();
        // fail instead of asking for credentials on missing or private repositories
        cmd.env("GIT_TERMINAL_PROMPT", "0")
            .args(["clone", "--depth", "1", url])
            .arg(dest);

        let output = Self::run(cmd).map_err(|e| Error::CloneFailure {
            url: url.to_string(),
            message: format!("could not run {}: {e}", self.program),
        })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(Error::CloneFailure {
                url: url.to_string(),
                message: failure_message(&output),
            })
        }
    }

    fn init(&self, dir: &Path) -> Result<()> {
        let mut cmd = self.command();
        cmd.arg("init").current_dir(dir);

        let output = Self::run(cmd)
            .map_err(|e| Error::RepoInitFailure(format!("could not run {}: {e}", self.program)))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(Error::RepoInitFailure(failure_message(&output)))
        }
    }
}
