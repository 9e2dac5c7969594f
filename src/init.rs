use std::path::Path;

use crate::{error::Result, spinner::Spinner, vcs::Vcs};

/// Starts an empty repository in the freshly scaffolded `target`.
///
/// # Errors
///
/// Returns [`crate::Error::RepoInitFailure`] if `git init` fails. Callers treat
/// it as a warning.
pub fn init_repo(target: &Path, vcs: &impl Vcs) -> Result<()> {
    let spinner = Spinner::start("Initializing git repository");

    match vcs.init(target) {
        Ok(()) => {
            spinner.succeed("Initialized git repository");
            Ok(())
        }
        Err(e) => {
            spinner.fail();
            Err(e)
        }
    }
}
