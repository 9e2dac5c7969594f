//! Downloading a template into the project directory.
//!
//! The template is cloned into a staging directory next to the target, stripped
//! of its `.git` directory and then moved into place, so a failed clone never
//! leaves a half populated project behind.

use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use fs_extra::dir::CopyOptions;
use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    prompt::Prompt,
    reference::TemplateRef,
    spinner::Spinner,
    vcs::Vcs,
};

pub const STAGING_PREFIX: &str = ".zt-temp-";

#[derive(Debug, PartialEq, Eq)]
pub enum Fetched {
    /// The template is in place, holding `files` regular files
    Created { files: usize },
    /// The user chose not to overwrite an existing target
    Declined,
}

/// Scratch directory a template is cloned into. Removed on drop if it still exists
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
}

impl StagingDir {
    /// Picks an unused, time based path in `parent`. The directory is not created
    #[must_use]
    pub fn next_in(parent: &Path) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();

        let mut path = parent.join(format!("{STAGING_PREFIX}{millis}"));
        let mut n = 1;
        while path.symlink_metadata().is_ok() {
            path = parent.join(format!("{STAGING_PREFIX}{millis}-{n}"));
            n += 1;
        }

        StagingDir { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        if self.path.symlink_metadata().is_ok() {
            if let Err(e) = remove_path(&self.path) {
                crate::trace!(
                    "Failed to remove staging directory {}: {e}",
                    self.path.display()
                );
            }
        }
    }
}

/// Removes a file, symlink or whole directory tree
pub fn remove_path(path: &Path) -> std::io::Result<()> {
    let file_type = path.symlink_metadata()?.file_type();

    if file_type.is_symlink() {
        // Windows represents directory symlinks as directories
        #[cfg(target_os = "windows")]
        {
            if path.is_dir() {
                return fs::remove_dir(path);
            }
        }

        fs::remove_file(path)
    } else if file_type.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Moves `from` to `to`. Falls back to copying the contents when a rename is not
/// possible, for example across devices. `from` is left for the caller to remove
fn relocate(from: &Path, to: &Path) -> Result<()> {
    let Err(rename_err) = fs::rename(from, to) else {
        return Ok(());
    };

    crate::trace!("Rename failed ({rename_err}), copying instead");

    let relocation_failure = |message: String| Error::RelocationFailure {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        message,
    };

    fs::create_dir_all(to).map_err(|e| relocation_failure(e.to_string()))?;
    fs_extra::dir::copy(from, to, &CopyOptions::new().content_only(true))
        .map_err(|e| relocation_failure(format!("{rename_err}; copy fallback: {e}")))?;

    Ok(())
}

fn count_files(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}

/// Populates `target` with the files of `template`, without its git history.
///
/// If `target` already exists it is removed first, after asking through
/// `prompt` unless `force` is set.
///
/// # Errors
///
/// Returns an [`Err`] if the existing target can not be removed, the clone
/// fails or the cloned tree can not be moved into `target`. The staging
/// directory is removed in every case.
pub fn fetch(
    template: &TemplateRef,
    target: &Path,
    force: bool,
    prompt: &mut impl Prompt,
    vcs: &impl Vcs,
) -> Result<Fetched> {
    if target.symlink_metadata().is_ok() {
        if !force {
            let message = format!("Directory {} already exists. Overwrite?", target.display());
            if !prompt.confirm(&message, false)? {
                return Ok(Fetched::Declined);
            }
        }

        let spinner = Spinner::start(format!("Removing {}", target.display()));
        if let Err(source) = remove_path(target) {
            spinner.fail();
            return Err(Error::RemoveExisting {
                path: target.to_path_buf(),
                source,
            });
        }
        spinner.succeed(format!("Removed {}", target.display()));
    }

    let parent = target
        .parent()
        .map_or_else(std::env::temp_dir, Path::to_path_buf);
    let staging = StagingDir::next_in(&parent);
    let url = template.clone_url();

    let spinner = Spinner::start(format!("Cloning {template}"));
    crate::trace!("Staging {} in {}", url, staging.path().display());

    let staged = vcs
        .clone_shallow(&url, staging.path())
        .and_then(|()| {
            let git_dir = staging.path().join(".git");
            if git_dir.symlink_metadata().is_ok() {
                remove_path(&git_dir)?;
            }
            spinner.set_message(format!("Moving template to {}", target.display()));
            relocate(staging.path(), target)
        });

    if let Err(e) = staged {
        spinner.fail();
        return Err(e);
    }

    let files = count_files(target);
    spinner.succeed(format!("Template {template} downloaded to {}", target.display()));

    Ok(Fetched::Created { files })
}
