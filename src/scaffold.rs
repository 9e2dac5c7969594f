use std::path::PathBuf;

use derive_builder::Builder;
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    error::Result,
    fetch::{fetch, Fetched},
    init::init_repo,
    name::{obtain_name, DEFAULT_PROJECT_NAME},
    prompt::Prompt,
    reference::TemplateRef,
    vcs::Vcs,
};

/// One `zt` invocation: which template goes where
#[derive(Builder, Debug)]
#[builder(setter(into))]
pub struct Scaffold {
    /// URL or `owner/name`, the default template when [`None`]
    #[builder(default)]
    template: Option<String>,
    /// Asked for interactively when [`None`] or empty
    #[builder(default)]
    project_name: Option<String>,
    /// Replace an existing target without asking
    #[builder(default)]
    force: bool,
    /// Directory the project is created in
    cwd: PathBuf,
    #[builder(default = "DEFAULT_PROJECT_NAME.to_string()")]
    name_suggestion: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Created(Created),
    /// The user refused to overwrite the existing target
    Cancelled,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Created {
    pub template: TemplateRef,
    pub name: String,
    pub target: PathBuf,
    pub files: usize,
    pub git_initialized: bool,
}

impl Scaffold {
    /// Create a new [`Scaffold`] builder
    #[must_use]
    pub fn builder() -> ScaffoldBuilder {
        ScaffoldBuilder::create_empty()
    }

    /// Resolves the template, settles on a name, downloads the template and
    /// starts a new repository in it.
    ///
    /// A failing `git init` is reported as a warning and does not fail the run.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the reference is invalid, a prompt fails or the
    /// template can not be fetched.
    pub fn run(&self, prompt: &mut impl Prompt, vcs: &impl Vcs) -> Result<Outcome> {
        let template = TemplateRef::resolve(self.template.as_deref())?;
        let name = obtain_name(self.project_name.as_deref(), &self.name_suggestion, prompt)?;
        let target = self.cwd.join(&name);

        crate::trace!("Scaffolding {template} into {}", target.display());

        let files = match fetch(&template, &target, self.force, prompt, vcs)? {
            Fetched::Created { files } => files,
            Fetched::Declined => return Ok(Outcome::Cancelled),
        };

        let git_initialized = match init_repo(&target, vcs) {
            Ok(()) => true,
            Err(e) if !e.is_fatal() => {
                crate::warn!(e);
                false
            }
            Err(e) => return Err(e),
        };

        Ok(Outcome::Created(Created {
            template,
            name,
            target,
            files,
            git_initialized,
        }))
    }
}

impl Created {
    #[must_use]
    pub fn next_steps(&self, config: &Config) -> Vec<String> {
        vec![
            format!("cd {}", self.name),
            config.install_command.clone(),
            config.dev_command.clone(),
        ]
    }

    pub fn print_summary(&self, config: &Config) {
        println!();
        crate::success!(
            "Project created from {} ({} files)",
            self.template,
            self.files
        );

        println!(
            "\n{}",
            "Next steps:".if_supports_color(owo_colors::Stream::Stdout, |s| s.cyan())
        );
        for step in self.next_steps(config) {
            println!("  {step}");
        }
        println!();
    }
}
