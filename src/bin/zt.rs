use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use zt::{
    args::Args,
    config::{Config, ZtDirs},
    error,
    prompt::Terminal,
    trace,
    vcs::Git,
    warn, Outcome, Scaffold,
};

fn load_config() -> Config {
    let loaded = ZtDirs::default_paths().and_then(|dirs| {
        trace!(
            "Configuration file: {}",
            dirs.config_file()
                .display()
                .to_string()
                .replace(&dirs.user_home().display().to_string(), "~")
        );
        Config::load(&dirs)
    });

    loaded.unwrap_or_else(|e| {
        warn!("Using default configuration: {:#}", e);
        Config::default()
    })
}

fn app(args: Args) -> Result<Outcome> {
    let config = load_config();
    let cwd = std::env::current_dir().context("Failed to get current dir")?;

    let scaffold = Scaffold::builder()
        .template(args.template)
        .project_name(args.project_name)
        .force(args.force)
        .cwd(cwd)
        .name_suggestion(config.default_name.clone())
        .build()?;

    let outcome = scaffold.run(&mut Terminal, &Git::default())?;

    if let Outcome::Created(ref created) = outcome {
        created.print_summary(&config);
    }

    Ok(outcome)
}

fn main() -> ExitCode {
    let args = Args::parse();

    match app(args) {
        Ok(Outcome::Created(_)) => ExitCode::SUCCESS,
        Ok(Outcome::Cancelled) => {
            warn!("Operation cancelled");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
