use clap::Parser;

/// Create a new project from a GitHub template repository
#[derive(Parser, Debug)]
#[clap(name = "zt", version)]
pub struct Args {
    /// GitHub repository URL or owner/repo (e.g. travzhang/react-vite-template)
    pub template: Option<String>,

    /// Project name, also the name of the created directory
    pub project_name: Option<String>,

    /// Overwrite the target directory if it already exists
    #[clap(long, short)]
    pub force: bool,
}
