mod token;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use derive_builder::Builder;
use directories::UserDirs;
use logos::Span;
use token::{get_line, line_col, Logos, Token};

use crate::name::DEFAULT_PROJECT_NAME;

pub const CONFIG_FILE: &str = "zt.conf";

/// Where the user configuration lives
#[derive(Builder, Debug)]
#[builder(setter(into))]
pub struct ZtDirs {
    user_home: PathBuf,
    config_dir: PathBuf,
    /// Explicit config file, set from `ZT_CONFIG`
    #[builder(default)]
    config_file: Option<PathBuf>,
}

impl ZtDirs {
    /// Create a new [`ZtDirs`] builder
    #[must_use]
    pub fn builder() -> ZtDirsBuilder {
        ZtDirsBuilder::create_empty()
    }

    /// Attempt to create a new [`ZtDirs`] instance with sane defaults for
    /// path locations
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the user's home directory can not be found.
    pub fn default_paths() -> anyhow::Result<Self> {
        let home = Self::get_user_home()?;
        Ok(Self {
            config_dir: Self::get_config_dir(&home),
            config_file: std::env::var_os("ZT_CONFIG").map(PathBuf::from),
            user_home: home,
        })
    }

    /// Returns the path for the user home `~/`
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if a path for the users home can not
    /// be found
    pub fn get_user_home() -> anyhow::Result<PathBuf> {
        Ok(UserDirs::new()
            .context("Failed to get user's home directory")?
            .home_dir()
            .to_owned())
    }

    /// Returns the directory holding the configuration, in order:
    /// - `$XDG_CONFIG_HOME/zt`
    /// - `~/.config/zt`, if `~/.config` exists
    /// - `~/.zt`
    #[must_use]
    pub fn get_config_dir(home: &Path) -> PathBuf {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or(home.join(".config"));

        if config_home.is_dir() {
            config_home.join("zt")
        } else {
            home.join(".zt")
        }
    }

    #[must_use]
    pub fn user_home(&self) -> &Path {
        self.user_home.as_path()
    }

    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.config_file
            .clone()
            .unwrap_or_else(|| self.config_dir.join(CONFIG_FILE))
    }
}

/// User preferences read from `zt.conf`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// First command suggested after scaffolding
    pub install_command: String,
    /// Command suggested to start the project
    pub dev_command: String,
    /// Suggestion shown when asking for a project name
    pub default_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            install_command: "npm install".to_string(),
            dev_command: "npm run dev".to_string(),
            default_name: DEFAULT_PROJECT_NAME.to_string(),
        }
    }
}

fn error_at(inp: &str, path: &Path, span: &Span, msg: &str) -> String {
    let (line, col) = line_col(inp, span.start);
    format!(
        "{msg}\n    {path}:{line}:{col} {contents}",
        path = path.display(),
        contents = get_line(inp, line).trim()
    )
}

impl Config {
    /// Reads the configuration file of `dirs`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the file exists but can not be read or parsed.
    pub fn load(dirs: &ZtDirs) -> anyhow::Result<Self> {
        let path = dirs.config_file();

        if !path.is_file() {
            crate::trace!("No configuration at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        crate::trace!("Reading configuration from {}", path.display());
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_str(&contents, &path)
    }

    /// Parses `key = "value"` statements separated by new lines or `;`.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] pointing at the offending line on invalid syntax.
    pub fn from_str(s: &str, path: &Path) -> anyhow::Result<Self> {
        let mut config = Config::default();
        let mut lexer = Token::lexer(s);
        let mut statement: Vec<(Token<'_>, Span)> = Vec::with_capacity(3);

        loop {
            let token = lexer.next();
            let span = lexer.span();

            match token {
                Some(Err(())) => bail!(error_at(s, path, &span, "Unexpected character")),
                Some(Ok(Token::Comment)) => continue,
                Some(Ok(t)) if !t.is_separator() => statement.push((t, span)),
                _ => {
                    match statement.as_slice() {
                        [] => {}
                        [(Token::Ident(key), _), (Token::Eq, _), (Token::String(value), _)] => {
                            config.set(key, value, path);
                        }
                        [(_, span), ..] => {
                            bail!(error_at(s, path, span, "Expected `key = \"value\"`"))
                        }
                    }
                    statement.clear();

                    if token.is_none() {
                        break;
                    }
                }
            }
        }

        Ok(config)
    }

    fn set(&mut self, key: &str, value: &str, path: &Path) {
        let slot = match key {
            "install_command" => &mut self.install_command,
            "dev_command" => &mut self.dev_command,
            "default_name" => &mut self.default_name,
            _ => {
                crate::warn!(
                    "Ignoring unknown configuration key '{}' in {}",
                    key,
                    path.display()
                );
                return;
            }
        };

        if value.trim().is_empty() {
            crate::warn!("Ignoring empty value for '{}' in {}", key, path.display());
        } else {
            *slot = value.to_string();
        }
    }
}
