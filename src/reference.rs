//! Resolution of user supplied template references.
//!
//! A reference is one of:
//! - nothing, which selects [`TemplateRef::default`]
//! - a GitHub URL such as `https://github.com/owner/name.git`
//! - a shorthand such as `owner/name`

use std::{fmt::Display, sync::LazyLock};

use regex::Regex;

use crate::error::{Error, Result};

pub const DEFAULT_OWNER: &str = "travzhang";
pub const DEFAULT_NAME: &str = "react-vite-template";

static GITHUB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com[/:]([^/]+)/([^/]+?)(?:\.git)?/?$").expect("Valid regex literal")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateRef {
    pub owner: String,
    pub name: String,
}

/// The shape of a raw reference before any field is extracted
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Shape<'a> {
    Empty,
    Url(&'a str),
    Shorthand(&'a str),
    Invalid(&'a str),
}

impl<'a> Shape<'a> {
    fn of(input: Option<&'a str>) -> Self {
        match input.map(str::trim) {
            None | Some("") => Shape::Empty,
            Some(s) if s.starts_with("http://") || s.starts_with("https://") => Shape::Url(s),
            Some(s) if s.contains('/') => Shape::Shorthand(s),
            Some(s) => Shape::Invalid(s),
        }
    }
}

impl Default for TemplateRef {
    fn default() -> Self {
        TemplateRef {
            owner: DEFAULT_OWNER.to_string(),
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl TemplateRef {
    /// Resolves `input` into an owner and repository name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidReferenceFormat`] if `input` matches none of the
    /// accepted shapes or either field would be empty.
    pub fn resolve(input: Option<&str>) -> Result<Self> {
        let shape = Shape::of(input);
        crate::trace!("Template reference {input:?} classified as {shape:?}");

        let (owner, name) = match shape {
            Shape::Empty => return Ok(TemplateRef::default()),
            Shape::Url(url) => GITHUB_URL
                .captures(url)
                .map(|c| (c[1].to_string(), c[2].to_string()))
                .ok_or_else(|| Error::InvalidReferenceFormat(url.to_string()))?,
            Shape::Shorthand(s) => s
                .split_once('/')
                .map(|(o, n)| (o.to_string(), n.to_string()))
                .ok_or_else(|| Error::InvalidReferenceFormat(s.to_string()))?,
            Shape::Invalid(s) => return Err(Error::InvalidReferenceFormat(s.to_string())),
        };

        if owner.is_empty() || name.is_empty() {
            return Err(Error::InvalidReferenceFormat(
                input.unwrap_or_default().to_string(),
            ));
        }

        Ok(TemplateRef { owner, name })
    }

    /// HTTPS URL `git clone` is pointed at
    #[must_use]
    pub fn clone_url(&self) -> String {
        format!("https://github.com/{}/{}.git", self.owner, self.name)
    }
}

impl Display for TemplateRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
