use crate::{error::Result, prompt::Prompt};

pub const DEFAULT_PROJECT_NAME: &str = "my-project";

/// Returns `explicit` when it is not empty, otherwise asks for a name until a
/// non blank one is given.
///
/// # Errors
///
/// Returns an [`Err`] if the prompt fails or is interrupted.
pub fn obtain_name(
    explicit: Option<&str>,
    suggestion: &str,
    prompt: &mut impl Prompt,
) -> Result<String> {
    if let Some(name) = explicit.filter(|n| !n.is_empty()) {
        return Ok(name.to_string());
    }

    loop {
        let answer = prompt.text("Project name:", suggestion)?;
        let answer = answer.trim();

        if answer.is_empty() {
            crate::warn!("Project name can not be empty");
            continue;
        }

        return Ok(answer.to_string());
    }
}
