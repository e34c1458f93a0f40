//! User confirmation prompts for charge-incurring operations

use dialoguer::Confirm;

use crate::error::Result;

/// Ask the operator to confirm before a mutating remote call.
///
/// Returns `Ok(false)` when the operator declines; the caller aborts with no
/// side effect. With `force` set the prompt is skipped entirely.
pub fn confirm_action(prompt: &str, force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    Ok(confirmed)
}
