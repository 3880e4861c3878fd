// Confirmation gate
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    ClientConfig,
    Confirm,
    Error,
};
use tracing::info;

const PROMPT_LABEL: &str = "Delete these buckets and everything in them?";

/// Returns `true` if the `candidates` may be removed.
///
/// In quiet mode approval is implicit and `prompt` is never called.
pub fn approve<P>(
    config: &ClientConfig,
    candidates: &[String],
    prompt: &P,
) -> Result<bool, Error>
where
    P: Confirm + ?Sized,
{
    if config.quiet {
        info!("Quiet mode, skipping confirmation");

        return Ok(true);
    }

    println!("Would you like to delete the following buckets?");
    for bucket in candidates {
        println!("* {}", bucket);
    }

    let approved = prompt.confirm(PROMPT_LABEL)
        .map_err(Error::Prompt)?;

    info!("User confirmation = {}", if approved { "Yes" } else { "No" });

    Ok(approved)
}
