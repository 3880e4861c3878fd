// Confirm trait and the interactive implementation
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use tracing::debug;

/// `Confirm` asks the user a yes/no question.
pub trait Confirm {
    /// Returns `true` if the user answered yes to `label`.
    fn confirm(&self, label: &str) -> Result<bool>;
}

/// Terminal prompt backed by `dialoguer`. Defaults to "no".
#[derive(Debug, Default)]
pub struct DialoguerConfirm;

impl Confirm for DialoguerConfirm {
    fn confirm(&self, label: &str) -> Result<bool> {
        debug!("confirm: Prompting '{}'", label);

        let answer = dialoguer::Confirm::new()
            .with_prompt(label)
            .default(false)
            .interact()?;

        debug!("confirm: User answered {}", answer);

        Ok(answer)
    }
}
