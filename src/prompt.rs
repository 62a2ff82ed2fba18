use dialoguer::{theme::ColorfulTheme, Select};

use crate::error::IlogsError;

/// Single-choice selection seam. Kept as a trait so the resolution logic in
/// `k8s::pods` can be exercised without a terminal attached.
pub trait Prompt {
    fn select(&self, message: &str, labels: &[String]) -> Result<String, IlogsError>;
}

/// Interactive prompt on the controlling terminal.
pub struct TermPrompt;

impl Prompt for TermPrompt {
    fn select(&self, message: &str, labels: &[String]) -> Result<String, IlogsError> {
        let chosen = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(labels)
            .default(0)
            .interact()
            .map_err(IlogsError::Prompt)?;
        Ok(labels[chosen].clone())
    }
}
