//! User input and interaction handling for vuegen.

use crate::error::{Error, Result};
use dialoguer::Select;

/// Stylesheet format choices offered for component bundles.
pub const STYLE_FORMATS: [&str; 3] = ["CSS", "SCSS", "Sass"];

/// Stylesheet format used when no prompt is shown.
pub const DEFAULT_STYLE_FORMAT: &str = "css";

/// Trait for interactive prompts.
pub trait Prompter {
    /// Asks the user to choose a stylesheet format and returns the
    /// lowercased choice.
    fn select_style_format(&self) -> Result<String>;
}

/// Prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select_style_format(&self) -> Result<String> {
        let selection = Select::new()
            .with_prompt("Choose a stylesheet format")
            .default(0)
            .items(&STYLE_FORMATS)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))?;

        Ok(STYLE_FORMATS[selection].to_lowercase())
    }
}
