//! # Interactive Selection
//!
//! The prompt is an injected capability: "choose one of N options, with an
//! optional default". The resolution pipeline depends only on the
//! [`Selector`] trait, so batch mode simply passes no selector and tests
//! inject a scripted stub instead of a terminal.

use dialoguer::theme::ColorfulTheme;
use dialoguer::FuzzySelect;

use crate::error::{Error, Result};

/// A capability that picks one of several options.
pub trait Selector {
    /// Present `options` and return the chosen index, or `None` when the
    /// user dismissed the prompt without choosing.
    fn select(&self, prompt: &str, options: &[String], default: Option<usize>)
        -> Result<Option<usize>>;
}

/// Terminal selector with fuzzy filtering and arrow-key cycling over the
/// candidate set.
#[derive(Debug, Default)]
pub struct TermSelector;

impl Selector for TermSelector {
    fn select(
        &self,
        prompt: &str,
        options: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>> {
        let choice = FuzzySelect::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(options)
            .default(default.unwrap_or(0))
            .interact_opt()
            .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?;
        Ok(choice)
    }
}

/// Scripted selector for tests: returns a fixed choice.
#[cfg(test)]
pub struct ScriptedSelector {
    pub choice: Option<usize>,
}

#[cfg(test)]
impl Selector for ScriptedSelector {
    fn select(
        &self,
        _prompt: &str,
        options: &[String],
        _default: Option<usize>,
    ) -> Result<Option<usize>> {
        assert!(self.choice.is_none_or(|idx| idx < options.len()));
        Ok(self.choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_selector_returns_fixed_choice() {
        let selector = ScriptedSelector { choice: Some(1) };
        let options = vec!["a".to_string(), "b".to_string()];
        assert_eq!(selector.select("pick", &options, None).unwrap(), Some(1));
    }

    #[test]
    fn test_scripted_selector_can_dismiss() {
        let selector = ScriptedSelector { choice: None };
        let options = vec!["a".to_string()];
        assert_eq!(selector.select("pick", &options, Some(0)).unwrap(), None);
    }
}
