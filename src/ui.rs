//! Interactive surfaces: the file picker and yes/no confirmations.
//!
//! Both are modeled as traits so the pipeline stays testable without a TTY;
//! the console implementations are backed by `dialoguer`.

use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect};

use crate::entries::EntrySet;

/// Result of one round of the picker. Cancellation (the picker's own abort
/// signal) is not an error and is kept distinct from I/O failures.
#[derive(Debug)]
pub enum Selection {
    Chosen(EntrySet),
    Cancelled,
}

/// Presents candidate entries by display name and returns the chosen subset.
pub trait SelectionProvider {
    fn pick(&self, candidates: &EntrySet) -> Result<Selection>;
}

/// One yes/no question. Implementations must default to "no".
pub trait Asker {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Terminal picker backed by `dialoguer::MultiSelect`. Esc cancels.
#[derive(Debug, Default)]
pub struct ConsolePicker;

impl SelectionProvider for ConsolePicker {
    fn pick(&self, candidates: &EntrySet) -> Result<Selection> {
        let names = candidates.names();
        let picked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("pick files to fetch (space toggles, enter confirms)")
            .items(&names)
            .interact_opt()
            .context("file picker failed")?;
        match picked {
            None => Ok(Selection::Cancelled),
            Some(indices) => {
                let mut chosen = EntrySet::new();
                for i in indices {
                    if let Some(entry) = candidates.get(i) {
                        chosen.push(entry.clone());
                    }
                }
                Ok(Selection::Chosen(chosen))
            }
        }
    }
}

/// Terminal confirmation with default-reject styling: `y` accepts, `n` or
/// Enter rejects. Other keys are ignored by the prompt rather than counting
/// as an immediate reject, so nothing is ever accepted by accident.
#[derive(Debug, Default)]
pub struct ConsoleAsker;

impl Asker for ConsoleAsker {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .context("confirmation prompt failed")
    }
}
