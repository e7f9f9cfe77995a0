//! Core library for `pluck`.
//!
//! Implements the pipeline behind the interactive CLI: scan a source
//! directory, let the user pick files, resolve name conflicts against the
//! destination, copy the batch, offer to delete the originals, and report
//! what is left in the source. The interactive surfaces (picker and yes/no
//! prompts) sit behind traits so every stage is testable without a TTY.

pub mod app;
pub mod cli;
pub mod entries;
pub mod errors;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod ui;

pub use entries::{Entry, EntrySet};
pub use errors::PluckError;
pub use pipeline::{
    ConflictResolver, DirectoryHandle, DisposalManager, DisposalOutcome, InventoryReporter,
    TransferEngine, TransferOutcome,
};
