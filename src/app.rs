//! Application orchestrator.
//! Initializes logging, validates the source/destination pair, then walks the
//! pipeline: scan, select, resolve conflicts, transfer, dispose, report.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use tracing::debug;

use crate::cli::Args;
use crate::errors::PluckError;
use crate::logging;
use crate::output as out;
use crate::pipeline::{
    ConflictResolver, DirectoryHandle, DisposalManager, InventoryReporter, TransferEngine,
};
use crate::ui::{Asker, ConsoleAsker, ConsolePicker, Selection, SelectionProvider};

/// Terminal state of one run.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The pipeline ran to the final report.
    Done,
    /// The user aborted the picker. Not an error.
    Cancelled,
    /// Nothing eligible, nothing selected, or every conflict skipped.
    NothingToDo,
    /// A copy or delete failed; the error was already reported.
    Failed,
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Done | Outcome::Cancelled | Outcome::NothingToDo => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
        }
    }
}

/// Run the CLI application.
pub fn run(args: Args) -> Result<Outcome> {
    logging::init(&args.effective_log_level())?;
    let (source, dest) = resolve_and_validate(&args)?;
    debug!(source = %source.display(), dest = %dest.display(), "starting pluck");

    let picker = ConsolePicker;
    let asker = ConsoleAsker;
    let outcome = run_pipeline(&source, &dest, &picker, &asker)?;
    if outcome == Outcome::Failed {
        out::pause();
    }
    Ok(outcome)
}

/// Resolve the effective source directory.
/// The literal `..` means "the parent of the destination"; an omitted source
/// falls back to the user's desktop.
pub fn resolve_source(src: Option<&Path>, dest: &Path) -> Result<PathBuf> {
    match src {
        Some(p) if p == Path::new("..") => dest
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| PluckError::NoParent(dest.to_path_buf()).into()),
        Some(p) => Ok(p.to_path_buf()),
        None => dirs::desktop_dir().ok_or_else(|| PluckError::NoDesktop.into()),
    }
}

/// Validate the pair before any work: both must be existing directories and
/// must not be the same directory (also after canonicalization, to catch
/// symlinks and relative spellings).
pub fn resolve_and_validate(args: &Args) -> Result<(PathBuf, PathBuf)> {
    let dest = args.dest.clone();
    let source = resolve_source(args.src.as_deref(), &dest)?;

    if source == dest {
        return Err(PluckError::SamePath(source).into());
    }
    for p in [&source, &dest] {
        if !p.is_dir() {
            return Err(PluckError::NotADirectory(p.clone()).into());
        }
    }
    let source_real = fs::canonicalize(&source).unwrap_or_else(|_| source.clone());
    let dest_real = fs::canonicalize(&dest).unwrap_or_else(|_| dest.clone());
    if source_real == dest_real {
        return Err(PluckError::SamePath(source).into());
    }
    Ok((source, dest))
}

/// Walk the pipeline once. Interaction comes in through the two traits so
/// tests can drive a full run without a TTY.
///
/// A copy failure is reported here and the partially transferred batch still
/// gets its disposal offer and the final inventory; the run then ends as
/// `Failed`. A disposal failure is handled the same way.
pub fn run_pipeline(
    source: &Path,
    dest: &Path,
    picker: &dyn SelectionProvider,
    asker: &dyn Asker,
) -> Result<Outcome> {
    let src_dir = DirectoryHandle::with_exception(source, dest);
    let dest_dir = DirectoryHandle::new(dest);

    let candidates = src_dir.entries();
    if candidates.is_empty() {
        out::print_info(&format!("no eligible files in '{}'", source.display()));
        return Ok(Outcome::NothingToDo);
    }

    let batch = match picker.pick(&candidates)? {
        Selection::Cancelled => {
            debug!("selection cancelled");
            return Ok(Outcome::Cancelled);
        }
        Selection::Chosen(batch) => batch,
    };
    if batch.is_empty() {
        return Ok(Outcome::NothingToDo);
    }

    let resolved = ConflictResolver::new(asker).resolve(batch, &dest_dir)?;
    if resolved.is_empty() {
        out::print_info("nothing left to copy");
        return Ok(Outcome::NothingToDo);
    }

    let transfer = TransferEngine::copy_batch(&resolved, &dest_dir);
    let mut failed = false;
    if let Some(err) = &transfer.failure {
        out::print_error(&err.to_string());
        failed = true;
    }

    if !transfer.transferred.is_empty() {
        if let Err(err) = DisposalManager::new(asker).dispose(&transfer.transferred, resolved.len())
        {
            out::print_error(&format!("{err:#}"));
            failed = true;
        }
        InventoryReporter::report(&src_dir);
    }

    Ok(if failed { Outcome::Failed } else { Outcome::Done })
}
