//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Interactive "pull files out of this folder" helper, meant to be invoked
/// from a file-manager context.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Pick files from a directory and pull them somewhere else"
)]
pub struct Args {
    /// Source directory to pick files from. Defaults to the user's desktop.
    /// The literal `..` resolves to the parent of the destination.
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub src: Option<PathBuf>,

    /// Destination directory the picked files are copied into.
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub dest: PathBuf,

    /// Enable debug logging (shorthand for --log-level debug).
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Set log level: quiet, normal, info, debug.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > Normal.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or_default()
    }
}

pub fn parse() -> Args {
    Args::parse()
}
