//! Configuration management
//!
//! CLI argument parsing and startup validation. All path checks happen here
//! so the daemon fails fast, before the first sync cycle runs.

use crate::types::SyncError;
use clap::Parser;
use std::path::PathBuf;

/// Default polling interval in seconds
pub const DEFAULT_SYNC_INTERVAL: u64 = 5;

/// Folder Synchronization Daemon
///
/// Mirrors the top-level contents of a source folder into a destination
/// folder, then polls for changes and resynchronizes.
#[derive(Debug, Parser)]
#[command(name = "dirmirror", version, about)]
pub struct Cli {
    /// Path to the source folder
    #[arg(short = 's', long = "source-folder")]
    pub source_folder: PathBuf,

    /// Path to the destination folder
    #[arg(short = 'd', long = "destination-folder")]
    pub destination_folder: PathBuf,

    /// Path to the log file
    #[arg(short = 'l', long = "log-file")]
    pub log_file: PathBuf,

    /// Synchronization interval in seconds
    #[arg(short = 'i', long = "sync-interval", default_value_t = DEFAULT_SYNC_INTERVAL)]
    pub sync_interval: u64,

    /// Enable debug-level diagnostic traces on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Source directory (must exist)
    pub source: PathBuf,

    /// Destination directory (must exist)
    pub destination: PathBuf,

    /// Event log file (created in append mode if absent)
    pub log_file: PathBuf,

    /// Seconds to sleep between difference checks
    pub sync_interval: u64,

    /// Debug traces enabled?
    pub verbose: bool,
}

impl TryFrom<Cli> for Config {
    type Error = SyncError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let config = Config {
            source: cli.source_folder,
            destination: cli.destination_folder,
            log_file: cli.log_file,
            sync_interval: cli.sync_interval,
            verbose: cli.verbose,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Validate configuration
    ///
    /// Both folders must already exist as directories, the log file's parent
    /// directory must exist, and the interval must be non-zero.
    pub fn validate(&self) -> Result<(), SyncError> {
        validate_folder(&self.source)?;
        validate_folder(&self.destination)?;

        if self.source == self.destination {
            return Err(SyncError::Config(
                "Source and destination folders cannot be the same".to_string(),
            ));
        }

        // The log file itself is created on first open; only its parent
        // directory must exist up front.
        if let Some(parent) = self.log_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(SyncError::Config(format!(
                    "Invalid log file path: {}",
                    self.log_file.display()
                )));
            }
        }

        if self.sync_interval == 0 {
            return Err(SyncError::Config(
                "Sync interval must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_folder(path: &std::path::Path) -> Result<(), SyncError> {
    if !path.exists() {
        return Err(SyncError::Config(format!(
            "Invalid folder path: {}",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(SyncError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
