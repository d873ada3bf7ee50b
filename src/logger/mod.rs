//! Event log
//!
//! Line-oriented, append-only operator log. Every significant sync event
//! (copied/updated/removed/verification-failed) produces one
//! `timestamp - message` line on both the log file and stdout.
//!
//! The log is an explicitly constructed instance handed to the synchronizer
//! and verifier rather than a process-global handler, so tests can point it
//! at a scratch file and read the lines back.

use crate::types::SyncError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// Dual-output event log: append-only file plus stdout.
#[derive(Debug)]
pub struct EventLog {
    file: Mutex<File>,
}

impl EventLog {
    /// Open the log file in append mode, creating it if absent.
    ///
    /// The parent directory must already exist; startup validation in
    /// [`crate::Config`] guarantees that for the daemon path.
    pub fn open(path: &Path) -> Result<Self, SyncError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Record an informational event (copy/update/remove).
    pub fn info(&self, message: &str) {
        self.write_line(message);
    }

    /// Record a warning event (verification failure, skipped entry).
    ///
    /// Warnings share the informational line format; the message text itself
    /// carries the severity, matching the plain `timestamp - message` layout.
    pub fn warn(&self, message: &str) {
        self.write_line(message);
    }

    fn write_line(&self, message: &str) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let line = format!("{timestamp} - {message}");

        println!("{line}");

        // A log write failure must not take down the daemon; surface it on
        // stderr and keep going.
        if let Ok(mut file) = self.file.lock() {
            if let Err(err) = writeln!(file, "{line}") {
                eprintln!("dirmirror: failed to write log line: {err}");
            }
        }
    }
}
