//! Poll driver
//!
//! Two states: Initializing runs one unconditional sync, then the loop is in
//! Polling forever. Each tick sleeps the configured interval, asks the
//! comparator whether anything changed, and resynchronizes only if so.
//!
//! There is no terminal state and no cancellation handle; shutdown is by
//! process termination signal. A failed cycle is reported to the operator
//! and retried naturally on the next tick, since the comparator recomputes
//! the same pending set from file state alone.

use crate::config::Config;
use crate::diff::has_difference;
use crate::logger::EventLog;
use crate::sync::{sync_dirs, SyncStats};
use crate::types::SyncError;
use std::thread;
use std::time::Duration;

/// Run the daemon: one initial sync, then poll forever.
pub fn run(config: &Config, log: &EventLog) -> ! {
    tracing::debug!(
        source = %config.source.display(),
        destination = %config.destination.display(),
        interval_secs = config.sync_interval,
        "starting initial synchronization"
    );

    if let Err(err) = sync_dirs(&config.source, &config.destination, log) {
        report_cycle_failure(log, &err);
    }

    let interval = Duration::from_secs(config.sync_interval);
    loop {
        // Uninterruptible by design; purely time-based polling.
        thread::sleep(interval);

        match run_cycle(config, log) {
            Ok(Some(stats)) => {
                tracing::debug!(
                    copied = stats.copied,
                    updated = stats.updated,
                    removed = stats.removed,
                    skipped = stats.skipped,
                    "sync cycle complete"
                );
            }
            Ok(None) => {
                tracing::debug!("no difference detected, skipping sync");
            }
            Err(err) => report_cycle_failure(log, &err),
        }
    }
}

/// One poll tick: check for a difference and sync only if one exists.
///
/// Returns `Ok(None)` when source and destination already match and no file
/// operation was attempted.
pub fn run_cycle(config: &Config, log: &EventLog) -> Result<Option<SyncStats>, SyncError> {
    if !has_difference(&config.source, &config.destination)? {
        return Ok(None);
    }
    sync_dirs(&config.source, &config.destination, log).map(Some)
}

fn report_cycle_failure(log: &EventLog, err: &SyncError) {
    log.warn(&format!("Sync cycle failed, will retry on next tick: {err}"));
    tracing::error!(error = %err, "sync cycle failed");
}
