//! # dirmirror - One-Way Folder Mirroring Daemon
//!
//! Compare, copy, verify, repeat.
//!
//! Keeps a destination directory's top-level contents identical to a source
//! directory by polling at a fixed interval and resynchronizing only when a
//! difference is detected. Every copy is verified with a content digest.

// Module declarations
pub mod config;
pub mod daemon;
pub mod diff;
pub mod hash;
pub mod logger;
pub mod sync;
pub mod types;
pub mod verify;

// Re-export commonly used types
pub use config::Config;
pub use diff::DirDiff;
pub use logger::EventLog;
pub use types::SyncError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
