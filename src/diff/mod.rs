//! Directory comparison

pub mod compare;

pub use compare::{compare_dirs, has_difference, DirDiff};
