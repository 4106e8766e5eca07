//! Word diff library
//!
//! Computes word-level diffs between two short texts and renders them for the
//! `word-diff` command-line viewer.

pub mod cli;
pub mod config;
pub mod constant;
pub mod diff;
pub mod input;
pub mod render;

pub use diff::{DiffKind, DiffToken, compute_word_diff};
