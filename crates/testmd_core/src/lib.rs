//! `testmd_core` turns fenced code snippets in markdown documents into
//! compilable Go source files. Blocks tagged `go` (or `golang`) are
//! classified by their info string into named tests, plain functions,
//! anonymous examples, or top-level declarations, aggregated into
//! per-package buckets, and rendered as deterministically ordered source
//! units ready for `go test` or `go run`.
//!
//! The crate also ships the golden-fixture helpers used to compare
//! generated output against stored files.

pub use aggregate::*;
pub use directive::*;
pub use emit::*;
pub use engine::*;
pub use error::*;
pub use golden::*;
pub use imports::*;
pub use scanner::*;

mod aggregate;
mod directive;
mod emit;
mod engine;
mod error;
mod golden;
mod imports;
mod scanner;

#[cfg(test)]
mod __fixtures;
