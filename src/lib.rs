//! changed-modules - CI change detection
//!
//! A library for computing which modules of a multi-module repository
//! changed within a timeframe:
//! - Timeframe resolution from an optional CLI argument
//! - Changed-file history via `git log --since`
//! - Path-to-module classification against a known module list
//! - JSON build-matrix output for pipeline consumption

pub mod classify;
pub mod history;
pub mod matrix;
pub mod timeframe;

pub use classify::{changed_modules, KNOWN_MODULES};
pub use history::{GitLog, HistoryProvider};
pub use matrix::{to_json, ModuleEntry};
pub use timeframe::{resolve, DEFAULT_TIMEFRAME};
