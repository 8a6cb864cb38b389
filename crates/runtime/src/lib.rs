//! Runtime wiring for blockfall.
//!
//! - [`config`]: `GameConfig` read from `BLOCKFALL_*` environment variables
//! - [`driver`]: the gravity ticker and input listener as tokio tasks
//! - [`log`]: the optional JSONL event log
//!
//! The render loop is not here; it lives with the binary, which owns the
//! terminal.

pub mod config;
pub mod driver;
pub mod log;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_types as types;

pub use config::GameConfig;
pub use driver::{apply_logged, spawn_gravity, spawn_input};
pub use log::{spawn_writer, write_records, CommandOrigin, EventLog, LogRecord};
