//! TUI 2048 (workspace facade crate).
//!
//! The game logic, presentation, and adapter live in dedicated crates under
//! `crates/`; this package re-exports them as `tui_2048::{core,adapter,term,input,types}`
//! and owns the process-level concerns shared by both binaries.

pub mod config;
pub mod logging;

pub use tui_2048_adapter as adapter;
pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
