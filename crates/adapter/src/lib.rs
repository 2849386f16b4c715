//! Adapter module - headless control over stdin/stdout with a JSON protocol
//!
//! External agents (scripts, bots, test harnesses) drive a game session by
//! writing one request per line and reading one response per line.
//!
//! # Message Types
//!
//! ## Client → Game
//!
//! - **move**: slide tiles in a direction (`left`, `right`, `up`, `down`)
//! - **restart**: start a fresh game
//! - **state**: report the current state without changing it
//!
//! ## Game → Client
//!
//! - **state**: full board, score, status, and the effect of the last request
//! - **error**: stable `code` plus a human-readable message
//!
//! # Example Protocol Flow
//!
//! ```text
//! Client -> Game: {"type":"move","direction":"left"}
//! Game -> Client: {"type":"state","seq":1,"moved":true,"score_delta":4,"score":4,"status":"active",...}
//! Client -> Game: {"type":"move","direction":"diagonal"}
//! Game -> Client: {"type":"error","seq":2,"code":"invalid_direction","message":"..."}
//! ```
//!
//! Blank lines are ignored and EOF ends the session.

pub mod protocol;
pub mod server;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use server::{run, Server};
