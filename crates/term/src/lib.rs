//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It renders a
//! [`core::GameSnapshot`](tui_2048_core::GameSnapshot) into a framebuffer that is
//! then flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure so layouts can be asserted in tests
//! - Redraw only what changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
