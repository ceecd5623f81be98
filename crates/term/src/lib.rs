//! Terminal scoreboard module.
//!
//! Renders a game snapshot into a small framebuffer of styled cells, then
//! flushes that framebuffer to a terminal backend.
//!
//! Goals:
//! - Keep `core` free of presentation concerns
//! - Keep the scoreboard layout pure so it can be unit-tested
//! - Share one layout between the full-screen game and plain text output

pub mod fb;
pub mod renderer;
pub mod scoreboard;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use fb::{Cell, FrameBuffer, Style};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scoreboard::ScoreboardView;
