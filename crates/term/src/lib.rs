//! Terminal front-end: framebuffer, game view, renderer and bell.
//!
//! This is a small, game-oriented rendering layer. It avoids widget/layout
//! libraries and instead renders into a simple framebuffer that is diffed and
//! flushed to the terminal.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure mapping from game state to a framebuffer
//! - [`renderer`]: crossterm output with per-run diffing
//! - [`bell`]: terminal bell [`EventSink`](blockfall_engine::EventSink)

pub mod bell;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use bell::TerminalBell;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Hud, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
