//! Terminal presentation for blockfall.
//!
//! Snapshots are laid out into a bordered board (`layout`), drawn into a
//! framebuffer (`game_view`), and flushed to the terminal with per-run diffs
//! (`renderer`). Everything except `renderer` is pure and unit-tested.

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod render_throttle;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use layout::{layout, marker_at, render_grid_text, render_text, Marker, TextMarkers};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_frame_into, TerminalRenderer};
