//! Grid snake: a tick-driven snake game engine with a terminal front end.
//!
//! The engine (`game`) owns one session and talks to the outside world only
//! through the traits in `sink`, `score` and `food`. The terminal modules
//! (`renderer`, `terminal_runtime`, `terminal_view`, `ui`) are the concrete
//! adapters used by the `grid-snake` binary.

pub mod clock;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod score;
pub mod sink;
pub mod snake;
pub mod terminal_runtime;
pub mod terminal_view;
pub mod ui;
