//! Grid Snake.
//!
//! The simulation core (`grid`, `input::Direction`, `food`, `snake`, `game`)
//! is deterministic for a given RNG and has no terminal dependencies. The
//! remaining modules form the terminal host that drives it.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
