//! Wrap-around terminal Snake.
//!
//! The simulation core (`snake`, `food`, `game`) is deterministic and
//! free of terminal concerns: it consumes abstract inputs and emits a
//! [`game::RenderState`] snapshot per tick. The terminal side (`input`,
//! `renderer`, `ui`, `terminal_runtime`) adapts crossterm events and
//! ratatui frames to that boundary.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
