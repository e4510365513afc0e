//! Grid-based Snake split into a pure, tick-driven game engine and thin
//! terminal adapters.
//!
//! [`engine::GameEngine`] owns all game state and is advanced by
//! caller-supplied timestamps, so it can be driven by a real clock, a
//! test script, or a replay. The remaining modules adapt it to a
//! terminal: [`input`] maps key events, [`renderer`] paints frames with
//! ratatui, and [`terminal_runtime`] owns the raw-mode session.

pub mod config;
pub mod engine;
pub mod food;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
