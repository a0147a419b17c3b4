//! Single-screen arcade Snake on a fixed 40×30 grid.
//!
//! The game core ([`game::Session`] and the modules it drives) is free of
//! terminal code; [`renderer`], [`input`] and [`terminal_runtime`] adapt it to
//! a crossterm/ratatui terminal, and [`app`] runs the tick loop over them.

pub mod app;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
