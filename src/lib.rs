//! Classic grid Snake with a high-score celebration.
//!
//! The library holds the full game core: entities ([`snake::Snake`],
//! [`apple::Apple`]), the [`game::Game`] controller with its per-tick update
//! protocol and record state machine, and the terminal presentation. The
//! binary wires it to a crossterm/ratatui control loop.

pub mod apple;
pub mod audio;
pub mod config;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod ui;
