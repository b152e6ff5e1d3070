//! # Starfall
//!
//! A falling-asteroid shooter: steer a ship along the bottom of a 600x800
//! field, shoot down ten asteroids raining from the top, and avoid contact.
//! The simulation is pure (input snapshot + delta + RNG in, events out) and
//! the render pass turns a state into draw commands, so the whole game runs
//! and tests headless.
//!
//! The crate also ships `duel`, a two-player movement demo whose purpose is
//! comparing the engine's frame-pacing strategies live with the number keys.

pub mod config;
pub mod duel;
pub mod entities;
pub mod render;
pub mod state;
