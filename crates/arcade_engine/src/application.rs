//! Application trait and lifecycle
//!
//! Games implement [`Application`]; the engine owns the loop and calls back
//! into the game at fixed points each frame. Simulation goes in `update`,
//! draw-command submission in `render`, and the two must stay separate so the
//! game state can be stepped and inspected without any platform attached.

use crate::assets::AssetError;
use crate::config::ConfigError;
use crate::engine::Engine;
use crate::input::KeyCode;
use crate::render::{RenderError, RenderQueue};
use thiserror::Error;

/// Events delivered by the platform at the top of each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The platform asked the application to shut down
    CloseRequested,

    /// A key changed state
    KeyInput {
        /// The key that changed
        key: KeyCode,
        /// True on press, false on release
        pressed: bool,
    },
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Asset loading failed
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Configuration failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Presenting a frame failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Game logic error
    #[error("Game logic error: {0}")]
    GameLogic(String),
}

/// The game side of the engine loop
///
/// `initialize` runs once before the first frame, `update` and `render` run
/// once per frame in that order, and `cleanup` runs after the loop exits for
/// any reason.
pub trait Application {
    /// One-time setup before the first frame
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Advance the game by `delta_time` seconds
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Submit this frame's draw commands
    ///
    /// The queue arrives empty; the engine clears it before each call.
    fn render(&mut self, queue: &mut RenderQueue) -> Result<(), AppError>;

    /// Inspect a platform event before the frame's update
    ///
    /// Key events have already been applied to the engine's input state when
    /// this runs; most games rely on input snapshots and leave this as the
    /// default no-op.
    fn handle_event(&mut self, _engine: &mut Engine, _event: &AppEvent) {}

    /// Teardown after the loop exits
    fn cleanup(&mut self) {}
}
