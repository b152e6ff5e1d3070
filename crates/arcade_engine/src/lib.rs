//! # Arcade Engine
//!
//! A small single-threaded 2D arcade framework built for two teaching
//! exercises: a movement/collision demo and a fixed-pool shooter.
//!
//! ## Features
//!
//! - **Frame Pacing**: five interchangeable end-of-frame delay strategies
//!   with observable work/frame timings
//! - **Input Snapshots**: per-frame boolean key state plus key-down edges
//! - **Render Queue**: draw commands submitted once per frame through a
//!   platform seam (window creation and actual rasterization live behind it)
//! - **Texture Atlas**: one decoded image, entities reference tiles by grid
//!   coordinates
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arcade_engine::prelude::*;
//!
//! struct MyGame;
//!
//! impl Application for MyGame {
//!     fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn render(&mut self, queue: &mut RenderQueue) -> Result<(), AppError> {
//!         queue.push(DrawCommand::Clear(Color::BLACK));
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let platform = HeadlessPlatform::with_frame_limit(60);
//!     Engine::run(EngineConfig::default(), Box::new(platform), &mut MyGame)?;
//!     Ok(())
//! }
//! ```

pub mod assets;
pub mod config;
pub mod foundation;
pub mod input;
pub mod pacing;
pub mod render;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Application};
pub use engine::{Engine, EngineConfig, EngineError, PacingConfig, WindowConfig};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        application::{AppError, AppEvent, Application},
        assets::{AssetError, TextureAtlas},
        engine::{Engine, EngineConfig, EngineError, PacingConfig, WindowConfig},
        foundation::{
            math::{distance_squared, Point2, Rect, Vec2},
            time::FrameTiming,
        },
        input::{InputManager, InputSnapshot, KeyBindings, KeyCode},
        pacing::{FramePacer, PacingStrategy},
        render::{Color, DrawCommand, HeadlessPlatform, Platform, RenderQueue, Tint},
    };
}
