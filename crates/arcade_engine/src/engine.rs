//! Engine loop and configuration
//!
//! One frame is: begin input frame, poll and dispatch platform events,
//! strategy hotkeys, `update`, `render` into a fresh queue, mark work end,
//! pace out the budget, close the timing frame, then present (with the
//! optional timing overlay appended). The pacing wait lands between work-end
//! and frame-end so both durations stay visible to the overlay and tests.

use crate::application::{AppError, AppEvent, Application};
use crate::foundation::time::FrameTiming;
use crate::input::{InputManager, KeyCode};
use crate::pacing::{FramePacer, PacingStrategy};
use crate::render::{DrawCommand, Platform, RenderQueue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// The application failed during initialization
    #[error("Application initialization failed: {0}")]
    InitializationFailed(String),

    /// The application failed mid-loop
    #[error("Application error: {0}")]
    ApplicationError(#[from] AppError),
}

/// Window settings
///
/// Forwarded to the platform; the headless platform ignores everything but
/// keeps the logical dimensions available to the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Logical width in pixels
    pub width: u32,

    /// Logical height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Arcade Engine".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Frame pacing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Target frame rate
    pub target_fps: u32,

    /// Initial delay strategy
    pub strategy: PacingStrategy,

    /// Whether number keys 0-4 switch the strategy at runtime
    pub strategy_hotkeys: bool,

    /// Whether to append a work/frame timing line to each frame
    pub show_timing_overlay: bool,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            strategy: PacingStrategy::PreciseSleep,
            strategy_hotkeys: false,
            show_timing_overlay: false,
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Window settings
    pub window: WindowConfig,

    /// Frame pacing settings
    pub pacing: PacingConfig,
}

/// The engine core
///
/// Owns the platform, the input state, the pacer, and the frame clock. Built
/// and driven by [`Engine::run`]; applications receive `&mut Engine` in their
/// callbacks to read input and timing or to request shutdown.
pub struct Engine {
    platform: Box<dyn Platform>,
    config: EngineConfig,
    input: InputManager,
    timing: FrameTiming,
    pacer: FramePacer,
    strategy_hotkeys: [KeyCode; PacingStrategy::COUNT as usize],
    running: bool,
}

impl Engine {
    fn new(config: EngineConfig, platform: Box<dyn Platform>) -> Self {
        let pacer = FramePacer::from_fps(config.pacing.target_fps, config.pacing.strategy);
        Self {
            platform,
            config,
            input: InputManager::new(),
            timing: FrameTiming::new(),
            pacer,
            strategy_hotkeys: [
                KeyCode::Key0,
                KeyCode::Key1,
                KeyCode::Key2,
                KeyCode::Key3,
                KeyCode::Key4,
            ],
            running: false,
        }
    }

    /// Run an application to completion
    ///
    /// Blocks until the application calls [`quit`](Self::quit), the platform
    /// requests close, or a callback returns an error. Cleanup runs in every
    /// case.
    pub fn run(
        config: EngineConfig,
        platform: Box<dyn Platform>,
        app: &mut dyn Application,
    ) -> Result<(), EngineError> {
        log::info!(
            "Starting engine: {} ({}x{}), {} fps, {:?} pacing",
            config.window.title,
            config.window.width,
            config.window.height,
            config.pacing.target_fps,
            config.pacing.strategy
        );

        let mut engine = Self::new(config, platform);

        app.initialize(&mut engine)
            .map_err(|e| EngineError::InitializationFailed(e.to_string()))?;

        let result = engine.main_loop(app);

        app.cleanup();
        log::info!(
            "Engine stopped after {} frames",
            engine.timing.frame_count()
        );
        result
    }

    fn main_loop(&mut self, app: &mut dyn Application) -> Result<(), EngineError> {
        self.running = true;
        let mut queue = RenderQueue::new();
        let mut events = Vec::new();

        while self.running {
            self.input.begin_frame();

            events.clear();
            self.platform.poll_events(&mut events);
            for event in &events {
                match event {
                    AppEvent::CloseRequested => {
                        log::debug!("Close requested by platform");
                        self.running = false;
                    }
                    AppEvent::KeyInput { key, pressed } => {
                        self.input.handle_key_input(*key, *pressed);
                    }
                }
                app.handle_event(self, event);
            }
            if !self.running {
                break;
            }

            if self.config.pacing.strategy_hotkeys {
                self.check_strategy_hotkeys();
            }

            let delta_time = self.timing.delta_seconds();
            app.update(self, delta_time)?;

            queue.clear();
            app.render(&mut queue)?;

            self.timing.mark_work_end();
            self.pacer.pace(self.timing.frame_start());
            self.timing.finish_frame();

            if self.config.pacing.show_timing_overlay {
                queue.push(DrawCommand::DebugText {
                    x: 10.0,
                    y: 10.0,
                    text: format!(
                        "[{:?}] work {:.2} ms / frame {:.2} ms",
                        self.pacer.strategy(),
                        self.timing.work_millis(),
                        self.timing.frame_millis()
                    ),
                });
            }

            self.platform
                .present(&queue)
                .map_err(|e| EngineError::ApplicationError(AppError::Render(e)))?;
        }

        Ok(())
    }

    fn check_strategy_hotkeys(&mut self) {
        for (index, key) in self.strategy_hotkeys.iter().enumerate() {
            if self.input.just_pressed(*key) {
                if let Some(strategy) = PacingStrategy::from_index(index as u8) {
                    if strategy != self.pacer.strategy() {
                        log::info!("Pacing strategy switched to {:?}", strategy);
                        self.pacer.set_strategy(strategy);
                    }
                }
            }
        }
    }

    /// Current input state
    pub fn input(&self) -> &InputManager {
        &self.input
    }

    /// Current frame timing
    pub fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    /// The frame pacer
    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    /// Mutable access to the frame pacer
    pub fn pacer_mut(&mut self) -> &mut FramePacer {
        &mut self.pacer
    }

    /// The configuration the engine was started with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Request a clean shutdown at the end of the current frame
    pub fn quit(&mut self) {
        log::debug!("Quit requested by application");
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Color, HeadlessPlatform};
    use std::time::Duration;

    struct CountingApp {
        updates: u32,
        quit_after: Option<u32>,
    }

    impl Application for CountingApp {
        fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            Ok(())
        }

        fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
            self.updates += 1;
            if self.quit_after.is_some_and(|n| self.updates >= n) {
                engine.quit();
            }
            Ok(())
        }

        fn render(&mut self, queue: &mut RenderQueue) -> Result<(), AppError> {
            queue.push(DrawCommand::Clear(Color::BLACK));
            Ok(())
        }
    }

    fn fast_config() -> EngineConfig {
        EngineConfig {
            pacing: PacingConfig {
                target_fps: 1000,
                ..PacingConfig::default()
            },
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_runs_until_frame_limit() {
        let platform = HeadlessPlatform::with_frame_limit(3);
        let mut app = CountingApp {
            updates: 0,
            quit_after: None,
        };
        Engine::run(fast_config(), Box::new(platform), &mut app).expect("Should run");
        assert_eq!(app.updates, 3);
    }

    #[test]
    fn test_app_can_quit_mid_run() {
        let platform = HeadlessPlatform::new();
        let mut app = CountingApp {
            updates: 0,
            quit_after: Some(2),
        };
        Engine::run(fast_config(), Box::new(platform), &mut app).expect("Should run");
        assert_eq!(app.updates, 2);
    }

    #[test]
    fn test_hotkey_switches_pacing_strategy() {
        struct StrategyProbe {
            seen: Vec<PacingStrategy>,
        }

        impl Application for StrategyProbe {
            fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
                Ok(())
            }

            fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
                self.seen.push(engine.pacer().strategy());
                Ok(())
            }

            fn render(&mut self, _queue: &mut RenderQueue) -> Result<(), AppError> {
                Ok(())
            }
        }

        let mut platform = HeadlessPlatform::with_frame_limit(3);
        platform.schedule_key_tap(1, KeyCode::Key4);

        let mut config = fast_config();
        config.pacing.strategy = PacingStrategy::BusyWait;
        config.pacing.strategy_hotkeys = true;

        let mut app = StrategyProbe { seen: Vec::new() };
        Engine::run(config, Box::new(platform), &mut app).expect("Should run");
        assert_eq!(
            app.seen,
            vec![
                PacingStrategy::BusyWait,
                PacingStrategy::Hybrid,
                PacingStrategy::Hybrid
            ]
        );
    }

    #[test]
    fn test_hotkeys_disabled_by_default() {
        struct StrategyProbe {
            last: Option<PacingStrategy>,
        }

        impl Application for StrategyProbe {
            fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
                Ok(())
            }

            fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
                self.last = Some(engine.pacer().strategy());
                Ok(())
            }

            fn render(&mut self, _queue: &mut RenderQueue) -> Result<(), AppError> {
                Ok(())
            }
        }

        let mut platform = HeadlessPlatform::with_frame_limit(3);
        platform.schedule_key_tap(0, KeyCode::Key0);

        let mut app = StrategyProbe { last: None };
        Engine::run(fast_config(), Box::new(platform), &mut app).expect("Should run");
        assert_eq!(app.last, Some(PacingStrategy::PreciseSleep));
    }

    #[test]
    fn test_delta_reflects_frame_budget() {
        struct DeltaProbe {
            deltas: Vec<f32>,
        }

        impl Application for DeltaProbe {
            fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
                Ok(())
            }

            fn update(&mut self, _engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
                self.deltas.push(delta_time);
                Ok(())
            }

            fn render(&mut self, _queue: &mut RenderQueue) -> Result<(), AppError> {
                Ok(())
            }
        }

        let platform = HeadlessPlatform::with_frame_limit(4);
        let config = EngineConfig {
            pacing: PacingConfig {
                target_fps: 200,
                strategy: PacingStrategy::BusyWait,
                ..PacingConfig::default()
            },
            ..EngineConfig::default()
        };

        let mut app = DeltaProbe { deltas: Vec::new() };
        Engine::run(config, Box::new(platform), &mut app).expect("Should run");

        // First frame has nothing to measure yet
        assert_eq!(app.deltas[0], 0.0);
        let budget = Duration::from_millis(5).as_secs_f32();
        for delta in &app.deltas[1..] {
            assert!(*delta >= budget);
        }
    }

    #[test]
    fn test_overlay_appends_timing_line() {
        // The overlay rides on the queue after render, so every presented
        // frame must end with a text command.
        struct OverlayProbe {
            inner: HeadlessPlatform,
        }

        impl Platform for OverlayProbe {
            fn poll_events(&mut self, events: &mut Vec<AppEvent>) {
                self.inner.poll_events(events);
            }

            fn present(&mut self, queue: &RenderQueue) -> Result<(), crate::render::RenderError> {
                assert!(matches!(
                    queue.commands().last(),
                    Some(DrawCommand::DebugText { .. })
                ));
                self.inner.present(queue)
            }
        }

        let platform = OverlayProbe {
            inner: HeadlessPlatform::with_frame_limit(2),
        };
        let mut config = fast_config();
        config.pacing.show_timing_overlay = true;

        let mut app = CountingApp {
            updates: 0,
            quit_after: None,
        };
        Engine::run(config, Box::new(platform), &mut app).expect("Should run");
    }
}
