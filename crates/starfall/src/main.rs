//! Starfall shooter binary
//!
//! Steers with WASD, fires with space, escape quits. Runs against the
//! scripted headless platform: a short demo session is scheduled up front
//! and the final score is logged when the frame limit ends it.

use arcade_engine::config::Config;
use arcade_engine::foundation::logging;
use arcade_engine::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfall::config::{GameConfig, CONFIG_PATH};
use starfall::render::build_frame;
use starfall::state::GameState;

struct StarfallApp {
    state: GameState,
    rng: StdRng,
    bindings: KeyBindings,
    atlas_path: String,
}

impl Application for StarfallApp {
    fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
        // Sprite data is only needed by a backend that rasterizes; when it
        // is missing the tile geometry still has to line up
        let atlas = match TextureAtlas::load(&self.atlas_path, 128) {
            Ok(atlas) => atlas,
            Err(e) => {
                log::warn!("Atlas unavailable ({}), using bare tile geometry", e);
                TextureAtlas::from_dimensions(1024, 1024, 128)?
            }
        };
        log::info!(
            "Atlas ready: {} columns x {} rows of {}px tiles",
            atlas.columns(),
            atlas.rows(),
            atlas.tile_size()
        );
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
        if engine.input().just_pressed(KeyCode::Escape) {
            engine.quit();
            return Ok(());
        }

        let input = engine.input().snapshot(&self.bindings);
        let events = self.state.step(input, delta_time, &mut self.rng);
        if events.hits > 0 {
            log::debug!("{} hit(s), score {}", events.hits, self.state.score);
        }
        Ok(())
    }

    fn render(&mut self, queue: &mut RenderQueue) -> Result<(), AppError> {
        build_frame(&self.state, queue);
        Ok(())
    }

    fn cleanup(&mut self) {
        log::info!("Final score: {}", self.state.score);
    }
}

fn main() -> Result<(), EngineError> {
    logging::init();

    let config = GameConfig::load_or_default(CONFIG_PATH);
    let mut rng = StdRng::from_entropy();
    let state = GameState::new(config.sim_params(), &mut rng);

    let mut platform = HeadlessPlatform::with_frame_limit(600);
    platform.schedule(30, AppEvent::KeyInput {
        key: KeyCode::A,
        pressed: true,
    });
    platform.schedule(90, AppEvent::KeyInput {
        key: KeyCode::A,
        pressed: false,
    });
    for frame in (10u64..560).step_by(25) {
        platform.schedule_key_tap(frame, KeyCode::Space);
    }

    let mut app = StarfallApp {
        state,
        rng,
        bindings: KeyBindings::wasd(),
        atlas_path: config.atlas_path.clone(),
    };
    Engine::run(config.engine, Box::new(platform), &mut app)
}
