//! Two-player pacing demo binary
//!
//! Runs the duel with strategy hotkeys and the timing overlay enabled; the
//! scripted session walks through all five pacing strategies so their
//! work/frame numbers can be compared in the log of presented overlays.

use arcade_engine::foundation::logging;
use arcade_engine::prelude::*;
use starfall::duel::DuelApp;

fn main() -> Result<(), EngineError> {
    logging::init();

    let config = EngineConfig {
        window: WindowConfig {
            title: "Duel".to_string(),
            width: 800,
            height: 600,
        },
        pacing: PacingConfig {
            target_fps: 60,
            strategy: PacingStrategy::BusyWait,
            strategy_hotkeys: true,
            show_timing_overlay: true,
        },
    };

    let mut platform = HeadlessPlatform::with_frame_limit(300);
    // Hold a movement key per player, then step through the strategies
    platform.schedule(0, AppEvent::KeyInput {
        key: KeyCode::D,
        pressed: true,
    });
    platform.schedule(0, AppEvent::KeyInput {
        key: KeyCode::Left,
        pressed: true,
    });
    for index in 0..PacingStrategy::COUNT {
        let key = match index {
            0 => KeyCode::Key0,
            1 => KeyCode::Key1,
            2 => KeyCode::Key2,
            3 => KeyCode::Key3,
            _ => KeyCode::Key4,
        };
        platform.schedule_key_tap(u64::from(index) * 60, key);
    }

    let mut app = DuelApp::new(
        config.window.width as f32,
        config.window.height as f32,
    );
    Engine::run(config, Box::new(platform), &mut app)
}
