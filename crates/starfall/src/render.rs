//! Render pass
//!
//! Turns a [`GameState`] into draw commands. No simulation happens here;
//! the queue is rebuilt from scratch every frame.

use arcade_engine::prelude::{Color, DrawCommand, Rect, RenderQueue, Tint};

use crate::entities::ThreatLevel;
use crate::state::GameState;

/// Atlas tile of the player's ship (column, row)
pub const PLAYER_TILE: (u32, u32) = (4, 0);

/// Atlas tile of the asteroid sprite (column, row)
pub const ASTEROID_TILE: (u32, u32) = (0, 4);

impl ThreatLevel {
    fn tint(self) -> Tint {
        match self {
            Self::Clear => Tint::Neutral,
            Self::Warning => Tint::Warning,
            Self::Collision => Tint::Collision,
        }
    }
}

/// Submit one frame of the shooter
pub fn build_frame(state: &GameState, queue: &mut RenderQueue) {
    queue.push(DrawCommand::Clear(Color::BLACK));

    queue.push(DrawCommand::Sprite {
        tile: PLAYER_TILE,
        dst: state.player.bounding_rect(),
        tint: Tint::Neutral,
    });

    for asteroid in &state.asteroids {
        queue.push(DrawCommand::Sprite {
            tile: ASTEROID_TILE,
            dst: asteroid.body.bounding_rect(),
            tint: asteroid.threat.tint(),
        });
    }

    for shot in state.projectiles.slots() {
        if shot.active {
            queue.push(DrawCommand::FillRect {
                rect: Rect::square(shot.position, shot.size),
                color: Color::WHITE,
            });
        }
    }

    queue.push(DrawCommand::DebugText {
        x: 10.0,
        y: 40.0,
        text: format!("score          : {}", state.score),
    });
}
