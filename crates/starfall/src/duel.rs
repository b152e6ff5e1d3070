//! Two-player movement demo
//!
//! The point of this demo is the engine's pacing comparison: both the
//! strategy hotkeys (number keys 0-4) and the timing overlay are meant to be
//! enabled so the work/frame split of each delay strategy can be watched
//! live. The gameplay is deliberately thin, two squares steering around an
//! open field that light up red while they overlap.

use arcade_engine::prelude::{
    AppError, Application, Color, DrawCommand, Engine, InputSnapshot, KeyBindings, KeyCode, Rect,
    RenderQueue,
};

/// Square edge length of both players
pub const PLAYER_SIZE: f32 = 40.0;

/// Movement speed of both players in pixels per second
pub const PLAYER_SPEED: f32 = 300.0;

/// Diagonal normalization factor (1/sqrt(2))
const DIAGONAL_SCALE: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// One steerable square
#[derive(Debug, Clone)]
pub struct DuelPlayer {
    /// Current bounds
    pub rect: Rect,

    /// Keys this player steers with
    pub bindings: KeyBindings,

    /// Fill color while not overlapping
    pub color: Color,
}

impl DuelPlayer {
    /// Apply one frame of movement
    ///
    /// Opposite held keys cancel; diagonals are normalized so the speed is
    /// direction-independent. There is no clamping or wrapping, players can
    /// leave the field.
    pub fn advance(&mut self, input: InputSnapshot, dt: f32) {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if input.up {
            dy -= 1.0;
        }
        if input.down {
            dy += 1.0;
        }
        if input.left {
            dx -= 1.0;
        }
        if input.right {
            dx += 1.0;
        }

        if dx != 0.0 && dy != 0.0 {
            dx *= DIAGONAL_SCALE;
            dy *= DIAGONAL_SCALE;
        }

        self.rect.x += dx * PLAYER_SPEED * dt;
        self.rect.y += dy * PLAYER_SPEED * dt;
    }
}

/// The demo application
pub struct DuelApp {
    players: [DuelPlayer; 2],
    overlapping: bool,
}

impl DuelApp {
    /// Create the demo for a field of the given dimensions
    ///
    /// Player one (blue) starts left of center on WASD, player two (orange)
    /// starts right of center on the arrow keys.
    pub fn new(field_width: f32, field_height: f32) -> Self {
        Self {
            players: [
                DuelPlayer {
                    rect: Rect::new(
                        field_width / 2.0 - 200.0,
                        field_height / 2.0,
                        PLAYER_SIZE,
                        PLAYER_SIZE,
                    ),
                    bindings: KeyBindings::wasd(),
                    color: Color::rgb(0x3C, 0x63, 0xFF),
                },
                DuelPlayer {
                    rect: Rect::new(
                        field_width / 2.0 + 200.0,
                        field_height / 2.0,
                        PLAYER_SIZE,
                        PLAYER_SIZE,
                    ),
                    bindings: KeyBindings::arrows(),
                    color: Color::rgb(0xFF, 0x63, 0x3C),
                },
            ],
            overlapping: false,
        }
    }

    /// The players, for inspection
    pub fn players(&self) -> &[DuelPlayer; 2] {
        &self.players
    }

    /// Whether the players overlapped after the last update
    pub fn overlapping(&self) -> bool {
        self.overlapping
    }
}

impl Application for DuelApp {
    fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
        log::info!("Duel ready: WASD vs arrows, number keys switch pacing");
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
        if engine.input().just_pressed(KeyCode::Escape) {
            engine.quit();
            return Ok(());
        }

        for player in &mut self.players {
            let input = engine.input().snapshot(&player.bindings);
            player.advance(input, delta_time);
        }
        self.overlapping = self.players[0].rect.overlaps(&self.players[1].rect);
        Ok(())
    }

    fn render(&mut self, queue: &mut RenderQueue) -> Result<(), AppError> {
        queue.push(DrawCommand::Clear(Color::BLACK));
        for player in &self.players {
            let color = if self.overlapping {
                Color::rgb(0xFF, 0x00, 0x00)
            } else {
                player.color
            };
            queue.push(DrawCommand::FillRect {
                rect: player.rect,
                color,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_players_start_either_side_of_center() {
        let app = DuelApp::new(800.0, 600.0);
        assert_eq!(app.players()[0].rect.x, 200.0);
        assert_eq!(app.players()[1].rect.x, 600.0);
        assert_eq!(app.players()[0].rect.y, 300.0);
    }

    #[test]
    fn test_diagonal_speed_is_normalized() {
        let mut player = DuelApp::new(800.0, 600.0).players()[0].clone();
        let input = InputSnapshot {
            up: true,
            right: true,
            ..InputSnapshot::default()
        };
        player.advance(input, 1.0);

        let dx = player.rect.x - 200.0;
        let dy = player.rect.y - 300.0;
        assert_relative_eq!(
            (dx * dx + dy * dy).sqrt(),
            PLAYER_SPEED,
            epsilon = 1e-2
        );
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut player = DuelApp::new(800.0, 600.0).players()[0].clone();
        let input = InputSnapshot {
            left: true,
            right: true,
            ..InputSnapshot::default()
        };
        player.advance(input, 1.0);
        assert_eq!(player.rect.x, 200.0);
    }

    #[test]
    fn test_players_may_leave_the_field() {
        let mut player = DuelApp::new(800.0, 600.0).players()[0].clone();
        let input = InputSnapshot {
            left: true,
            ..InputSnapshot::default()
        };
        player.advance(input, 10.0);
        assert!(player.rect.x < 0.0);
    }
}
