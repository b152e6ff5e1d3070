//! Pure game simulation
//!
//! [`GameState::step`] advances one frame from an input snapshot, a delta,
//! and an RNG, and reports what happened as [`StepEvents`]. Nothing here
//! touches the platform or the render queue, so every rule is testable with
//! a seeded RNG and hand-built states.

use arcade_engine::prelude::{distance_squared, InputSnapshot, Point2};
use rand::Rng;

use crate::entities::{Entity, Projectile, ProjectilePool, ThreatLevel};

/// Number of asteroids in flight at all times
pub const NUM_ASTEROIDS: usize = 10;

/// Distance below which an asteroid triggers the warning tint
const WARNING_DISTANCE: f32 = 100.0;

/// Simulation parameter bundle
///
/// Every tuning value the step function reads, passed explicitly instead of
/// living in globals. Derived speeds scale with the entity size so resizing
/// the sprites keeps the game feel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    /// Field width in pixels
    pub world_width: f32,

    /// Field height in pixels
    pub world_height: f32,

    /// Square entity edge length in pixels
    pub entity_size: f32,

    /// Player speed in pixels per second
    pub player_speed: f32,

    /// Square projectile edge length in pixels
    pub projectile_size: f32,

    /// Squared player-asteroid distance that triggers the warning tint
    pub warning_distance_sq: f32,

    /// Squared player-asteroid distance that triggers a game reset
    pub collision_distance_sq: f32,
}

impl SimParams {
    /// Build the bundle from field and sprite dimensions
    ///
    /// The collision threshold is the sum of the two sprite "radii", which
    /// for equal-sized squares is just the entity size. Both thresholds are
    /// compared against raw top-left positions, not centers; the bias is
    /// uniform so the tuning absorbs it.
    pub fn new(
        world_width: f32,
        world_height: f32,
        entity_size: f32,
        projectile_size: f32,
    ) -> Self {
        Self {
            world_width,
            world_height,
            entity_size,
            player_speed: entity_size * 5.0,
            projectile_size,
            warning_distance_sq: WARNING_DISTANCE * WARNING_DISTANCE,
            collision_distance_sq: entity_size * entity_size,
        }
    }

    /// Slowest asteroid fall speed
    pub fn asteroid_speed_min(&self) -> f32 {
        self.entity_size * 2.0
    }

    /// Width of the random fall speed range
    pub fn asteroid_speed_range(&self) -> f32 {
        self.entity_size * 4.0
    }
}

/// One falling asteroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    /// Position, size, and fall speed
    pub body: Entity,

    /// Proximity state against the player, recomputed every frame
    pub threat: ThreatLevel,
}

/// What a single step did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// Asteroids destroyed by projectiles this frame
    pub hits: u32,

    /// Whether a player-asteroid collision reset the game this frame
    pub reset: bool,
}

/// The whole shooter simulation
#[derive(Debug, Clone)]
pub struct GameState {
    /// Tuning bundle the step function reads
    pub params: SimParams,

    /// The player's ship
    pub player: Entity,

    /// The asteroid field
    pub asteroids: [Asteroid; NUM_ASTEROIDS],

    /// Projectiles in flight
    pub projectiles: ProjectilePool,

    /// Asteroids destroyed since the last reset
    pub score: u32,
}

impl GameState {
    /// Create a fresh game
    pub fn new<R: Rng>(params: SimParams, rng: &mut R) -> Self {
        let player = Entity {
            position: Self::player_start(&params),
            size: params.entity_size,
            velocity: params.player_speed,
        };
        let mut asteroids = [Asteroid {
            body: Entity {
                position: Point2::new(0.0, 0.0),
                size: params.entity_size,
                velocity: 0.0,
            },
            threat: ThreatLevel::Clear,
        }; NUM_ASTEROIDS];
        for asteroid in &mut asteroids {
            Self::respawn_asteroid(&params, asteroid, rng);
        }

        Self {
            params,
            player,
            asteroids,
            projectiles: ProjectilePool::new(),
            score: 0,
        }
    }

    fn player_start(params: &SimParams) -> Point2 {
        Point2::new(
            params.world_width / 2.0 - params.entity_size / 2.0,
            params.world_height - params.entity_size * 2.0,
        )
    }

    /// Send an asteroid back to the top with a fresh lane and fall speed
    ///
    /// The size is preserved across respawns; only position and speed are
    /// rerolled. The lane keeps one entity size of margin from both edges.
    fn respawn_asteroid<R: Rng>(params: &SimParams, asteroid: &mut Asteroid, rng: &mut R) {
        let body = &mut asteroid.body;
        if body.size <= 0.0 {
            body.size = params.entity_size;
        }
        body.position.x = body.size + rng.gen::<f32>() * (params.world_width - body.size * 2.0);
        body.position.y = -body.size;
        body.velocity =
            params.asteroid_speed_min() + rng.gen::<f32>() * params.asteroid_speed_range();
        asteroid.threat = ThreatLevel::Clear;
    }

    /// Zero the score, recenter the player, respawn every asteroid, and
    /// clear the projectile pool
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        log::info!("Game reset, final score {}", self.score);
        self.score = 0;
        self.player.position = Self::player_start(&self.params);
        for asteroid in &mut self.asteroids {
            Self::respawn_asteroid(&self.params, asteroid, rng);
        }
        self.projectiles.release_all();
    }

    /// Advance the simulation by `dt` seconds
    pub fn step<R: Rng>(&mut self, input: InputSnapshot, dt: f32, rng: &mut R) -> StepEvents {
        let mut events = StepEvents::default();

        // Fire before movement so the shot leaves from where the ship was
        // when the key went down
        if input.fire {
            self.projectiles.spawn(&self.player, self.params.projectile_size);
        }

        self.step_player(input, dt);
        self.step_asteroids(dt, rng, &mut events);
        self.step_projectiles(dt, rng, &mut events);

        events
    }

    fn step_player(&mut self, input: InputSnapshot, dt: f32) {
        let player = &mut self.player;
        if input.up {
            player.position.y -= dt * player.velocity;
        }
        if input.down {
            player.position.y += dt * player.velocity;
        }
        if input.left {
            player.position.x -= dt * player.velocity;
        }
        if input.right {
            player.position.x += dt * player.velocity;
        }

        // Toroidal wrap on the center point; one frame never crosses more
        // than a field width, so a single correction is enough
        let mut cx = player.position.x + player.size / 2.0;
        let mut cy = player.position.y + player.size / 2.0;
        if cx < 0.0 {
            cx += self.params.world_width;
        }
        if cx > self.params.world_width {
            cx -= self.params.world_width;
        }
        if cy < 0.0 {
            cy += self.params.world_height;
        }
        if cy > self.params.world_height {
            cy -= self.params.world_height;
        }
        player.position.x = cx - player.size / 2.0;
        player.position.y = cy - player.size / 2.0;
    }

    fn step_asteroids<R: Rng>(&mut self, dt: f32, rng: &mut R, events: &mut StepEvents) {
        for index in 0..NUM_ASTEROIDS {
            self.asteroids[index].body.position.y += dt * self.asteroids[index].body.velocity;

            let d_sq = distance_squared(self.asteroids[index].body.position, self.player.position);
            if d_sq < self.params.collision_distance_sq {
                self.reset(rng);
                events.reset = true;
                // the colliding asteroid keeps the collision tint through
                // the reset frame, drawn red at its respawn position; the
                // next frame recomputes it like any other
                self.asteroids[index].threat = ThreatLevel::Collision;
                // the loop keeps going: asteroids after this one move and
                // are checked against the freshly reset layout
                continue;
            } else if d_sq < self.params.warning_distance_sq {
                self.asteroids[index].threat = ThreatLevel::Warning;
            } else {
                self.asteroids[index].threat = ThreatLevel::Clear;
            }

            if self.asteroids[index].body.position.y
                > self.params.world_height + self.asteroids[index].body.size
            {
                Self::respawn_asteroid(&self.params, &mut self.asteroids[index], rng);
            }
        }
    }

    fn step_projectiles<R: Rng>(&mut self, dt: f32, rng: &mut R, events: &mut StepEvents) {
        for index in 0..ProjectilePool::CAPACITY {
            let mut shot: Projectile = self.projectiles.slots()[index];
            if !shot.active {
                continue;
            }

            shot.position.y += dt * shot.velocity;

            if shot.position.y + shot.size < 0.0 || shot.position.y > self.params.world_height {
                shot.active = false;
            }

            // A shot that just left the field still scans once, so it can
            // land a hit in the frame it despawns
            for asteroid in &mut self.asteroids {
                let radius_sum = asteroid.body.size / 2.0 + shot.size / 2.0;
                if distance_squared(asteroid.body.center(), shot.center())
                    < radius_sum * radius_sum
                {
                    self.score += 1;
                    events.hits += 1;
                    Self::respawn_asteroid(&self.params, asteroid, rng);
                    shot.active = false;
                    // first asteroid in array order takes the hit
                    break;
                }
            }

            self.projectiles.slots_mut()[index] = shot;
        }
    }
}
