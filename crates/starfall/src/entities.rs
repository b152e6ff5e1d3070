//! Entities and the projectile pool

use arcade_engine::prelude::{Point2, Rect};

/// A square game entity with a scalar speed
///
/// The speed is a magnitude, not a vector: the ship applies it along
/// whichever axes are held, asteroids apply it straight down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    /// Top-left corner in field space
    pub position: Point2,

    /// Edge length in pixels
    pub size: f32,

    /// Speed in pixels per second
    pub velocity: f32,
}

impl Entity {
    /// Bounding rectangle in field space
    pub fn bounding_rect(&self) -> Rect {
        Rect::square(self.position, self.size)
    }

    /// Center point in field space
    pub fn center(&self) -> Point2 {
        Point2::new(
            self.position.x + self.size / 2.0,
            self.position.y + self.size / 2.0,
        )
    }
}

/// Per-asteroid proximity state, recomputed every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreatLevel {
    /// Out of range
    #[default]
    Clear,

    /// Inside the warning radius, no gameplay effect
    Warning,

    /// Inside the collision radius
    Collision,
}

/// One projectile slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    /// Top-left corner in field space
    pub position: Point2,

    /// Edge length in pixels
    pub size: f32,

    /// Vertical speed in pixels per second (negative is up)
    pub velocity: f32,

    /// Whether the slot is in flight
    pub active: bool,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            position: Point2::new(0.0, 0.0),
            size: 0.0,
            velocity: 0.0,
            active: false,
        }
    }
}

impl Projectile {
    /// Center point in field space
    pub fn center(&self) -> Point2 {
        Point2::new(
            self.position.x + self.size / 2.0,
            self.position.y + self.size / 2.0,
        )
    }
}

/// Fixed-capacity projectile pool
///
/// Sixteen slots, no allocation after construction. Spawning scans for the
/// first inactive slot; when every slot is in flight the shot is dropped
/// with a warning and the game goes on.
#[derive(Debug, Clone)]
pub struct ProjectilePool {
    slots: [Projectile; Self::CAPACITY],
}

impl Default for ProjectilePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectilePool {
    /// Number of slots
    pub const CAPACITY: usize = 16;

    /// Create a pool with every slot inactive
    pub fn new() -> Self {
        Self {
            slots: [Projectile::default(); Self::CAPACITY],
        }
    }

    /// Activate the first free slot as a shot fired by `player`
    ///
    /// The projectile spawns centered just above the player and travels
    /// upward at twice the player's speed. Returns the slot index, or `None`
    /// when the pool is exhausted.
    pub fn spawn(&mut self, player: &Entity, projectile_size: f32) -> Option<usize> {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if !slot.active {
                slot.active = true;
                slot.size = projectile_size;
                slot.position.x = player.position.x + player.size / 2.0 - projectile_size / 2.0;
                slot.position.y = player.position.y - projectile_size;
                slot.velocity = -player.velocity * 2.0;
                return Some(index);
            }
        }
        log::warn!("No more projectiles available in the pool");
        None
    }

    /// Deactivate one slot
    ///
    /// An out-of-range index is logged and ignored.
    pub fn release(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.active = false;
        } else {
            log::warn!("Projectile release out of range: {}", index);
        }
    }

    /// Deactivate every slot
    pub fn release_all(&mut self) {
        for slot in &mut self.slots {
            slot.active = false;
        }
    }

    /// Number of slots currently in flight
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.active).count()
    }

    /// All slots, active or not
    pub fn slots(&self) -> &[Projectile] {
        &self.slots
    }

    /// Mutable access to all slots
    pub fn slots_mut(&mut self) -> &mut [Projectile] {
        &mut self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_player() -> Entity {
        Entity {
            position: Point2::new(268.0, 672.0),
            size: 64.0,
            velocity: 320.0,
        }
    }

    #[test]
    fn test_spawn_centers_shot_above_player() {
        let mut pool = ProjectilePool::new();
        let player = test_player();
        let index = pool.spawn(&player, 16.0).expect("Should spawn");

        let shot = pool.slots()[index];
        assert_eq!(shot.position.x, 268.0 + 32.0 - 8.0);
        assert_eq!(shot.position.y, 672.0 - 16.0);
        assert_eq!(shot.velocity, -640.0);
        assert!(shot.active);
    }

    #[test]
    fn test_pool_exhaustion_drops_the_shot() {
        let mut pool = ProjectilePool::new();
        let player = test_player();
        for _ in 0..ProjectilePool::CAPACITY {
            assert!(pool.spawn(&player, 16.0).is_some());
        }
        assert_eq!(pool.spawn(&player, 16.0), None);
        assert_eq!(pool.active_count(), ProjectilePool::CAPACITY);
    }

    #[test]
    fn test_release_makes_slot_reusable() {
        let mut pool = ProjectilePool::new();
        let player = test_player();
        for _ in 0..ProjectilePool::CAPACITY {
            pool.spawn(&player, 16.0);
        }

        pool.release(5);
        assert_eq!(pool.spawn(&player, 16.0), Some(5));
    }

    #[test]
    fn test_release_out_of_range_is_ignored() {
        let mut pool = ProjectilePool::new();
        let player = test_player();
        pool.spawn(&player, 16.0);

        pool.release(ProjectilePool::CAPACITY);
        pool.release(usize::MAX);
        assert_eq!(pool.active_count(), 1);
    }

    #[test]
    fn test_entity_center_and_bounds() {
        let player = test_player();
        assert_eq!(player.center(), Point2::new(300.0, 704.0));
        assert_eq!(player.bounding_rect(), Rect::new(268.0, 672.0, 64.0, 64.0));
    }
}
