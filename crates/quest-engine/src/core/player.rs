use glam::Vec2;

use crate::core::geom::Aabb;

/// Lives granted at spawn and after a full reset.
pub const STARTING_LIVES: u32 = 3;

/// Horizontal facing, used for sprite eye placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

/// The one actor with velocity integration. Owned exclusively by the
/// engine instance that spawned it.
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner in level space.
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub lives: u32,
    /// Gems collected this engine lifetime. Only ever increases.
    pub gems: u32,
    /// Off any supporting platform. Gates jump eligibility.
    pub airborne: bool,
    pub facing: Facing,
    /// Respawn position after a non-fatal life loss.
    pub checkpoint: Vec2,
}

impl Player {
    pub fn spawn(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            lives: STARTING_LIVES,
            gems: 0,
            airborne: false,
            facing: Facing::Right,
            checkpoint: pos,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_point(self.pos, self.size)
    }

    /// Return to the checkpoint. Position and velocity only: lives, gems,
    /// and the airborne flag are untouched.
    pub fn respawn(&mut self) {
        self.pos = self.checkpoint;
        self.vel = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_sets_initial_state() {
        let p = Player::spawn(Vec2::new(50.0, 300.0), Vec2::new(32.0, 32.0));
        assert_eq!(p.lives, STARTING_LIVES);
        assert_eq!(p.gems, 0);
        assert!(!p.airborne);
        assert_eq!(p.facing, Facing::Right);
        assert_eq!(p.checkpoint, p.pos);
        assert_eq!(p.vel, Vec2::ZERO);
    }

    #[test]
    fn respawn_restores_position_and_zeroes_velocity() {
        let mut p = Player::spawn(Vec2::new(50.0, 300.0), Vec2::new(32.0, 32.0));
        p.pos = Vec2::new(800.0, 120.0);
        p.vel = Vec2::new(5.0, 20.0);
        p.gems = 4;
        p.lives = 2;

        p.respawn();

        assert_eq!(p.pos, Vec2::new(50.0, 300.0));
        assert_eq!(p.vel, Vec2::ZERO);
        assert_eq!(p.gems, 4);
        assert_eq!(p.lives, 2);
    }

    #[test]
    fn aabb_tracks_position() {
        let mut p = Player::spawn(Vec2::new(10.0, 20.0), Vec2::new(32.0, 32.0));
        p.pos.x += 5.0;
        let r = p.aabb();
        assert_eq!(r.left(), 15.0);
        assert_eq!(r.bottom(), 52.0);
    }
}
