//! The per-frame simulation of one player actor against a static level.
//!
//! One engine instance is one level attempt. The host drives `update`
//! then `render` once per animation frame and polls the status flags
//! afterwards; the engine never calls back into host code.

use glam::Vec2;

use crate::api::types::{EngineStatus, SoundCue};
use crate::core::geom::Aabb;
use crate::core::player::{Facing, Player, STARTING_LIVES};
use crate::input::state::{Action, InputState};
use crate::level::Level;
use crate::renderer::camera::ScrollCamera;
use crate::renderer::instance::ShapeBuffer;
use crate::systems::draw;

/// Downward acceleration per tick.
const GRAVITY: f32 = 0.6;
/// Upward impulse applied on jump.
const JUMP_POWER: f32 = 12.0;
/// Constant horizontal speed while a move action is held. No ramp.
const MOVE_SPEED: f32 = 5.0;
/// Velocity decay per tick when no move action is held. One constant for
/// ground and air; level completability is tuned against it.
const FRICTION: f32 = 0.9;
/// Clamp on downward velocity.
const TERMINAL_VELOCITY: f32 = 20.0;
/// How far below a platform's top the player's feet may sink in one tick
/// and still land on it.
const LANDING_TOLERANCE: f32 = 10.0;
/// Fixed spawn offset near the level origin.
const SPAWN: Vec2 = Vec2::new(50.0, 300.0);
/// Margin between the viewport's left edge and the player.
const CAMERA_LEAD: f32 = 100.0;

/// Pixel dimensions of the drawable surface the host renders into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A collectible. `collected` flips permanently for the lifetime of the
/// engine instance; collected gems neither render nor collide.
#[derive(Debug, Clone)]
pub struct Gem {
    pub rect: Aabb,
    pub collected: bool,
}

/// The physics/collision engine driving one level attempt.
pub struct PlatformerEngine {
    level: Level,
    surface: Surface,
    player: Player,
    platforms: Vec<Aabb>,
    gems: Vec<Gem>,
    spikes: Vec<Aabb>,
    lava: Vec<Aabb>,
    exit: Aabb,
    status: EngineStatus,
    camera: ScrollCamera,
    sounds: Vec<SoundCue>,
}

impl PlatformerEngine {
    /// Materialize an attempt: player at the spawn offset, per-kind
    /// collision lists derived from the level's coordinate anchors and
    /// declared sizes, status running.
    pub fn new(level: Level, surface: Surface) -> Self {
        let sizes = level.sizes;
        let platforms = level
            .platforms
            .iter()
            .map(|p| Aabb::from_point(p.vec2(), sizes.platform.vec2()))
            .collect();
        let gems = level
            .gems
            .iter()
            .map(|g| Gem {
                rect: Aabb::from_point(g.vec2(), sizes.gem.vec2()),
                collected: false,
            })
            .collect();
        let spikes = level
            .spikes
            .iter()
            .map(|s| Aabb::from_point(s.vec2(), sizes.spike.vec2()))
            .collect();
        let lava = level
            .lava
            .iter()
            .map(|l| Aabb::from_point(l.vec2(), sizes.lava.vec2()))
            .collect();
        let exit = Aabb::from_point(level.exit.vec2(), sizes.exit.vec2());
        let player = Player::spawn(SPAWN, sizes.player.vec2());
        let camera = ScrollCamera::new(CAMERA_LEAD, surface.width);

        Self {
            level,
            surface,
            player,
            platforms,
            gems,
            spikes,
            lava,
            exit,
            status: EngineStatus::Running,
            camera,
            sounds: Vec::new(),
        }
    }

    /// Advance the simulation by one fixed step. No-op in terminal states.
    pub fn update(&mut self, input: &InputState) {
        if !self.status.is_running() {
            return;
        }

        self.apply_input(input);
        self.apply_gravity();
        self.player.pos += self.player.vel;

        self.land_on_platforms();
        self.collect_gems();
        // A hazard hit ends collision checking for the tick: first hazard
        // wins, and a life-loss tick can never also complete the level.
        if !self.resolve_hazards() {
            self.check_exit();
        }

        self.camera.follow(self.player.pos.x);

        // Fell below the visible area: back to the checkpoint, no life cost.
        if self.status.is_running() && self.player.pos.y > self.surface.height {
            self.player.respawn();
        }
    }

    fn apply_input(&mut self, input: &InputState) {
        if input.is_held(Action::MoveLeft) {
            self.player.vel.x = -MOVE_SPEED;
            self.player.facing = Facing::Left;
        } else if input.is_held(Action::MoveRight) {
            self.player.vel.x = MOVE_SPEED;
            self.player.facing = Facing::Right;
        } else {
            self.player.vel.x *= FRICTION;
        }

        // A tap and a hold are the same: the impulse fires on the single
        // tick where the player was still grounded.
        if input.is_held(Action::Jump) && !self.player.airborne {
            self.player.vel.y = -JUMP_POWER;
            self.player.airborne = true;
        }
    }

    fn apply_gravity(&mut self) {
        self.player.vel.y += GRAVITY;
        if self.player.vel.y > TERMINAL_VELOCITY {
            self.player.vel.y = TERMINAL_VELOCITY;
        }
    }

    /// Land on any platform whose top the player's feet just crossed.
    /// Only while falling; the tolerance band keeps a resting player
    /// snapped through the gravity nudge of each tick. Platforms are
    /// tested in order and the last match sets the final y; valid levels
    /// do not stack platforms at conflicting heights.
    fn land_on_platforms(&mut self) {
        for platform in &self.platforms {
            if self.player.vel.y < 0.0 {
                continue;
            }
            let body = Aabb::from_point(self.player.pos, self.player.size);
            let horizontal = body.left() < platform.right() && body.right() > platform.left();
            let feet_in_band = body.bottom() >= platform.top()
                && body.bottom() <= platform.bottom() + LANDING_TOLERANCE;
            if horizontal && feet_in_band {
                self.player.pos.y = platform.top() - self.player.size.y;
                self.player.vel.y = 0.0;
                self.player.airborne = false;
            }
        }
    }

    fn collect_gems(&mut self) {
        let body = self.player.aabb();
        for gem in &mut self.gems {
            if !gem.collected && body.overlaps(&gem.rect) {
                gem.collected = true;
                self.player.gems += 1;
                self.sounds.push(SoundCue::Collect);
            }
        }
    }

    /// Spikes then lava, in authored order; the first overlap costs a life
    /// and ends hazard checking for the tick. Standing on a platform gives
    /// no immunity. Returns whether a hazard was hit.
    fn resolve_hazards(&mut self) -> bool {
        let body = self.player.aabb();
        let hit = self
            .spikes
            .iter()
            .chain(self.lava.iter())
            .any(|hazard| body.overlaps(hazard));
        if hit {
            self.lose_life();
        }
        hit
    }

    fn lose_life(&mut self) {
        self.player.lives = self.player.lives.saturating_sub(1);
        if self.player.lives == 0 {
            self.status = EngineStatus::GameOver;
        } else {
            self.player.respawn();
        }
        self.sounds.push(SoundCue::Hurt);
    }

    fn check_exit(&mut self) {
        if self.player.aabb().overlaps(&self.exit) {
            self.status = EngineStatus::LevelComplete;
            self.sounds.push(SoundCue::Complete);
        }
    }

    /// Re-arm this instance for a retry: full lives, no gems, every gem
    /// back in place, player at the checkpoint at rest, status running.
    pub fn reset(&mut self) {
        self.player.lives = STARTING_LIVES;
        self.player.gems = 0;
        self.player.airborne = false;
        self.player.facing = Facing::Right;
        self.player.respawn();
        for gem in &mut self.gems {
            gem.collected = false;
        }
        self.status = EngineStatus::Running;
        self.camera.follow(self.player.pos.x);
        self.sounds.clear();
    }

    /// Move the respawn point, e.g. on reaching a mid-level marker.
    /// Shipped levels never call this; it is the contract hook for future
    /// checkpoint-heavy level design.
    pub fn set_checkpoint(&mut self, pos: Vec2) {
        self.player.checkpoint = pos;
    }

    /// Compose this frame into the shape buffer. Pure draw output; never
    /// touches simulation state.
    pub fn render(&self, buf: &mut ShapeBuffer) {
        draw::build_frame(self, buf);
    }

    /// Hand the frame's audio cues to the host, clearing the queue.
    pub fn drain_sounds(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sounds)
    }

    // -- Host-facing polls --

    pub fn status(&self) -> EngineStatus {
        self.status
    }

    pub fn level_complete(&self) -> bool {
        self.status == EngineStatus::LevelComplete
    }

    pub fn game_over(&self) -> bool {
        self.status == EngineStatus::GameOver
    }

    pub fn lives(&self) -> u32 {
        self.player.lives
    }

    pub fn gems_collected(&self) -> u32 {
        self.player.gems
    }

    pub fn camera_x(&self) -> f32 {
        self.camera.x
    }

    // -- Read access for the frame composer --

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn platforms(&self) -> &[Aabb] {
        &self.platforms
    }

    pub fn gems(&self) -> &[Gem] {
        &self.gems
    }

    pub fn spikes(&self) -> &[Aabb] {
        &self.spikes
    }

    pub fn lava(&self) -> &[Aabb] {
        &self.lava
    }

    pub fn exit(&self) -> &Aabb {
        &self.exit
    }

    pub fn camera(&self) -> &ScrollCamera {
        &self.camera
    }
}
