//! The player fish
//!
//! Continuous-direction movement over the grid with a buffered direction
//! change, health, and the map-collision revert rule.

use glam::Vec2;

use super::grid::OceanFloor;
use super::sprite::{AnimationClock, Direction, swim_offset};
use crate::{tile_to_world, world_to_tile};

/// Starting and maximum health.
pub const MAX_HEALTH: i32 = 100;

const FRAME_TIME: f32 = 0.4;
const SWIM_AMPLITUDE: f32 = 2.0;
const SWIM_FREQUENCY: f32 = 12.0;

#[derive(Debug, Clone)]
pub struct Player {
    /// Continuous position, world px (sprite top-left).
    pub pos: Vec2,
    /// Grid tile derived from `pos`.
    pub tile: (i32, i32),
    pub direction: Direction,
    pending: Option<Direction>,
    /// Swim speed, px/s.
    pub speed: f32,
    /// Clamped to [0, MAX_HEALTH].
    pub health: i32,
    pub alive: bool,
    pub anim: AnimationClock,
    swim_time: f32,
}

impl Player {
    pub fn new(x: i32, y: i32, speed: f32) -> Self {
        Self {
            pos: tile_to_world(x, y),
            tile: (x, y),
            direction: Direction::Right,
            pending: None,
            speed,
            health: MAX_HEALTH,
            alive: true,
            anim: AnimationClock::new(FRAME_TIME),
            swim_time: 0.0,
        }
    }

    /// Buffer a direction change. It is applied at the start of the next
    /// update so a single tick never mixes two directions.
    pub fn set_direction(&mut self, dir: Direction) {
        self.pending = Some(dir);
    }

    pub fn update(&mut self, dt: f32, floor: &OceanFloor) {
        if !self.alive {
            return;
        }

        if let Some(dir) = self.pending.take() {
            self.direction = dir;
        }

        self.anim.update(dt);

        // Advance, then revert the whole move if the destination tile is
        // not walkable. The wobble below never feeds into this check.
        let next = self.pos + self.direction.vec() * self.speed * dt;
        let (tx, ty) = world_to_tile(next);
        if floor.is_walkable(tx, ty) {
            self.pos = next;
            self.tile = (tx, ty);
        }

        self.swim_time += dt;
    }

    /// Draw position: continuous position plus the perpendicular wobble.
    pub fn render_pos(&self) -> Vec2 {
        self.pos + swim_offset(self.direction, self.swim_time, SWIM_AMPLITUDE, SWIM_FREQUENCY)
    }

    /// Apply contact damage, saturating at zero. Death is permanent until
    /// the next restart.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
        if self.health == 0 {
            self.alive = false;
        }
    }

    /// Restore health, capped at `MAX_HEALTH`.
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(MAX_HEALTH);
    }
}
