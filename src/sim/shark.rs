//! Shark adversaries
//!
//! Variant-typed patrol/pursuit actors. Each kind carries a tuned
//! parameter record (`tuning::shark_params`); behavior is re-decided at
//! the kind's cadence, and a landed bite buys the player a fatigue
//! window during which the shark is inert.

use glam::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::OceanFloor;
use super::sprite::{AnimationClock, Direction, swim_offset};
use crate::tuning::{self, SharkParams};
use crate::{tile_to_world, world_to_tile};

const FRAME_TIME: f32 = 0.6;
const SWIM_AMPLITUDE: f32 = 1.0;
const SWIM_FREQUENCY: f32 = 4.0;

/// Fatigue cooldown after a landed bite, seconds.
pub const TIRED_DURATION: f32 = 5.0;
/// Bites landed before the cooldown trips.
const BITES_BEFORE_REST: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SharkKind {
    Reef,
    Bull,
    GreatWhite,
    Hammer,
}

impl SharkKind {
    /// Tuned parameter record for this kind.
    pub fn params(self) -> &'static SharkParams {
        tuning::shark_params(self)
    }
}

/// Behavioral state. Patrol and Pursue are re-evaluated at the kind's
/// decision cadence; Tired freezes the shark entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mood {
    Patrol,
    Pursue,
    Tired { elapsed: f32 },
}

#[derive(Debug, Clone)]
pub struct Shark {
    pub kind: SharkKind,
    /// Continuous position, world px (sprite top-left).
    pub pos: Vec2,
    /// Grid tile derived from `pos`.
    pub tile: (i32, i32),
    pub direction: Direction,
    pub mood: Mood,
    /// Fixed wander anchor, set at spawn.
    patrol_center: (i32, i32),
    decision_timer: f32,
    bites: u32,
    pub anim: AnimationClock,
    swim_time: f32,
}

impl Shark {
    pub fn new(x: i32, y: i32, kind: SharkKind, rng: &mut Pcg32) -> Self {
        Self {
            kind,
            pos: tile_to_world(x, y),
            tile: (x, y),
            direction: Direction::ALL[rng.random_range(0..Direction::ALL.len())],
            mood: Mood::Patrol,
            patrol_center: (x, y),
            decision_timer: 0.0,
            bites: 0,
            anim: AnimationClock::new(FRAME_TIME),
            swim_time: 0.0,
        }
    }

    pub fn is_tired(&self) -> bool {
        matches!(self.mood, Mood::Tired { .. })
    }

    /// Register a landed bite; trips the fatigue cooldown at the
    /// threshold.
    pub fn bite(&mut self) {
        self.bites += 1;
        if self.bites >= BITES_BEFORE_REST {
            self.mood = Mood::Tired { elapsed: 0.0 };
        }
    }

    pub fn update(&mut self, dt: f32, floor: &OceanFloor, player_tile: (i32, i32), rng: &mut Pcg32) {
        self.anim.update(dt);

        // Fatigue: frozen until the cooldown elapses, then back on the
        // hunt with a fresh bite counter.
        if let Mood::Tired { elapsed } = &mut self.mood {
            *elapsed += dt;
            if *elapsed >= TIRED_DURATION {
                self.mood = Mood::Patrol;
                self.bites = 0;
                self.decision_timer = 0.0;
            }
            return;
        }

        let params = self.kind.params();

        self.decision_timer += dt;
        if self.decision_timer >= params.decision_interval {
            self.decision_timer = 0.0;
            self.decide(floor, player_tile, params, rng);
        }

        // Continuous movement, same shape as the player's; a blocked
        // destination re-rolls the heading instead of entering a stuck
        // state.
        let next = self.pos + self.direction.vec() * params.speed * dt;
        let (tx, ty) = world_to_tile(next);
        if floor.is_walkable(tx, ty) {
            self.pos = next;
            self.tile = (tx, ty);
            self.swim_time += dt;
        } else {
            self.direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        }
    }

    /// Periodic re-decision: pursue when the player sits inside the aggro
    /// radius, otherwise wander within the patrol radius.
    fn decide(
        &mut self,
        floor: &OceanFloor,
        player_tile: (i32, i32),
        params: &SharkParams,
        rng: &mut Pcg32,
    ) {
        let dx = (player_tile.0 - self.tile.0) as f32;
        let dy = (player_tile.1 - self.tile.1) as f32;

        if Vec2::new(dx, dy).length() <= params.aggro_radius {
            // Manhattan-greedy chase: single cardinal axis with the
            // larger delta, no pathfinding.
            self.mood = Mood::Pursue;
            self.direction = if dx.abs() > dy.abs() {
                if dx > 0.0 { Direction::Right } else { Direction::Left }
            } else if dy > 0.0 {
                Direction::Down
            } else {
                Direction::Up
            };
            return;
        }

        self.mood = Mood::Patrol;
        let mut dirs = Direction::ALL;
        dirs.shuffle(rng);
        for dir in dirs {
            let (ddx, ddy) = dir.delta();
            let (nx, ny) = (self.tile.0 + ddx, self.tile.1 + ddy);
            let cx = (nx - self.patrol_center.0) as f32;
            let cy = (ny - self.patrol_center.1) as f32;
            if Vec2::new(cx, cy).length() <= params.patrol_radius && floor.is_walkable(nx, ny) {
                self.direction = dir;
                return;
            }
        }
        // No candidate qualified: keep the previous heading.
    }

    /// Draw position: continuous position plus the perpendicular wobble.
    pub fn render_pos(&self) -> Vec2 {
        self.pos + swim_offset(self.direction, self.swim_time, SWIM_AMPLITUDE, SWIM_FREQUENCY)
    }

    /// Facing angle for the renderer.
    pub fn angle_deg(&self) -> f32 {
        self.direction.angle_deg()
    }
}
