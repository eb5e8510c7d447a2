//! Shared animation and motion components
//!
//! The entity types compose these instead of inheriting from a base
//! sprite: a two-frame animation clock, optional tile-to-tile glide
//! motion, and the perpendicular swim wobble.

use glam::Vec2;

use crate::tile_to_world;

/// Cardinal movement directions (screen coordinates, +y is down).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit tile delta.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Unit vector in world space.
    pub fn vec(self) -> Vec2 {
        let (dx, dy) = self.delta();
        Vec2::new(dx as f32, dy as f32)
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Facing angle for the renderer, degrees clockwise from facing right.
    pub fn angle_deg(self) -> f32 {
        match self {
            Direction::Right => 0.0,
            Direction::Down => 90.0,
            Direction::Left => 180.0,
            Direction::Up => 270.0,
        }
    }
}

/// Two-frame animation cycle.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    frame_time: f32,
    elapsed: f32,
    frame: u8,
}

impl AnimationClock {
    pub fn new(frame_time: f32) -> Self {
        Self {
            frame_time,
            elapsed: 0.0,
            frame: 0,
        }
    }

    /// Accumulate dt, flipping the frame each time `frame_time` elapses.
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.elapsed >= self.frame_time {
            self.elapsed = 0.0;
            self.frame = 1 - self.frame;
        }
    }

    /// Current frame index, 0 or 1.
    pub fn frame(&self) -> u8 {
        self.frame
    }
}

/// Tile-to-tile interpolated motion.
///
/// The pixel position glides toward the target tile at a fixed step per
/// tick, snapping onto it once within one step.
#[derive(Debug, Clone)]
pub struct GlideMotion {
    pub pos: Vec2,
    target: Vec2,
    step: f32,
    moving: bool,
}

impl GlideMotion {
    pub fn at_tile(x: i32, y: i32, step: f32) -> Self {
        let pos = tile_to_world(x, y);
        Self {
            pos,
            target: pos,
            step,
            moving: false,
        }
    }

    /// Begin gliding toward a tile. Ignored while a glide is in progress.
    pub fn start(&mut self, x: i32, y: i32) {
        if !self.moving {
            self.target = tile_to_world(x, y);
            self.moving = true;
        }
    }

    pub fn moving(&self) -> bool {
        self.moving
    }

    /// Advance one step toward the target.
    pub fn update(&mut self) {
        if !self.moving {
            return;
        }
        let delta = self.target - self.pos;
        let dist = delta.length();
        if dist <= self.step {
            self.pos = self.target;
            self.moving = false;
        } else {
            self.pos += delta / dist * self.step;
        }
    }
}

/// Perpendicular sinusoidal swim wobble: horizontal travel bobs on y,
/// vertical travel bobs on x. Visual only; collision never sees it.
pub fn swim_offset(direction: Direction, swim_time: f32, amplitude: f32, frequency: f32) -> Vec2 {
    let s = (swim_time * frequency).sin() * amplitude;
    if direction.is_horizontal() {
        Vec2::new(0.0, s)
    } else {
        Vec2::new(s, 0.0)
    }
}
