//! Ocean floor: static walkability over the tile grid
//!
//! Seaweed rings the playfield border plus a fixed count of random
//! interior tufts, generated once at construction. Cells never change
//! afterwards; only the decoration animation clocks advance.

use std::collections::HashSet;

use rand::Rng;
use rand_pcg::Pcg32;

use super::sprite::AnimationClock;
use crate::consts::{GRID_HEIGHT, GRID_WIDTH};

/// Seaweed decoration variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorKind {
    Kelp,
    Coral,
    Anemone,
}

const DECOR_KINDS: [DecorKind; 3] = [DecorKind::Kelp, DecorKind::Coral, DecorKind::Anemone];

/// Random interior tufts placed at generation.
const INTERIOR_TUFTS: usize = 60;
/// Decoration two-frame cycle time.
const DECOR_FRAME_TIME: f32 = 0.8;

/// One animated seaweed sprite on a blocked tile.
#[derive(Debug, Clone)]
pub struct Decoration {
    pub tile: (i32, i32),
    pub kind: DecorKind,
    pub anim: AnimationClock,
}

/// The static tile map.
#[derive(Debug, Clone)]
pub struct OceanFloor {
    blocked: HashSet<(i32, i32)>,
    decor: Vec<Decoration>,
}

impl OceanFloor {
    /// Generate the border ring and interior tufts.
    pub fn generate(rng: &mut Pcg32) -> Self {
        let mut floor = Self {
            blocked: HashSet::new(),
            decor: Vec::new(),
        };

        for x in 0..GRID_WIDTH {
            floor.plant(x, 0, rng);
            floor.plant(x, GRID_HEIGHT - 1, rng);
        }
        for y in 0..GRID_HEIGHT {
            floor.plant(0, y, rng);
            floor.plant(GRID_WIDTH - 1, y, rng);
        }

        for _ in 0..INTERIOR_TUFTS {
            let x = rng.random_range(2..GRID_WIDTH - 2);
            let y = rng.random_range(2..GRID_HEIGHT - 2);
            floor.plant(x, y, rng);
        }

        floor
    }

    fn plant(&mut self, x: i32, y: i32, rng: &mut Pcg32) {
        if !self.blocked.insert((x, y)) {
            return;
        }
        let kind = DECOR_KINDS[rng.random_range(0..DECOR_KINDS.len())];
        self.decor.push(Decoration {
            tile: (x, y),
            kind,
            anim: AnimationClock::new(DECOR_FRAME_TIME),
        });
    }

    /// True iff the tile is inside the playfield and not seaweed.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < GRID_WIDTH && y >= 0 && y < GRID_HEIGHT && !self.blocked.contains(&(x, y))
    }

    pub fn decor(&self) -> &[Decoration] {
        &self.decor
    }

    /// Advance decoration animation clocks.
    pub fn update(&mut self, dt: f32) {
        for d in &mut self.decor {
            d.anim.update(dt);
        }
    }

    /// Border-only floor with a deterministic layout, for tests.
    #[cfg(test)]
    pub(crate) fn open() -> Self {
        let mut blocked = HashSet::new();
        for x in 0..GRID_WIDTH {
            blocked.insert((x, 0));
            blocked.insert((x, GRID_HEIGHT - 1));
        }
        for y in 0..GRID_HEIGHT {
            blocked.insert((0, y));
            blocked.insert((GRID_WIDTH - 1, y));
        }
        Self {
            blocked,
            decor: Vec::new(),
        }
    }
}
