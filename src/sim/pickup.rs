//! Air-bubble pickups

use glam::Vec2;

use super::sprite::AnimationClock;
use crate::tile_to_world;

const FRAME_TIME: f32 = 0.3;
const FLOAT_AMPLITUDE: f32 = 5.0;

/// A health-restoring air bubble. Floats in place on its spawn tile; the
/// controller detects the same-tile pickup and removes it.
#[derive(Debug, Clone)]
pub struct Bubble {
    pub tile: (i32, i32),
    pub anim: AnimationClock,
    float_time: f32,
}

impl Bubble {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            tile: (x, y),
            anim: AnimationClock::new(FRAME_TIME),
            float_time: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.anim.update(dt);
        self.float_time += dt;
    }

    /// Base position plus the vertical bob.
    pub fn render_pos(&self) -> Vec2 {
        let base = tile_to_world(self.tile.0, self.tile.1);
        base + Vec2::new(0.0, (self.float_time * 2.0).sin() * FLOAT_AMPLITUDE)
    }

    /// Gentle rocking for the renderer, degrees.
    pub fn angle_deg(&self) -> f32 {
        (self.float_time * 3.0).sin() * 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_is_cosmetic() {
        let mut bubble = Bubble::new(4, 7);
        for _ in 0..100 {
            bubble.update(0.05);
        }
        // The tile never changes; only the draw position bobs.
        assert_eq!(bubble.tile, (4, 7));
        let bob = bubble.render_pos() - tile_to_world(4, 7);
        assert_eq!(bob.x, 0.0);
        assert!(bob.y.abs() <= FLOAT_AMPLITUDE);
        assert!(bubble.angle_deg().abs() <= 10.0);
    }
}
