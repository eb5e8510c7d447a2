//! Draw-list snapshots for the host renderer
//!
//! The crate draws nothing itself. Each frame the host asks for a flat
//! list of sprite instances - anchor position, two-frame index, rotation
//! - plus HUD numbers, and blits them with whatever it has.

use glam::Vec2;

use crate::consts::{GRID_SIZE, HEIGHT, WIDTH};
use crate::sim::{DecorKind, Direction, GameState, SharkKind};
use crate::tile_center;

/// Sprite sheet selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteImage {
    Player(Direction),
    Shark(SharkKind),
    Bubble,
    Decor(DecorKind),
}

/// One sprite to blit.
#[derive(Debug, Clone, Copy)]
pub struct SpriteInstance {
    /// Anchor (sprite center), screen px.
    pub pos: Vec2,
    /// Two-frame animation index, 0 or 1.
    pub frame: u8,
    /// Rotation, degrees clockwise.
    pub angle_deg: f32,
    pub image: SpriteImage,
}

/// HUD numbers drawn as text by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub health: i32,
    pub sharks: usize,
    pub bubbles: usize,
}

fn anchor(render_pos: Vec2) -> Vec2 {
    render_pos + Vec2::splat(GRID_SIZE / 2.0)
}

/// Build the draw list for the current frame, back to front:
/// decorations, bubbles, player, sharks.
pub fn draw_list(state: &GameState) -> Vec<SpriteInstance> {
    let decor = state.floor.decor();
    let mut out =
        Vec::with_capacity(decor.len() + state.bubbles.len() + state.sharks.len() + 1);

    for d in decor {
        out.push(SpriteInstance {
            pos: tile_center(d.tile.0, d.tile.1),
            frame: d.anim.frame(),
            angle_deg: 0.0,
            image: SpriteImage::Decor(d.kind),
        });
    }

    for b in &state.bubbles {
        out.push(SpriteInstance {
            pos: anchor(b.render_pos()),
            frame: b.anim.frame(),
            angle_deg: b.angle_deg(),
            image: SpriteImage::Bubble,
        });
    }

    if state.player.alive {
        out.push(SpriteInstance {
            pos: anchor(state.player.render_pos()),
            frame: state.player.anim.frame(),
            angle_deg: 0.0,
            image: SpriteImage::Player(state.player.direction),
        });
    }

    for s in &state.sharks {
        out.push(SpriteInstance {
            pos: anchor(s.render_pos()),
            frame: s.anim.frame(),
            angle_deg: s.angle_deg(),
            image: SpriteImage::Shark(s.kind),
        });
    }

    out
}

pub fn hud(state: &GameState) -> Hud {
    Hud {
        health: state.player.health,
        sharks: state.sharks.len(),
        bubbles: state.bubbles.len(),
    }
}

/// Drifting light particles, a pure function of session time. Position
/// and size per particle.
pub fn drift_particles(elapsed: f32) -> [(Vec2, f32); 15] {
    let mut out = [(Vec2::ZERO, 0.0); 15];
    for (i, slot) in out.iter_mut().enumerate() {
        let n = i as f32;
        let x = (elapsed * 8.0 + n * 50.0) % WIDTH;
        let y = (elapsed * 3.0 + n * 40.0) % HEIGHT;
        let size = 1.0 + (i % 2) as f32;
        *slot = (Vec2::new(x, y), size);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::GameState;

    #[test]
    fn test_draw_list_covers_every_entity() {
        let mut state = GameState::new(3, Tuning::default());
        state.spawn_bubble();

        let list = draw_list(&state);
        let players = list
            .iter()
            .filter(|s| matches!(s.image, SpriteImage::Player(_)))
            .count();
        let sharks = list
            .iter()
            .filter(|s| matches!(s.image, SpriteImage::Shark(_)))
            .count();
        let bubbles = list
            .iter()
            .filter(|s| matches!(s.image, SpriteImage::Bubble))
            .count();

        assert_eq!(players, 1);
        assert_eq!(sharks, state.sharks.len());
        assert_eq!(bubbles, 1);
    }

    #[test]
    fn test_dead_player_is_not_drawn() {
        let mut state = GameState::new(3, Tuning::default());
        state.player.take_damage(200);

        let players = draw_list(&state)
            .iter()
            .filter(|s| matches!(s.image, SpriteImage::Player(_)))
            .count();
        assert_eq!(players, 0);
    }

    #[test]
    fn test_hud_mirrors_state() {
        let state = GameState::new(3, Tuning::default());
        let hud = hud(&state);
        assert_eq!(hud.health, state.player.health);
        assert_eq!(hud.sharks, state.sharks.len());
        assert_eq!(hud.bubbles, 0);
    }

    #[test]
    fn test_drift_particles_stay_on_screen() {
        for elapsed in [0.0, 1.5, 120.7, 10_000.0] {
            for (pos, size) in drift_particles(elapsed) {
                assert!((0.0..WIDTH).contains(&pos.x));
                assert!((0.0..HEIGHT).contains(&pos.y));
                assert!(size >= 1.0);
            }
        }
    }
}
