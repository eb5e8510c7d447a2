//! Game state, spawning, and restart
//!
//! The controller exclusively owns the floor and every entity
//! collection; sharks see the player only as a tile snapshot passed in
//! per tick. Spawn placement is rejection sampling with bounded
//! attempts - a dry run is skipped, never retried or surfaced.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::grid::OceanFloor;
use super::pickup::Bubble;
use super::player::Player;
use super::shark::{Shark, SharkKind};
use crate::consts::{GRID_HEIGHT, GRID_WIDTH};
use crate::tuning::{self, Tuning};

/// Current phase of gameplay; exactly one active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title menu
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended; waiting for a restart
    GameOver,
}

/// Things that happened during a tick, drained by the frontend for the
/// audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The player committed a direction change.
    SwimStroke,
    /// A shark landed a bite.
    SharkBite(SharkKind),
    /// An air bubble was collected.
    BubbleCollected,
    /// Health hit zero.
    GameOver,
    /// A menu action was taken.
    MenuSelect,
}

/// Rejection-sampling attempt limits.
const RESTART_SPAWN_ATTEMPTS: u32 = 50;
const SHARK_SPAWN_ATTEMPTS: u32 = 20;
const BUBBLE_SPAWN_ATTEMPTS: u32 = 30;

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub floor: OceanFloor,
    pub player: Player,
    pub sharks: Vec<Shark>,
    pub bubbles: Vec<Bubble>,
    /// Session clock across all phases; drives the background drift.
    pub elapsed: f32,
    /// Time spent on the game-over screen.
    pub game_over_timer: f32,
    pub shark_spawn_timer: f32,
    pub bubble_spawn_timer: f32,
    pub tuning: Tuning,
    /// Events accumulated during the current tick.
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a state seeded for one session: floor generated, world
    /// populated behind the menu.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let floor = OceanFloor::generate(&mut rng);
        let player_speed = tuning.player_speed;
        let mut state = Self {
            phase: GamePhase::Menu,
            floor,
            player: Player::new(1, 1, player_speed),
            sharks: Vec::new(),
            bubbles: Vec::new(),
            elapsed: 0.0,
            game_over_timer: 0.0,
            shark_spawn_timer: 0.0,
            bubble_spawn_timer: 0.0,
            tuning,
            events: Vec::new(),
            rng,
        };
        state.restart();
        state
    }

    /// Re-seed the world: fresh player on a walkable tile, the opening
    /// shark cast at a safe distance, no bubbles, timers zeroed.
    pub fn restart(&mut self) {
        loop {
            let x = self.rng.random_range(1..GRID_WIDTH - 1);
            let y = self.rng.random_range(1..GRID_HEIGHT - 1);
            if self.floor.is_walkable(x, y) {
                self.player = Player::new(x, y, self.tuning.player_speed);
                break;
            }
        }

        self.sharks.clear();
        let cast = self.tuning.initial_cast.clone();
        let clearance = self.tuning.min_spawn_distance;
        for (kind, count) in cast {
            for _ in 0..count {
                if let Some((x, y)) = self.sample_shark_tile(RESTART_SPAWN_ATTEMPTS, clearance) {
                    let shark = Shark::new(x, y, kind, &mut self.rng);
                    self.sharks.push(shark);
                }
            }
        }

        self.bubbles.clear();
        self.shark_spawn_timer = 0.0;
        self.bubble_spawn_timer = 0.0;
        self.game_over_timer = 0.0;
    }

    /// Rejection-sample an interior tile that is walkable and more than
    /// `min_manhattan` tiles from the player.
    fn sample_shark_tile(&mut self, attempts: u32, min_manhattan: i32) -> Option<(i32, i32)> {
        let (px, py) = self.player.tile;
        for _ in 0..attempts {
            let x = self.rng.random_range(2..GRID_WIDTH - 2);
            let y = self.rng.random_range(2..GRID_HEIGHT - 2);
            if self.floor.is_walkable(x, y) && (x - px).abs() + (y - py).abs() > min_manhattan {
                return Some((x, y));
            }
        }
        None
    }

    /// Mid-game shark arrival: weighted kind, farther clearance.
    pub fn spawn_shark(&mut self) {
        let kind = tuning::weighted_kind(&mut self.rng);
        let clearance = self.tuning.respawn_min_distance;
        if let Some((x, y)) = self.sample_shark_tile(SHARK_SPAWN_ATTEMPTS, clearance) {
            let shark = Shark::new(x, y, kind, &mut self.rng);
            self.sharks.push(shark);
        }
    }

    /// Air bubble on a free tile away from the player and every other
    /// entity.
    pub fn spawn_bubble(&mut self) {
        for _ in 0..BUBBLE_SPAWN_ATTEMPTS {
            let x = self.rng.random_range(1..GRID_WIDTH - 1);
            let y = self.rng.random_range(1..GRID_HEIGHT - 1);
            if !self.floor.is_walkable(x, y) || (x, y) == self.player.tile {
                continue;
            }
            let occupied = self.sharks.iter().any(|s| s.tile == (x, y))
                || self.bubbles.iter().any(|b| b.tile == (x, y));
            if !occupied {
                self.bubbles.push(Bubble::new(x, y));
                return;
            }
        }
    }

    /// Take this tick's events, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(99, Tuning::default())
    }

    #[test]
    fn test_new_state_starts_in_menu_with_a_populated_world() {
        let state = state();
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(!state.sharks.is_empty());
        assert!(state.bubbles.is_empty());
        assert!(state.player.alive);
    }

    #[test]
    fn test_restart_places_player_on_walkable_tile() {
        for seed in 0..20 {
            let state = GameState::new(seed, Tuning::default());
            let (x, y) = state.player.tile;
            assert!(state.floor.is_walkable(x, y), "seed {seed}");
        }
    }

    #[test]
    fn test_restart_keeps_sharks_clear_of_player() {
        for seed in 0..20 {
            let state = GameState::new(seed, Tuning::default());
            let (px, py) = state.player.tile;
            let clearance = state.tuning.min_spawn_distance;
            for shark in &state.sharks {
                let (sx, sy) = shark.tile;
                assert!(
                    (sx - px).abs() + (sy - py).abs() > clearance,
                    "seed {seed}: shark at {:?} too close to player {:?}",
                    shark.tile,
                    state.player.tile,
                );
            }
        }
    }

    #[test]
    fn test_restart_cast_matches_composition() {
        let state = state();
        // Up to 20 sharks; dropped members are the only allowed shortfall.
        let expected: u32 = state.tuning.initial_cast.iter().map(|(_, n)| n).sum();
        assert!(state.sharks.len() as u32 <= expected);
        assert!(!state.sharks.is_empty());
    }

    #[test]
    fn test_restart_clears_bubbles_and_timers() {
        let mut state = state();
        state.bubbles.push(Bubble::new(5, 5));
        state.shark_spawn_timer = 3.0;
        state.bubble_spawn_timer = 7.0;
        state.game_over_timer = 2.0;

        state.restart();
        assert!(state.bubbles.is_empty());
        assert_eq!(state.shark_spawn_timer, 0.0);
        assert_eq!(state.bubble_spawn_timer, 0.0);
        assert_eq!(state.game_over_timer, 0.0);
    }

    #[test]
    fn test_spawned_bubble_avoids_occupied_tiles() {
        let mut state = state();
        for _ in 0..10 {
            state.spawn_bubble();
        }
        for bubble in &state.bubbles {
            assert!(state.floor.is_walkable(bubble.tile.0, bubble.tile.1));
            assert_ne!(bubble.tile, state.player.tile);
            assert!(state.sharks.iter().all(|s| s.tile != bubble.tile));
        }
        // No two bubbles share a tile.
        for (i, a) in state.bubbles.iter().enumerate() {
            for b in &state.bubbles[i + 1..] {
                assert_ne!(a.tile, b.tile);
            }
        }
    }

    #[test]
    fn test_drain_events_empties_the_queue() {
        let mut state = state();
        state.events.push(GameEvent::MenuSelect);
        let events = state.drain_events();
        assert_eq!(events, vec![GameEvent::MenuSelect]);
        assert!(state.events.is_empty());
    }
}
