//! Per-frame simulation advance
//!
//! One `tick` per rendered frame, driven from outside. Order within a
//! playing tick: time and decorations, player, spawn cadence, sharks,
//! bubbles, shark contact, bubble pickup.

use super::sprite::Direction;
use super::state::{GameEvent, GamePhase, GameState};

/// Discrete input events gathered since the previous frame. Delivered
/// once per occurrence, never polled.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Directional key pressed this frame.
    pub direction: Option<Direction>,
    /// Space: restart from the game-over screen.
    pub confirm: bool,
    /// Escape: back to the menu.
    pub escape: bool,
    /// Menu start action (resolved from a click by the host).
    pub start: bool,
}

/// Advance the game by one frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.elapsed += dt;
    // Decorations animate in every phase - the ocean sways behind the
    // menu too.
    state.floor.update(dt);

    match state.phase {
        GamePhase::Menu => {
            if input.start {
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::MenuSelect);
            }
        }
        GamePhase::Playing => update_playing(state, input, dt),
        GamePhase::GameOver => {
            state.game_over_timer += dt;
            if input.confirm {
                state.restart();
                state.phase = GamePhase::Playing;
            }
        }
    }
}

fn update_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.player.alive {
        if input.escape {
            state.phase = GamePhase::Menu;
            return;
        }
        if let Some(dir) = input.direction {
            state.player.set_direction(dir);
            state.events.push(GameEvent::SwimStroke);
        }

        state.player.update(dt, &state.floor);

        state.shark_spawn_timer += dt;
        if state.shark_spawn_timer >= state.tuning.shark_spawn_interval
            && state.sharks.len() < state.tuning.max_sharks
        {
            state.shark_spawn_timer = 0.0;
            state.spawn_shark();
        }

        state.bubble_spawn_timer += dt;
        if state.bubble_spawn_timer >= state.tuning.bubble_spawn_interval {
            state.bubble_spawn_timer = 0.0;
            state.spawn_bubble();
        }
    }

    let player_tile = state.player.tile;

    let floor = &state.floor;
    let rng = &mut state.rng;
    for shark in &mut state.sharks {
        shark.update(dt, floor, player_tile, rng);
    }

    for bubble in &mut state.bubbles {
        bubble.update(dt);
    }

    resolve_shark_contact(state);
    resolve_bubble_pickup(state);
}

/// Same-tile shark contact. Tired sharks are inert; a landed bite costs
/// the kind's damage and puts the shark to rest. The run ends exactly
/// once, on the bite that empties the health bar.
fn resolve_shark_contact(state: &mut GameState) {
    if !state.player.alive {
        return;
    }
    for shark in &mut state.sharks {
        if shark.tile != state.player.tile || shark.is_tired() {
            continue;
        }

        state.player.take_damage(shark.kind.params().damage);
        shark.bite();
        state.events.push(GameEvent::SharkBite(shark.kind));

        if !state.player.alive {
            state.phase = GamePhase::GameOver;
            state.game_over_timer = 0.0;
            state.events.push(GameEvent::GameOver);
            break;
        }
    }
}

/// Same-tile bubble pickup: heal and remove, exactly once per bubble.
fn resolve_bubble_pickup(state: &mut GameState) {
    if !state.player.alive {
        return;
    }
    let tile = state.player.tile;
    let before = state.bubbles.len();
    state.bubbles.retain(|b| b.tile != tile);
    for _ in state.bubbles.len()..before {
        state.player.heal(state.tuning.heal_amount);
        state.events.push(GameEvent::BubbleCollected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::OceanFloor;
    use crate::sim::pickup::Bubble;
    use crate::sim::player::{MAX_HEALTH, Player};
    use crate::sim::shark::{Mood, Shark, SharkKind, TIRED_DURATION};
    use crate::tuning::Tuning;

    const DT: f32 = 1.0 / 60.0;

    /// Playing state on a border-only floor with a controlled cast: the
    /// player pinned against the west wall, no sharks, no bubbles.
    fn playing_state() -> GameState {
        let mut state = GameState::new(7, Tuning::default());
        state.floor = OceanFloor::open();
        state.phase = GamePhase::Playing;
        state.player = Player::new(1, 5, state.tuning.player_speed);
        state.player.set_direction(Direction::Left);
        state.sharks.clear();
        state.bubbles.clear();
        state.drain_events();
        state
    }

    fn shark_at(state: &mut GameState, x: i32, y: i32, kind: SharkKind) {
        let mut shark = Shark::new(x, y, kind, &mut state.rng);
        // Heading down keeps the derived tile stable for a while (the
        // tile comes from the sprite's top-left corner).
        shark.direction = Direction::Down;
        state.sharks.push(shark);
    }

    #[test]
    fn test_menu_start_begins_play() {
        let mut state = GameState::new(7, Tuning::default());
        assert_eq!(state.phase, GamePhase::Menu);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Menu);

        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.drain_events().contains(&GameEvent::MenuSelect));
    }

    #[test]
    fn test_escape_returns_to_menu() {
        let mut state = playing_state();
        let input = TickInput {
            escape: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_reef_bite_costs_two_and_tires_the_shark() {
        let mut state = playing_state();
        shark_at(&mut state, 1, 5, SharkKind::Reef);

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.player.health, 98);
        assert!(state.sharks[0].is_tired());
        assert_eq!(state.sharks[0].mood, Mood::Tired { elapsed: 0.0 });
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::SharkBite(SharkKind::Reef))
        );
    }

    #[test]
    fn test_tired_shark_cannot_bite() {
        let mut state = playing_state();
        shark_at(&mut state, 1, 5, SharkKind::Reef);
        state.sharks[0].bite();

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.player.health, MAX_HEALTH);
    }

    #[test]
    fn test_bites_from_one_shark_are_spaced_by_fatigue() {
        let mut state = playing_state();
        shark_at(&mut state, 1, 5, SharkKind::Reef);

        let dt = 0.1;
        let mut time = 0.0;
        let mut bite_times = Vec::new();
        for _ in 0..300 {
            tick(&mut state, &TickInput::default(), dt);
            time += dt;
            for event in state.drain_events() {
                if matches!(event, GameEvent::SharkBite(_)) {
                    bite_times.push(time);
                }
            }
        }

        assert!(bite_times.len() >= 2, "expected repeated bites");
        for pair in bite_times.windows(2) {
            assert!(
                pair[1] - pair[0] >= TIRED_DURATION,
                "bites at {:.2} and {:.2} closer than the fatigue window",
                pair[0],
                pair[1],
            );
        }
    }

    #[test]
    fn test_lethal_bite_ends_the_run_exactly_once() {
        let mut state = playing_state();
        state.player.health = 10;
        shark_at(&mut state, 1, 5, SharkKind::Hammer);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.player.health, 0);
        assert!(!state.player.alive);
        assert_eq!(state.phase, GamePhase::GameOver);
        let deaths = state
            .drain_events()
            .iter()
            .filter(|e| **e == GameEvent::GameOver)
            .count();
        assert_eq!(deaths, 1);

        // Repeated overlap ticks do not re-trigger anything.
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_game_over_timer_accumulates_until_restart() {
        let mut state = playing_state();
        state.player.health = 1;
        shark_at(&mut state, 1, 5, SharkKind::Reef);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        for _ in 0..60 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert!(state.game_over_timer > 0.9);

        let input = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.player.alive);
        assert_eq!(state.player.health, MAX_HEALTH);
        assert_eq!(state.game_over_timer, 0.0);
    }

    #[test]
    fn test_bubble_heals_and_disappears() {
        let mut state = playing_state();
        state.player.health = 50;
        state.bubbles.push(Bubble::new(1, 5));
        state.bubbles.push(Bubble::new(9, 9));

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.player.health, 70);
        assert_eq!(state.bubbles.len(), 1);
        assert_eq!(state.bubbles[0].tile, (9, 9));
        assert!(state.drain_events().contains(&GameEvent::BubbleCollected));
    }

    #[test]
    fn test_bubble_heal_caps_at_full_health() {
        let mut state = playing_state();
        state.player.health = 95;
        state.bubbles.push(Bubble::new(1, 5));

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.player.health, MAX_HEALTH);
    }

    #[test]
    fn test_shark_cadence_respects_cap() {
        let mut state = playing_state();
        state.tuning.max_sharks = 1;
        shark_at(&mut state, 9, 9, SharkKind::Reef);

        // Run well past several spawn intervals.
        for _ in 0..2000 {
            tick(&mut state, &TickInput::default(), DT);
            if state.phase != GamePhase::Playing {
                break;
            }
        }
        assert!(state.sharks.len() <= 1);
    }

    #[test]
    fn test_bubbles_spawn_on_cadence() {
        let mut state = playing_state();
        let interval = state.tuning.bubble_spawn_interval;

        let ticks = (interval / DT) as usize + 2;
        for _ in 0..ticks {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert_eq!(state.bubbles.len(), 1);
    }

    #[test]
    fn test_direction_request_emits_swim_stroke() {
        let mut state = playing_state();
        let input = TickInput {
            direction: Some(Direction::Up),
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert!(state.drain_events().contains(&GameEvent::SwimStroke));
        assert_eq!(state.player.direction, Direction::Up);
    }
}
