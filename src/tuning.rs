//! Data-driven game balance
//!
//! Per-kind shark parameters live in a const lookup table; global pacing
//! knobs live in `Tuning`, overridable from a JSON file next to the
//! binary.

use serde::{Deserialize, Serialize};

use crate::sim::SharkKind;

/// Tuned constants for one shark kind.
#[derive(Debug, Clone, Copy)]
pub struct SharkParams {
    /// Continuous movement speed, px/s.
    pub speed: f32,
    /// Seconds between AI re-decisions.
    pub decision_interval: f32,
    /// Pursue the player within this straight-line tile distance.
    pub aggro_radius: f32,
    /// Contact damage per bite.
    pub damage: i32,
    /// Max wander distance from the patrol center, tiles.
    pub patrol_radius: f32,
}

const REEF: SharkParams = SharkParams {
    speed: 40.0,
    decision_interval: 0.4,
    aggro_radius: 6.0,
    damage: 2,
    patrol_radius: 4.0,
};

const BULL: SharkParams = SharkParams {
    speed: 35.0,
    decision_interval: 0.8,
    aggro_radius: 6.0,
    damage: 4,
    patrol_radius: 4.0,
};

const GREAT_WHITE: SharkParams = SharkParams {
    speed: 30.0,
    decision_interval: 1.0,
    aggro_radius: 8.0,
    damage: 6,
    patrol_radius: 4.0,
};

const HAMMER: SharkParams = SharkParams {
    speed: 45.0,
    decision_interval: 1.5,
    aggro_radius: 6.0,
    damage: 25,
    patrol_radius: 4.0,
};

/// Parameter record for a shark kind.
pub fn shark_params(kind: SharkKind) -> &'static SharkParams {
    match kind {
        SharkKind::Reef => &REEF,
        SharkKind::Bull => &BULL,
        SharkKind::GreatWhite => &GREAT_WHITE,
        SharkKind::Hammer => &HAMMER,
    }
}

/// Spawn weights for mid-game shark arrivals, percent.
const SPAWN_WEIGHTS: [(SharkKind, u32); 4] = [
    (SharkKind::Reef, 40),
    (SharkKind::Bull, 30),
    (SharkKind::GreatWhite, 20),
    (SharkKind::Hammer, 10),
];

/// Roll a shark kind with the weighted distribution above.
pub fn weighted_kind(rng: &mut impl rand::Rng) -> SharkKind {
    let total: u32 = SPAWN_WEIGHTS.iter().map(|(_, w)| w).sum();
    let mut roll = rng.random_range(0..total);
    for (kind, weight) in SPAWN_WEIGHTS {
        if roll < weight {
            return kind;
        }
        roll -= weight;
    }
    // roll < total, so the loop always returns.
    SPAWN_WEIGHTS[0].0
}

/// Global pacing knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seconds between shark arrivals while below the cap.
    pub shark_spawn_interval: f32,
    /// Seconds between air-bubble spawns.
    pub bubble_spawn_interval: f32,
    /// Hard cap on the shark population.
    pub max_sharks: usize,
    /// Opening cast spawned on every restart.
    pub initial_cast: Vec<(SharkKind, u32)>,
    /// Manhattan spawn clearance around the player at restart, tiles.
    pub min_spawn_distance: i32,
    /// Manhattan clearance for mid-game arrivals, tiles.
    pub respawn_min_distance: i32,
    /// Health restored per bubble.
    pub heal_amount: i32,
    /// Player swim speed, px/s.
    pub player_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            shark_spawn_interval: 5.0,
            bubble_spawn_interval: 8.0,
            max_sharks: 50,
            initial_cast: vec![
                (SharkKind::Reef, 10),
                (SharkKind::Bull, 7),
                (SharkKind::GreatWhite, 3),
            ],
            min_spawn_distance: 4,
            respawn_min_distance: 8,
            heal_amount: 20,
            player_speed: 80.0,
        }
    }
}

impl Tuning {
    /// Override file path.
    const FILE: &'static str = "ocean_escape_tuning.json";

    /// Load overrides from the tuning file, falling back to defaults on
    /// any error.
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides from {}", Self::FILE);
                    tuning
                }
                Err(err) => {
                    log::warn!("Ignoring malformed {}: {err}", Self::FILE);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
