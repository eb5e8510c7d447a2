//! Deterministic simulation module
//!
//! All gameplay logic lives here, free of rendering, audio, and input
//! dependencies: the host calls `tick` once per rendered frame and reads
//! the state back out through `view`. Randomness comes from a single
//! seeded generator owned by `GameState`.

pub mod grid;
pub mod pickup;
pub mod player;
pub mod shark;
pub mod sprite;
pub mod state;
pub mod tick;

pub use grid::{DecorKind, Decoration, OceanFloor};
pub use pickup::Bubble;
pub use player::Player;
pub use shark::{Mood, Shark, SharkKind};
pub use sprite::{AnimationClock, Direction, GlideMotion, swim_offset};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
