//! Ocean Escape - a grid-based ocean survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, entities, AI, game state)
//! - `tuning`: Data-driven game balance
//! - `view`: Draw-list snapshots for the host renderer
//! - `ui`: Menu layout and mouse hit testing
//! - `audio`: Sim event to sound cue mapping over a host playback backend
//! - `settings`: User preferences

pub mod audio;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;
pub mod view;

pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Edge length of one grid tile in pixels
    pub const GRID_SIZE: f32 = 32.0;

    /// Playfield dimensions in pixels
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Playfield dimensions in tiles
    pub const GRID_WIDTH: i32 = (WIDTH / GRID_SIZE) as i32;
    pub const GRID_HEIGHT: i32 = (HEIGHT / GRID_SIZE) as i32;
}

/// Top-left pixel of a tile
#[inline]
pub fn tile_to_world(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32 * consts::GRID_SIZE, y as f32 * consts::GRID_SIZE)
}

/// Tile containing a world position (floor division)
#[inline]
pub fn world_to_tile(pos: Vec2) -> (i32, i32) {
    (
        (pos.x / consts::GRID_SIZE).floor() as i32,
        (pos.y / consts::GRID_SIZE).floor() as i32,
    )
}

/// Center of a tile, where sprite anchors sit
#[inline]
pub fn tile_center(x: i32, y: i32) -> Vec2 {
    tile_to_world(x, y) + Vec2::splat(consts::GRID_SIZE / 2.0)
}
