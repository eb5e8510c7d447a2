//! Menu layout and mouse hit testing
//!
//! Geometry only; the host draws the buttons and reports clicks back
//! through `hit_test`. Toggle labels are composed by the host from the
//! current settings.

use glam::Vec2;

/// Axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    ToggleMusic,
    ToggleSounds,
    Quit,
}

/// A clickable menu entry.
pub struct MenuButton {
    pub rect: Rect,
    pub action: MenuAction,
    pub label: &'static str,
}

const BUTTON: (f32, f32) = (200.0, 50.0);

pub const MENU_BUTTONS: [MenuButton; 4] = [
    MenuButton {
        rect: Rect { x: 300.0, y: 200.0, w: BUTTON.0, h: BUTTON.1 },
        action: MenuAction::Start,
        label: "Start Game",
    },
    MenuButton {
        rect: Rect { x: 300.0, y: 270.0, w: BUTTON.0, h: BUTTON.1 },
        action: MenuAction::ToggleMusic,
        label: "Music",
    },
    MenuButton {
        rect: Rect { x: 300.0, y: 340.0, w: BUTTON.0, h: BUTTON.1 },
        action: MenuAction::ToggleSounds,
        label: "Sounds",
    },
    MenuButton {
        rect: Rect { x: 300.0, y: 410.0, w: BUTTON.0, h: BUTTON.1 },
        action: MenuAction::Quit,
        label: "Exit",
    },
];

/// Resolve a mouse click against the menu.
pub fn hit_test(pos: Vec2) -> Option<MenuAction> {
    MENU_BUTTONS
        .iter()
        .find(|b| b.rect.contains(pos))
        .map(|b| b.action)
}
