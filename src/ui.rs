//! Title menu layout
//!
//! Four stacked buttons, centered horizontally. Hit-testing turns a click
//! into the [`MenuAction`] the session understands.

use glam::Vec2;

use crate::sim::{MenuAction, Rect};

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 50.0;
/// Top of the first button
pub const FIRST_BUTTON_Y: f32 = 250.0;
/// Vertical distance between button tops
pub const BUTTON_STRIDE: f32 = 70.0;

const BUTTON_ORDER: [MenuAction; 4] = [
    MenuAction::Start,
    MenuAction::ToggleMusic,
    MenuAction::ToggleSound,
    MenuAction::Exit,
];

/// Button rectangles for a given viewport width
#[derive(Debug, Clone)]
pub struct MenuLayout {
    buttons: [(MenuAction, Rect); 4],
}

impl MenuLayout {
    pub fn new(viewport_width: f32) -> Self {
        let x = viewport_width / 2.0 - BUTTON_WIDTH / 2.0;
        let mut slot = 0.0;
        let buttons = BUTTON_ORDER.map(|action| {
            let y = FIRST_BUTTON_Y + slot * BUTTON_STRIDE;
            slot += 1.0;
            (action, Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT))
        });
        Self { buttons }
    }

    pub fn buttons(&self) -> &[(MenuAction, Rect)] {
        &self.buttons
    }

    /// Action under the cursor; button edges count as inside
    pub fn hit_test(&self, pos: Vec2) -> Option<MenuAction> {
        self.buttons
            .iter()
            .find(|(_, r)| {
                pos.x >= r.left() && pos.x <= r.right() && pos.y >= r.top() && pos.y <= r.bottom()
            })
            .map(|(action, _)| *action)
    }
}
