//! Checklist screen sequence as an explicit state machine.
//!
//! ```text
//! gear ──▶ dugout ──▶ centerfield ──▶ software ──▶ troubleshooting
//!                 │   (3cam_cf only)    ▲
//!                 └─────────────────────┘ (setup chosen, no bridge)
//! ```
//!
//! The active list is produced by walking `successor` from `Gear`, so the
//! list and the transitions can never disagree.

use serde::{Deserialize, Serialize};

use crate::catalog::SetupType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Gear,
    Dugout,
    Centerfield,
    Software,
    Troubleshooting,
}

impl Screen {
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Gear => "gear",
            Screen::Dugout => "dugout",
            Screen::Centerfield => "centerfield",
            Screen::Software => "software",
            Screen::Troubleshooting => "troubleshooting",
        }
    }

    /// Next screen for the given setup, or `None` at the end of the flow.
    pub fn successor(self, setup: Option<SetupType>) -> Option<Screen> {
        match (self, setup) {
            (Screen::Gear, _) => Some(Screen::Dugout),
            (Screen::Dugout, Some(SetupType::ThreeCamCenterfield)) => Some(Screen::Centerfield),
            (Screen::Dugout, Some(_)) => Some(Screen::Software),
            (Screen::Dugout, None) => None,
            (Screen::Centerfield, Some(_)) => Some(Screen::Software),
            (Screen::Centerfield, None) => None,
            (Screen::Software, _) => Some(Screen::Troubleshooting),
            (Screen::Troubleshooting, _) => None,
        }
    }
}

/// Ordered screens reachable for `setup`, starting at `Gear`.
pub fn active_screens(setup: Option<SetupType>) -> Vec<Screen> {
    let mut screens = vec![Screen::Gear];
    let mut current = Screen::Gear;
    while let Some(next) = current.successor(setup) {
        screens.push(next);
        current = next;
    }
    screens
}

/// Clamp `index` into the active list.
pub fn screen_at(setup: Option<SetupType>, index: usize) -> Screen {
    let screens = active_screens(setup);
    let last = screens.len() - 1;
    screens[index.min(last)]
}

/// Index of the last active screen.
pub fn last_index(setup: Option<SetupType>) -> usize {
    active_screens(setup).len() - 1
}
