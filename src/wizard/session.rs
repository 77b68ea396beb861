//! Per-worker session store.
//!
//! Uses `thread_local!` + `RefCell` for mutable access in single-threaded
//! WASM. The Web Worker keeps the module alive, so the session lasts
//! across `handle_request` calls until the page is closed. Nothing is
//! written anywhere else.

use std::cell::RefCell;

use serde::Serialize;

use crate::error::HubError;
use crate::gear::GearConfiguration;
use crate::wizard::screens::Screen;
use crate::wizard::state::{Action, Phase, WizardState};

thread_local! {
    static SESSION: RefCell<WizardState> = RefCell::new(WizardState::default());
}

/// Execute a closure with read access to the session.
pub fn with_session<F, R>(f: F) -> R
where
    F: FnOnce(&WizardState) -> R,
{
    SESSION.with(|s| f(&s.borrow()))
}

/// Replace the whole session.
pub fn replace_session(state: WizardState) {
    SESSION.with(|s| {
        *s.borrow_mut() = state;
    });
}

/// Start over with an empty session.
pub fn reset_session() {
    replace_session(WizardState::default());
}

/// Run `action` through the reducer and store the result.
///
/// A rejected action is logged and leaves the session untouched; the error
/// is handed back so the view can mention it.
pub fn dispatch(action: Action) -> Result<(), HubError> {
    SESSION.with(|cell| {
        let next = cell.borrow().reduce(&action);
        match next {
            Ok(state) => {
                log_applied(&action, &state);
                *cell.borrow_mut() = state;
                Ok(())
            }
            Err(e) => {
                log::warn!("ignored {:?}: {}", action, e);
                Err(e)
            }
        }
    })
}

fn log_applied(action: &Action, state: &WizardState) {
    match action {
        Action::Toggle { .. } | Action::Advance | Action::Retreat => {
            log::debug!(
                "{:?} -> screen {} ({})",
                action,
                state.selection.screen_index,
                state.current_screen().as_str()
            );
        }
        _ => {
            log::info!(
                "{:?} -> location={:?} diamond={:?} setup={:?}",
                action,
                state.selection.location_id,
                state.selection.diamond_id,
                state.selection.setup_type
            );
        }
    }
}

/// Everything the view layer reads, in one serializable value.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    #[serde(flatten)]
    pub state: WizardState,
    pub phase: Phase,
    pub gear: GearConfiguration,
    pub screens: Vec<Screen>,
    pub can_advance: bool,
}

impl SessionSnapshot {
    pub fn of(state: &WizardState) -> Self {
        Self {
            state: state.clone(),
            phase: state.phase(),
            gear: state.gear_configuration(),
            screens: state.screens(),
            can_advance: state.can_advance(),
        }
    }
}

/// Export the session plus its derived views as JSON.
pub fn export_session_json() -> String {
    with_session(|state| {
        serde_json::to_string(&SessionSnapshot::of(state)).unwrap_or_else(|_| "{}".to_string())
    })
}
