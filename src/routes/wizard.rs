//! `/api/wizard` routes: the current view and the JSON state snapshot.
//!
//! The host page holds a `#wizard` container that loads `GET /api/wizard`
//! once and is re-swapped by every wizard POST. Modals go into
//! `#wizard-modal`.

use crate::error::HubError;
use crate::routes::util::error_notice;
use crate::routes::{checklist, selection, vault};
use crate::wizard::session::{export_session_json, with_session};
use crate::wizard::{Phase, WizardState};

// ── GET /api/wizard ────────────────────────────────────────────────

/// Handle GET /api/wizard
/// Returns whichever view the session currently calls for.
pub fn handle_view_get(_query: &str) -> String {
    render_view()
}

// ── GET /api/wizard/state ──────────────────────────────────────────

/// Handle GET /api/wizard/state
/// Returns the session and its derived gear list, screens and guard as JSON.
pub fn handle_state_get(_query: &str) -> String {
    export_session_json()
}

/// Render the view for the live session.
pub fn render_view() -> String {
    with_session(render_state)
}

/// Render the view for `state`. Every phase ends with the vault button.
pub fn render_state(state: &WizardState) -> String {
    let mut html = match state.phase() {
        Phase::ChooseLocation => selection::render_locations(),
        Phase::ChooseDiamond => selection::render_diamonds(state),
        Phase::ChooseSetup => selection::render_setups(state),
        Phase::Checklist(screen) => checklist::render_checklist(state, screen),
    };
    html.push_str(&vault::vault_button());
    html
}

/// Re-render after a dispatched action, prefixing a notice if it was
/// rejected. Stale toggles are already logged by `dispatch` and render
/// the plain view.
pub fn view_after(result: Result<(), HubError>) -> String {
    match result {
        Ok(()) | Err(HubError::NoProgress | HubError::IndexOutOfRange { .. }) => render_view(),
        Err(e) => {
            let mut html = error_notice(&e);
            html.push_str(&render_view());
            html
        }
    }
}
