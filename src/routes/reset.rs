//! `/api/wizard/reset` routes: the two-phase reset confirmation modal.
//!
//! A request only stages the reset and shows the modal in `#wizard-modal`.
//! Confirm and cancel re-render `#wizard` and clear the modal out of band.

use crate::error::HubError;
use crate::routes::util::{error_notice, escape_html, parse_form_body, require_param};
use crate::routes::wizard::view_after;
use crate::wizard::session::{dispatch, with_session};
use crate::wizard::{Action, ResetKind};

const CLEAR_MODAL: &str = r#"<div id="wizard-modal" hx-swap-oob="innerHTML"></div>"#;

// ── GET /api/wizard/reset ──────────────────────────────────────────

/// Handle GET /api/wizard/reset
/// Returns the modal for the pending reset, or nothing.
pub fn handle_get(_query: &str) -> String {
    with_session(|s| s.pending_reset).map(render_modal).unwrap_or_default()
}

// ── POST /api/wizard/reset ─────────────────────────────────────────

/// Handle POST /api/wizard/reset
/// Body params:
///   - action=request&kind={plan|location} → stage a reset, returns the modal
///   - action=confirm                      → apply it, returns the view
///   - action=cancel                       → drop it, returns the view
pub fn handle_post(body: &str) -> String {
    let params = parse_form_body(body);
    let action = match require_param(&params, "action") {
        Ok(a) => a,
        Err(e) => return modal_error(&e),
    };

    match action {
        "request" => {
            let staged = require_param(&params, "kind")
                .and_then(str::parse::<ResetKind>)
                .and_then(|kind| dispatch(Action::RequestReset(kind)).map(|()| kind));
            match staged {
                Ok(kind) => render_modal(kind),
                Err(e) => modal_error(&e),
            }
        }
        "confirm" => {
            let mut html = view_after(dispatch(Action::ConfirmReset));
            html.push_str(CLEAR_MODAL);
            html
        }
        "cancel" => {
            let mut html = view_after(dispatch(Action::CancelReset));
            html.push_str(CLEAR_MODAL);
            html
        }
        other => modal_error(&HubError::UnknownAction(other.to_string())),
    }
}

/// Errors from a request land in the modal slot, which is empty anyway.
fn modal_error(err: &HubError) -> String {
    log::warn!("reset request rejected: {}", err);
    error_notice(err)
}

fn render_modal(kind: ResetKind) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(
        r#"<div class="fixed inset-0 bg-black/80 backdrop-blur-sm z-50 flex items-center justify-center p-4">"#,
    );
    html.push_str(
        r#"<div class="bg-slate-800 w-full max-w-sm rounded-2xl border border-slate-600 shadow-2xl overflow-hidden"><div class="p-6 text-center">"#,
    );
    html.push_str(
        r#"<div class="w-16 h-16 bg-amber-500/20 text-amber-500 rounded-full flex items-center justify-center mx-auto mb-4 text-3xl">&#x26A0;</div>"#,
    );
    html.push_str(&format!(
        r#"<h2 class="text-xl font-bold text-white mb-2">{}</h2>"#,
        escape_html(kind.prompt_title())
    ));
    html.push_str(&format!(
        r#"<p class="text-slate-400 text-sm mb-6">{}</p>"#,
        escape_html(kind.prompt_message())
    ));
    html.push_str(r#"<div class="flex gap-3">"#);
    html.push_str(
        r##"<button hx-post="/api/wizard/reset" hx-vals='{"action":"cancel"}' hx-target="#wizard" hx-swap="innerHTML" class="flex-1 py-3 rounded-xl font-bold bg-slate-700 text-slate-200 hover:bg-slate-600 transition-colors">Cancel</button>"##,
    );
    html.push_str(
        r##"<button hx-post="/api/wizard/reset" hx-vals='{"action":"confirm"}' hx-target="#wizard" hx-swap="innerHTML" class="flex-1 py-3 rounded-xl font-bold bg-amber-500 text-amber-950 hover:bg-amber-400 transition-colors">Yes, Reset</button>"##,
    );
    html.push_str(r#"</div></div></div></div>"#);
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SetupType;
    use crate::wizard::session::reset_session;
    use crate::wizard::Phase;

    fn start() {
        reset_session();
        dispatch(Action::SelectLocation("shirley".to_string())).unwrap();
        dispatch(Action::SelectDiamond("d1".to_string())).unwrap();
        dispatch(Action::SelectSetupType(SetupType::ThreeCamCenterfield)).unwrap();
        dispatch(Action::Advance).unwrap();
    }

    #[test]
    fn nothing_pending_renders_nothing() {
        reset_session();
        assert!(handle_get("").is_empty());
    }

    #[test]
    fn request_stages_and_shows_modal() {
        start();
        let html = handle_post("action=request&kind=plan");
        assert!(html.contains("Change Game Plan?"));
        assert!(html.contains("Yes, Reset"));
        assert!(handle_get("").contains("Change Game Plan?"));
        with_session(|s| {
            assert_eq!(s.pending_reset, Some(ResetKind::Plan));
            assert_eq!(s.selection.screen_index, 1);
        });
        reset_session();
    }

    #[test]
    fn confirm_plan_returns_to_setup() {
        start();
        handle_post("action=request&kind=plan");
        let html = handle_post("action=confirm");
        assert!(html.contains("Game Plan"));
        assert!(html.contains(r#"id="wizard-modal""#));
        with_session(|s| {
            assert_eq!(s.phase(), Phase::ChooseSetup);
            assert!(s.progress.is_none());
            assert!(s.pending_reset.is_none());
        });
        reset_session();
    }

    #[test]
    fn confirm_location_starts_over() {
        start();
        handle_post("action=request&kind=location");
        let html = handle_post("action=confirm");
        assert!(html.contains("Rebels Broadcast Hub"));
        with_session(|s| assert_eq!(s.phase(), Phase::ChooseLocation));
    }

    #[test]
    fn cancel_keeps_everything() {
        start();
        let before = with_session(Clone::clone);
        handle_post("action=request&kind=location");
        let html = handle_post("action=cancel");
        assert!(html.contains("Step 1: Dugout Hub"));
        with_session(|s| assert_eq!(*s, before));
        reset_session();
    }

    #[test]
    fn confirm_without_request_is_reported() {
        start();
        let html = handle_post("action=confirm");
        assert!(html.contains("no reset pending"));
        reset_session();
    }

    #[test]
    fn bad_requests_are_reported() {
        start();
        assert!(handle_post("action=request&kind=everything").contains("unknown reset kind: everything"));
        assert!(handle_post("action=request").contains("missing kind parameter"));
        assert!(handle_post("action=explode").contains("unknown action: explode"));
        assert!(handle_post("").contains("missing action parameter"));
        with_session(|s| assert!(s.pending_reset.is_none()));
        reset_session();
    }
}
