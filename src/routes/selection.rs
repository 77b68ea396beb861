//! `/api/wizard/{location,diamond,setup}` routes and the three selection
//! views that come before the checklist.

use crate::catalog::{LOCATIONS, SetupType};
use crate::routes::util::{escape_html, get_param, parse_form_body, require_param};
use crate::routes::wizard::view_after;
use crate::wizard::session::dispatch;
use crate::wizard::{Action, WizardState};

// ── POST /api/wizard/location ──────────────────────────────────────

/// Handle POST /api/wizard/location
/// Body params:
///   - id={location}  → select a location (clears diamond, setup, progress)
///   - action=clear   → back to the location list
pub fn handle_location_post(body: &str) -> String {
    let params = parse_form_body(body);
    let result = if get_param(&params, "action") == Some("clear") {
        dispatch(Action::ClearLocation)
    } else {
        require_param(&params, "id").and_then(|id| dispatch(Action::SelectLocation(id.to_string())))
    };
    view_after(result)
}

// ── POST /api/wizard/diamond ───────────────────────────────────────

/// Handle POST /api/wizard/diamond
/// Body params:
///   - id={diamond}   → select a diamond at the current location
///   - action=clear   → back to the diamond list
pub fn handle_diamond_post(body: &str) -> String {
    let params = parse_form_body(body);
    let result = if get_param(&params, "action") == Some("clear") {
        dispatch(Action::ClearDiamond)
    } else {
        require_param(&params, "id").and_then(|id| dispatch(Action::SelectDiamond(id.to_string())))
    };
    view_after(result)
}

// ── POST /api/wizard/setup ─────────────────────────────────────────

/// Handle POST /api/wizard/setup
/// Body: type={1cam|2cam|3cam_nocf|3cam_cf}
/// Builds a fresh checklist and opens the gear screen.
pub fn handle_setup_post(body: &str) -> String {
    let params = parse_form_body(body);
    let result = require_param(&params, "type")
        .and_then(|t| t.parse::<SetupType>())
        .and_then(|setup| dispatch(Action::SelectSetupType(setup)));
    view_after(result)
}

// ── Views ──────────────────────────────────────────────────────────

const PAGE_OPEN: &str = r#"<div class="max-w-md mx-auto pt-4">"#;

fn back_button(path: &str, label: &str) -> String {
    format!(
        r##"<button hx-post="{}" hx-vals='{{"action":"clear"}}' hx-target="#wizard" hx-swap="innerHTML" class="flex items-center text-slate-400 hover:text-white text-sm mb-6 transition-colors">&#x2039; {}</button>"##,
        path, label
    )
}

/// One clickable option card.
fn option_card(
    path: &str,
    field: &str,
    value: &str,
    title: &str,
    desc: &str,
    highlight: bool,
    badge: Option<&str>,
) -> String {
    let border = if highlight {
        "border-amber-500 shadow-amber-900/20"
    } else {
        "border-slate-700 hover:border-emerald-500"
    };
    let mut html = String::with_capacity(512);
    html.push_str(&format!(
        r##"<div hx-post="{}" hx-vals='{{"{}":"{}"}}' hx-target="#wizard" hx-swap="innerHTML" class="wizard-option bg-slate-800 border-2 {} rounded-2xl p-5 cursor-pointer flex items-center">"##,
        path,
        field,
        escape_html(value),
        border
    ));
    html.push_str(r#"<div class="flex-grow">"#);
    html.push_str(&format!(
        r#"<h3 class="text-white font-bold text-lg">{}</h3>"#,
        escape_html(title)
    ));
    html.push_str(&format!(
        r#"<p class="text-slate-400 text-sm mt-1">{}</p>"#,
        escape_html(desc)
    ));
    if let Some(badge) = badge {
        html.push_str(&format!(
            r#"<div class="mt-2 inline-flex items-center px-2 py-1 rounded text-xs font-medium bg-slate-900 text-slate-300">Staff needed: {}</div>"#,
            escape_html(badge)
        ));
    }
    html.push_str(r#"</div><div class="ml-auto text-slate-500 pl-2">&#x2192;</div></div>"#);
    html
}

/// Location list: the very first view.
pub fn render_locations() -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<div class="max-w-md mx-auto pt-8">"#);
    html.push_str(r#"<div class="mb-8 text-center">"#);
    html.push_str(
        r#"<h1 class="text-3xl font-bold bg-gradient-to-r from-emerald-400 to-amber-400 bg-clip-text text-transparent mb-2">Rebels Broadcast Hub</h1>"#,
    );
    html.push_str(
        r#"<p class="text-slate-400">Professional setup guide for Rebels Softball Club live streams.</p>"#,
    );
    html.push_str(r#"</div>"#);
    html.push_str(
        r#"<div class="mb-6 p-4 bg-emerald-950/20 border border-emerald-500/20 rounded-2xl text-center"><p class="text-emerald-400 font-medium text-sm">Select your location to begin the setup wizard.</p></div>"#,
    );
    html.push_str(r#"<div class="space-y-3">"#);
    for loc in LOCATIONS {
        html.push_str(&option_card(
            "/api/wizard/location",
            "id",
            loc.id,
            loc.title,
            loc.desc,
            false,
            None,
        ));
    }
    html.push_str(r#"</div></div>"#);
    html
}

/// Diamond list for the selected location.
pub fn render_diamonds(state: &WizardState) -> String {
    let Some(location) = state.location() else {
        return render_locations();
    };

    let mut html = String::with_capacity(2048);
    html.push_str(PAGE_OPEN);
    html.push_str(&back_button("/api/wizard/location", "Change Location"));
    html.push_str(r#"<div class="mb-8">"#);
    html.push_str(
        r#"<h1 class="text-3xl font-bold bg-gradient-to-r from-emerald-400 to-amber-400 bg-clip-text text-transparent mb-2">Select Diamond</h1>"#,
    );
    html.push_str(&format!(
        r#"<p class="text-slate-400">Which diamond at <strong>{}</strong> are you using?</p>"#,
        escape_html(location.title)
    ));
    html.push_str(r#"</div><div class="space-y-3">"#);
    for diamond in location.diamonds {
        // Powered diamonds stand out: wall chargers change the gear list.
        html.push_str(&option_card(
            "/api/wizard/diamond",
            "id",
            diamond.id,
            diamond.title,
            diamond.desc,
            diamond.has_power,
            None,
        ));
    }
    html.push_str(r#"</div></div>"#);
    html
}

/// Setup tier list with the diamond advisory.
pub fn render_setups(state: &WizardState) -> String {
    let (Some(location), Some(diamond)) = (state.location(), state.diamond()) else {
        return render_diamonds(state);
    };

    let mut html = String::with_capacity(4096);
    html.push_str(PAGE_OPEN);
    html.push_str(&back_button("/api/wizard/diamond", "Change Diamond"));
    html.push_str(r#"<div class="mb-6">"#);
    html.push_str(
        r#"<h1 class="text-3xl font-bold bg-gradient-to-r from-emerald-400 to-amber-400 bg-clip-text text-transparent mb-2">Game Plan</h1>"#,
    );
    html.push_str(&format!(
        r#"<p class="text-slate-400">Select the camera configuration for today's stream at <strong>{} - {}</strong>.</p>"#,
        escape_html(location.title),
        escape_html(diamond.title)
    ));
    html.push_str(r#"</div>"#);

    // Diamond advisory
    html.push_str(r#"<div class="mb-6 p-4 bg-slate-800 border border-slate-700 rounded-2xl">"#);
    html.push_str(r#"<h3 class="font-bold text-amber-400 mb-2">Diamond Advisory</h3>"#);
    html.push_str(&format!(
        r#"<p class="text-slate-300 text-sm mb-2">{}</p>"#,
        escape_html(diamond.desc)
    ));
    if diamond.has_power {
        html.push_str(
            r#"<p class="text-emerald-400 text-sm">This diamond has <strong>240v power access</strong>! You can use wall chargers for the main hub.</p>"#,
        );
    } else {
        html.push_str(
            r#"<p class="text-amber-300 text-sm">No 240v power at the backnet. <strong>Power banks are required</strong> for all devices.</p>"#,
        );
    }
    html.push_str(&format!(
        r#"<div class="mt-3 pt-3 border-t border-slate-700"><p class="text-xs text-slate-500 uppercase">Recommended Setup</p><p class="font-bold text-white">{}</p></div>"#,
        diamond.recommended_setup.title()
    ));
    html.push_str(r#"</div>"#);

    html.push_str(r#"<div class="space-y-3">"#);
    for setup in SetupType::ALL {
        html.push_str(&option_card(
            "/api/wizard/setup",
            "type",
            setup.as_str(),
            setup.title(),
            setup.summary(),
            setup == diamond.recommended_setup,
            Some(setup.crew()),
        ));
    }
    html.push_str(r#"</div></div>"#);
    html
}
