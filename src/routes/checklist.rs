//! `/api/wizard/{toggle,nav}` routes and the checklist screens.

use crate::catalog::SetupType;
use crate::error::HubError;
use crate::gear::GearCategory;
use crate::routes::util::{escape_html, get_param, parse_form_body, require_param};
use crate::routes::vault::{COPY_SCRIPT, copy_button};
use crate::routes::wizard::view_after;
use crate::vault::DUGOUT_ROUTER_IP;
use crate::wizard::session::{dispatch, with_session};
use crate::wizard::steps::{CENTERFIELD_STEPS, ChecklistStep, DUGOUT_STEPS, SOFTWARE_STEPS};
use crate::wizard::{Action, Checklist, ResetKind, Screen, WizardState};

// ── POST /api/wizard/toggle ────────────────────────────────────────

/// Handle POST /api/wizard/toggle
/// Body: section={brain|hub|cameras|cables|bridge|dugout|centerfield|software}&index={n}
pub fn handle_toggle_post(body: &str) -> String {
    let params = parse_form_body(body);
    view_after(parse_toggle(&params).and_then(dispatch))
}

fn parse_toggle(params: &[(String, String)]) -> Result<Action, HubError> {
    let checklist: Checklist = require_param(params, "section")?.parse()?;
    let raw = require_param(params, "index")?;
    let index = raw
        .parse::<usize>()
        .map_err(|_| HubError::InvalidIndex(raw.to_string()))?;
    Ok(Action::Toggle { checklist, index })
}

// ── POST /api/wizard/nav ───────────────────────────────────────────

/// Handle POST /api/wizard/nav
/// Body: action={next|back}
///
/// `next` is refused while the current screen's checklist is incomplete;
/// the disabled button is the normal guard, this covers stale pages.
pub fn handle_nav_post(body: &str) -> String {
    let params = parse_form_body(body);
    let result = match get_param(&params, "action") {
        Some("next") => {
            if with_session(WizardState::can_advance) {
                dispatch(Action::Advance)
            } else {
                log::debug!("next refused: current screen incomplete");
                Ok(())
            }
        }
        Some("back") => dispatch(Action::Retreat),
        Some(other) => Err(HubError::UnknownAction(other.to_string())),
        None => Err(HubError::MissingParam("action")),
    };
    view_after(result)
}

// ── Views ──────────────────────────────────────────────────────────

/// Render the checklist screen `screen` with the step header.
pub fn render_checklist(state: &WizardState, screen: Screen) -> String {
    let screens = state.screens();
    let total = screens.len();
    let step = screens.iter().position(|&s| s == screen).unwrap_or(0) + 1;

    let mut html = String::with_capacity(8192);
    html.push_str(&render_header(step, total));
    html.push_str(r#"<div class="max-w-md mx-auto p-4"><div class="space-y-6">"#);
    match screen {
        Screen::Gear => render_gear(state, &mut html),
        Screen::Dugout => render_dugout(state, &mut html),
        Screen::Centerfield => render_centerfield(state, &mut html),
        Screen::Software => render_software(state, &mut html),
        Screen::Troubleshooting => render_troubleshooting(state, &mut html),
    }
    html.push_str(r#"</div></div>"#);
    html
}

/// Percentage width of the header progress bar.
pub fn progress_percent(step: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    step * 100 / total
}

fn render_header(step: usize, total: usize) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(r#"<header class="bg-slate-950 border-b border-slate-800 p-4">"#);
    html.push_str(r#"<div class="max-w-md mx-auto flex items-center gap-3">"#);
    html.push_str(&reset_request_button(
        ResetKind::Plan,
        r#"p-1.5 bg-slate-900 hover:bg-slate-800 rounded-lg text-slate-400 transition-colors" aria-label="Go Back"#,
        "&#x2039;",
    ));
    html.push_str(
        r#"<h1 class="text-xl font-bold bg-gradient-to-r from-emerald-400 to-amber-400 bg-clip-text text-transparent">Setup Guide</h1>"#,
    );
    html.push_str(r#"</div>"#);
    html.push_str(r#"<div class="max-w-md mx-auto mt-3">"#);
    html.push_str(&format!(
        r#"<span class="text-xs font-medium text-slate-400 uppercase tracking-wider">Step {} of {}</span>"#,
        step, total
    ));
    html.push_str(&format!(
        r#"<div class="w-full bg-slate-800 h-2 mt-4 rounded-full overflow-hidden"><div class="bg-emerald-500 h-full transition-all duration-500 ease-out" style="width: {}%"></div></div>"#,
        progress_percent(step, total)
    ));
    html.push_str(r#"</div></header>"#);
    html
}

fn reset_request_button(kind: ResetKind, class: &str, label: &str) -> String {
    format!(
        r##"<button hx-post="/api/wizard/reset" hx-vals='{{"action":"request","kind":"{}"}}' hx-target="#wizard-modal" hx-swap="innerHTML" class="{}">{}</button>"##,
        kind.as_str(),
        class,
        label
    )
}

fn screen_title(html: &mut String, title: &str, blurb: &str) {
    html.push_str(&format!(
        r#"<div><h2 class="text-2xl font-bold text-white mb-2">{}</h2><p class="text-slate-400">{}</p></div>"#,
        title, blurb
    ));
}

/// Collapsible note. `tone` is one of the three palettes below.
fn accordion(html: &mut String, tone: &str, title: &str, body: &str) {
    let colors = match tone {
        "warning" => "bg-amber-950/30 border-amber-800/50 text-amber-200",
        "success" => "bg-emerald-950/30 border-emerald-800/50 text-emerald-200",
        _ => "bg-slate-800 border-slate-700 text-slate-200",
    };
    html.push_str(&format!(
        r#"<details class="mb-4 rounded-xl border {} overflow-hidden"><summary class="p-4 font-bold cursor-pointer">{}</summary><div class="p-4 pt-0 text-sm leading-relaxed space-y-2">{}</div></details>"#,
        colors, title, body
    ));
}

fn toggle_vals(checklist: Checklist, index: usize) -> String {
    format!(
        r##"hx-post="/api/wizard/toggle" hx-vals='{{"section":"{}","index":"{}"}}' hx-target="#wizard" hx-swap="innerHTML""##,
        checklist.as_str(),
        index
    )
}

fn check_icon(done: bool) -> &'static str {
    if done {
        r#"<span class="text-emerald-400">&#x2714;</span>"#
    } else {
        r#"<span class="text-slate-500">&#x25CB;</span>"#
    }
}

fn render_steps(html: &mut String, state: &WizardState, checklist: Checklist, steps: &[ChecklistStep]) {
    let flags = state
        .progress
        .as_ref()
        .map(|p| p.items(checklist))
        .unwrap_or(&[]);
    html.push_str(r#"<div class="space-y-1 mt-4">"#);
    for (i, step) in steps.iter().enumerate() {
        let done = flags.get(i).copied().unwrap_or(false);
        let border = if done {
            "bg-emerald-900/20 border-emerald-500/50"
        } else {
            "bg-slate-800 border-slate-700 hover:border-slate-500"
        };
        html.push_str(&format!(
            r#"<div {} class="checklist-item flex items-center p-4 mb-3 rounded-xl cursor-pointer transition-all duration-200 border-2 {}"><div class="flex-shrink-0 mr-4 text-2xl">{}</div><div class="flex-grow"><h3 class="font-semibold text-lg {}">{}</h3><p class="text-sm mt-1 leading-relaxed text-slate-400">{}</p></div></div>"#,
            toggle_vals(checklist, i),
            border,
            check_icon(done),
            if done { "text-emerald-100" } else { "text-slate-100" },
            escape_html(step.title),
            escape_html(step.subtitle)
        ));
    }
    html.push_str(r#"</div>"#);
}

fn nav_button(action: &str, class: &str, label: &str, enabled: bool) -> String {
    if enabled {
        format!(
            r##"<button hx-post="/api/wizard/nav" hx-vals='{{"action":"{}"}}' hx-target="#wizard" hx-swap="innerHTML" class="{}">{}</button>"##,
            action, class, label
        )
    } else {
        format!(
            r#"<button disabled class="{} bg-slate-800 text-slate-500 cursor-not-allowed">{}</button>"#,
            class, label
        )
    }
}

const NEXT_READY: &str = "bg-emerald-500 hover:bg-emerald-400 text-slate-950 shadow-lg shadow-emerald-500/20";

fn render_back_next(html: &mut String, state: &WizardState) {
    let ready = state.can_advance();
    let next_class = if ready {
        format!("w-2/3 py-4 rounded-xl font-bold text-lg transition-all {}", NEXT_READY)
    } else {
        "w-2/3 py-4 rounded-xl font-bold text-lg transition-all".to_string()
    };
    html.push_str(r#"<div class="flex gap-3 pt-4">"#);
    html.push_str(&nav_button(
        "back",
        "w-1/3 py-4 rounded-xl font-bold bg-slate-800 text-slate-300",
        "Back",
        true,
    ));
    html.push_str(&nav_button("next", &next_class, "Next Step", ready));
    html.push_str(r#"</div>"#);
}

// ── Gear ───────────────────────────────────────────────────────────

fn render_gear(state: &WizardState, html: &mut String) {
    screen_title(
        html,
        "The Gear Checklist",
        "Let's make sure you have everything out of the bag before we start plugging things in.",
    );

    let config = state.gear_configuration();
    html.push_str(r#"<div class="space-y-2">"#);
    for category in GearCategory::DISPLAY_ORDER {
        let items = config.items(category);
        if items.is_empty() {
            continue;
        }
        let checklist = Checklist::Gear(category);
        let flags = state
            .progress
            .as_ref()
            .map(|p| p.items(checklist))
            .unwrap_or(&[]);
        let all_checked = state.is_complete(checklist);
        let card = if all_checked {
            "bg-emerald-900/20 border-emerald-500/50"
        } else {
            "bg-slate-800 border-slate-700"
        };
        html.push_str(&format!(
            r#"<div class="gear-card mb-4 rounded-xl border-2 transition-all duration-200 {}" data-category="{}">"#,
            card,
            category.as_str()
        ));
        html.push_str(&format!(
            r#"<div class="p-4 border-b border-black/20 flex items-center"><h3 class="font-semibold text-lg {}">{}</h3>{}</div>"#,
            if all_checked { "text-emerald-100" } else { "text-slate-100" },
            escape_html(category.title()),
            if all_checked {
                r#"<span class="ml-auto text-emerald-500">&#x2714;</span>"#
            } else {
                ""
            }
        ));
        html.push_str(r#"<div class="p-2 space-y-1">"#);
        for (i, item) in items.iter().enumerate() {
            let done = flags.get(i).copied().unwrap_or(false);
            html.push_str(&format!(
                r#"<div {} class="flex items-start p-3 cursor-pointer hover:bg-slate-700/50 rounded-lg transition-colors"><div class="flex-shrink-0 mr-4 mt-0.5">{}</div><span class="text-sm font-medium {}">{}</span></div>"#,
                toggle_vals(checklist, i),
                check_icon(done),
                if done {
                    "text-emerald-200/50 line-through"
                } else {
                    "text-slate-300"
                },
                escape_html(item)
            ));
        }
        html.push_str(r#"</div></div>"#);
    }
    html.push_str(r#"</div>"#);

    let ready = state.can_advance();
    let label = if ready {
        "All set! Next Step"
    } else {
        "Check all items to continue"
    };
    let class = if ready {
        format!("w-full py-4 rounded-xl font-bold text-lg transition-all {}", NEXT_READY)
    } else {
        "w-full py-4 rounded-xl font-bold text-lg transition-all".to_string()
    };
    html.push_str(&nav_button("next", &class, label, ready));
}

// ── Dugout ─────────────────────────────────────────────────────────

fn render_dugout(state: &WizardState, html: &mut String) {
    screen_title(
        html,
        "Step 1: Dugout Hub",
        "Setting up the main control station at the dugout.",
    );

    let power = if state.has_power() {
        "USB-C Wall Charger"
    } else {
        "Power Bank"
    };
    accordion(
        html,
        "warning",
        "The Heat Pitfall (Crucial!)",
        &format!(
            r#"<p class="mb-2"><strong>5G modems overheat in the sun!</strong> If it overheats, it will shut down mid-game and kill the broadcast.</p><p>Take the battery <strong>OUT</strong> of the Netgear M7 modem. Plug it directly into your {}. It will run perfectly without the battery.</p>"#,
            power
        ),
    );

    render_steps(html, state, Checklist::Dugout, &DUGOUT_STEPS);

    accordion(
        html,
        "info",
        "Tech Details &amp; IP Info",
        &format!(
            r#"{}<p class="mb-3"><strong>Slate 7 Router IP:</strong> <span class="font-mono text-emerald-400 bg-slate-900 px-1 py-0.5 rounded">{}</span> {}</p><div class="p-3 bg-amber-900/20 border border-amber-700/50 rounded-lg text-amber-200"><p class="font-bold mb-1">Privacy Setting Warning</p><p>Ensure <strong>"Randomized MAC/BSSID"</strong> is turned <strong>OFF</strong> in your iPad's Wi-Fi settings.</p></div>"#,
            COPY_SCRIPT,
            DUGOUT_ROUTER_IP,
            copy_button("Dugout Router (Slate 7) IP", DUGOUT_ROUTER_IP)
        ),
    );

    render_back_next(html, state);
}

// ── Centerfield ────────────────────────────────────────────────────

fn render_centerfield(state: &WizardState, html: &mut String) {
    screen_title(
        html,
        "Step 2: Centerfield",
        "Extending the network across the field.",
    );
    accordion(
        html,
        "warning",
        "The Distance Pitfall",
        r#"<p>The Slate AX router out here acts as an <strong>"invisible bridge"</strong> (WDS Mode).</p><p class="mt-2">It communicates with the dugout using the <strong>5 GHz</strong> Wi-Fi band locked to Channel 149 and 40MHz to punch through 200 feet of open air.</p>"#,
    );
    render_steps(html, state, Checklist::Centerfield, &CENTERFIELD_STEPS);
    render_back_next(html, state);
}

// ── Software ───────────────────────────────────────────────────────

fn render_software(state: &WizardState, html: &mut String) {
    screen_title(
        html,
        "Software &amp; Integrations",
        "Syncing sidelineHD and the Radar Gun.",
    );
    accordion(
        html,
        "success",
        "How to pull SidelineHD Stream Keys",
        r#"<ol class="list-decimal pl-5 space-y-2 text-slate-300"><li>Log in to your account at sidelineHD.com</li><li>Select the specific <strong>Team Card</strong> for the team you are about to stream.</li><li>Go to <strong>Settings</strong> (top right), then navigate to <strong>Stream Settings &gt; Camera Settings</strong>.</li><li>Click the three dots (advanced settings) next to your camera preset to find and copy the unique <strong>Stream URL</strong> and <strong>Stream Key</strong> for that team.</li></ol>"#,
    );
    accordion(
        html,
        "success",
        "How to link Pocket Radar to SidelineHD",
        r#"<ol class="list-decimal pl-5 space-y-2 text-slate-300"><li>Ensure you have the <strong>Pocket Radar Sports App</strong> downloaded on your phone.</li><li>Create/Log in to a Pocket Radar Account.</li><li>In the app, click the <strong>MORE</strong> button and select <strong>Pocket Radar Connect</strong>.</li><li>Tap <strong>AGREE</strong> to initiate the connection.</li><li>Background the app (leave it running), open the sidelineHD platform and allow Pocket Radar access.</li></ol><p class="mt-2 text-xs italic opacity-70">Issues? Reach out to Info@pocketradar.com</p>"#,
    );
    render_steps(html, state, Checklist::Software, &SOFTWARE_STEPS);
    render_back_next(html, state);
}

// ── Troubleshooting ────────────────────────────────────────────────

struct Issue {
    symptom: &'static str,
    fix: &'static str,
    centerfield_only: bool,
}

static ISSUES: &[Issue] = &[
    Issue {
        symptom: "My stream is buffering or dropping frames.",
        fix: "Check the Netgear M7 modem. Is it in direct sunlight? Is it overheating? Did you run a speed test? Ensure your camera upload bitrate is set to only half of your available upload speed.",
        centerfield_only: false,
    },
    Issue {
        symptom: "The iPad in the dugout can't find the centerfield camera.",
        fix: "Check the power bank at centerfield. Ensure the Slate AX is not blocked by a metal pole or walking spectators. Remember: Because the Slate AX is in 'WDS Bridge Mode,' you cannot log into it using its default IP address. It acts like an invisible cable.",
        centerfield_only: true,
    },
    Issue {
        symptom: "The dugout Wi-Fi keeps disconnecting my iPad.",
        fix: "Ensure 'Auto Channel' is turned off on the Slate 7 router. If the channel changes mid-game to dodge interference (like DFS radar), your devices will temporarily drop connection. Lock it to 149.",
        centerfield_only: false,
    },
];

fn render_troubleshooting(state: &WizardState, html: &mut String) {
    screen_title(
        html,
        "Troubleshooting",
        "Common issues and how to fix them instantly.",
    );

    let bridge = state
        .selection
        .setup_type
        .is_some_and(SetupType::uses_bridge);
    html.push_str(r#"<div class="space-y-4">"#);
    for issue in ISSUES.iter().filter(|i| bridge || !i.centerfield_only) {
        html.push_str(&format!(
            r#"<div class="bg-slate-800 rounded-xl p-4 border border-slate-700"><h3 class="font-bold text-amber-400 mb-2">"{}"</h3><div class="text-slate-300 text-sm pl-6"><p><strong>Fix:</strong> {}</p></div></div>"#,
            escape_html(issue.symptom),
            escape_html(issue.fix)
        ));
    }
    html.push_str(r#"</div>"#);

    html.push_str(r#"<div class="flex flex-col gap-3 pt-4 border-t border-slate-800 mt-8">"#);
    html.push_str(&nav_button(
        "back",
        "w-full py-4 rounded-xl font-bold bg-slate-800 text-slate-300 hover:bg-slate-700 transition-colors",
        "Back to Checklist",
        true,
    ));
    html.push_str(r#"<div class="flex gap-3">"#);
    let class = "flex-1 py-4 rounded-xl font-bold text-sm bg-slate-700 text-white hover:bg-slate-600 transition-colors";
    html.push_str(&reset_request_button(ResetKind::Plan, class, "Change Setup"));
    html.push_str(&reset_request_button(ResetKind::Location, class, "Change Location"));
    html.push_str(r#"</div></div>"#);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::session::reset_session;

    fn start(location: &str, diamond: &str, setup: SetupType) {
        reset_session();
        dispatch(Action::SelectLocation(location.to_string())).unwrap();
        dispatch(Action::SelectDiamond(diamond.to_string())).unwrap();
        dispatch(Action::SelectSetupType(setup)).unwrap();
    }

    fn tick_gear() {
        let config = with_session(WizardState::gear_configuration);
        for cat in GearCategory::ALL {
            for i in 0..config.items(cat).len() {
                handle_toggle_post(&format!("section={}&index={}", cat, i));
            }
        }
    }

    fn tick(checklist: Checklist, len: usize) {
        for i in 0..len {
            handle_toggle_post(&format!("section={}&index={}", checklist, i));
        }
    }

    #[test]
    fn gear_screen_lists_cards_in_order() {
        start("mirrabooka", "d1", SetupType::ThreeCamCenterfield);
        let html = with_session(|s| render_checklist(s, Screen::Gear));
        assert!(html.contains("Step 1 of 5"));
        assert!(html.contains("width: 20%"));
        let brain = html.find("The Internet Brain").unwrap();
        let hub = html.find("The Dugout Command Hub").unwrap();
        let bridge = html.find("The Centerfield Bridge").unwrap();
        let cameras = html.find("Cameras &amp; Mounts").unwrap();
        assert!(brain < hub && hub < bridge && bridge < cameras);
        assert!(html.contains("Check all items to continue"));
        assert!(html.contains("disabled"));
        reset_session();
    }

    #[test]
    fn empty_bridge_card_is_hidden() {
        start("shirley", "d4", SetupType::OneCam);
        let html = with_session(|s| render_checklist(s, Screen::Gear));
        assert!(!html.contains("The Centerfield Bridge"));
        assert!(html.contains("Step 1 of 4"));
        reset_session();
    }

    #[test]
    fn toggle_route_checks_item() {
        start("shirley", "d1", SetupType::OneCam);
        let html = handle_toggle_post("section=cameras&index=1");
        assert!(html.contains("line-through"));
        with_session(|s| assert!(s.progress.as_ref().unwrap().gear.cameras[1]));
        reset_session();
    }

    #[test]
    fn bad_toggles_are_reported() {
        start("shirley", "d1", SetupType::OneCam);
        let html = handle_toggle_post("section=cameras&index=9");
        assert!(html.contains("The Gear Checklist"));
        assert!(!html.contains("out of range"));
        assert!(handle_toggle_post("section=cameras&index=two").contains("invalid index: two"));
        assert!(handle_toggle_post("section=kitchen&index=0").contains("unknown checklist: kitchen"));
        assert!(handle_toggle_post("index=0").contains("missing section parameter"));
        reset_session();
    }

    #[test]
    fn next_is_guarded_until_gear_complete() {
        start("shirley", "d2", SetupType::TwoCam);
        let html = handle_nav_post("action=next");
        assert!(html.contains("The Gear Checklist"));

        tick_gear();
        let html = handle_nav_post("action=next");
        assert!(html.contains("Step 1: Dugout Hub"));
        assert!(html.contains("Step 2 of 4"));

        let html = handle_nav_post("action=back");
        assert!(html.contains("All set! Next Step"));
        reset_session();
    }

    #[test]
    fn heat_pitfall_follows_power() {
        start("shirley", "d1", SetupType::OneCam);
        let html = with_session(|s| render_checklist(s, Screen::Dugout));
        assert!(html.contains("directly into your Power Bank"));
        assert!(html.contains("hubCopy('Dugout Router (Slate 7) IP','192.168.8.2',this)"));

        start("mirrabooka", "d3", SetupType::OneCam);
        let html = with_session(|s| render_checklist(s, Screen::Dugout));
        assert!(html.contains("directly into your USB-C Wall Charger"));
        reset_session();
    }

    #[test]
    fn centerfield_flow() {
        start("shirley", "d1", SetupType::ThreeCamCenterfield);
        tick_gear();
        handle_nav_post("action=next");
        tick(Checklist::Dugout, DUGOUT_STEPS.len());
        let html = handle_nav_post("action=next");
        assert!(html.contains("Step 2: Centerfield"));
        assert!(html.contains("The Distance Pitfall"));
        assert!(html.contains("Step 3 of 5"));
        tick(Checklist::Centerfield, CENTERFIELD_STEPS.len());
        let html = handle_nav_post("action=next");
        assert!(html.contains("Software &amp; Integrations"));
        tick(Checklist::Software, SOFTWARE_STEPS.len());
        let html = handle_nav_post("action=next");
        assert!(html.contains("Troubleshooting"));
        assert!(html.contains("centerfield camera"));
        assert!(html.contains("Step 5 of 5"));
        assert!(html.contains("width: 100%"));
        reset_session();
    }

    #[test]
    fn troubleshooting_hides_bridge_issue_without_bridge() {
        start("semsa", "d1", SetupType::ThreeCamLocal);
        let html = with_session(|s| render_checklist(s, Screen::Troubleshooting));
        assert!(!html.contains("centerfield camera"));
        assert!(html.contains("Lock it to 149."));
        assert!(html.contains("Change Setup"));
        assert!(html.contains(r#""kind":"location""#));
        reset_session();
    }

    #[test]
    fn nav_rejects_unknown_actions() {
        start("away", "generic", SetupType::OneCam);
        assert!(handle_nav_post("action=sideways").contains("unknown action: sideways"));
        assert!(handle_nav_post("").contains("missing action parameter"));
        reset_session();
    }

    #[test]
    fn percent_rounds_down() {
        assert_eq!(progress_percent(1, 4), 25);
        assert_eq!(progress_percent(2, 3), 66);
        assert_eq!(progress_percent(5, 5), 100);
        assert_eq!(progress_percent(0, 0), 0);
    }
}
