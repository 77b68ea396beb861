//! Rebels Broadcast Hub in-browser WASM server.
//!
//! Exports `handle_request(method, path, query, body)` for the Web Worker
//! bridge to call. Uses `matchit` for URL routing. Every route returns an
//! HTML fragment for HTMX, except `/api/wizard/state` which returns JSON.
//!
//! The wizard walks an operator from venue to diamond to camera setup,
//! then through the gear, dugout, centerfield, software and
//! troubleshooting checklists. The Emergency Vault is reachable from any
//! screen.

use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod error;
pub mod gear;
pub mod routes;
pub mod vault;
pub mod wizard;

/// Process an HTTP-like request and return an HTML fragment.
///
/// Called from JavaScript (Web Worker) via wasm-bindgen.
///
/// # Arguments
/// * `method`: HTTP method (e.g., "GET", "POST")
/// * `path`: URL path (e.g., "/api/wizard/toggle")
/// * `query`: Query string, usually empty
/// * `body`: Request body (e.g., POST form data). Empty string for GET requests.
///
/// # Returns
/// An HTML string fragment suitable for HTMX to swap into the DOM.
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    // The value is a &str tag we match on below
    let mut router = matchit::Router::new();

    router.insert("/api/wizard", "wizard").ok();
    router.insert("/api/wizard/state", "wizard_state").ok();
    router.insert("/api/wizard/location", "wizard_location").ok();
    router.insert("/api/wizard/diamond", "wizard_diamond").ok();
    router.insert("/api/wizard/setup", "wizard_setup").ok();
    router.insert("/api/wizard/toggle", "wizard_toggle").ok();
    router.insert("/api/wizard/nav", "wizard_nav").ok();
    router.insert("/api/wizard/reset", "wizard_reset").ok();

    router.insert("/api/vault", "vault").ok();
    router.insert("/api/vault/copied", "vault_copied").ok();

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            ("wizard", "GET") => routes::wizard::handle_view_get(query),
            ("wizard_state", "GET") => routes::wizard::handle_state_get(query),
            ("wizard_location", "POST") => routes::selection::handle_location_post(body),
            ("wizard_diamond", "POST") => routes::selection::handle_diamond_post(body),
            ("wizard_setup", "POST") => routes::selection::handle_setup_post(body),
            ("wizard_toggle", "POST") => routes::checklist::handle_toggle_post(body),
            ("wizard_nav", "POST") => routes::checklist::handle_nav_post(body),
            ("wizard_reset", "GET") => routes::reset::handle_get(query),
            ("wizard_reset", "POST") => routes::reset::handle_post(body),

            ("vault", "GET") => routes::vault::handle_get(query),
            ("vault_copied", "POST") => routes::vault::handle_copied_post(body),

            _ => {
                log::debug!("{} {} not allowed", method, path);
                method_not_allowed()
            }
        },
        Err(_) => {
            log::debug!("{} {} not found", method, path);
            not_found()
        }
    }
}

fn not_found() -> String {
    r#"<span class="text-red-400">404 — route not found</span>"#.to_string()
}

fn method_not_allowed() -> String {
    r#"<span class="text-red-400">405 — method not allowed</span>"#.to_string()
}
