//! Browser smoke tests. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use broadcast_hub::handle_request;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn serves_location_view() {
    let html = handle_request("GET", "/api/wizard", "", "");
    assert!(html.contains("Rebels Broadcast Hub"));
}

#[wasm_bindgen_test]
fn selection_survives_between_calls() {
    handle_request("POST", "/api/wizard/location", "", "id=semsa");
    let html = handle_request("GET", "/api/wizard", "", "");
    assert!(html.contains("Select Diamond"));
    handle_request("POST", "/api/wizard/location", "", "action=clear");
}

#[wasm_bindgen_test]
fn serves_vault() {
    let html = handle_request("GET", "/api/vault", "", "");
    assert!(html.contains("Emergency Vault"));
}

#[wasm_bindgen_test]
fn unknown_route_is_404() {
    assert!(handle_request("GET", "/nowhere", "", "").contains("404"));
}
