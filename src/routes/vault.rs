//! `/api/vault` routes: the Emergency Vault modal and its copy buttons.
//!
//! Copying happens in the page. The emitted `hubCopy` script tries the
//! async Clipboard API, falls back to a hidden textarea, then reports the
//! outcome to `POST /api/vault/copied`, which swaps the button into its
//! copied (or failed) state. Two seconds later the copied button posts
//! `reset=1` and swaps itself back.

use crate::routes::util::{escape_html, escape_js, get_param, parse_form_body};
use crate::vault::{VAULT, VaultEntry, find_entry};

/// Defines `window.hubCopy(label, value, button)` once per page.
pub const COPY_SCRIPT: &str = r#"<script>
window.hubCopy = window.hubCopy || function (label, value, btn) {
  function report(ok, error) {
    htmx.ajax('POST', '/api/vault/copied', {
      source: btn,
      target: btn,
      swap: 'outerHTML',
      values: { label: label, ok: ok ? 'true' : 'false', error: error || '' }
    });
  }
  function fallback() {
    var area = document.createElement('textarea');
    area.value = value;
    area.style.position = 'fixed';
    area.style.opacity = '0';
    document.body.appendChild(area);
    area.select();
    var ok = false;
    var error = '';
    try { ok = document.execCommand('copy'); } catch (e) { error = String(e); }
    document.body.removeChild(area);
    report(ok, ok ? '' : (error || 'execCommand copy failed'));
  }
  if (navigator.clipboard && window.isSecureContext) {
    navigator.clipboard.writeText(value).then(function () { report(true); }, fallback);
  } else {
    fallback();
  }
};
</script>"#;

// ── GET /api/vault ─────────────────────────────────────────────────

/// Handle GET /api/vault
/// Returns the vault modal for `#wizard-modal`.
pub fn handle_get(_query: &str) -> String {
    let mut html = String::with_capacity(8192);
    html.push_str(COPY_SCRIPT);
    html.push_str(
        r#"<div class="fixed inset-0 bg-black/80 backdrop-blur-sm z-50 flex items-end sm:items-center justify-center p-4 pb-24">"#,
    );
    html.push_str(
        r#"<div class="bg-slate-800 w-full max-w-md rounded-2xl border border-slate-600 shadow-2xl overflow-hidden">"#,
    );
    html.push_str(
        r#"<div class="p-4 bg-slate-900 border-b border-slate-700 flex justify-between items-center">"#,
    );
    html.push_str(r#"<h2 class="text-lg font-bold flex items-center text-amber-400">Emergency Vault</h2>"#);
    html.push_str(
        r#"<button onclick="document.getElementById('wizard-modal').innerHTML=''" class="p-2 text-slate-400 hover:text-white">&#x2715;</button>"#,
    );
    html.push_str(r#"</div>"#);
    html.push_str(r#"<div class="p-4 max-h-[65vh] overflow-y-auto space-y-6">"#);

    for section in VAULT {
        html.push_str(r#"<section>"#);
        html.push_str(&format!(
            r#"<h3 class="text-xs font-bold text-slate-400 uppercase tracking-wider mb-2">{}</h3>"#,
            escape_html(section.title)
        ));
        for (i, group) in section.groups.iter().enumerate() {
            if i > 0 {
                html.push_str(r#"<div class="h-2"></div>"#);
            }
            for entry in group.iter() {
                html.push_str(&render_entry(entry));
            }
        }
        html.push_str(r#"</section>"#);
    }

    html.push_str(r#"</div></div></div>"#);
    html
}

fn render_entry(entry: &VaultEntry) -> String {
    format!(
        r#"<div class="flex justify-between items-center p-3 bg-slate-900 rounded-lg mb-2"><div class="overflow-hidden mr-2"><p class="text-xs text-slate-400 mb-1">{}</p><p class="font-mono text-sm text-slate-200 truncate">{}</p></div>{}</div>"#,
        escape_html(entry.label),
        escape_html(entry.value),
        copy_button(entry.label, entry.value)
    )
}

/// Idle copy button. Clicking it runs `hubCopy` in the page.
pub fn copy_button(label: &str, value: &str) -> String {
    format!(
        r#"<button data-label="{}" onclick="hubCopy('{}','{}',this)" class="p-2 bg-slate-800 hover:bg-slate-700 rounded-md text-emerald-400 transition-colors flex-shrink-0" title="Copy">&#x29C9;</button>"#,
        escape_html(label),
        escape_js(label),
        escape_js(value)
    )
}

/// Persistent bottom bar that opens the vault in `#wizard-modal`.
pub fn vault_button() -> String {
    r##"<div class="fixed bottom-4 left-0 right-0 px-4 z-40 max-w-md mx-auto"><button hx-get="/api/vault" hx-target="#wizard-modal" hx-swap="innerHTML" class="w-full bg-slate-800/90 backdrop-blur border border-slate-600 text-amber-400 py-3 rounded-2xl font-bold shadow-xl flex items-center justify-center gap-2 hover:bg-slate-700 transition-colors">&#x1F511; Emergency Vault</button></div>"##
        .to_string()
}

/// Button shown for two seconds after a copy, then swapped back by
/// posting `reset=1`.
fn settled_button(label: &str, color: &str, title: &str, glyph: &str) -> String {
    let vals = serde_json::json!({ "label": label, "reset": "1" }).to_string();
    format!(
        r#"<button data-label="{}" hx-post="/api/vault/copied" hx-trigger="load delay:2s" hx-vals='{}' hx-swap="outerHTML" class="p-2 bg-slate-800 rounded-md {} flex-shrink-0" title="{}">{}</button>"#,
        escape_html(label),
        escape_html(&vals),
        color,
        title,
        glyph
    )
}

fn copied_button(label: &str) -> String {
    settled_button(label, "text-emerald-400", "Copied", "&#x2713;")
}

fn failed_button(label: &str) -> String {
    settled_button(label, "text-amber-400", "Copy failed", "&#x26A0;")
}

// ── POST /api/vault/copied ─────────────────────────────────────────

/// Handle POST /api/vault/copied
/// Body params:
///   - label, ok=true|false, error → clipboard outcome from `hubCopy`
///   - label, reset=1              → restore the idle button
///
/// The label is looked up in the vault first. Only vault labels are echoed
/// back, and a restored button copies the vault's value, never one
/// supplied by the page.
pub fn handle_copied_post(body: &str) -> String {
    let params = parse_form_body(body);
    let label = get_param(&params, "label").unwrap_or("");
    let entry = match find_entry(label) {
        Some(entry) => entry,
        None => {
            log::warn!("copy report for unknown label {:?}", label);
            return String::new();
        }
    };

    if get_param(&params, "reset") == Some("1") {
        return copy_button(entry.label, entry.value);
    }

    if get_param(&params, "ok") == Some("true") {
        log::debug!("copied {}", entry.label);
        copied_button(entry.label)
    } else {
        let error = get_param(&params, "error").unwrap_or("unknown error");
        log::warn!("clipboard copy of {} failed: {}", entry.label, error);
        failed_button(entry.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vault_lists_every_section_and_entry() {
        let html = handle_get("");
        assert!(html.contains("Emergency Vault"));
        assert!(html.contains("Global Accounts"));
        assert!(html.contains("Hardware &amp; IPs"));
        assert!(html.contains("Stream Setup"));
        assert!(html.contains("rtmps://e07.sidelinehd.com:443/shd03"));
        assert!(html.contains("192.168.8.178"));
        assert!(html.contains("window.hubCopy"));
        // three gaps between the four hardware groups
        assert_eq!(html.matches(r#"<div class="h-2"></div>"#).count(), 3);
    }

    #[test]
    fn copy_button_escapes_for_js() {
        let html = copy_button("Netgear M7 Wi-Fi", "REBELS M7");
        assert!(html.contains("hubCopy('Netgear M7 Wi-Fi','REBELS M7',this)"));
        let html = copy_button("x", "it's");
        assert!(html.contains(r"'it\'s'"));
    }

    #[test]
    fn successful_copy_shows_check() {
        let html = handle_copied_post("label=Stream+Key&ok=true");
        assert!(html.contains("&#x2713;"));
        assert!(html.contains("load delay:2s"));
    }

    #[test]
    fn failed_copy_is_reported() {
        let _ = env_logger::builder().is_test(true).try_init();
        let html = handle_copied_post("label=Stream+Key&ok=false&error=NotAllowedError");
        assert!(html.contains("Copy failed"));
    }

    #[test]
    fn reset_restores_vault_value() {
        let html = handle_copied_post("label=Stream+Key&reset=1");
        assert!(html.contains("s03-wr0h-ypvz-uewk-4zxq-7ztj"));
        let html = handle_copied_post("label=Dugout+Router+%28Slate+7%29+IP&reset=1");
        assert!(html.contains("hubCopy('Dugout Router (Slate 7) IP','192.168.8.2',this)"));
        assert!(handle_copied_post("label=Nope&reset=1").is_empty());
    }

    #[test]
    fn copied_button_resets_with_vault_label() {
        let html = handle_copied_post("label=Dugout+Router+%28Slate+7%29+IP&ok=true");
        assert!(html.contains(
            r#"hx-vals='{&quot;label&quot;:&quot;Dugout Router (Slate 7) IP&quot;,&quot;reset&quot;:&quot;1&quot;}'"#
        ));
    }

    #[test]
    fn unknown_labels_are_not_echoed() {
        let _ = env_logger::builder().is_test(true).try_init();
        assert!(handle_copied_post("label=x%22%2C%22reset%22%3A%220&ok=true").is_empty());
        assert!(handle_copied_post("label=%27%3E%3Cimg+src%3Dx%3E&ok=false").is_empty());
        assert!(handle_copied_post("ok=true").is_empty());
    }

    #[test]
    fn vault_button_opens_modal() {
        let html = vault_button();
        assert!(html.contains(r##"hx-get="/api/vault" hx-target="#wizard-modal" hx-swap="innerHTML""##));
        assert!(html.contains("Emergency Vault"));
    }
}
