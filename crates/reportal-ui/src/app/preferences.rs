//! Environment helpers for the app shell.

use crate::core::config::{LEGACY_AUTH_MARKERS, PortalConfig, derive_bff_base_url, pick_base_url};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::storage::{LocalStorage, SessionStorage, Storage};
use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::HtmlMetaElement;

const BFF_URL_META: &str = "reportal-bff-url";

/// Resolve the client configuration for this page load.
pub(crate) fn load_config() -> PortalConfig {
    let meta = bff_url_from_meta();
    let base = pick_base_url([option_env!("REPORTAL_BFF_URL"), meta.as_deref()])
        .unwrap_or_else(bff_url_from_location);
    PortalConfig::new(base)
}

pub(crate) fn load_locale() -> LocaleCode {
    window()
        .navigator()
        .language()
        .and_then(|tag| LocaleCode::from_lang_tag(&tag))
        .unwrap_or(DEFAULT_LOCALE)
}

/// Drop auth markers older builds cached in web storage.
pub(crate) fn clear_legacy_auth_markers() {
    for key in LEGACY_AUTH_MARKERS {
        LocalStorage::delete(key);
        SessionStorage::delete(key);
    }
}

fn bff_url_from_meta() -> Option<String> {
    document()
        .query_selector(&format!("meta[name=\"{BFF_URL_META}\"]"))
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}

fn bff_url_from_location() -> String {
    let location = window().location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    let port = location.port().unwrap_or_default();
    derive_bff_base_url(&protocol, &hostname, &port)
}
