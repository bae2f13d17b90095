//! Client configuration resolved once per app boot.
//!
//! # Design
//! - No config file and no persisted settings; inputs come from the build, the page,
//!   or the current location.
//! - Derivation is pure so it can be tested without a DOM.

use crate::core::report::DEFAULT_REPORT_FILENAME;

/// Dev-server port of the frontend.
pub const FRONTEND_DEV_PORT: &str = "3000";
/// Port the BFF listens on next to the dev frontend.
pub const BFF_DEV_PORT: &str = "8000";

/// Storage keys older builds used to cache auth status; deleted on every load.
pub const LEGACY_AUTH_MARKERS: [&str; 4] = ["isAuthenticated", "user", "userInfo", "authToken"];

/// Resolved client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    /// BFF origin, without a trailing slash.
    pub bff_base_url: String,
    /// Filename used when the BFF does not suggest one.
    pub fallback_filename: String,
}

impl PortalConfig {
    /// Build a configuration for the given BFF origin.
    #[must_use]
    pub fn new(bff_base_url: impl Into<String>) -> Self {
        Self {
            bff_base_url: normalize_base_url(&bff_base_url.into()),
            fallback_filename: DEFAULT_REPORT_FILENAME.to_string(),
        }
    }

    /// Absolute URL for a BFF path.
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        endpoint_url(&self.bff_base_url, path)
    }
}

/// Join a base URL and a path without doubling or dropping the slash.
#[must_use]
pub fn endpoint_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        format!("/{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Derive the BFF origin from the page location.
///
/// The dev frontend on port `3000` pairs with the BFF on `8000`; any other port
/// (or none) means the BFF is served from the same origin.
#[must_use]
pub fn derive_bff_base_url(protocol: &str, hostname: &str, port: &str) -> String {
    let protocol = if protocol.ends_with(':') {
        protocol.to_string()
    } else {
        format!("{protocol}:")
    };
    let mapped_port = match port {
        "" => None,
        FRONTEND_DEV_PORT => Some(BFF_DEV_PORT),
        other => Some(other),
    };
    let mut base = format!("{protocol}//{hostname}");
    if let Some(port) = mapped_port {
        base.push(':');
        base.push_str(port);
    }
    base
}

/// First non-blank candidate, normalised.
#[must_use]
pub fn pick_base_url<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(normalize_base_url)
}

fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}
