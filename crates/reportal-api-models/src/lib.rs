#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! HTTP contract consumed from the Reportal backend-for-frontend (BFF).
//!
//! The BFF owns the session cookie and every credential; the browser client only
//! ever sees the paths, status codes, and JSON bodies described here. Field names
//! are fixed by the BFF and must not be renamed on this side.
use serde::{Deserialize, Serialize};

/// Session probe endpoint; `200` with an identity body or `401`.
pub const AUTH_USER_PATH: &str = "/auth/user";
/// Login entry point; answers with a redirect into the identity provider.
pub const AUTH_LOGIN_PATH: &str = "/auth/login";
/// Logout endpoint; clears the session cookie and answers with a [`LogoutAck`].
pub const AUTH_LOGOUT_PATH: &str = "/auth/logout";
/// Protected report download.
pub const REPORTS_PATH: &str = "/api/reports";

/// Identity document returned by [`AUTH_USER_PATH`].
///
/// Only `sub` is mandatory. The BFF substitutes a reduced identity without name
/// fields when the identity provider's userinfo call fails, so everything else
/// defaults to an empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityDto {
    /// Stable subject identifier issued by the identity provider.
    pub sub: String,
    /// Primary email address.
    #[serde(default)]
    pub email: String,
    /// Login name.
    #[serde(default)]
    pub preferred_username: String,
    /// Given name.
    #[serde(default)]
    pub given_name: String,
    /// Family name.
    #[serde(default)]
    pub family_name: String,
}

/// Acknowledgement body returned by [`AUTH_LOGOUT_PATH`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoutAck {
    /// Coarse status string (`"success"` on the happy path).
    #[serde(default)]
    pub status: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Whether the BFF found and removed a server-side session.
    #[serde(default)]
    pub session_cleared: bool,
    /// Whether the upstream identity-provider logout succeeded.
    #[serde(default)]
    pub keycloak_logout: bool,
}

/// Coarse classification of an HTTP status as the client cares about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// Any `2xx`.
    Success,
    /// `401 Unauthorized`.
    Unauthorized,
    /// `403 Forbidden`.
    Forbidden,
    /// `404 Not Found`.
    NotFound,
    /// Everything else, including redirects and `5xx`.
    Other(u16),
}

impl StatusClass {
    /// Classify a raw status code.
    #[must_use]
    pub const fn of(status: u16) -> Self {
        match status {
            200..=299 => Self::Success,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            other => Self::Other(other),
        }
    }

    /// Whether the status is in the `2xx` range.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}
