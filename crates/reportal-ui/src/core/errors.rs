//! Client-side error taxonomy.
//!
//! # Design
//! - Every failure is converted into an [`OperationError`] at the operation boundary.
//! - Classification drives UI treatment; the message is for humans only.
//! - Seam errors (transport, save) stay separate so adapters can report detail.

use thiserror::Error;

/// Classification of an operation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Session probe failed with something other than `401`.
    ServiceUnavailable,
    /// Report retrieval answered `401`; the session is gone.
    SessionExpired,
    /// Report retrieval answered `403`.
    AccessDenied,
    /// Report retrieval answered `404`; nothing has been generated yet.
    NoDataYet,
    /// Any other non-2xx status.
    UnexpectedStatus(u16),
    /// `2xx` with a zero-length body.
    EmptyArtifact,
    /// The request never produced a status.
    NetworkFailure,
    /// The logout call failed with a status, local state was cleared anyway.
    LoggedOutWithWarning,
    /// The logout call never reached the BFF, local state was cleared anyway.
    LoggedOutOffline,
    /// The browser refused to hand the artifact to the user.
    SaveFailed,
}

impl ErrorKind {
    /// Translation key for the user-facing message.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::ServiceUnavailable => "errors.service_unavailable",
            Self::SessionExpired => "errors.session_expired",
            Self::AccessDenied => "errors.access_denied",
            Self::NoDataYet => "errors.no_data_yet",
            Self::UnexpectedStatus(_) => "errors.unexpected_status",
            Self::EmptyArtifact => "errors.empty_artifact",
            Self::NetworkFailure => "errors.network_failure",
            Self::LoggedOutWithWarning => "errors.logged_out_with_warning",
            Self::LoggedOutOffline => "errors.logged_out_offline",
            Self::SaveFailed => "errors.save_failed",
        }
    }

    /// Stable machine-readable label used in logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ServiceUnavailable => "service_unavailable",
            Self::SessionExpired => "session_expired",
            Self::AccessDenied => "access_denied",
            Self::NoDataYet => "no_data_yet",
            Self::UnexpectedStatus(_) => "unexpected_status",
            Self::EmptyArtifact => "empty_artifact",
            Self::NetworkFailure => "network_failure",
            Self::LoggedOutWithWarning => "logged_out_with_warning",
            Self::LoggedOutOffline => "logged_out_offline",
            Self::SaveFailed => "save_failed",
        }
    }

    /// Whether the condition is informational rather than a failure.
    #[must_use]
    pub const fn is_informational(self) -> bool {
        matches!(self, Self::NoDataYet)
    }

    fn default_message(self) -> String {
        match self {
            Self::ServiceUnavailable => {
                "The sign-in service is unavailable. Reload the page to try again.".to_string()
            }
            Self::SessionExpired => "Your session has expired. Please sign in again.".to_string(),
            Self::AccessDenied => "You do not have access to this report.".to_string(),
            Self::NoDataYet => "No report data is available for your account yet.".to_string(),
            Self::UnexpectedStatus(status) => {
                format!("The server returned an unexpected response (HTTP {status}).")
            }
            Self::EmptyArtifact => "The server returned an empty report.".to_string(),
            Self::NetworkFailure => {
                "The server could not be reached. Check your connection.".to_string()
            }
            Self::LoggedOutWithWarning => {
                "You have been signed out locally, but the server reported a problem.".to_string()
            }
            Self::LoggedOutOffline => {
                "You have been signed out locally; the server could not be reached.".to_string()
            }
            Self::SaveFailed => "The report could not be saved by the browser.".to_string(),
        }
    }
}

/// Failure attached to UI state after an operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct OperationError {
    /// Classification.
    pub kind: ErrorKind,
    /// Human-readable English message.
    pub message: String,
}

impl OperationError {
    /// Build an error with the default message for `kind`.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: kind.default_message(),
        }
    }

    /// Status code carried by [`ErrorKind::UnexpectedStatus`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::UnexpectedStatus(status) => Some(status),
            _ => None,
        }
    }

    /// Whether the UI should present this as information, not failure.
    #[must_use]
    pub const fn is_informational(&self) -> bool {
        self.kind.is_informational()
    }
}

impl From<ErrorKind> for OperationError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Failure raised by a transport before a usable response exists.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection, DNS, CORS or timeout failure.
    #[error("network request failed: {detail}")]
    Network {
        /// Adapter-provided detail.
        detail: String,
    },
    /// The status arrived but the body could not be read.
    #[error("response body could not be read: {detail}")]
    Body {
        /// Adapter-provided detail.
        detail: String,
    },
}

/// Failure raised by the host while saving an artifact.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("saving `{filename}` failed: {detail}")]
pub struct SaveError {
    /// File the host attempted to save.
    pub filename: String,
    /// Host-provided detail.
    pub detail: String,
}
