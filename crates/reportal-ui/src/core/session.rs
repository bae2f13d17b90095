//! Session state machine.
//!
//! # Design
//! - The BFF cookie is the only credential; this module never sees it.
//! - `Authenticated` is reachable only through [`apply_probe`].
//! - Ambiguous probe failures leave the state untouched; logout always demotes.

use crate::core::errors::{ErrorKind, OperationError};
use crate::core::store::AppStore;
use reportal_api_models::IdentityDto;
use std::rc::Rc;

/// Immutable identity of the signed-in caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    subject_id: String,
    email: String,
    username: String,
    given_name: String,
    family_name: String,
}

impl Identity {
    /// Subject identifier issued by the identity provider.
    #[must_use]
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Login name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Given name.
    #[must_use]
    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    /// Family name.
    #[must_use]
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Full name when known, otherwise the login name, otherwise the subject.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.given_name.trim(), self.family_name.trim());
        let full = full.trim();
        if !full.is_empty() {
            return full.to_string();
        }
        if !self.username.trim().is_empty() {
            return self.username.trim().to_string();
        }
        self.subject_id.clone()
    }
}

impl From<IdentityDto> for Identity {
    fn from(dto: IdentityDto) -> Self {
        Self {
            subject_id: dto.sub,
            email: dto.email,
            username: dto.preferred_username,
            given_name: dto.given_name,
            family_name: dto.family_name,
        }
    }
}

/// Authentication status of this page instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// The mount-time probe has not resolved yet.
    #[default]
    Initializing,
    /// The BFF recognised the session cookie.
    Authenticated(Rc<Identity>),
    /// No usable session.
    Unauthenticated,
}

impl SessionState {
    /// Identity when authenticated.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity.as_ref()),
            Self::Initializing | Self::Unauthenticated => None,
        }
    }

    /// Whether the caller is authenticated.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Short label used in logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Authenticated(_) => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        }
    }
}

/// Resolved outcome of a session probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// `200` with a decodable identity.
    Authenticated(Identity),
    /// `401`.
    Unauthenticated,
    /// Anything else; the state must not move.
    Unavailable,
}

/// Resolved outcome of a logout call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// `2xx`.
    Confirmed,
    /// Non-2xx status.
    Rejected(u16),
    /// Transport failure.
    Offline,
    /// Another operation held the busy flag; nothing happened.
    Ignored,
}

/// Fold a probe outcome into the store.
pub fn apply_probe(store: &mut AppStore, outcome: ProbeOutcome) {
    store.session.probing = false;
    match outcome {
        ProbeOutcome::Authenticated(identity) => {
            store.session.state = SessionState::Authenticated(Rc::new(identity));
            store.error = None;
        }
        ProbeOutcome::Unauthenticated => {
            store.session.state = SessionState::Unauthenticated;
            store.error = None;
        }
        ProbeOutcome::Unavailable => {
            store.error = Some(OperationError::new(ErrorKind::ServiceUnavailable));
        }
    }
}

/// Fold a logout outcome into the store. Every real outcome demotes.
pub fn apply_logout(store: &mut AppStore, outcome: LogoutOutcome) {
    let error = match outcome {
        LogoutOutcome::Ignored => return,
        LogoutOutcome::Confirmed => None,
        LogoutOutcome::Rejected(_) => Some(OperationError::new(ErrorKind::LoggedOutWithWarning)),
        LogoutOutcome::Offline => Some(OperationError::new(ErrorKind::LoggedOutOffline)),
    };
    store.session.state = SessionState::Unauthenticated;
    store.error = error;
}

/// Demote after an authenticated call was answered with `401`.
pub fn expire_session(store: &mut AppStore) {
    store.session.state = SessionState::Unauthenticated;
    store.error = Some(OperationError::new(ErrorKind::SessionExpired));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity::from(IdentityDto {
            sub: "sub-1".to_string(),
            email: "prothetic1@example.com".to_string(),
            preferred_username: "prothetic1".to_string(),
            given_name: "Anna".to_string(),
            family_name: "Petrova".to_string(),
        })
    }

    fn authenticated_store() -> AppStore {
        let mut store = AppStore::default();
        apply_probe(&mut store, ProbeOutcome::Authenticated(identity()));
        store
    }

    #[test]
    fn display_name_prefers_full_name_then_username() {
        assert_eq!(identity().display_name(), "Anna Petrova");

        let partial = Identity::from(IdentityDto {
            sub: "user_id".to_string(),
            email: String::new(),
            preferred_username: "user_from_keycloak".to_string(),
            given_name: String::new(),
            family_name: " ".to_string(),
        });
        assert_eq!(partial.display_name(), "user_from_keycloak");

        let bare = Identity::from(IdentityDto {
            sub: "user_id".to_string(),
            email: String::new(),
            preferred_username: String::new(),
            given_name: String::new(),
            family_name: String::new(),
        });
        assert_eq!(bare.display_name(), "user_id");
    }

    #[test]
    fn probe_success_authenticates_and_clears_error() {
        let mut store = AppStore::default();
        store.error = Some(OperationError::new(ErrorKind::ServiceUnavailable));
        store.session.probing = true;
        apply_probe(&mut store, ProbeOutcome::Authenticated(identity()));
        assert_eq!(
            store.session.state.identity().map(Identity::username),
            Some("prothetic1")
        );
        assert!(!store.session.probing);
        assert_eq!(store.error, None);
    }

    #[test]
    fn probe_unauthorized_is_silent() {
        let mut store = AppStore::default();
        apply_probe(&mut store, ProbeOutcome::Unauthenticated);
        assert_eq!(store.session.state, SessionState::Unauthenticated);
        assert_eq!(store.error, None);
    }

    #[test]
    fn probe_unavailable_keeps_prior_state() {
        let mut initial = AppStore::default();
        apply_probe(&mut initial, ProbeOutcome::Unavailable);
        assert_eq!(initial.session.state, SessionState::Initializing);
        assert_eq!(
            initial.error.as_ref().map(|err| err.kind),
            Some(ErrorKind::ServiceUnavailable)
        );

        let mut signed_in = authenticated_store();
        apply_probe(&mut signed_in, ProbeOutcome::Unavailable);
        assert!(signed_in.session.state.is_authenticated());
    }

    #[test]
    fn every_logout_outcome_demotes() {
        for (outcome, kind) in [
            (LogoutOutcome::Confirmed, None),
            (
                LogoutOutcome::Rejected(500),
                Some(ErrorKind::LoggedOutWithWarning),
            ),
            (LogoutOutcome::Offline, Some(ErrorKind::LoggedOutOffline)),
        ] {
            let mut store = authenticated_store();
            apply_logout(&mut store, outcome);
            assert_eq!(store.session.state, SessionState::Unauthenticated);
            assert_eq!(store.error.map(|err| err.kind), kind);
        }
    }

    #[test]
    fn ignored_logout_changes_nothing() {
        let mut store = authenticated_store();
        apply_logout(&mut store, LogoutOutcome::Ignored);
        assert!(store.session.state.is_authenticated());
    }

    #[test]
    fn expiry_demotes_with_session_expired() {
        let mut store = authenticated_store();
        expire_session(&mut store);
        assert_eq!(store.session.state.label(), "unauthenticated");
        assert_eq!(
            store.error.map(|err| err.kind),
            Some(ErrorKind::SessionExpired)
        );
    }
}
