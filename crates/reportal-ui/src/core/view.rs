//! View selection derived from the store.

use crate::core::errors::OperationError;
use crate::core::session::{Identity, SessionState};
use crate::core::store::AppStore;
use std::rc::Rc;

/// The one view the shell renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PortalView {
    /// Mount-time probe in flight (or not yet started).
    CheckingSession,
    /// Probe failed without resolving the session; only a reload helps.
    SessionUnavailable {
        /// The `ServiceUnavailable` error.
        error: OperationError,
    },
    /// No session; the login button is offered.
    LoggedOut {
        /// Why the user ended up here, when there is something to say.
        error: Option<OperationError>,
    },
    /// Signed in.
    LoggedIn {
        /// Current identity.
        identity: Rc<Identity>,
        /// Whether download/logout controls are disabled.
        busy: bool,
        /// Latest operation feedback.
        error: Option<OperationError>,
    },
}

/// Project the store onto exactly one view.
#[must_use]
pub fn select_view(store: &AppStore) -> PortalView {
    match &store.session.state {
        SessionState::Initializing => match &store.error {
            Some(error) if !store.session.probing => PortalView::SessionUnavailable {
                error: error.clone(),
            },
            _ => PortalView::CheckingSession,
        },
        SessionState::Unauthenticated => PortalView::LoggedOut {
            error: store.error.clone(),
        },
        SessionState::Authenticated(identity) => PortalView::LoggedIn {
            identity: Rc::clone(identity),
            busy: store.activity.busy || store.session.probing,
            error: store.error.clone(),
        },
    }
}
