//! Session controller: probe, login redirect, logout, expiry.
//!
//! # Design
//! - The only writer of [`SessionState`](crate::core::session::SessionState).
//! - Never returns errors; every failure becomes an outcome plus a store update.
//! - Logout fails open: the local session is cleared whatever the BFF says.

use crate::core::config::PortalConfig;
use crate::core::session::{
    LogoutOutcome, ProbeOutcome, apply_logout, apply_probe, expire_session,
};
use crate::core::store::{Operation, StateStore, begin_operation, finish_operation};
use crate::services::transport::{BffTransport, Host, HttpResponse};
use reportal_api_models::{
    AUTH_LOGIN_PATH, AUTH_LOGOUT_PATH, AUTH_USER_PATH, IdentityDto, LogoutAck, StatusClass,
};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Owns the authentication status of the page.
#[derive(Clone)]
pub struct SessionController<S: StateStore> {
    pub(crate) transport: Rc<dyn BffTransport>,
    pub(crate) host: Rc<dyn Host>,
    pub(crate) store: S,
    pub(crate) config: Rc<PortalConfig>,
}

impl<S: StateStore> SessionController<S> {
    /// Wire a controller to its seams.
    #[must_use]
    pub fn new(
        transport: Rc<dyn BffTransport>,
        host: Rc<dyn Host>,
        store: S,
        config: Rc<PortalConfig>,
    ) -> Self {
        Self {
            transport,
            host,
            store,
            config,
        }
    }

    /// Store this controller writes to.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Ask the BFF who the caller is.
    ///
    /// `200` authenticates, `401` demotes silently, anything else leaves the state
    /// as it was and records `ServiceUnavailable`. Safe to call repeatedly; every
    /// call re-probes.
    pub async fn probe_session(&self) -> ProbeOutcome {
        self.store.reduce(|store| {
            store.session.probing = true;
            store.error = None;
        });

        let outcome = match self.transport.get(AUTH_USER_PATH).await {
            Ok(response) => classify_probe(&response),
            Err(err) => {
                warn!(error = %err, "session probe did not reach the BFF");
                ProbeOutcome::Unavailable
            }
        };

        let before = self.store.snapshot().session.state.label();
        self.store.reduce(|store| apply_probe(store, outcome.clone()));
        info!(
            from = before,
            to = self.store.snapshot().session.state.label(),
            "session probe resolved"
        );
        outcome
    }

    /// Hand top-level navigation to the BFF login endpoint.
    ///
    /// The page is about to be replaced, so no state is touched.
    pub fn begin_login(&self) {
        let url = self.config.endpoint_url(AUTH_LOGIN_PATH);
        info!(%url, "redirecting to login");
        self.host.navigate(&url);
    }

    /// End the session. Always leaves the store `Unauthenticated` unless another
    /// operation already holds the busy flag or a probe is still pending.
    pub async fn logout(&self) -> LogoutOutcome {
        if !self
            .store
            .reduce(|store| begin_operation(store, Operation::Logout))
        {
            debug!("logout ignored while another operation or a probe is in flight");
            return LogoutOutcome::Ignored;
        }

        let outcome = match self.transport.get(AUTH_LOGOUT_PATH).await {
            Ok(response) if StatusClass::of(response.status).is_success() => {
                log_logout_ack(&response);
                LogoutOutcome::Confirmed
            }
            Ok(response) => {
                warn!(status = response.status, "logout rejected by the BFF");
                LogoutOutcome::Rejected(response.status)
            }
            Err(err) => {
                warn!(error = %err, "logout did not reach the BFF");
                LogoutOutcome::Offline
            }
        };

        self.store.reduce(|store| {
            apply_logout(store, outcome);
            finish_operation(store);
        });
        info!(?outcome, "logged out");
        outcome
    }

    /// Demote after an authenticated call came back `401`.
    pub fn expire(&self) {
        warn!("session expired during an authenticated call");
        self.store.reduce(expire_session);
    }

    /// Reload the page; the only way out of an unresolved probe.
    pub fn reload(&self) {
        self.host.reload();
    }
}

fn classify_probe(response: &HttpResponse) -> ProbeOutcome {
    match StatusClass::of(response.status) {
        StatusClass::Success => match serde_json::from_slice::<IdentityDto>(&response.body) {
            Ok(dto) => ProbeOutcome::Authenticated(dto.into()),
            Err(err) => {
                warn!(error = %err, "session probe returned an unreadable identity");
                ProbeOutcome::Unavailable
            }
        },
        StatusClass::Unauthorized => ProbeOutcome::Unauthenticated,
        StatusClass::Forbidden | StatusClass::NotFound | StatusClass::Other(_) => {
            warn!(status = response.status, "session probe failed");
            ProbeOutcome::Unavailable
        }
    }
}

fn log_logout_ack(response: &HttpResponse) {
    match serde_json::from_slice::<LogoutAck>(&response.body) {
        Ok(ack) if !ack.keycloak_logout => warn!(
            session_cleared = ack.session_cleared,
            "identity provider logout was not confirmed"
        ),
        Ok(ack) => debug!(session_cleared = ack.session_cleared, "logout acknowledged"),
        Err(_) => debug!("logout acknowledged without a readable body"),
    }
}
