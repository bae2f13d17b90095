mod support;

use reportal_api_models::{AUTH_LOGOUT_PATH, AUTH_USER_PATH};
use reportal_ui::core::errors::ErrorKind;
use reportal_ui::core::session::{LogoutOutcome, ProbeOutcome, SessionState};
use reportal_ui::core::store::StateStore;
use reportal_ui::core::view::{PortalView, select_view};
use reportal_ui::services::transport::HttpResponse;
use support::{BFF, Harness, identity_response};

fn error_kind(harness: &Harness) -> Option<ErrorKind> {
    harness.store.snapshot().error.as_ref().map(|error| error.kind)
}

#[tokio::test(flavor = "current_thread")]
async fn probe_success_authenticates_with_display_name() {
    let harness = Harness::new();
    harness.transport.respond(AUTH_USER_PATH, identity_response());

    let outcome = harness.session.probe_session().await;

    assert!(matches!(outcome, ProbeOutcome::Authenticated(_)));
    let snapshot = harness.store.snapshot();
    let identity = snapshot.session.state.identity();
    assert_eq!(identity.map(|id| id.display_name()), Some("Anna Ivanova".to_string()));
    assert_eq!(identity.map(|id| id.email()), Some("ivanova@clinic.example"));
    assert!(!snapshot.session.probing);
    assert_eq!(snapshot.error, None);
}

#[tokio::test(flavor = "current_thread")]
async fn probe_unauthorized_demotes_without_error() {
    let harness = Harness::new();
    harness
        .transport
        .respond(AUTH_USER_PATH, HttpResponse::status(401));

    assert_eq!(
        harness.session.probe_session().await,
        ProbeOutcome::Unauthenticated
    );
    assert_eq!(
        harness.store.snapshot().session.state,
        SessionState::Unauthenticated
    );
    assert_eq!(error_kind(&harness), None);
    assert!(matches!(
        select_view(&harness.store.snapshot()),
        PortalView::LoggedOut { error: None }
    ));
}

#[tokio::test(flavor = "current_thread")]
async fn probe_failure_on_first_load_leaves_session_unresolved() {
    let harness = Harness::new();
    harness
        .transport
        .respond(AUTH_USER_PATH, HttpResponse::status(503));

    assert_eq!(
        harness.session.probe_session().await,
        ProbeOutcome::Unavailable
    );
    assert_eq!(
        harness.store.snapshot().session.state,
        SessionState::Initializing
    );
    assert_eq!(error_kind(&harness), Some(ErrorKind::ServiceUnavailable));
    assert!(matches!(
        select_view(&harness.store.snapshot()),
        PortalView::SessionUnavailable { .. }
    ));
}

#[tokio::test(flavor = "current_thread")]
async fn probe_failure_keeps_an_existing_session() {
    let harness = Harness::signed_in().await;
    harness.transport.fail(AUTH_USER_PATH);

    assert_eq!(
        harness.session.probe_session().await,
        ProbeOutcome::Unavailable
    );
    assert!(harness.store.snapshot().session.state.is_authenticated());
    assert_eq!(error_kind(&harness), Some(ErrorKind::ServiceUnavailable));
}

#[tokio::test(flavor = "current_thread")]
async fn repeated_probes_reach_the_bff_each_time() {
    let harness = Harness::new();
    harness.transport.respond(AUTH_USER_PATH, identity_response());
    harness.transport.respond(AUTH_USER_PATH, identity_response());

    let first = harness.session.probe_session().await;
    let state_after_first = harness.store.snapshot().session.state.clone();
    let second = harness.session.probe_session().await;

    assert_eq!(first, second);
    assert_eq!(harness.store.snapshot().session.state, state_after_first);
    assert_eq!(harness.transport.calls(AUTH_USER_PATH), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn login_navigates_to_the_bff_without_touching_state() {
    let harness = Harness::new();
    harness.session.begin_login();

    assert_eq!(
        harness.host.navigations.borrow().as_slice(),
        [format!("{BFF}/auth/login")]
    );
    assert_eq!(harness.transport.total_calls(), 0);
    assert_eq!(
        harness.store.snapshot().session.state,
        SessionState::Initializing
    );
}

#[tokio::test(flavor = "current_thread")]
async fn confirmed_logout_clears_the_session() {
    let harness = Harness::signed_in().await;
    harness.transport.respond(
        AUTH_LOGOUT_PATH,
        HttpResponse::status(200).with_body(
            r#"{"status":"success","message":"Logged out","session_cleared":true,"keycloak_logout":true}"#,
        ),
    );

    assert_eq!(harness.session.logout().await, LogoutOutcome::Confirmed);
    let snapshot = harness.store.snapshot();
    assert_eq!(snapshot.session.state, SessionState::Unauthenticated);
    assert_eq!(snapshot.error, None);
    assert!(!snapshot.activity.busy);
}

#[tokio::test(flavor = "current_thread")]
async fn logout_ack_without_idp_confirmation_still_succeeds() {
    let harness = Harness::signed_in().await;
    harness.transport.respond(
        AUTH_LOGOUT_PATH,
        HttpResponse::status(200)
            .with_body(r#"{"status":"success","session_cleared":true,"keycloak_logout":false}"#),
    );

    assert_eq!(harness.session.logout().await, LogoutOutcome::Confirmed);
    assert_eq!(error_kind(&harness), None);
}

#[tokio::test(flavor = "current_thread")]
async fn rejected_logout_still_clears_the_session() {
    let harness = Harness::signed_in().await;
    harness
        .transport
        .respond(AUTH_LOGOUT_PATH, HttpResponse::status(500));

    assert_eq!(harness.session.logout().await, LogoutOutcome::Rejected(500));
    assert_eq!(
        harness.store.snapshot().session.state,
        SessionState::Unauthenticated
    );
    assert_eq!(error_kind(&harness), Some(ErrorKind::LoggedOutWithWarning));
}

#[tokio::test(flavor = "current_thread")]
async fn offline_logout_still_clears_the_session() {
    let harness = Harness::signed_in().await;
    harness.transport.fail(AUTH_LOGOUT_PATH);

    assert_eq!(harness.session.logout().await, LogoutOutcome::Offline);
    assert_eq!(
        harness.store.snapshot().session.state,
        SessionState::Unauthenticated
    );
    assert_eq!(error_kind(&harness), Some(ErrorKind::LoggedOutOffline));
    assert!(!harness.store.snapshot().activity.busy);
}

#[tokio::test(flavor = "current_thread")]
async fn reload_is_delegated_to_the_host() {
    let harness = Harness::new();
    harness.session.reload();
    assert_eq!(harness.host.reloads.get(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn logout_waits_for_the_pending_probe() -> anyhow::Result<()> {
    let harness = Harness::new();
    let gate = harness.transport.gate(AUTH_USER_PATH);

    let (probe, logout) = tokio::join!(harness.session.probe_session(), async {
        let logout = harness.session.logout().await;
        gate.send(identity_response())
            .map_err(|_| anyhow::anyhow!("session probe was not pending"))?;
        anyhow::Ok(logout)
    });

    assert_eq!(logout?, LogoutOutcome::Ignored);
    assert!(matches!(probe, ProbeOutcome::Authenticated(_)));
    assert_eq!(harness.transport.calls(AUTH_LOGOUT_PATH), 0);
    let snapshot = harness.store.snapshot();
    assert!(snapshot.session.state.is_authenticated());
    assert!(!snapshot.activity.busy);
    Ok(())
}
