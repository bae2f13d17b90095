//! Scripted transport and recording host for the workflow tests.
#![allow(dead_code)]

use async_trait::async_trait;
use reportal_api_models::AUTH_USER_PATH;
use reportal_ui::core::config::PortalConfig;
use reportal_ui::core::errors::{SaveError, TransportError};
use reportal_ui::core::report::DownloadResult;
use reportal_ui::core::store::MemoryStore;
use reportal_ui::services::report::ReportRetriever;
use reportal_ui::services::session::SessionController;
use reportal_ui::services::transport::{BffTransport, Host, HttpResponse};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use tokio::sync::oneshot;

pub const BFF: &str = "http://localhost:8000";

enum Scripted {
    Respond(HttpResponse),
    Fail(TransportError),
    BrokenBody(u16),
    Gated(oneshot::Receiver<HttpResponse>),
}

/// Answers each path from a queue of scripted replies.
#[derive(Default)]
pub struct FakeTransport {
    script: RefCell<HashMap<String, VecDeque<Scripted>>>,
    calls: RefCell<Vec<String>>,
}

impl FakeTransport {
    fn push(&self, path: &str, reply: Scripted) {
        self.script
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn respond(&self, path: &str, response: HttpResponse) {
        self.push(path, Scripted::Respond(response));
    }

    pub fn fail(&self, path: &str) {
        self.push(
            path,
            Scripted::Fail(TransportError::Network {
                detail: "connection refused".to_string(),
            }),
        );
    }

    /// Deliver `status` but break the body stream mid-read.
    pub fn break_body(&self, path: &str, status: u16) {
        self.push(path, Scripted::BrokenBody(status));
    }

    /// Hold the next request to `path` open until the sender fires.
    pub fn gate(&self, path: &str) -> oneshot::Sender<HttpResponse> {
        let (tx, rx) = oneshot::channel();
        self.push(path, Scripted::Gated(rx));
        tx
    }

    pub fn calls(&self, path: &str) -> usize {
        self.calls.borrow().iter().filter(|call| *call == path).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl BffTransport for FakeTransport {
    async fn get(&self, path: &str) -> Result<HttpResponse, TransportError> {
        self.calls.borrow_mut().push(path.to_string());
        let next = self
            .script
            .borrow_mut()
            .get_mut(path)
            .and_then(VecDeque::pop_front);
        match next {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail(err)) => Err(err),
            Some(Scripted::BrokenBody(status)) => HttpResponse::from_read(
                HttpResponse::status(status),
                Err(TransportError::Body {
                    detail: "stream reset".to_string(),
                }),
            ),
            Some(Scripted::Gated(rx)) => rx.await.map_err(|_| TransportError::Network {
                detail: "gate dropped".to_string(),
            }),
            None => Err(TransportError::Network {
                detail: format!("unscripted request to {path}"),
            }),
        }
    }
}

/// Records every side effect instead of touching a browser.
#[derive(Default)]
pub struct RecordingHost {
    pub navigations: RefCell<Vec<String>>,
    pub saved: RefCell<Vec<DownloadResult>>,
    pub reloads: Cell<u32>,
    pub refuse_saves: Cell<bool>,
}

impl Host for RecordingHost {
    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }

    fn save_file(&self, artifact: &DownloadResult) -> Result<(), SaveError> {
        if self.refuse_saves.get() {
            return Err(SaveError {
                filename: artifact.filename.clone(),
                detail: "blocked by the browser".to_string(),
            });
        }
        self.saved.borrow_mut().push(artifact.clone());
        Ok(())
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

pub struct Harness {
    pub transport: Rc<FakeTransport>,
    pub host: Rc<RecordingHost>,
    pub store: MemoryStore,
    pub session: SessionController<MemoryStore>,
    pub reports: ReportRetriever<MemoryStore>,
}

impl Harness {
    pub fn new() -> Self {
        let transport = Rc::new(FakeTransport::default());
        let host = Rc::new(RecordingHost::default());
        let store = MemoryStore::default();
        let session = SessionController::new(
            Rc::clone(&transport) as Rc<dyn BffTransport>,
            Rc::clone(&host) as Rc<dyn Host>,
            store.clone(),
            Rc::new(PortalConfig::new(BFF)),
        );
        let reports = ReportRetriever::new(session.clone());
        Self {
            transport,
            host,
            store,
            session,
            reports,
        }
    }

    /// Harness whose store already holds an authenticated session.
    pub async fn signed_in() -> Self {
        let harness = Self::new();
        harness
            .transport
            .respond(AUTH_USER_PATH, identity_response());
        harness.session.probe_session().await;
        harness
    }
}

pub fn identity_response() -> HttpResponse {
    HttpResponse::status(200).with_body(
        r#"{"sub":"7f3c","email":"ivanova@clinic.example","preferred_username":"ivanova","given_name":"Anna","family_name":"Ivanova"}"#,
    )
}
