//! Controller context shared with every component.
//!
//! # Design
//! - Create exactly one transport, host and controller pair per app boot.
//! - Both controllers write to the global yewdux store.

use crate::core::config::PortalConfig;
use crate::core::store::AppStore;
use crate::services::browser::BrowserHost;
use crate::services::http::GlooTransport;
use crate::services::report::ReportRetriever;
use crate::services::session::SessionController;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

/// Controllers bound to the browser seams.
#[derive(Clone)]
pub(crate) struct PortalCtx {
    /// Session probe, login redirect, logout.
    pub(crate) session: SessionController<Dispatch<AppStore>>,
    /// Report download.
    pub(crate) reports: ReportRetriever<Dispatch<AppStore>>,
    config: Rc<PortalConfig>,
}

impl PortalCtx {
    pub(crate) fn new(config: PortalConfig) -> Self {
        let config = Rc::new(config);
        let session = SessionController::new(
            Rc::new(GlooTransport::new(config.bff_base_url.clone())),
            Rc::new(BrowserHost),
            Dispatch::<AppStore>::new(),
            Rc::clone(&config),
        );
        Self {
            reports: ReportRetriever::new(session.clone()),
            session,
            config,
        }
    }
}

impl PartialEq for PortalCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
    }
}
