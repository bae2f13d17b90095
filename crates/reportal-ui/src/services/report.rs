//! Report retrieval: fetch, classify, save.
//!
//! # Design
//! - Gated on an authenticated session and the shared busy flag, re-checked on entry.
//! - Every HTTP and transport outcome maps to exactly one result.
//! - The payload is dropped as soon as the host has it; nothing is cached.

use crate::core::disposition::suggested_filename;
use crate::core::errors::{ErrorKind, OperationError};
use crate::core::report::{DEFAULT_CONTENT_TYPE, DownloadResult, SavedReport};
use crate::core::store::{Operation, StateStore, begin_operation, finish_operation};
use crate::services::session::SessionController;
use crate::services::transport::HttpResponse;
use reportal_api_models::{REPORTS_PATH, StatusClass};
use tracing::{debug, error, info, warn};

/// Why a download request was not started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoredReason {
    /// Another download or a logout holds the busy flag, or a session probe is pending.
    Busy,
    /// Called without an authenticated session; a caller bug.
    NotAuthenticated,
}

/// Result of a download request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The artifact was handed to the browser.
    Saved(SavedReport),
    /// The BFF has no report for this caller yet.
    NoDataYet,
    /// The attempt failed; the error is recorded in the store.
    Failed(ErrorKind),
    /// Nothing was attempted.
    Ignored(IgnoredReason),
}

/// Fetches the caller's report and saves it locally.
#[derive(Clone)]
pub struct ReportRetriever<S: StateStore> {
    session: SessionController<S>,
}

impl<S: StateStore> ReportRetriever<S> {
    /// Build a retriever that shares seams and store with `session`.
    #[must_use]
    pub const fn new(session: SessionController<S>) -> Self {
        Self { session }
    }

    /// Download the report once.
    pub async fn download(&self) -> DownloadOutcome {
        let claimed = self.session.store.reduce(|store| {
            if !store.session.state.is_authenticated() {
                return Err(IgnoredReason::NotAuthenticated);
            }
            if begin_operation(store, Operation::Download) {
                Ok(())
            } else {
                Err(IgnoredReason::Busy)
            }
        });
        if let Err(reason) = claimed {
            match reason {
                IgnoredReason::Busy => debug!("download ignored while busy"),
                IgnoredReason::NotAuthenticated => {
                    error!("download requested without an authenticated session");
                }
            }
            return DownloadOutcome::Ignored(reason);
        }

        let outcome = match self.fetch_and_save().await {
            Ok(saved) => {
                info!(filename = %saved.filename, bytes = saved.bytes, "report saved");
                DownloadOutcome::Saved(saved)
            }
            Err(ErrorKind::NoDataYet) => {
                info!("no report data yet");
                self.record(ErrorKind::NoDataYet);
                DownloadOutcome::NoDataYet
            }
            Err(ErrorKind::SessionExpired) => {
                self.session.expire();
                DownloadOutcome::Failed(ErrorKind::SessionExpired)
            }
            Err(kind) => {
                warn!(kind = kind.label(), "report download failed");
                self.record(kind);
                DownloadOutcome::Failed(kind)
            }
        };

        self.session.store.reduce(finish_operation);
        outcome
    }

    async fn fetch_and_save(&self) -> Result<SavedReport, ErrorKind> {
        let response = self
            .session
            .transport
            .get(REPORTS_PATH)
            .await
            .map_err(|err| {
                warn!(error = %err, "report request did not complete");
                ErrorKind::NetworkFailure
            })?;
        let artifact = classify_report(response, &self.session.config.fallback_filename)?;
        self.session.host.save_file(&artifact).map_err(|err| {
            error!(error = %err, "browser refused the download");
            ErrorKind::SaveFailed
        })?;
        Ok(SavedReport::from(&artifact))
    }

    fn record(&self, kind: ErrorKind) {
        self.session
            .store
            .reduce(|store| store.error = Some(OperationError::new(kind)));
    }
}

/// Map a report response onto an artifact or an error kind.
pub(crate) fn classify_report(
    response: HttpResponse,
    fallback_filename: &str,
) -> Result<DownloadResult, ErrorKind> {
    match StatusClass::of(response.status) {
        StatusClass::Success => {
            if response.body.is_empty() {
                return Err(ErrorKind::EmptyArtifact);
            }
            let filename =
                suggested_filename(response.content_disposition.as_deref(), fallback_filename);
            let content_type = response
                .content_type
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
            Ok(DownloadResult {
                payload: response.body,
                filename,
                content_type,
            })
        }
        StatusClass::NotFound => Err(ErrorKind::NoDataYet),
        StatusClass::Unauthorized => Err(ErrorKind::SessionExpired),
        StatusClass::Forbidden => Err(ErrorKind::AccessDenied),
        StatusClass::Other(status) => Err(ErrorKind::UnexpectedStatus(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::DEFAULT_REPORT_FILENAME;

    #[test]
    fn success_carries_payload_filename_and_type() -> Result<(), ErrorKind> {
        let response = HttpResponse::status(200)
            .with_body("User ID,Signal Type\nCLI003,avg_pressure\n")
            .with_disposition(r#"attachment; filename="report_2024.csv""#)
            .with_content_type("text/csv; charset=utf-8");
        let artifact = classify_report(response, DEFAULT_REPORT_FILENAME)?;
        assert_eq!(artifact.filename, "report_2024.csv");
        assert_eq!(artifact.content_type, "text/csv; charset=utf-8");
        assert!(!artifact.is_empty());
        Ok(())
    }

    #[test]
    fn missing_headers_fall_back() -> Result<(), ErrorKind> {
        let artifact = classify_report(
            HttpResponse::status(200).with_body("x"),
            DEFAULT_REPORT_FILENAME,
        )?;
        assert_eq!(artifact.filename, DEFAULT_REPORT_FILENAME);
        assert_eq!(artifact.content_type, DEFAULT_CONTENT_TYPE);
        Ok(())
    }

    #[test]
    fn statuses_map_to_kinds() {
        let cases = [
            (404, ErrorKind::NoDataYet),
            (401, ErrorKind::SessionExpired),
            (403, ErrorKind::AccessDenied),
            (500, ErrorKind::UnexpectedStatus(500)),
            (302, ErrorKind::UnexpectedStatus(302)),
        ];
        for (status, kind) in cases {
            assert_eq!(
                classify_report(HttpResponse::status(status), DEFAULT_REPORT_FILENAME),
                Err(kind)
            );
        }
    }

    #[test]
    fn empty_success_is_an_error() {
        assert_eq!(
            classify_report(HttpResponse::status(200), DEFAULT_REPORT_FILENAME),
            Err(ErrorKind::EmptyArtifact)
        );
    }
}
