//! Seams between the controllers and the browser.
//!
//! # Design
//! - Controllers depend on these traits only, so they run natively in tests.
//! - Futures are `?Send`: everything lives on the single browser thread.
//! - Transports report raw statuses; classification belongs to the controllers.

use crate::core::errors::{SaveError, TransportError};
use crate::core::report::DownloadResult;
use async_trait::async_trait;
use reportal_api_models::StatusClass;

/// Fully read HTTP response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Raw `Content-Disposition` header, when present.
    pub content_disposition: Option<String>,
    /// Raw `Content-Type` header, when present.
    pub content_type: Option<String>,
    /// Complete body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Response with a status and an empty body.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Attach a body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Attach a `Content-Disposition` header.
    #[must_use]
    pub fn with_disposition(mut self, value: impl Into<String>) -> Self {
        self.content_disposition = Some(value.into());
        self
    }

    /// Attach a `Content-Type` header.
    #[must_use]
    pub fn with_content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    /// Combine a received status with the outcome of reading its body.
    ///
    /// Only a `2xx` needs its body; any other status is kept with an empty body
    /// so a broken stream never hides it.
    ///
    /// # Errors
    ///
    /// Returns the body error when the status is a success.
    pub fn from_read(
        head: Self,
        body: Result<Vec<u8>, TransportError>,
    ) -> Result<Self, TransportError> {
        match body {
            Ok(body) => Ok(head.with_body(body)),
            Err(err) if StatusClass::of(head.status).is_success() => Err(err),
            Err(_) => Ok(head.with_body(Vec::new())),
        }
    }
}

/// Credentialed access to the BFF.
///
/// Implementations must send the browser's cookies with every request and must
/// not attach any script-visible credential.
#[async_trait(?Send)]
pub trait BffTransport {
    /// Issue a `GET` for `path` (relative to the BFF origin) and read the full body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no status was obtained or the body could not
    /// be read.
    async fn get(&self, path: &str) -> Result<HttpResponse, TransportError>;
}

/// Browser side effects the controllers trigger.
pub trait Host {
    /// Replace the current page with `url`.
    fn navigate(&self, url: &str);

    /// Offer `artifact` to the user as a file download.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] when the browser refuses to create the download.
    fn save_file(&self, artifact: &DownloadResult) -> Result<(), SaveError>;

    /// Reload the current page.
    fn reload(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken() -> Result<Vec<u8>, TransportError> {
        Err(TransportError::Body {
            detail: "stream reset".to_string(),
        })
    }

    #[test]
    fn broken_body_keeps_a_failure_status() {
        let response = HttpResponse::from_read(HttpResponse::status(401), broken());
        assert_eq!(response, Ok(HttpResponse::status(401)));
    }

    #[test]
    fn broken_body_fails_a_success_status() {
        let response = HttpResponse::from_read(HttpResponse::status(200), broken());
        assert!(matches!(response, Err(TransportError::Body { .. })));
    }

    #[test]
    fn read_body_is_attached() {
        let head = HttpResponse::status(200).with_content_type("text/csv");
        assert_eq!(
            HttpResponse::from_read(head.clone(), Ok(b"a,b".to_vec())),
            Ok(head.with_body("a,b"))
        );
    }
}
