//! `gloo-net` transport that rides the browser's session cookie.

use crate::core::config::endpoint_url;
use crate::core::errors::TransportError;
use crate::services::transport::{BffTransport, HttpResponse};
use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

/// Credentialed fetch client bound to one BFF origin.
#[derive(Clone, Debug)]
pub(crate) struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl BffTransport for GlooTransport {
    async fn get(&self, path: &str) -> Result<HttpResponse, TransportError> {
        let url = endpoint_url(&self.base_url, path);
        let response = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|err| TransportError::Network {
                detail: err.to_string(),
            })?;
        let headers = response.headers();
        let head = HttpResponse {
            status: response.status(),
            content_disposition: headers.get("content-disposition"),
            content_type: headers.get("content-type"),
            body: Vec::new(),
        };
        let body = response
            .binary()
            .await
            .map_err(|err| TransportError::Body {
                detail: err.to_string(),
            });
        HttpResponse::from_read(head, body)
    }
}
