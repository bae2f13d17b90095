//! DOM-backed [`Host`]: navigation, reload, and blob downloads.

use crate::core::errors::SaveError;
use crate::core::report::{DownloadResult, OBJECT_URL_RELEASE_MS};
use crate::services::transport::Host;
use gloo::timers::callback::Timeout;
use gloo::utils::{body, document, window};
use js_sys::{Array, Uint8Array};
use tracing::error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Host bound to the current window.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserHost;

impl Host for BrowserHost {
    fn navigate(&self, url: &str) {
        if let Err(err) = window().location().assign(url) {
            error!(url, detail = ?err, "navigation failed");
        }
    }

    fn save_file(&self, artifact: &DownloadResult) -> Result<(), SaveError> {
        let fail = |err: JsValue| SaveError {
            filename: artifact.filename.clone(),
            detail: format!("{err:?}"),
        };

        let parts = Array::of1(&Uint8Array::from(artifact.payload.as_slice()).into());
        let options = BlobPropertyBag::new();
        options.set_type(&artifact.content_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(fail)?;
        let object_url = Url::create_object_url_with_blob(&blob).map_err(fail)?;

        let clicked = document()
            .create_element("a")
            .and_then(|element| {
                element
                    .dyn_into::<HtmlAnchorElement>()
                    .map_err(JsValue::from)
            })
            .and_then(|anchor| {
                anchor.set_href(&object_url);
                anchor.set_download(&artifact.filename);
                body().append_child(&anchor)?;
                anchor.click();
                anchor.remove();
                Ok(())
            });

        Timeout::new(OBJECT_URL_RELEASE_MS, move || {
            if let Err(err) = Url::revoke_object_url(&object_url) {
                error!(detail = ?err, "object url was not revoked");
            }
        })
        .forget();
        clicked.map_err(fail)
    }

    fn reload(&self) {
        if let Err(err) = window().location().reload() {
            error!(detail = ?err, "reload failed");
        }
    }
}
