//! Report artifact value types.

/// Name used when the BFF does not suggest one.
pub const DEFAULT_REPORT_FILENAME: &str = "prosthesis_report.csv";

/// Media type used when the response does not declare one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// How long a saved blob's object URL stays alive after the download click.
///
/// Some browsers cancel the download if the URL is revoked in the same tick.
pub const OBJECT_URL_RELEASE_MS: u32 = 1_000;

/// Downloaded artifact, handed to the host for saving and then dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadResult {
    /// Raw response body; never empty.
    pub payload: Vec<u8>,
    /// Suggested filename.
    pub filename: String,
    /// Media type for the saved blob.
    pub content_type: String,
}

impl DownloadResult {
    /// Payload size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

/// Receipt of a saved report; the payload itself is not retained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedReport {
    /// Filename handed to the browser.
    pub filename: String,
    /// Size of the saved payload in bytes.
    pub bytes: usize,
}

impl From<&DownloadResult> for SavedReport {
    fn from(result: &DownloadResult) -> Self {
        Self {
            filename: result.filename.clone(),
            bytes: result.len(),
        }
    }
}

/// Format a byte count with binary units for display.
#[must_use]
pub fn format_size(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut tenths = (bytes as u128) * 10;
    let mut unit = 0;
    while tenths >= 10 * 1024 && unit < UNITS.len() - 1 {
        tenths /= 1024;
        unit += 1;
    }
    format!("{}.{} {}", tenths / 10, tenths % 10, UNITS[unit])
}
