#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Logging bootstrap for the Reportal browser client.
//!
//! Every crate in the workspace logs through `tracing`; this crate owns the single
//! subscriber install so the wasm bundle and native test runs share one format.

pub mod console;
pub mod error;
pub mod init;

pub use console::ConsoleWriter;
pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_id, init_logging};
