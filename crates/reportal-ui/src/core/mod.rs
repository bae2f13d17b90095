//! Core, DOM-free primitives for the Web UI: state, reducers, parsers and projections.
pub mod config;
pub mod disposition;
pub mod errors;
pub mod report;
pub mod session;
pub mod store;
pub mod view;
