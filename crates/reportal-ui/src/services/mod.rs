//! Controllers and the seams they drive.
//!
//! # Design
//! - `session` and `report` hold all behaviour and only see the traits in `transport`.
//! - `http` and `browser` are the wasm implementations of those traits.

pub mod report;
pub mod session;
pub mod transport;

#[cfg(target_arch = "wasm32")]
pub(crate) mod browser;
#[cfg(target_arch = "wasm32")]
pub(crate) mod http;
