//! Shared types and models for the Crop Advisor client
//!
//! This crate contains the domain model and pure projection logic shared
//! between the native terminal client and the browser (via WASM) surface.

pub mod models;
pub mod types;
pub mod view;

pub use models::*;
pub use types::*;
pub use view::*;
