//! castinfo-core — typed cast media descriptions from app-layer JSON.
//!
//! The app layer sends loose JSON. We decode it once into typed options,
//! then build immutable descriptions the casting SDK consumes.
//!
//! # Architecture
//!
//! ```text
//! JSON payload ──> config (decode, type checks) ──> builder ──> models
//!                                                    │
//!                                   lookup tables ───┘ (style names)
//! ```

pub mod builder;
pub mod color;
pub mod config;
pub mod error;
pub mod models;

pub use builder::{
    build, build_from_json, build_from_value, build_load_request, build_text_style, build_tracks,
};
pub use config::{CastOptions, ConfigExt, TextStyleOptions, TrackOptions};
pub use error::{Error, Result};
pub use models::*;
