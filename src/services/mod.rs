//! External Services
//!
//! This module contains services that run off the UI thread:
//! - images: Background image decoding for the lightbox preview

pub mod images;

pub use images::{spawn_image_load, PreviewState, PreviewUpdate};
