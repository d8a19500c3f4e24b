//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - keyboard: User keyboard input
//! - images: Finished previews from the background loader
//!
//! Handlers take &mut App and process one event each.

pub mod images;
pub mod keyboard;

pub use images::handle_preview_update;
pub use keyboard::handle_key;
