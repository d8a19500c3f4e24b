//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Classifying image preview failures
//! - filter: Category filtering and preview truncation
//! - formatting: Fest date badge, countdown clock, text truncation
//! - highlights: Event id to gallery category mapping
//! - keymap: Key bindings for the grid and the lightbox
//! - layout: Grid geometry and cursor movement
//! - navigation: Wrapping selection steps
//! - source: Resolving image `src` values to files or URLs
//! - ui: Category tab strip

pub mod errors;
pub mod filter;
pub mod formatting;
pub mod highlights;
pub mod keymap;
pub mod layout;
pub mod navigation;
pub mod source;
pub mod ui;
