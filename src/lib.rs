//! Festival gallery TUI library
//!
//! Exposes the content loaders, the pure gallery model and the logic
//! helpers so they can be tested without a terminal.

pub mod content;
pub mod logic;
pub mod model;
pub mod utils;

/// Sentinel category id meaning "no filter"
pub const ALL_CATEGORIES: &str = "all";

/// Active category filter for the gallery
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Build a filter from a category id, treating `"all"` as no filter
    pub fn from_id(id: &str) -> Self {
        if id == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id.to_string())
        }
    }

    pub fn as_id(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(id) => id,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => id == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(id: &str) -> Self {
        CategoryFilter::from_id(id)
    }
}

/// How much of the gallery is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryMode {
    /// Every item of the active category
    #[default]
    Full,
    /// Only the first `max_items` of the active category (home page teaser)
    Preview { max_items: usize },
}

impl GalleryMode {
    pub fn as_str(&self) -> &str {
        match self {
            GalleryMode::Full => "Full",
            GalleryMode::Preview { .. } => "Preview",
        }
    }
}
