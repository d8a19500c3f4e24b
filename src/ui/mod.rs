// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, tabs, grid, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - header: Fest name, gallery heading, date badge, countdown, banner
// - category_tabs: Category tab strip with item counts
// - gallery_grid: Thumbnail grid with cursor and scrollbar
// - lightbox: Modal viewer with image preview and prev/next hints
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar
// - toast: Renders toast notifications (brief pop-up messages)

pub mod category_tabs;
pub mod gallery_grid;
pub mod header;
pub mod layout;
pub mod legend;
pub mod lightbox;
pub mod render;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
