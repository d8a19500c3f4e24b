use std::collections::HashMap;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use festui::logic::ui::CategoryTab;
use festui::{CategoryFilter, GalleryMode};

/// Tab titles with item counts, e.g. "Technical (12)"
fn tab_titles(tabs: &[CategoryTab], counts: &HashMap<String, usize>, total: usize) -> Vec<String> {
    tabs.iter()
        .map(|tab| {
            let count = match &tab.filter {
                CategoryFilter::All => total,
                CategoryFilter::Only(id) => counts.get(id).copied().unwrap_or(0),
            };
            format!("{} ({})", tab.label, count)
        })
        .collect()
}

/// Render the category tab strip
pub fn render_category_tabs(
    f: &mut Frame,
    area: Rect,
    tabs: &[CategoryTab],
    selected: Option<usize>,
    counts: &HashMap<String, usize>,
    total: usize,
    mode: GalleryMode,
) {
    let titles: Vec<Line> = tab_titles(tabs, counts, total)
        .into_iter()
        .map(Line::from)
        .collect();

    let block_title = match mode {
        GalleryMode::Full => "Categories".to_string(),
        GalleryMode::Preview { max_items } => format!("Categories (preview: first {})", max_items),
    };

    let mut widget = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(block_title))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default())
        .divider("│");

    // A filter that is not in the strip (e.g. from --category) highlights nothing
    if let Some(idx) = selected {
        widget = widget.select(idx).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );
    }

    f.render_widget(widget, area);
}
