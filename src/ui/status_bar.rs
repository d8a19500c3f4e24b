use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use festui::GalleryMode;

/// Build the status line
/// - Grid: active category, item count, mode, item under the cursor
/// - Lightbox: position of the open item
fn build_status_line(
    category_label: &str,
    visible_count: usize,
    mode: GalleryMode,
    cursor: Option<(usize, &str)>,
    lightbox_position: Option<(usize, usize)>,
) -> String {
    let mut parts = vec![
        format!("Category: {}", category_label),
        format!("{} items", visible_count),
        format!("{} mode", mode.as_str()),
    ];

    match (lightbox_position, cursor) {
        (Some((current, total)), _) => parts.push(format!("Viewing {} of {}", current, total)),
        (None, Some((idx, caption))) => parts.push(format!("Selected: {} ({})", caption, idx + 1)),
        (None, None) => {}
    }

    parts.join(" │ ")
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    category_label: &str,
    visible_count: usize,
    mode: GalleryMode,
    cursor: Option<(usize, &str)>,
    lightbox_position: Option<(usize, usize)>,
) {
    let status_line = build_status_line(
        category_label,
        visible_count,
        mode,
        cursor,
        lightbox_position,
    );

    let status_bar = Paragraph::new(Line::from(vec![Span::raw(status_line)]))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_grid() {
        let line = build_status_line("Technical", 5, GalleryMode::Full, Some((1, "Robo race")), None);
        assert_eq!(
            line,
            "Category: Technical │ 5 items │ Full mode │ Selected: Robo race (2)"
        );
    }

    #[test]
    fn test_status_line_lightbox_wins() {
        let line = build_status_line(
            "All",
            8,
            GalleryMode::Preview { max_items: 8 },
            Some((0, "x")),
            Some((3, 8)),
        );
        assert!(line.ends_with("Viewing 3 of 8"));
    }

    #[test]
    fn test_status_line_empty() {
        let line = build_status_line("Sports", 0, GalleryMode::Full, None, None);
        assert_eq!(line, "Category: Sports │ 0 items │ Full mode");
    }
}
