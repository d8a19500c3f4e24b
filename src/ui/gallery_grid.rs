use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use festui::content::{Category, GalleryItem};
use festui::logic::formatting::truncate_to_width;
use festui::logic::layout::{self, CELL_HEIGHT};

/// Display name of a category id (falls back to the id itself)
fn category_label<'a>(categories: &'a [Category], id: &'a str) -> &'a str {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or(id)
}

/// Text lines inside one grid cell, fitted to `width` columns
fn build_cell_lines(item: &GalleryItem, category: &str, width: usize) -> Vec<Line<'static>> {
    let mut badges = vec![];
    if item.is_video() {
        badges.push(Span::styled("▶ Video", Style::default().fg(Color::Cyan)));
    } else {
        badges.push(Span::styled("▣ Photo", Style::default().fg(Color::DarkGray)));
    }
    if item.featured {
        badges.push(Span::raw(" "));
        badges.push(Span::styled(
            "★ Featured",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    vec![
        Line::from(badges),
        Line::from(Span::styled(
            truncate_to_width(item.display_caption(), width),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            truncate_to_width(category, width),
            Style::default().fg(Color::Gray),
        )),
    ]
}

/// Render the thumbnail grid
///
/// `first_row` must already keep `selection` on screen.
pub fn render_gallery_grid(
    f: &mut Frame,
    area: Rect,
    items: &[&GalleryItem],
    categories: &[Category],
    selection: Option<usize>,
    first_row: usize,
    columns: usize,
) {
    if items.is_empty() {
        let empty = Paragraph::new("No photos in this category yet")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    }

    let columns = columns.max(1);
    let rows_on_screen = layout::visible_rows(area.height);
    let total_rows = layout::total_rows(items.len(), columns);

    // Leave one column for the scrollbar
    let grid_area = Rect {
        width: area.width.saturating_sub(1),
        ..area
    };

    let row_rects = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CELL_HEIGHT); rows_on_screen])
        .split(grid_area);

    for (screen_row, row_rect) in row_rects.iter().enumerate() {
        let row = first_row + screen_row;
        if row >= total_rows {
            break;
        }

        let cell_rects = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_rect);

        for (col, cell_rect) in cell_rects.iter().enumerate() {
            let idx = row * columns + col;
            let Some(item) = items.get(idx) else {
                break;
            };
            let is_selected = selection == Some(idx);

            let border_style = if is_selected {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} ", idx + 1));

            let width = cell_rect.width.saturating_sub(2) as usize;
            let lines = build_cell_lines(item, category_label(categories, &item.category), width);
            f.render_widget(Paragraph::new(lines).block(block), *cell_rect);
        }
    }

    if total_rows > rows_on_screen {
        let mut scrollbar_state = ScrollbarState::new(total_rows.saturating_sub(rows_on_screen))
            .position(first_row);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        f.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use festui::content::MediaType;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn item(caption: &str, media_type: MediaType, featured: bool) -> GalleryItem {
        GalleryItem {
            id: "1".to_string(),
            src: "/gallery/1.jpg".to_string(),
            caption: caption.to_string(),
            category: "cultural".to_string(),
            media_type,
            featured,
            aspect_ratio: None,
        }
    }

    #[test]
    fn test_cell_badges() {
        let lines = build_cell_lines(&item("DJ night", MediaType::Video, true), "Cultural", 30);
        assert_eq!(line_text(&lines[0]), "▶ Video ★ Featured");
        assert_eq!(line_text(&lines[1]), "DJ night");
        assert_eq!(line_text(&lines[2]), "Cultural");
    }

    #[test]
    fn test_cell_caption_fallback_and_truncation() {
        let lines = build_cell_lines(&item("", MediaType::Image, false), "Cultural", 30);
        assert_eq!(line_text(&lines[0]), "▣ Photo");
        assert_eq!(line_text(&lines[1]), "Gallery image");

        let long = "Robotics finals in the main auditorium";
        let lines = build_cell_lines(&item(long, MediaType::Image, false), "Cultural", 10);
        assert!(unicode_width::UnicodeWidthStr::width(line_text(&lines[1]).as_str()) <= 10);
    }

    #[test]
    fn test_category_label_lookup() {
        let categories = vec![Category {
            id: "cultural".to_string(),
            name: "Cultural".to_string(),
        }];
        assert_eq!(category_label(&categories, "cultural"), "Cultural");
        assert_eq!(category_label(&categories, "sports"), "sports");
    }
}
