use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use ratatui_image::StatefulImage;

use festui::content::GalleryItem;
use festui::utils;

use super::layout::centered_rect;
use crate::services::PreviewState;

/// Everything the lightbox shows besides the picture itself
pub struct LightboxView<'a> {
    pub item: &'a GalleryItem,
    /// 1-based position and displayed count
    pub position: Option<(usize, usize)>,
    pub category: &'a str,
    /// Resolved file path or URL
    pub source: &'a str,
    pub previews_enabled: bool,
    pub vim_mode: bool,
}

/// "3 / 12"
fn position_label(position: Option<(usize, usize)>) -> String {
    match position {
        Some((current, total)) => format!("{} / {}", current, total),
        None => "- / -".to_string(),
    }
}

fn build_info_line(view: &LightboxView, preview: Option<&PreviewState>) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            position_label(view.position),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::styled(view.category.to_string(), Style::default().fg(Color::Cyan)),
    ];
    if view.item.featured {
        spans.push(Span::raw("  │  "));
        spans.push(Span::styled("★ Featured", Style::default().fg(Color::Yellow)));
    }
    if let Some(PreviewState::Ready { metadata, .. }) = preview {
        if let Some((w, h)) = metadata.dimensions {
            let mut details = format!("{}x{}", w, h);
            if let Some(format) = &metadata.format {
                details.push_str(&format!(", {}", format));
            }
            details.push_str(&format!(", {}", utils::format_bytes(metadata.file_size)));
            spans.push(Span::raw("  │  "));
            spans.push(Span::styled(details, Style::default().fg(Color::Gray)));
        }
    }
    Line::from(spans)
}

fn build_hint_line(vim_mode: bool) -> Line<'static> {
    let (prev, next, close) = if vim_mode {
        ("◀ ←/h", "→/l ▶", "Esc/q")
    } else {
        ("◀ ←", "→ ▶", "Esc")
    };
    Line::from(vec![
        Span::styled(prev, Style::default().fg(Color::Yellow)),
        Span::raw(" Prev   "),
        Span::styled(close, Style::default().fg(Color::Yellow)),
        Span::raw(" Close   "),
        Span::raw("Next "),
        Span::styled(next, Style::default().fg(Color::Yellow)),
    ])
}

/// Text shown in place of the picture (video, disabled, loading, failed)
fn build_placeholder_lines(view: &LightboxView, preview: Option<&PreviewState>) -> Vec<Line<'static>> {
    let source_line = Line::from(Span::styled(
        view.source.to_string(),
        Style::default().fg(Color::DarkGray),
    ));

    if view.item.is_video() {
        return vec![
            Line::from(Span::styled(
                "▶ Video",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("Video playback is not available in the terminal"),
            source_line,
        ];
    }

    if !view.previews_enabled {
        return vec![Line::from("Image previews are disabled"), source_line];
    }

    match preview {
        Some(PreviewState::Failed {
            error_type,
            message,
        }) => vec![
            Line::from(Span::styled(
                format!("✗ {}", error_type.label()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(message.clone(), Style::default().fg(Color::Red))),
            source_line,
        ],
        _ => vec![
            Line::from(Span::styled(
                "Loading image…",
                Style::default().fg(Color::Gray),
            )),
            source_line,
        ],
    }
}

/// Render the lightbox popup over the grid
pub fn render_lightbox(f: &mut Frame, view: &LightboxView, preview: Option<&mut PreviewState>) {
    let area = centered_rect(90, 90, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", view.item.display_caption()))
        .border_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Picture
            Constraint::Length(1), // Caption
            Constraint::Length(1), // Position and category
            Constraint::Length(1), // Key hints
        ])
        .split(inner);

    let info_line = build_info_line(view, preview.as_deref());
    let image_area = chunks[0];

    match preview {
        Some(PreviewState::Ready { protocol, .. }) if !view.item.is_video() => {
            f.render_stateful_widget(StatefulImage::default(), image_area, protocol);
        }
        other => {
            let lines = build_placeholder_lines(view, other.as_deref());
            let placeholder = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false });
            f.render_widget(placeholder, vertically_centered(image_area, 3));
        }
    }

    f.render_widget(
        Paragraph::new(view.item.display_caption().to_string())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(info_line).alignment(Alignment::Center),
        chunks[2],
    );
    f.render_widget(
        Paragraph::new(build_hint_line(view.vim_mode)).alignment(Alignment::Center),
        chunks[3],
    );
}

/// Band of `height` rows in the middle of `area`
fn vertically_centered(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}
