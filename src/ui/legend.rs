use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, lightbox_open: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if lightbox_open {
        hotkey_spans.extend(vec![
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::raw(":Prev/Next  "),
        ]);
        if vim_mode {
            hotkey_spans.extend(vec![
                Span::styled("h/l", Style::default().fg(Color::Yellow)),
                Span::raw(":Prev/Next  "),
            ]);
        }
        hotkey_spans.extend(vec![
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(":Close"),
        ]);
        return hotkey_spans;
    }

    // Navigation keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(vec![
            Span::styled("hjkl", Style::default().fg(Color::Yellow)),
            Span::raw(":Nav  "),
            Span::styled("gg/G", Style::default().fg(Color::Yellow)),
            Span::raw(":First/Last  "),
            Span::styled("^d/^u", Style::default().fg(Color::Yellow)),
            Span::raw(":½Page  "),
            Span::styled("^f/^b", Style::default().fg(Color::Yellow)),
            Span::raw(":FullPage  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Yellow)),
            Span::raw(":Nav  "),
        ]);
    }

    hotkey_spans.extend(vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(":Open  "),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(":Category  "),
        Span::styled("1-9", Style::default().fg(Color::Yellow)),
        Span::raw(":Jump to tab  "),
        Span::styled("p", Style::default().fg(Color::Yellow)),
        Span::raw(":Preview/Full  "),
        Span::styled("b", Style::default().fg(Color::Yellow)),
        Span::raw(":Banner  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Render the hotkey legend (changes with vim mode and the lightbox)
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, lightbox_open: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(vim_mode, lightbox_open)))
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false });
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, vim_mode: bool, lightbox_open: bool) -> u16 {
    // line_count() miscounts when a block is attached, so count without one
    let paragraph_for_counting =
        Paragraph::new(Line::from(build_hotkey_spans(vim_mode, lightbox_open)))
            .wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
