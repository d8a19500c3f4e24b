use chrono::NaiveDateTime;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use festui::content::SiteConfig;
use festui::logic::formatting;

/// Left half of the header: fest name, year and the gallery heading
fn build_title_lines<'a>(site: &'a SiteConfig, title: &'a str, subtitle: &'a str) -> Vec<Line<'a>> {
    vec![
        Line::from(vec![
            Span::styled(
                site.fest_name(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(site.current_year(), Style::default().fg(Color::Cyan)),
            Span::raw(" │ "),
            Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::Gray))),
    ]
}

/// Right half: date badge and countdown clock
fn build_clock_lines(site: &SiteConfig, now: NaiveDateTime) -> Vec<Line<'static>> {
    let badge = formatting::fest_date_badge(site.current_year(), site.start_date(), site.end_date());
    let date_line = match badge {
        Some(badge) => Line::from(vec![
            Span::styled(
                format!("{} {} ", badge.year, badge.month.to_uppercase()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                badge.days_line(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(
            site.dates_text().to_string(),
            Style::default().fg(Color::Cyan),
        )),
    };

    let clock = formatting::countdown_text(site.countdown_target(), now);
    let clock_line = Line::from(vec![
        Span::styled("⏱ ", Style::default().fg(Color::Gray)),
        Span::styled(
            clock,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    vec![date_line, clock_line]
}

/// Render the fest header at the top of the screen
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    site: &SiteConfig,
    title: &str,
    subtitle: &str,
    now: NaiveDateTime,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(28)])
        .split(inner);

    f.render_widget(
        Paragraph::new(build_title_lines(site, title, subtitle)),
        halves[0],
    );
    f.render_widget(
        Paragraph::new(build_clock_lines(site, now)).alignment(Alignment::Right),
        halves[1],
    );
}

/// Render the "coming soon" banner under the header
pub fn render_banner(f: &mut Frame, area: Rect, site: &SiteConfig) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            "✦ ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(site.coming_soon_message(), Style::default().fg(Color::Yellow)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    )
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(banner, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_clock_lines_with_defaults() {
        let site = SiteConfig::default();
        let lines = build_clock_lines(&site, at(2026, 4, 1));
        assert_eq!(line_text(&lines[0]), "2026 APRIL 8TH 9TH");
        assert_eq!(line_text(&lines[1]), "⏱ 07:00:00:00");
    }

    #[test]
    fn test_clock_after_fest_started() {
        let site = SiteConfig::default();
        let lines = build_clock_lines(&site, at(2026, 5, 1));
        assert_eq!(line_text(&lines[1]), "⏱ 00:00:00:00");
    }

    #[test]
    fn test_title_lines_use_fest_name() {
        let site = SiteConfig::default();
        let lines = build_title_lines(&site, "PAST FEST MEMORIES", "sub");
        assert!(line_text(&lines[0]).starts_with("SPOORTHI 2026"));
        assert_eq!(line_text(&lines[1]), "sub");
    }
}
