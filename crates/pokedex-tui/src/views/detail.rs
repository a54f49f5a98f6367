use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    prelude::*,
    widgets::*,
};

use crate::theme::Theme;
use crate::view_models::detail::{DetailBody, DetailSections, DetailViewModel, StatRow};

const LABEL_WIDTH: usize = 18;
const MAX_BAR_WIDTH: usize = 40;

/// Render the detail view as a floating window over `area`
/// Returns the maximum scroll offset
pub fn render_detail(f: &mut Frame, area: Rect, vm: &DetailViewModel, theme: &Theme) -> usize {
    let popup_width = (area.width * 90 / 100).min(100);
    let popup_height = area.height * 90 / 100;
    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", vm.title))
        .title_style(theme.panel_title())
        .border_style(theme.panel_border())
        .style(Style::default().bg(theme.bg_panel));
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Scrollable content
            Constraint::Length(1), // Sticky footer
        ])
        .split(inner);
    let content_area = chunks[0];

    let lines = match &vm.body {
        DetailBody::Loading => vec![Line::from(Span::styled(
            "Loading details...",
            theme.warning(),
        ))],
        DetailBody::Error(err) => vec![
            Line::from(Span::styled(err.clone(), theme.error())),
            Line::from(""),
            Line::from(Span::styled("Press Esc to go back.", theme.muted())),
        ],
        DetailBody::Loaded(sections) => section_lines(sections, content_area.width as usize, theme),
    };

    let visible_height = content_area.height as usize;
    let max_scroll = lines.len().saturating_sub(visible_height);
    let scroll = vm.scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .scroll((scroll as u16, 0))
        .style(Style::default().bg(theme.bg_panel));
    f.render_widget(paragraph, content_area);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("j/k", theme.key_hint()),
        Span::styled(" scroll  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" back to the list", theme.muted()),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().bg(theme.bg_panel));
    f.render_widget(footer, chunks[1]);

    max_scroll
}

fn section_lines(sections: &DetailSections, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(header("Description", theme));
    for line in wrap_words(&sections.description, width.max(10)) {
        lines.push(Line::from(Span::styled(line, theme.text())));
    }
    if let Some(url) = &sections.image_url {
        lines.push(Line::from(Span::styled(format!("Artwork: {}", url), theme.muted())));
    }
    lines.push(Line::from(""));

    lines.push(header("Profile", theme));
    let mut type_spans = vec![label("Types", theme)];
    for (i, kind) in sections.types.iter().enumerate() {
        if i > 0 {
            type_spans.push(Span::raw(" "));
        }
        type_spans.push(Span::styled(format!(" {} ", kind), theme.type_badge_style(kind)));
    }
    lines.push(Line::from(type_spans));
    lines.push(field("Height", &sections.height, theme));
    lines.push(field("Weight", &sections.weight, theme));
    lines.push(field("Base experience", &sections.base_experience, theme));
    lines.push(field("Abilities", &sections.abilities.join(", "), theme));
    lines.push(Line::from(""));

    lines.push(header("Base stats", theme));
    let bar_width = width.saturating_sub(LABEL_WIDTH + 6).min(MAX_BAR_WIDTH);
    for stat in &sections.stats {
        lines.push(stat_line(stat, bar_width, theme));
    }
    lines.push(Line::from(""));

    lines.push(header("Moves", theme));
    if sections.moves.is_empty() {
        lines.push(Line::from(Span::styled("No moves known", theme.muted())));
    }
    for name in &sections.moves {
        lines.push(Line::from(Span::styled(format!("  • {}", name), theme.text())));
    }

    lines
}

fn header(title: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(title, theme.section_header()))
}

fn label(name: &str, theme: &Theme) -> Span<'static> {
    Span::styled(format!("{:width$}", name, width = LABEL_WIDTH), theme.key_description())
}

fn field(name: &str, value: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        label(name, theme),
        Span::styled(value.to_string(), theme.text()),
    ])
}

fn stat_line(stat: &StatRow, bar_width: usize, theme: &Theme) -> Line<'static> {
    let filled = ((stat.ratio * bar_width as f64).round() as usize).min(bar_width);
    Line::from(vec![
        label(&stat.label, theme),
        Span::styled(format!("{:>3} ", stat.value), theme.text()),
        Span::styled("█".repeat(filled), Style::default().fg(theme.stat_bar)),
        Span::styled(
            "░".repeat(bar_width - filled),
            Style::default().fg(theme.stat_bar_bg),
        ),
    ])
}

/// Greedy word wrap so the scroll range matches the rendered lines
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap_words("When several of these POKéMON gather", 15),
            vec!["When several of", "these POKéMON", "gather"]
        );
        assert!(wrap_words("   ", 10).is_empty());
    }

    #[test]
    fn test_long_word_gets_own_line() {
        assert_eq!(
            wrap_words("a supercalifragilistic b", 5),
            vec!["a", "supercalifragilistic", "b"]
        );
    }
}
