use ratatui::{prelude::*, widgets::*};

use crate::state::{InputMode, TaskStatus, TaskStatusType};
use crate::theme::Theme;

/// Render the status line: task status on the left, key hints on the right
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    status: Option<&TaskStatus>,
    mode: InputMode,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hints_width(mode))])
        .split(area);

    if let Some(status) = status {
        let (icon, color) = match status.status_type {
            TaskStatusType::Running => ("⏳", theme.status_warning),
            TaskStatusType::Success => ("✓", theme.status_success),
            TaskStatusType::Error => ("✗", theme.status_error),
            TaskStatusType::Warning => ("⚠", theme.status_warning),
        };

        let status_span = Span::styled(
            format!(" {} {}", icon, status.message),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );
        f.render_widget(
            Paragraph::new(Line::from(status_span)).style(Style::default().bg(theme.bg_primary)),
            chunks[0],
        );
    } else {
        f.render_widget(
            Block::default().style(Style::default().bg(theme.bg_primary)),
            chunks[0],
        );
    }

    let hints: Vec<Span> = mode_hints(mode)
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {} ", key), theme.key_hint()),
                Span::styled(format!("{} ", label), theme.muted()),
            ]
        })
        .collect();

    f.render_widget(
        Paragraph::new(Line::from(hints))
            .alignment(Alignment::Right)
            .style(Style::default().bg(theme.bg_primary)),
        chunks[1],
    );
}

fn mode_hints(mode: InputMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        InputMode::Normal => &[("/", "search"), ("Enter", "details"), ("?", "help"), ("q", "quit")],
        InputMode::Search => &[("Esc", "done"), ("Backspace", "delete")],
        InputMode::JumpToPage => &[("Enter", "go"), ("Esc", "cancel")],
        InputMode::Detail => &[("j/k", "scroll"), ("Esc", "back")],
        InputMode::Help => &[("j/k", "scroll"), ("Esc", "close")],
        InputMode::DebugConsole => &[("`", "close")],
    }
}

fn hints_width(mode: InputMode) -> u16 {
    mode_hints(mode)
        .iter()
        .map(|(key, label)| key.chars().count() + label.chars().count() + 3)
        .sum::<usize>() as u16
}
