use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::*,
};

use crate::state::GRID_COLUMNS;
use crate::theme::Theme;
use crate::view_models::catalog_grid::{
    CardStatus, CardViewModel, CatalogGridViewModel, EmptyStateViewModel,
};
use crate::views::splash_screen::SPINNER_FRAMES;

/// Border plus four content lines
const CARD_HEIGHT: u16 = 6;

/// Render the card grid of the visible page
/// Pure presentation - uses pre-computed view model
pub fn render_catalog_grid(
    f: &mut Frame,
    area: Rect,
    vm: &CatalogGridViewModel,
    theme: &Theme,
    spinner_frame: usize,
) {
    if let Some(empty) = &vm.empty_state {
        render_empty_state(f, area, empty, theme);
        return;
    }

    let rows: Vec<&[CardViewModel]> = vm.cards.chunks(GRID_COLUMNS).collect();
    let mut row_constraints: Vec<Constraint> = rows
        .iter()
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    row_constraints.push(Constraint::Min(0));

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let column_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (card, card_area) in row.iter().zip(column_areas.iter()) {
            render_card(f, *card_area, card, theme, spinner_frame);
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &CardViewModel, theme: &Theme, spinner_frame: usize) {
    let border_style = if card.is_selected {
        Style::default()
            .fg(theme.card_border_selected)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.card_border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if card.is_selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(border_style)
        .style(Style::default().bg(theme.card_bg));

    let name_style = if card.is_selected {
        Style::default()
            .fg(theme.selected_fg)
            .bg(theme.selected_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        theme.text().add_modifier(Modifier::BOLD)
    };

    let badges = match card.status {
        CardStatus::Ready => {
            let mut spans = Vec::new();
            for (i, kind) in card.types.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(format!(" {} ", kind), theme.type_badge_style(kind)));
            }
            Line::from(spans)
        }
        CardStatus::Loading => {
            let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
            Line::from(Span::styled(format!("{} loading...", spinner), theme.muted()))
        }
        CardStatus::Unavailable => Line::from(""),
    };

    let measurements_style = match card.status {
        CardStatus::Unavailable => theme.warning(),
        _ => theme.muted(),
    };

    let lines = vec![
        Line::from(Span::styled(card.dex_number.clone(), theme.muted())),
        Line::from(Span::styled(card.name.clone(), name_style)),
        badges,
        Line::from(Span::styled(card.measurements.clone(), measurements_style)),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_empty_state(f: &mut Frame, area: Rect, empty: &EmptyStateViewModel, theme: &Theme) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(empty.title.clone(), theme.section_header())),
        Line::from(""),
    ];

    if !empty.message.is_empty() {
        lines.push(Line::from(Span::styled(empty.message.clone(), theme.key_description())));
    }

    if !empty.suggestions.is_empty() {
        let mut spans = Vec::new();
        for (i, suggestion) in empty.suggestions.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", theme.muted()));
            }
            spans.push(Span::styled(*suggestion, theme.key_hint()));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.card_border))
                .style(Style::default().bg(theme.bg_primary)),
        );

    f.render_widget(paragraph, area);
}
