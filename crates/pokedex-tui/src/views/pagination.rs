use ratatui::{prelude::*, widgets::*};

use crate::theme::Theme;
use crate::view_models::pagination::{JumpField, PaginationViewModel};

/// Render the pagination bar: summary, prev/next, page tokens and jump field
pub fn render_pagination(f: &mut Frame, area: Rect, vm: &PaginationViewModel, theme: &Theme) {
    let nav_style = |enabled: bool| {
        if enabled {
            theme.key_hint()
        } else {
            Style::default().fg(theme.page_disabled_fg)
        }
    };

    let mut spans = vec![
        Span::styled("◀ Prev", nav_style(vm.previous_enabled)),
        Span::raw("  "),
    ];

    for button in &vm.buttons {
        let style = if button.is_current {
            Style::default()
                .fg(theme.selected_fg)
                .bg(theme.page_current_bg)
                .add_modifier(Modifier::BOLD)
        } else if button.is_ellipsis {
            theme.muted()
        } else {
            theme.text()
        };
        spans.push(Span::styled(format!(" {}", button.label), style));
        match button.hotkey {
            Some(hotkey) if hotkey.to_string() != button.label => {
                spans.push(Span::styled(superscript(hotkey), theme.muted()));
            }
            _ => spans.push(Span::styled(" ", style)),
        }
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled("Next ▶", nav_style(vm.next_enabled)));

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(format!(" {} ", vm.summary)).style(theme.key_description()))
        .title_bottom(Line::from(" 1-9 pick a page ").style(theme.muted()).right_aligned())
        .border_style(Style::default().fg(theme.card_border))
        .style(Style::default().bg(theme.bg_secondary));

    if let Some(jump) = &vm.jump {
        let jump_line = match jump {
            JumpField::Hint(hint) => Line::from(format!(" {} ", hint)).style(theme.muted()),
            JumpField::Editing(input) => Line::from(vec![
                Span::styled(" Go to page: ", theme.key_hint()),
                Span::styled(input.clone(), theme.text()),
                Span::styled("▏ ", theme.key_hint()),
            ]),
        };
        block = block.title(jump_line.right_aligned());
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(paragraph, area);
}

/// Small digit shown next to buttons whose number differs from their key
fn superscript(digit: usize) -> &'static str {
    const DIGITS: [&str; 10] = ["⁰", "¹", "²", "³", "⁴", "⁵", "⁶", "⁷", "⁸", "⁹"];
    DIGITS.get(digit).copied().unwrap_or(" ")
}
