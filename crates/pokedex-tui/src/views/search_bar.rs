use ratatui::{prelude::*, widgets::*};

use crate::theme::Theme;
use crate::view_models::search_bar::SearchBarViewModel;

/// Render the search bar; the result line sits in the bottom border
pub fn render_search_bar(f: &mut Frame, area: Rect, vm: &SearchBarViewModel, theme: &Theme) {
    let text_style = if vm.is_placeholder {
        theme.muted()
    } else {
        theme.text()
    };

    let mut spans = vec![
        Span::styled(" 🔍 ", theme.muted()),
        Span::styled(vm.text.clone(), text_style),
    ];
    if vm.is_focused {
        spans.push(Span::styled("▏", theme.key_hint()));
    }

    let border_style = if vm.is_focused {
        theme.panel_border()
    } else {
        Style::default().fg(theme.card_border)
    };

    let title = if vm.is_focused {
        " Search (Esc/Enter to leave) "
    } else {
        " Search [/] "
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(theme.panel_title())
        .border_style(border_style)
        .style(Style::default().bg(theme.bg_secondary));

    if let Some(message) = &vm.results_message {
        block = block.title_bottom(Line::from(format!(" {} ", message)).style(theme.key_description()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
