use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    prelude::*,
    widgets::*,
};

use crate::App;
use crate::state::BootstrapState;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the splash screen shown while the catalog loads
pub fn render_splash_screen(f: &mut Frame, app: &App) {
    let state = app.store.state();
    let theme = &state.theme;
    let area = f.area();

    let centered_area = {
        let width = 50.min(area.width);
        let height = 10.min(area.height);
        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;
        Rect {
            x,
            y,
            width,
            height,
        }
    };

    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_primary)),
        area,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_primary))
        .style(Style::default().bg(theme.bg_secondary));
    f.render_widget(block, centered_area);

    let inner = centered_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Title underline
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Spinner
            Constraint::Length(1), // Spacing
            Constraint::Min(1),    // Stage message
        ])
        .split(inner);

    let stage_message = match state.ui.bootstrap_state {
        BootstrapState::NotStarted => "Initializing...",
        BootstrapState::LoadingCatalog => "Loading Pokémon catalog...",
        BootstrapState::UIReady => "Ready",
    };

    let title = Paragraph::new("Pokédex")
        .style(theme.panel_title())
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let underline = Paragraph::new("───────────")
        .style(Style::default().fg(theme.accent_secondary))
        .alignment(Alignment::Center);
    f.render_widget(underline, chunks[1]);

    let spinner = SPINNER_FRAMES[state.ui.spinner_frame % SPINNER_FRAMES.len()];
    let spinner_widget = Paragraph::new(format!("{} Loading...", spinner))
        .style(theme.warning())
        .alignment(Alignment::Center);
    f.render_widget(spinner_widget, chunks[3]);

    let message_widget = Paragraph::new(stage_message)
        .style(Style::default().fg(theme.text_secondary))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(message_widget, chunks[5]);
}
