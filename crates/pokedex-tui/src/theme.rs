use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Card colors
    pub card_bg: Color,
    pub card_border: Color,
    pub card_border_selected: Color,

    // Pagination
    pub page_current_bg: Color,
    pub page_disabled_fg: Color,

    // Stat bars
    pub stat_bar: Color,
    pub stat_bar_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default) - Blue/Purple color scheme
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_secondary: tailwind::SLATE.c900,
            bg_panel: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c50,
            text_secondary: tailwind::SLATE.c300,
            text_muted: tailwind::SLATE.c500,

            accent_primary: tailwind::BLUE.c400,
            accent_secondary: tailwind::PURPLE.c400,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::AMBER.c400,

            selected_bg: tailwind::PURPLE.c500,
            selected_fg: Color::White,

            card_bg: tailwind::SLATE.c900,
            card_border: tailwind::SLATE.c700,
            card_border_selected: tailwind::BLUE.c400,

            page_current_bg: tailwind::PURPLE.c500,
            page_disabled_fg: tailwind::SLATE.c600,

            stat_bar: tailwind::BLUE.c600,
            stat_bar_bg: tailwind::SLATE.c700,
        }
    }

    /// Badge colors (background, foreground) for a pokemon type
    pub fn type_badge(&self, type_name: &str) -> (Color, Color) {
        let bg = match type_name {
            "normal" => tailwind::GRAY.c400,
            "fire" => tailwind::RED.c400,
            "water" => tailwind::BLUE.c400,
            "electric" => tailwind::YELLOW.c300,
            "grass" => tailwind::GREEN.c400,
            "ice" => tailwind::BLUE.c200,
            "fighting" => tailwind::RED.c600,
            "poison" => tailwind::PURPLE.c400,
            "ground" => tailwind::YELLOW.c600,
            "flying" => tailwind::INDIGO.c300,
            "psychic" => tailwind::PINK.c400,
            "bug" => tailwind::LIME.c400,
            "rock" => tailwind::YELLOW.c700,
            "ghost" => tailwind::PURPLE.c600,
            "dragon" => tailwind::INDIGO.c600,
            "dark" => tailwind::GRAY.c700,
            "steel" => tailwind::GRAY.c400,
            "fairy" => tailwind::PINK.c300,
            _ => tailwind::GRAY.c400,
        };

        // Light badges need dark text to stay readable
        let fg = match type_name {
            "electric" | "ice" | "fairy" => tailwind::GRAY.c800,
            _ => Color::White,
        };

        (bg, fg)
    }

    // Prebuilt styles for common use cases

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section headers
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for key hints (e.g., "Enter" in "Enter details")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for a type badge
    pub fn type_badge_style(&self, type_name: &str) -> Style {
        let (bg, fg) = self.type_badge(type_name);
        Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for warning messages
    pub fn warning(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}
