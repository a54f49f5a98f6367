use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::Action;

/// Shortcut key definition with key matching capability
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key_display: &'static str,
    pub description: &'static str,
    pub action: Action,
    pub matcher: ShortcutMatcher,
}

/// Matcher for shortcuts - can be single key or two-key combination
#[derive(Clone)]
pub enum ShortcutMatcher {
    /// Single key press
    SingleKey(fn(&KeyEvent) -> bool),
    /// Two-key combination: (first_key, second_key)
    /// Example: ('g', 'g') for "g then g"
    TwoKey(char, char),
    /// Digit keys 1-9; the action is built from the pressed digit
    Digit(fn(usize) -> Action),
}

impl std::fmt::Debug for ShortcutMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShortcutMatcher::SingleKey(_) => write!(f, "SingleKey"),
            ShortcutMatcher::TwoKey(k1, k2) => write!(f, "TwoKey({}, {})", k1, k2),
            ShortcutMatcher::Digit(_) => write!(f, "Digit"),
        }
    }
}

/// Category of shortcuts
#[derive(Debug, Clone)]
pub struct ShortcutCategory {
    pub name: &'static str,
    pub shortcuts: Vec<Shortcut>,
}

impl Shortcut {
    /// Action for a single key press, if this shortcut handles it
    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        match &self.matcher {
            ShortcutMatcher::SingleKey(func) => func(key).then(|| self.action.clone()),
            ShortcutMatcher::TwoKey(_, _) => None,
            ShortcutMatcher::Digit(build) => match key.code {
                KeyCode::Char(c) if plain(key) => c
                    .to_digit(10)
                    .filter(|digit| *digit > 0)
                    .map(|digit| build(digit as usize)),
                _ => None,
            },
        }
    }

    /// Check if this is a two-key shortcut with the given first key
    pub fn is_two_key_starting_with(&self, first_key: char) -> bool {
        match &self.matcher {
            ShortcutMatcher::TwoKey(k1, _) => *k1 == first_key,
            _ => false,
        }
    }

    /// Check if this two-key shortcut completes with the given second key
    pub fn completes_two_key_with(&self, second_key: char) -> bool {
        match &self.matcher {
            ShortcutMatcher::TwoKey(_, k2) => *k2 == second_key,
            _ => false,
        }
    }
}

fn plain(key: &KeyEvent) -> bool {
    !key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}

/// Get all shortcut definitions organized by category
pub fn get_shortcuts() -> Vec<ShortcutCategory> {
    vec![
        ShortcutCategory {
            name: "Cards",
            shortcuts: vec![
                Shortcut {
                    key_display: "h",
                    description: "Previous card",
                    action: Action::SelectPreviousCard,
                    matcher: ShortcutMatcher::SingleKey(|key| {
                        matches!(key.code, KeyCode::Char('h'))
                    }),
                },
                Shortcut {
                    key_display: "l",
                    description: "Next card",
                    action: Action::SelectNextCard,
                    matcher: ShortcutMatcher::SingleKey(|key| {
                        matches!(key.code, KeyCode::Char('l'))
                    }),
                },
                Shortcut {
                    key_display: "↑ or k",
                    description: "Card above",
                    action: Action::SelectCardAbove,
                    matcher: ShortcutMatcher::SingleKey(|key| {
                        matches!(key.code, KeyCode::Up | KeyCode::Char('k'))
                    }),
                },
                Shortcut {
                    key_display: "↓ or j",
                    description: "Card below",
                    action: Action::SelectCardBelow,
                    matcher: ShortcutMatcher::SingleKey(|key| {
                        matches!(key.code, KeyCode::Down | KeyCode::Char('j'))
                    }),
                },
                Shortcut {
                    key_display: "Enter",
                    description: "Show details of the selected Pokémon",
                    action: Action::OpenSelectedDetail,
                    matcher: ShortcutMatcher::SingleKey(|key| matches!(key.code, KeyCode::Enter)),
                },
            ],
        },
        ShortcutCategory {
            name: "Pages",
            shortcuts: vec![
                Shortcut {
                    key_display: "← or [",
                    description: "Previous page",
                    action: Action::PreviousPage,
                    matcher: ShortcutMatcher::SingleKey(|key| {
                        matches!(key.code, KeyCode::Left | KeyCode::Char('['))
                    }),
                },
                Shortcut {
                    key_display: "→ or ]",
                    description: "Next page",
                    action: Action::NextPage,
                    matcher: ShortcutMatcher::SingleKey(|key| {
                        matches!(key.code, KeyCode::Right | KeyCode::Char(']'))
                    }),
                },
                Shortcut {
                    key_display: "gg",
                    description: "First page",
                    action: Action::FirstPage,
                    matcher: ShortcutMatcher::TwoKey('g', 'g'),
                },
                Shortcut {
                    key_display: "G",
                    description: "Last page",
                    action: Action::LastPage,
                    matcher: ShortcutMatcher::SingleKey(|key| {
                        matches!(key.code, KeyCode::Char('G'))
                    }),
                },
                Shortcut {
                    key_display: "1-9",
                    description: "Go to the n-th page button",
                    action: Action::SelectPageToken(1),
                    matcher: ShortcutMatcher::Digit(Action::SelectPageToken),
                },
                Shortcut {
                    key_display: ":",
                    description: "Jump to page (more than 10 pages)",
                    action: Action::ShowJumpInput,
                    matcher: ShortcutMatcher::SingleKey(|key| {
                        matches!(key.code, KeyCode::Char(':'))
                    }),
                },
            ],
        },
        ShortcutCategory {
            name: "Search",
            shortcuts: vec![
                Shortcut {
                    key_display: "/",
                    description: "Focus the search bar (Esc or Enter to leave)",
                    action: Action::FocusSearch,
                    matcher: ShortcutMatcher::SingleKey(|key| {
                        matches!(key.code, KeyCode::Char('/'))
                    }),
                },
                Shortcut {
                    key_display: "x",
                    description: "Clear the search",
                    action: Action::ClearSearch,
                    matcher: ShortcutMatcher::SingleKey(|key| {
                        matches!(key.code, KeyCode::Char('x')) && plain(key)
                    }),
                },
            ],
        },
        ShortcutCategory {
            name: "General",
            shortcuts: vec![
                Shortcut {
                    key_display: "r",
                    description: "Reload the catalog",
                    action: Action::ReloadCatalog,
                    matcher: ShortcutMatcher::SingleKey(|key| {
                        matches!(key.code, KeyCode::Char('r')) && plain(key)
                    }),
                },
                Shortcut {
                    key_display: "?",
                    description: "Toggle this help",
                    action: Action::ToggleShortcuts,
                    matcher: ShortcutMatcher::SingleKey(|key| {
                        matches!(key.code, KeyCode::Char('?'))
                    }),
                },
                Shortcut {
                    key_display: "` or ~",
                    description: "Toggle the debug console",
                    action: Action::ToggleDebugConsole,
                    matcher: ShortcutMatcher::SingleKey(|key| {
                        matches!(key.code, KeyCode::Char('`') | KeyCode::Char('~'))
                    }),
                },
                Shortcut {
                    key_display: "q or Ctrl+c",
                    description: "Quit",
                    action: Action::Quit,
                    matcher: ShortcutMatcher::SingleKey(|key| {
                        matches!(key.code, KeyCode::Char('q'))
                            || (matches!(key.code, KeyCode::Char('c'))
                                && key.modifiers.contains(KeyModifiers::CONTROL))
                    }),
                },
            ],
        },
    ]
}

/// Get all shortcuts in a flat list for easy iteration
pub fn get_all_shortcuts_flat() -> Vec<Shortcut> {
    get_shortcuts()
        .into_iter()
        .flat_map(|category| category.shortcuts)
        .collect()
}

/// Find the action for a given key event, handling two-key combinations
/// Returns (action, should_clear_pending_key, new_pending_key)
pub fn find_action_for_key_with_pending(
    key: &KeyEvent,
    pending_key: Option<&crate::state::PendingKeyPress>,
) -> (Action, bool, Option<char>) {
    const TWO_KEY_TIMEOUT_SECS: u64 = 3;

    // Get the current character if it's a simple char press
    let current_char = match key.code {
        KeyCode::Char(c) if plain(key) => Some(c),
        _ => None,
    };

    // Check if we have a valid pending key (not timed out)
    let valid_pending =
        pending_key.filter(|p| p.timestamp.elapsed().as_secs() < TWO_KEY_TIMEOUT_SECS);

    // If we have a valid pending key, try to complete a two-key combination
    if let (Some(pending), Some(current)) = (valid_pending, current_char) {
        for shortcut in get_all_shortcuts_flat() {
            if shortcut.is_two_key_starting_with(pending.key)
                && shortcut.completes_two_key_with(current)
            {
                return (shortcut.action.clone(), true, None);
            }
        }
        // Pending key didn't match, clear it and process current key normally
        return (find_single_key_action(key), true, None);
    }

    // No valid pending key - check if current key starts a two-key combination
    if let Some(current) = current_char {
        for shortcut in get_all_shortcuts_flat() {
            if shortcut.is_two_key_starting_with(current) {
                return (Action::None, false, Some(current));
            }
        }
    }

    (find_single_key_action(key), true, None)
}

/// Find action for a single key press (no two-key combination logic)
fn find_single_key_action(key: &KeyEvent) -> Action {
    get_all_shortcuts_flat()
        .iter()
        .find_map(|shortcut| shortcut.action_for_key(key))
        .unwrap_or(Action::None)
}
