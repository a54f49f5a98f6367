use pokeapi_client::{Pokemon, PokemonDetail};
use pokedex_pager::{Entry, PagedFilterView};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::{config::Config, theme::Theme};

/// Cards per row in the catalog grid
pub const GRID_COLUMNS: usize = 5;

/// Root application state following Redux pattern
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ui: UiState,
    pub catalog: CatalogState,
    pub detail: DetailState,
    pub task: TaskState,
    pub debug_console: DebugConsoleState,
    pub config: Config,
    pub theme: Theme,
}

impl AppState {
    /// Initial state for a given config; the page size comes from there
    pub fn with_config(config: Config) -> Self {
        Self {
            catalog: CatalogState {
                view: PagedFilterView::new(Vec::new(), config.page_size),
                ..CatalogState::default()
            },
            config,
            ..Self::default()
        }
    }

    /// Which key map the event handler should use right now
    pub fn key_context(&self) -> KeyContext {
        let mode = if self.debug_console.is_open {
            InputMode::DebugConsole
        } else if self.ui.show_shortcuts {
            InputMode::Help
        } else if self.detail.panel.is_some() {
            InputMode::Detail
        } else if self.catalog.jump_input.is_some() {
            InputMode::JumpToPage
        } else if self.catalog.search_focused {
            InputMode::Search
        } else {
            InputMode::Normal
        };

        KeyContext { mode }
    }
}

/// Pending key press for two-key combinations
#[derive(Debug, Clone)]
pub struct PendingKeyPress {
    pub key: char,
    pub timestamp: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    JumpToPage,
    Detail,
    Help,
    DebugConsole,
}

/// Snapshot of what the event handler needs to route keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyContext {
    pub mode: InputMode,
}

/// UI-specific state (shortcuts panel, spinner, quit flag)
#[derive(Debug, Clone)]
pub struct UiState {
    pub show_shortcuts: bool,
    pub shortcuts_scroll: usize,
    pub shortcuts_max_scroll: usize,
    pub spinner_frame: usize,
    pub should_quit: bool,
    pub bootstrap_state: BootstrapState,
    /// Shared with the event handler so it knows how to route keys
    pub key_context_shared: Arc<Mutex<KeyContext>>,
    /// Pending key press for two-key combinations (3 second timeout)
    pub pending_key: Arc<Mutex<Option<PendingKeyPress>>>,
}

/// The catalog list: entries, search, paging and the cards of the visible page
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub view: PagedFilterView<Entry>,
    pub loading_state: LoadingState,
    /// Details for the entries on the visible page only, keyed by name
    pub cards: HashMap<String, CardState>,
    /// Cursor within the visible page
    pub selected_card: usize,
    pub search_focused: bool,
    /// `Some` while the jump-to-page input is open
    pub jump_input: Option<String>,
}

impl CatalogState {
    /// Names of the entries on the visible page, in display order
    pub fn visible_names(&self) -> Vec<String> {
        self.view
            .page()
            .items
            .iter()
            .map(|entry| entry.name.clone())
            .collect()
    }

    pub fn selected_entry(&self) -> Option<Entry> {
        self.view
            .page()
            .items
            .get(self.selected_card)
            .map(|entry| (*entry).clone())
    }
}

/// Fetch state of one card on the visible page
#[derive(Debug, Clone, PartialEq)]
pub enum CardState {
    Loading,
    Loaded(Box<Pokemon>),
    Failed(String),
}

/// Detail view state
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub panel: Option<DetailPanel>,
}

#[derive(Debug, Clone)]
pub struct DetailPanel {
    pub name: String,
    pub loading_state: LoadingState,
    pub detail: Option<Box<PokemonDetail>>,
    pub scroll: usize,
    pub max_scroll: usize,
}

impl DetailPanel {
    pub fn loading(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            loading_state: LoadingState::Loading,
            detail: None,
            scroll: 0,
            max_scroll: 0,
        }
    }
}

/// Background task status state
#[derive(Debug, Clone, Default)]
pub struct TaskState {
    pub status: Option<TaskStatus>,
}

/// Debug console state (Quake-style drop-down console)
#[derive(Debug, Clone)]
pub struct DebugConsoleState {
    pub is_open: bool,
    pub scroll_offset: usize,
    pub auto_scroll: bool,   // Follow new logs as they arrive
    pub height_percent: u16, // Height as percentage of screen (30-70)
    pub logs: crate::log_capture::LogBuffer,
    pub viewport_height: usize, // Updated during rendering for page down
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskStatus {
    pub message: String,
    pub status_type: TaskStatusType,
}

impl TaskStatus {
    pub fn running(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_type: TaskStatusType::Running,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_type: TaskStatusType::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_type: TaskStatusType::Error,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_type: TaskStatusType::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskStatusType {
    Running,
    Success,
    Error,
    Warning,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BootstrapState {
    #[default]
    NotStarted,
    LoadingCatalog,
    /// Catalog arrived (possibly empty after a failed fetch), UI can be shown
    UIReady,
}

// Default implementations

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_shortcuts: false,
            shortcuts_scroll: 0,
            shortcuts_max_scroll: 0,
            spinner_frame: 0,
            should_quit: false,
            bootstrap_state: BootstrapState::default(),
            key_context_shared: Arc::new(Mutex::new(KeyContext::default())),
            pending_key: Arc::new(Mutex::new(None)),
        }
    }
}

impl Default for DebugConsoleState {
    fn default() -> Self {
        Self {
            is_open: false,
            scroll_offset: 0,
            auto_scroll: true,
            height_percent: 50, // 50% of screen height
            logs: crate::log_capture::DebugConsoleLogger::create_buffer(),
            viewport_height: 20, // Default, updated during rendering
        }
    }
}
