use pokeapi_client::{Pokemon, PokemonDetail};
use pokedex_pager::Entry;

/// Action enum - represents all possible actions in the application
/// Actions are dispatched to the reducer to update state
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // User-initiated actions
    Bootstrap,
    ReloadCatalog,

    // Search bar
    FocusSearch,
    LeaveSearch,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,

    // Paging
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    GoToPage(usize),
    /// Pick the n-th page button (1-based, ellipses not counted)
    SelectPageToken(usize),

    // Jump-to-page input
    ShowJumpInput,
    HideJumpInput,
    JumpInput(char),
    JumpBackspace,
    JumpSubmit,

    // Card grid cursor
    SelectNextCard,
    SelectPreviousCard,
    SelectCardBelow,
    SelectCardAbove,

    // Detail view
    OpenSelectedDetail,
    OpenDetail(String),
    CloseDetail,
    ScrollDetailUp,
    ScrollDetailDown,

    // Help panel
    ToggleShortcuts,
    ScrollShortcutsUp,
    ScrollShortcutsDown,

    // Debug console (Quake-style drop-down)
    ToggleDebugConsole,
    ScrollDebugConsoleUp,
    ScrollDebugConsoleDown,
    PageDebugConsoleDown,
    ToggleDebugAutoScroll,
    ClearDebugLogs,

    // Viewport updates reported by the renderer
    UpdateDetailMaxScroll(usize),
    UpdateDebugConsoleViewport(usize),

    // State update actions (dispatched internally)
    SetTaskStatus(Option<crate::state::TaskStatus>),
    TickSpinner,

    // Background task completion notifications
    CatalogLoaded(Result<Vec<Entry>, String>),
    CardLoaded(String, Result<Box<Pokemon>, String>),
    DetailLoaded(String, Result<Box<PokemonDetail>, String>),

    Quit,
    None,
}
