use anyhow::Result;
use log::debug;
use pokeapi_client::PokeApiClient;
use ratatui::{
    crossterm::{
        self,
        event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    },
    prelude::*,
};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use tokio::sync::mpsc;

use crate::actions::Action;
use crate::config::Config;
use crate::effect::execute_effect;
use crate::state::*;
use crate::store::Store;
use crate::task::{BackgroundTask, TaskResult, start_task_worker};
use crate::view_models::{
    catalog_grid::CatalogGridViewModel, detail::DetailViewModel,
    pagination::PaginationViewModel, search_bar::SearchBarViewModel,
};

mod actions;
mod config;
mod effect;
mod log_capture;
mod reducer;
mod shortcuts;
mod state;
mod store;
mod task;
mod theme;
mod view_models;
mod views;

pub struct App {
    // Redux store - centralized state management
    pub store: Store,
    // Communication channels
    pub action_tx: mpsc::UnboundedSender<Action>,
    pub task_tx: mpsc::UnboundedSender<BackgroundTask>,
    // Lazy-initialized API client (created after .env is loaded)
    pub client: Option<PokeApiClient>,
}

impl App {
    fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        task_tx: mpsc::UnboundedSender<BackgroundTask>,
        log_buffer: log_capture::LogBuffer,
    ) -> App {
        let mut initial_state = AppState::with_config(Config::load());
        initial_state.debug_console.logs = log_buffer;

        App {
            store: Store::new(initial_state),
            action_tx,
            task_tx,
            client: None,
        }
    }
}

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = shutdown();
        original_hook(panic_info);
    }));
}

fn startup() -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stderr(), crossterm::terminal::EnterAlternateScreen)?;
    Ok(())
}

fn shutdown() -> Result<()> {
    crossterm::execute!(std::io::stderr(), crossterm::terminal::LeaveAlternateScreen)?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}

async fn update(app: &mut App, msg: Action) -> Result<()> {
    // Action → Effects → follow-up Actions → more Effects, breadth first
    let mut queue = VecDeque::from([msg]);

    while let Some(action) = queue.pop_front() {
        let effects = app.store.dispatch(action);
        for effect in effects {
            let follow_up_actions = execute_effect(app, effect).await?;
            queue.extend(follow_up_actions);
        }
    }

    Ok(())
}

fn start_event_handler(app: &App, tx: mpsc::UnboundedSender<Action>) -> tokio::task::JoinHandle<()> {
    let tick_rate = std::time::Duration::from_millis(250);
    let key_context_shared = app.store.state().ui.key_context_shared.clone();
    let pending_key_shared = app.store.state().ui.pending_key.clone();

    tokio::spawn(async move {
        loop {
            let action = if crossterm::event::poll(tick_rate).unwrap_or(false) {
                let context = key_context_shared
                    .lock()
                    .map(|ctx| *ctx)
                    .unwrap_or_default();
                handle_events(context, &pending_key_shared).unwrap_or(Action::None)
            } else {
                Action::None
            };

            if tx.send(action).is_err() {
                break;
            }
        }
    })
}

fn handle_events(
    context: KeyContext,
    pending_key_shared: &Arc<Mutex<Option<PendingKeyPress>>>,
) -> Result<Action> {
    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key_event(key, context.mode, pending_key_shared)
        }
        _ => Action::None,
    })
}

fn handle_key_event(
    key: KeyEvent,
    mode: InputMode,
    pending_key_shared: &Arc<Mutex<Option<PendingKeyPress>>>,
) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c')) {
        return Action::Quit;
    }

    match mode {
        InputMode::DebugConsole => match key.code {
            KeyCode::Char('`') | KeyCode::Char('~') | KeyCode::Esc => Action::ToggleDebugConsole,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDebugConsoleDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollDebugConsoleUp,
            KeyCode::Char(' ') => Action::PageDebugConsoleDown,
            KeyCode::Char('a') => Action::ToggleDebugAutoScroll,
            KeyCode::Char('c') => Action::ClearDebugLogs,
            _ => Action::None,
        },
        InputMode::Help => match key.code {
            KeyCode::Char('?') | KeyCode::Char('x') | KeyCode::Char('q') | KeyCode::Esc => {
                Action::ToggleShortcuts
            }
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollShortcutsDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollShortcutsUp,
            KeyCode::Char('`') | KeyCode::Char('~') => Action::ToggleDebugConsole,
            _ => Action::None,
        },
        InputMode::Detail => match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => Action::CloseDetail,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDetailDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollDetailUp,
            KeyCode::Char('?') => Action::ToggleShortcuts,
            KeyCode::Char('`') | KeyCode::Char('~') => Action::ToggleDebugConsole,
            _ => Action::None,
        },
        InputMode::JumpToPage => match key.code {
            KeyCode::Esc => Action::HideJumpInput,
            KeyCode::Enter => Action::JumpSubmit,
            KeyCode::Backspace => Action::JumpBackspace,
            KeyCode::Char(c) if !ctrl => Action::JumpInput(c),
            _ => Action::None,
        },
        InputMode::Search => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down => Action::LeaveSearch,
            KeyCode::Backspace => Action::SearchBackspace,
            KeyCode::Char(c) if !ctrl => Action::SearchInput(c),
            _ => Action::None,
        },
        InputMode::Normal => {
            let Ok(mut pending_guard) = pending_key_shared.lock() else {
                return Action::None;
            };
            let (action, should_clear, new_pending_char) =
                shortcuts::find_action_for_key_with_pending(&key, pending_guard.as_ref());

            if should_clear {
                *pending_guard = None;
            }
            if let Some(pending_char) = new_pending_char {
                *pending_guard = Some(PendingKeyPress {
                    key: pending_char,
                    timestamp: std::time::Instant::now(),
                });
            }

            action
        }
    }
}

/// Convert TaskResult to Action - the single place where task results become actions
fn result_to_action(result: TaskResult) -> Action {
    match result {
        TaskResult::CatalogLoaded(result) => Action::CatalogLoaded(result),
        TaskResult::CardLoaded(name, result) => Action::CardLoaded(name, result),
        TaskResult::DetailLoaded(name, result) => Action::DetailLoaded(name, result),
        TaskResult::TaskStatusUpdate(status) => Action::SetTaskStatus(status),
    }
}

async fn run(log_buffer: log_capture::LogBuffer) -> Result<()> {
    let mut t = Terminal::new(CrosstermBackend::new(std::io::stderr()))?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let (task_tx, task_rx) = mpsc::unbounded_channel();
    let (result_tx, mut result_rx) = mpsc::unbounded_channel();

    let mut app = App::new(action_tx.clone(), task_tx, log_buffer);

    let event_task = start_event_handler(&app, app.action_tx.clone());
    let worker_task = start_task_worker(task_rx, result_tx);

    app.action_tx.send(Action::Bootstrap)?;

    loop {
        // Tell the event handler how to route keys
        let key_context = app.store.state().key_context();
        if let Ok(mut shared) = app.store.state().ui.key_context_shared.lock() {
            *shared = key_context;
        }

        t.draw(|f| {
            ui(f, &mut app);
        })?;

        // Prioritize results over actions to show incremental progress
        let maybe_action = tokio::time::timeout(std::time::Duration::from_millis(100), async {
            tokio::select! {
                biased;
                Some(result) = result_rx.recv() => Some(result_to_action(result)),
                Some(action) = action_rx.recv() => Some(action),
                else => None
            }
        })
        .await;

        match maybe_action {
            Ok(Some(action)) => {
                if let Err(err) = update(&mut app, action).await {
                    debug!("Error updating app: {}", err);
                    app.store
                        .dispatch(Action::SetTaskStatus(Some(TaskStatus::error(err.to_string()))));
                }
            }
            Ok(None) => break, // Channels closed
            Err(_) => {
                // Timeout - tick spinner animation
                let _ = app.action_tx.send(Action::TickSpinner);
            }
        }

        if app.store.state().ui.should_quit {
            break;
        }
    }

    event_task.abort();
    worker_task.abort();

    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    // Splash screen until the catalog request has come back
    if app.store.state().ui.bootstrap_state != BootstrapState::UIReady {
        views::splash_screen::render_splash_screen(f, app);
        return;
    }

    let pagination_vm = PaginationViewModel::from_state(&app.store.state().catalog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Card grid
            Constraint::Length(if pagination_vm.is_some() { 3 } else { 0 }),
            Constraint::Length(1), // Status line
        ])
        .split(f.area());

    let state = app.store.state();
    let theme = &state.theme;

    views::search_bar::render_search_bar(
        f,
        chunks[0],
        &SearchBarViewModel::from_state(&state.catalog),
        theme,
    );

    views::catalog_grid::render_catalog_grid(
        f,
        chunks[1],
        &CatalogGridViewModel::from_state(&state.catalog),
        theme,
        state.ui.spinner_frame,
    );

    if let Some(ref vm) = pagination_vm {
        views::pagination::render_pagination(f, chunks[2], vm, theme);
    }

    views::status_bar::render_status_bar(
        f,
        chunks[3],
        state.task.status.as_ref(),
        state.key_context().mode,
        theme,
    );

    // Detail view covers the grid and the pagination bar
    let overlay_area = chunks[1].union(chunks[2]);
    let detail_max_scroll = state.detail.panel.as_ref().map(|panel| {
        let vm = DetailViewModel::from_panel(panel);
        views::detail::render_detail(f, overlay_area, &vm, theme)
    });

    let shortcuts_max_scroll = state.ui.show_shortcuts.then(|| {
        views::help::render_shortcuts_panel(f, overlay_area, state.ui.shortcuts_scroll, theme)
    });

    // Debug console (Quake-style drop-down) on top of everything
    let console_viewport = state.debug_console.is_open.then(|| {
        let area = f.area();
        views::debug_console::render_debug_console(f, area, &state.debug_console, theme)
    });

    if let Some(max_scroll) = detail_max_scroll {
        app.store.dispatch(Action::UpdateDetailMaxScroll(max_scroll));
    }
    if let Some(max_scroll) = shortcuts_max_scroll {
        app.store.state_mut().ui.shortcuts_max_scroll = max_scroll;
    }
    if let Some(viewport_height) = console_viewport {
        app.store
            .dispatch(Action::UpdateDebugConsoleViewport(viewport_height));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize debug console logger before anything else
    let log_buffer = log_capture::init_logger()?;

    initialize_panic_handler();
    startup()?;
    let result = run(log_buffer).await;
    shutdown()?;
    result
}
