use log::debug;

use crate::{
    actions::Action,
    config::Config,
    effect::Effect,
    state::*,
};

/// Root reducer that delegates to sub-reducers based on action type
/// Pure function: takes state and action, returns (new state, effects to perform)
pub fn reduce(mut state: AppState, action: &Action) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    let (ui_state, ui_effects) = ui_reducer(state.ui, action);
    state.ui = ui_state;
    effects.extend(ui_effects);

    let (catalog_state, catalog_effects) = catalog_reducer(state.catalog, action, &state.config);
    state.catalog = catalog_state;
    effects.extend(catalog_effects);

    let (detail_state, detail_effects) = detail_reducer(state.detail, action);
    state.detail = detail_state;
    effects.extend(detail_effects);

    let (task_state, task_effects) = task_reducer(state.task, action);
    state.task = task_state;
    effects.extend(task_effects);

    let (debug_console_state, debug_console_effects) =
        debug_console_reducer(state.debug_console, action);
    state.debug_console = debug_console_state;
    effects.extend(debug_console_effects);

    (state, effects)
}

/// UI state reducer - handles UI-related actions
fn ui_reducer(mut state: UiState, action: &Action) -> (UiState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::TickSpinner => {
            // Increment spinner frame for animation (0-9 cycle)
            state.spinner_frame = (state.spinner_frame + 1) % 10;
        }
        Action::Bootstrap => {
            state.bootstrap_state = BootstrapState::LoadingCatalog;
            effects.push(Effect::batch(vec![
                Effect::LoadEnvFile,
                Effect::InitializeClient,
            ]));
        }
        Action::CatalogLoaded(_) => {
            // An empty catalog after a failure still shows the UI with a retry hint
            state.bootstrap_state = BootstrapState::UIReady;
        }
        Action::ToggleShortcuts => {
            state.show_shortcuts = !state.show_shortcuts;
            state.shortcuts_scroll = 0;
        }
        Action::ScrollShortcutsUp => {
            state.shortcuts_scroll = state.shortcuts_scroll.saturating_sub(1);
        }
        Action::ScrollShortcutsDown => {
            if state.shortcuts_scroll < state.shortcuts_max_scroll {
                state.shortcuts_scroll += 1;
            }
        }
        _ => {}
    }

    (state, effects)
}

/// Catalog reducer - entries, search, paging and the cards of the visible page
fn catalog_reducer(
    mut state: CatalogState,
    action: &Action,
    config: &Config,
) -> (CatalogState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        Action::Bootstrap | Action::ReloadCatalog => {
            state.loading_state = LoadingState::Loading;
            effects.push(Effect::LoadCatalog {
                limit: config.list_limit,
            });
        }
        Action::CatalogLoaded(Ok(entries)) => {
            debug!("Catalog loaded with {} entries", entries.len());
            state.view.set_entries(entries.clone());
            state.loading_state = LoadingState::Loaded;
            state.selected_card = 0;
            effects.extend(sync_visible_cards(&mut state));
        }
        Action::CatalogLoaded(Err(err)) => {
            state.view.set_entries(Vec::new());
            state.loading_state = LoadingState::Error(err.clone());
            state.selected_card = 0;
            state.cards.clear();
        }

        // Search bar
        Action::FocusSearch => {
            state.search_focused = true;
        }
        Action::LeaveSearch => {
            state.search_focused = false;
        }
        Action::SearchInput(ch) => {
            state.view.push_search_char(*ch);
            effects.extend(page_changed(&mut state));
        }
        Action::SearchBackspace => {
            state.view.pop_search_char();
            effects.extend(page_changed(&mut state));
        }
        Action::ClearSearch => {
            if !state.view.search_term().is_empty() {
                state.view.clear_search();
                effects.extend(page_changed(&mut state));
            }
        }

        // Paging; out of range requests leave everything as it was
        Action::NextPage => {
            if state.view.next_page() {
                effects.extend(page_changed(&mut state));
            }
        }
        Action::PreviousPage => {
            if state.view.previous_page() {
                effects.extend(page_changed(&mut state));
            }
        }
        Action::FirstPage => {
            if state.view.first_page() {
                effects.extend(page_changed(&mut state));
            }
        }
        Action::LastPage => {
            if state.view.last_page() {
                effects.extend(page_changed(&mut state));
            }
        }
        Action::GoToPage(page) => {
            if state.view.set_current_page(*page) {
                effects.extend(page_changed(&mut state));
            }
        }
        Action::SelectPageToken(index) => {
            let page = state
                .view
                .page_tokens()
                .iter()
                .filter_map(|token| token.page())
                .nth(index.saturating_sub(1));
            if let Some(page) = page
                && *index > 0
                && page != state.view.current_page()
            {
                effects.push(Effect::DispatchAction(Action::GoToPage(page)));
            }
        }

        // Jump-to-page input
        Action::ShowJumpInput => {
            if state.view.shows_jump_input() {
                state.jump_input = Some(String::new());
            }
        }
        Action::HideJumpInput => {
            state.jump_input = None;
        }
        Action::JumpInput(ch) => {
            if let Some(input) = state.jump_input.as_mut() {
                input.push(*ch);
            }
        }
        Action::JumpBackspace => {
            if let Some(input) = state.jump_input.as_mut() {
                input.pop();
            }
        }
        Action::JumpSubmit => {
            if let Some(input) = state.jump_input.take()
                && state.view.jump_to_page(&input)
            {
                effects.extend(page_changed(&mut state));
            }
        }

        // Card cursor
        Action::SelectNextCard => {
            let count = state.view.page().items.len();
            if state.selected_card + 1 < count {
                state.selected_card += 1;
            }
        }
        Action::SelectPreviousCard => {
            state.selected_card = state.selected_card.saturating_sub(1);
        }
        Action::SelectCardBelow => {
            let count = state.view.page().items.len();
            if state.selected_card + GRID_COLUMNS < count {
                state.selected_card += GRID_COLUMNS;
            }
        }
        Action::SelectCardAbove => {
            if state.selected_card >= GRID_COLUMNS {
                state.selected_card -= GRID_COLUMNS;
            }
        }
        Action::OpenSelectedDetail => {
            if let Some(entry) = state.selected_entry() {
                effects.push(Effect::DispatchAction(Action::OpenDetail(entry.name)));
            }
        }

        Action::CardLoaded(name, result) => {
            // Results for cards that scrolled out of view are dropped
            if let Some(card) = state.cards.get_mut(name) {
                *card = match result {
                    Ok(pokemon) => CardState::Loaded(pokemon.clone()),
                    Err(err) => CardState::Failed(err.clone()),
                };
            } else {
                debug!("Ignoring stale card result for {}", name);
            }
        }
        _ => {}
    }

    (state, effects)
}

/// Reset the cursor and fetch cards for the new visible page
fn page_changed(state: &mut CatalogState) -> Vec<Effect> {
    state.selected_card = 0;
    sync_visible_cards(state)
}

/// Keep card state for the visible page only and request the missing cards
///
/// A new batch replaces the one in flight, so it also carries every visible
/// card that is still loading.
fn sync_visible_cards(state: &mut CatalogState) -> Vec<Effect> {
    let page = state.view.page();
    let visible: Vec<_> = page.items.into_iter().cloned().collect();

    state
        .cards
        .retain(|name, _| visible.iter().any(|entry| &entry.name == name));

    let mut has_new_cards = false;
    for entry in &visible {
        if !state.cards.contains_key(&entry.name) {
            state.cards.insert(entry.name.clone(), CardState::Loading);
            has_new_cards = true;
        }
    }

    if !has_new_cards {
        return Vec::new();
    }

    let pending: Vec<_> = visible
        .into_iter()
        .filter(|entry| state.cards.get(&entry.name) == Some(&CardState::Loading))
        .collect();
    vec![Effect::LoadCards { entries: pending }]
}

/// Detail view reducer
fn detail_reducer(mut state: DetailState, action: &Action) -> (DetailState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        Action::OpenDetail(name) => {
            state.panel = Some(DetailPanel::loading(name.clone()));
            effects.push(Effect::LoadDetail { name: name.clone() });
        }
        Action::CloseDetail => {
            state.panel = None;
        }
        Action::DetailLoaded(name, result) => {
            // A late response for a panel that was closed or replaced is dropped
            if let Some(panel) = state.panel.as_mut()
                && &panel.name == name
            {
                match result {
                    Ok(detail) => {
                        panel.detail = Some(detail.clone());
                        panel.loading_state = LoadingState::Loaded;
                    }
                    Err(err) => {
                        panel.loading_state = LoadingState::Error(err.clone());
                    }
                }
            }
        }
        Action::ScrollDetailUp => {
            if let Some(panel) = state.panel.as_mut() {
                panel.scroll = panel.scroll.saturating_sub(1);
            }
        }
        Action::ScrollDetailDown => {
            if let Some(panel) = state.panel.as_mut()
                && panel.scroll < panel.max_scroll
            {
                panel.scroll += 1;
            }
        }
        Action::UpdateDetailMaxScroll(max_scroll) => {
            if let Some(panel) = state.panel.as_mut() {
                panel.max_scroll = *max_scroll;
                panel.scroll = panel.scroll.min(*max_scroll);
            }
        }
        _ => {}
    }

    (state, effects)
}

/// Task reducer - handles background task status
fn task_reducer(mut state: TaskState, action: &Action) -> (TaskState, Vec<Effect>) {
    match action {
        Action::SetTaskStatus(status) => {
            state.status = status.clone();
        }
        Action::CatalogLoaded(Ok(entries)) if entries.is_empty() => {
            state.status = Some(TaskStatus::warning("The catalog is empty"));
        }
        Action::CatalogLoaded(Ok(entries)) => {
            state.status = Some(TaskStatus::success(format!(
                "Loaded {} Pokémon",
                entries.len()
            )));
        }
        Action::CatalogLoaded(Err(err)) => {
            state.status = Some(TaskStatus::error(format!("{} (press r to retry)", err)));
        }
        _ => {}
    }

    (state, vec![])
}

/// Debug console reducer
fn debug_console_reducer(
    mut state: DebugConsoleState,
    action: &Action,
) -> (DebugConsoleState, Vec<Effect>) {
    match action {
        Action::ToggleDebugConsole => {
            state.is_open = !state.is_open;
            // Reset scroll when opening
            if state.is_open {
                state.scroll_offset = 0;
            }
        }
        Action::ScrollDebugConsoleUp => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
            state.auto_scroll = false;
        }
        Action::ScrollDebugConsoleDown => {
            state.scroll_offset = state.scroll_offset.saturating_add(1);
            state.auto_scroll = false;
        }
        Action::PageDebugConsoleDown => {
            // Page down by viewport_height - 1 (keep one line of context)
            let page_size = state.viewport_height.saturating_sub(1).max(1);
            state.scroll_offset = state.scroll_offset.saturating_add(page_size);
            state.auto_scroll = false;
        }
        Action::ToggleDebugAutoScroll => {
            state.auto_scroll = !state.auto_scroll;
        }
        Action::ClearDebugLogs => {
            if let Ok(mut logs) = state.logs.lock() {
                logs.clear();
            }
            state.scroll_offset = 0;
        }
        Action::UpdateDebugConsoleViewport(height) => {
            state.viewport_height = *height;
        }
        _ => {}
    }

    (state, vec![])
}
