use crate::{actions::Action, effect::Effect, reducer::reduce, state::AppState};

/// Redux-style Store that holds application state and dispatches actions
///
/// - Centralized state management
/// - Actions are dispatched to modify state
/// - Pure reducers handle state transitions
/// - State is replaced on each action
pub struct Store {
    state: AppState,
}

impl Store {
    /// Create a new store with initial state
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
        }
    }

    /// Get immutable reference to current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get mutable reference to current state
    /// Note: Direct mutation should be avoided - prefer dispatch() for state changes
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Dispatch an action to update state
    ///
    /// The action is passed to the root reducer which delegates to the
    /// sub-reducers. Returns the effects to be executed by the caller.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        self.dispatch_ref(&action)
    }

    /// Dispatch an action by reference (useful when action should not be moved)
    pub fn dispatch_ref(&mut self, action: &Action) -> Vec<Effect> {
        let (new_state, effects) = reduce(self.state.clone(), action);
        self.state = new_state;
        effects
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
