//! Window store: the single source of truth for open windows and the shared
//! input record.
//!
//! Every operation is expressed as a [`StoreAction`] and applied through the
//! pure [`DeskState::reduce`]; `WindowStore` only holds the current state and
//! the policy the reducer runs under. None of the operations can fail: ids
//! that match nothing degrade to no-ops.

mod action;
mod record;

pub use action::{DeskState, KeyScope, PointerMode, StoreAction, StorePolicy};
pub use record::{BLANK_URL, DEFAULT_TITLE, InputState, Position, WindowId, WindowRecord};

#[derive(Debug, Default)]
pub struct WindowStore {
    state: DeskState,
    policy: StorePolicy,
}

impl WindowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: StorePolicy) -> Self {
        Self {
            state: DeskState::default(),
            policy,
        }
    }

    pub fn policy(&self) -> &StorePolicy {
        &self.policy
    }

    pub fn state(&self) -> &DeskState {
        &self.state
    }

    pub fn windows(&self) -> &[WindowRecord] {
        &self.state.windows
    }

    pub fn window(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.state.window(id)
    }

    pub fn input(&self) -> &InputState {
        &self.state.input
    }

    /// Replace the current state with the result of applying `action`.
    pub fn dispatch(&mut self, action: StoreAction) {
        tracing::debug!(action = action.name(), "store dispatch");
        let prev = std::mem::take(&mut self.state);
        self.state = prev.reduce(action, &self.policy);
    }

    /// Append a window with a fresh id and return that id.
    pub fn create_window(&mut self) -> WindowId {
        let id = WindowId::generate();
        tracing::debug!(window_id = %id, seq = self.state.windows.len(), "opened window");
        self.dispatch(StoreAction::CreateWindow { id: id.clone() });
        id
    }

    pub fn destroy_window(&mut self, id: &WindowId) {
        tracing::debug!(window_id = %id, "closing window");
        self.dispatch(StoreAction::DestroyWindow { id: id.clone() });
    }

    pub fn record_pointer_move(&mut self, x: i32, y: i32, window: &WindowId) {
        self.dispatch(StoreAction::PointerMove {
            x,
            y,
            window: window.clone(),
        });
    }

    pub fn record_key_press(&mut self, key: impl Into<String>, window: &WindowId) {
        self.dispatch(StoreAction::KeyPress {
            key: key.into(),
            window: window.clone(),
        });
    }

    pub fn focus_window(&mut self, id: impl Into<WindowId>) {
        self.dispatch(StoreAction::FocusWindow { id: id.into() });
    }

    pub fn set_window_url(&mut self, id: &WindowId, url: impl Into<String>) {
        self.dispatch(StoreAction::SetUrl {
            id: id.clone(),
            url: url.into(),
        });
    }

    pub fn move_window(&mut self, id: &WindowId, position: Position) {
        self.dispatch(StoreAction::MoveWindow {
            id: id.clone(),
            position,
        });
    }
}
