use clap::ValueEnum;

use super::record::{InputState, Position, WindowId, WindowRecord};

/// How pointer movement inside a window interacts with its placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PointerMode {
    /// Every pointer move inside a window also moves that window to the
    /// pointer's absolute coordinates.
    #[default]
    Follow,
    /// Pointer moves are only recorded; windows move through title-bar drags.
    Drag,
}

/// Which windows may record key presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum KeyScope {
    /// Any window records into the shared input state; the window id is ignored.
    #[default]
    Shared,
    /// Only the active window records key presses.
    Focused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorePolicy {
    /// Per-window offset applied on both axes when cascading new windows.
    pub cascade_step: i32,
    pub pointer: PointerMode,
    pub keys: KeyScope,
}

impl Default for StorePolicy {
    fn default() -> Self {
        Self {
            cascade_step: 20,
            pointer: PointerMode::default(),
            keys: KeyScope::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    CreateWindow { id: WindowId },
    DestroyWindow { id: WindowId },
    PointerMove { x: i32, y: i32, window: WindowId },
    KeyPress { key: String, window: WindowId },
    FocusWindow { id: WindowId },
    SetUrl { id: WindowId, url: String },
    MoveWindow { id: WindowId, position: Position },
}

impl StoreAction {
    pub fn name(&self) -> &'static str {
        match self {
            StoreAction::CreateWindow { .. } => "create_window",
            StoreAction::DestroyWindow { .. } => "destroy_window",
            StoreAction::PointerMove { .. } => "pointer_move",
            StoreAction::KeyPress { .. } => "key_press",
            StoreAction::FocusWindow { .. } => "focus_window",
            StoreAction::SetUrl { .. } => "set_url",
            StoreAction::MoveWindow { .. } => "move_window",
        }
    }
}

/// Complete desktop state: the ordered windows plus the shared input record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeskState {
    pub windows: Vec<WindowRecord>,
    pub input: InputState,
}

impl DeskState {
    pub fn window(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == id)
    }

    /// Apply `action` and return the resulting state.
    ///
    /// Total over every input: unknown ids leave the window list untouched.
    pub fn reduce(self, action: StoreAction, policy: &StorePolicy) -> DeskState {
        let DeskState { windows, input } = self;
        match action {
            StoreAction::CreateWindow { id } => {
                if windows.iter().any(|w| w.id == id) {
                    tracing::warn!(window_id = %id, "ignoring create for existing window id");
                    return DeskState { windows, input };
                }
                let offset = policy.cascade_step.saturating_mul(windows.len() as i32);
                let mut windows = windows;
                windows.push(WindowRecord::new(id, Position::new(offset, offset)));
                DeskState { windows, input }
            }
            StoreAction::DestroyWindow { id } => DeskState {
                windows: windows.into_iter().filter(|w| w.id != id).collect(),
                input,
            },
            StoreAction::PointerMove { x, y, window } => {
                let input = InputState {
                    mouse_position: Position::new(x, y),
                    ..input
                };
                let windows = match policy.pointer {
                    PointerMode::Follow => map_window(windows, &window, |w| WindowRecord {
                        position: Position::new(x, y),
                        ..w
                    }),
                    PointerMode::Drag => windows,
                };
                DeskState { windows, input }
            }
            StoreAction::KeyPress { key, window } => {
                let accepted = match policy.keys {
                    KeyScope::Shared => true,
                    KeyScope::Focused => input.active_window_id.as_ref() == Some(&window),
                };
                if !accepted {
                    return DeskState { windows, input };
                }
                DeskState {
                    windows,
                    input: InputState {
                        keyboard_input: key,
                        ..input
                    },
                }
            }
            StoreAction::FocusWindow { id } => DeskState {
                windows,
                input: InputState {
                    active_window_id: Some(id),
                    ..input
                },
            },
            StoreAction::SetUrl { id, url } => DeskState {
                windows: map_window(windows, &id, |w| WindowRecord { url, ..w }),
                input,
            },
            StoreAction::MoveWindow { id, position } => DeskState {
                windows: map_window(windows, &id, |w| WindowRecord { position, ..w }),
                input,
            },
        }
    }
}

fn map_window<F>(windows: Vec<WindowRecord>, id: &WindowId, update: F) -> Vec<WindowRecord>
where
    F: FnOnce(WindowRecord) -> WindowRecord,
{
    let mut update = Some(update);
    windows
        .into_iter()
        .map(|w| {
            if &w.id == id
                && let Some(f) = update.take()
            {
                f(w)
            } else {
                w
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(state: DeskState, id: &str) -> DeskState {
        state.reduce(
            StoreAction::CreateWindow { id: id.into() },
            &StorePolicy::default(),
        )
    }

    #[test]
    fn duplicate_create_is_ignored() {
        let state = create(create(DeskState::default(), "a"), "a");
        assert_eq!(state.windows.len(), 1);
    }

    #[test]
    fn cascade_uses_policy_step() {
        let policy = StorePolicy {
            cascade_step: 3,
            ..StorePolicy::default()
        };
        let mut state = DeskState::default();
        for id in ["a", "b", "c"] {
            state = state.reduce(StoreAction::CreateWindow { id: id.into() }, &policy);
        }
        let positions: Vec<_> = state.windows.iter().map(|w| w.position).collect();
        assert_eq!(
            positions,
            vec![Position::new(0, 0), Position::new(3, 3), Position::new(6, 6)]
        );
    }

    #[test]
    fn drag_mode_pointer_move_leaves_windows() {
        let policy = StorePolicy {
            pointer: PointerMode::Drag,
            ..StorePolicy::default()
        };
        let state = create(DeskState::default(), "a").reduce(
            StoreAction::PointerMove {
                x: 9,
                y: 8,
                window: "a".into(),
            },
            &policy,
        );
        assert_eq!(state.input.mouse_position, Position::new(9, 8));
        assert_eq!(state.windows[0].position, Position::new(0, 0));
    }

    #[test]
    fn focused_scope_ignores_inactive_window() {
        let policy = StorePolicy {
            keys: KeyScope::Focused,
            ..StorePolicy::default()
        };
        let state = create(create(DeskState::default(), "a"), "b")
            .reduce(StoreAction::FocusWindow { id: "a".into() }, &policy)
            .reduce(
                StoreAction::KeyPress {
                    key: "x".into(),
                    window: "b".into(),
                },
                &policy,
            );
        assert_eq!(state.input.keyboard_input, "");
        let state = state.reduce(
            StoreAction::KeyPress {
                key: "y".into(),
                window: "a".into(),
            },
            &policy,
        );
        assert_eq!(state.input.keyboard_input, "y");
    }

    #[test]
    fn move_window_only_touches_target() {
        let state = create(create(DeskState::default(), "a"), "b").reduce(
            StoreAction::MoveWindow {
                id: "b".into(),
                position: Position::new(-4, 2),
            },
            &StorePolicy::default(),
        );
        assert_eq!(state.windows[0].position, Position::new(0, 0));
        assert_eq!(state.windows[1].position, Position::new(-4, 2));
    }
}
