use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NewWindow,
    CloseWindow,
    // Focus cycling, in collection order
    FocusNext,
    FocusPrev,
    ToggleHelp,
    CloseHelp,
    // Clipboard
    PasteUrl,
    CopyUrl,
}

impl Action {
    /// Every action, in the order help lists them.
    pub const ALL: [Action; 9] = [
        Action::NewWindow,
        Action::CloseWindow,
        Action::FocusNext,
        Action::FocusPrev,
        Action::PasteUrl,
        Action::CopyUrl,
        Action::ToggleHelp,
        Action::CloseHelp,
        Action::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::NewWindow => "New window",
            Action::CloseWindow => "Close focused window",
            Action::FocusNext => "Focus next window",
            Action::FocusPrev => "Focus previous window",
            Action::ToggleHelp => "Toggle help",
            Action::CloseHelp => "Close help",
            Action::PasteUrl => "Paste into url bar",
            Action::CopyUrl => "Copy url",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bindings used by the desktop. Plain printable keys are left free for
    /// the url bar, so every global binding uses a modifier or a non-text key.
    pub fn default() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(Quit, KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        kb.add(
            NewWindow,
            KeyCombo::new(KeyCode::Char('n'), KeyModifiers::CONTROL),
        );
        kb.add(
            CloseWindow,
            KeyCombo::new(KeyCode::Char('w'), KeyModifiers::CONTROL),
        );
        kb.add(FocusNext, KeyCombo::new(KeyCode::Tab, KeyModifiers::NONE));
        kb.add(
            FocusPrev,
            KeyCombo::new(KeyCode::BackTab, KeyModifiers::NONE),
        );
        kb.add(ToggleHelp, KeyCombo::new(KeyCode::F(1), KeyModifiers::NONE));
        kb.add(CloseHelp, KeyCombo::new(KeyCode::Esc, KeyModifiers::NONE));
        kb.add(CloseHelp, KeyCombo::new(KeyCode::Enter, KeyModifiers::NONE));
        kb.add(
            PasteUrl,
            KeyCombo::new(KeyCode::Char('v'), KeyModifiers::CONTROL),
        );
        kb.add(
            CopyUrl,
            KeyCombo::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        kb
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.combos(action).iter().any(|c| c.matches(key))
    }

    pub fn combos(&self, action: Action) -> &[KeyCombo] {
        self.map.get(&action).map(Vec::as_slice).unwrap_or_default()
    }

    /// First action (in `Action::ALL` order) bound to `key`, skipping
    /// `CloseHelp`, which only applies while help is open.
    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        Action::ALL
            .into_iter()
            .filter(|act| *act != Action::CloseHelp)
            .find(|act| self.matches(*act, key))
    }

    pub fn help_entries(&self) -> Vec<(Action, Vec<String>)> {
        Action::ALL
            .into_iter()
            .filter_map(|act| {
                let combos = self.combos_for(act);
                (!combos.is_empty()).then_some((act, combos))
            })
            .collect()
    }

    /// Return the display strings for all combos mapped to `action`.
    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.combos(action).iter().map(|c| c.display()).collect()
    }
}
