use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Dashboard commands reachable from the keyboard. None of them move or
/// resize a window directly; those stay pointer-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Quit,
    OpenNextChat,
    EndSelected,
    OrganizeWindows,
    HideAllWindows,
    ToggleDockMode,
    SelectNext,
    SelectPrev,
    RestoreSelected,
    ToggleMouseCapture,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::OpenNextChat => "Accept next waiting chat",
            Action::EndSelected => "End selected session",
            Action::OrganizeWindows => "Organize windows",
            Action::HideAllWindows => "Hide all windows",
            Action::ToggleDockMode => "Toggle dock mode",
            Action::SelectNext => "Select next session",
            Action::SelectPrev => "Select previous session",
            Action::RestoreSelected => "Restore selected window",
            Action::ToggleMouseCapture => "Toggle mouse capture",
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
            KeyCode::BackTab => "BackTab".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Delete => "Delete".to_string(),
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

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(
            Quit,
            KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        kb.add(Quit, KeyCombo::new(KeyCode::Char('q'), KeyModifiers::NONE));
        kb.add(
            OpenNextChat,
            KeyCombo::new(KeyCode::Char('n'), KeyModifiers::NONE),
        );
        kb.add(
            EndSelected,
            KeyCombo::new(KeyCode::Char('e'), KeyModifiers::NONE),
        );
        kb.add(
            EndSelected,
            KeyCombo::new(KeyCode::Delete, KeyModifiers::NONE),
        );
        kb.add(
            OrganizeWindows,
            KeyCombo::new(KeyCode::Char('o'), KeyModifiers::NONE),
        );
        kb.add(
            HideAllWindows,
            KeyCombo::new(KeyCode::Char('h'), KeyModifiers::NONE),
        );
        kb.add(
            ToggleDockMode,
            KeyCombo::new(KeyCode::Char('d'), KeyModifiers::NONE),
        );
        kb.add(SelectNext, KeyCombo::new(KeyCode::Tab, KeyModifiers::NONE));
        kb.add(
            SelectNext,
            KeyCombo::new(KeyCode::Char('j'), KeyModifiers::NONE),
        );
        kb.add(
            SelectPrev,
            KeyCombo::new(KeyCode::BackTab, KeyModifiers::NONE),
        );
        kb.add(
            SelectPrev,
            KeyCombo::new(KeyCode::Char('k'), KeyModifiers::NONE),
        );
        kb.add(
            RestoreSelected,
            KeyCombo::new(KeyCode::Enter, KeyModifiers::NONE),
        );
        kb.add(
            ToggleMouseCapture,
            KeyCombo::new(KeyCode::Char('m'), KeyModifiers::NONE),
        );
        kb
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        if let Some(list) = self.map.get(&action) {
            list.iter().any(|c| c.matches(key))
        } else {
            false
        }
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        for (act, list) in &self.map {
            if list.iter().any(|c| c.matches(key)) {
                return Some(*act);
            }
        }
        None
    }

    /// Every action with its key labels, in a stable order.
    pub fn help_entries(&self) -> Vec<(Action, Vec<String>)> {
        let mut v: Vec<(Action, Vec<String>)> = self
            .map
            .iter()
            .map(|(act, list)| (*act, list.iter().map(|c| c.display()).collect()))
            .collect();
        v.sort_by_key(|(act, _)| *act);
        v
    }

    /// Return the first `KeyCombo` mapped to `action`, if any.
    pub fn first_combo(&self, action: Action) -> Option<KeyCombo> {
        self.map.get(&action).and_then(|list| list.first().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_quit() {
        let kb = KeyBindings::default();
        let ev = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(kb.matches(Action::Quit, &ev));
    }

    #[test]
    fn every_default_key_maps_to_one_action() {
        let kb = KeyBindings::default();
        let mut seen = Vec::new();
        for list in kb.map.values() {
            for combo in list {
                assert!(!seen.contains(combo), "{combo} bound twice");
                seen.push(combo.clone());
            }
        }
        let organize = KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE);
        assert_eq!(kb.action_for_key(&organize), Some(Action::OrganizeWindows));
    }

    #[test]
    fn help_entries_are_sorted_and_labelled() {
        let kb = KeyBindings::default();
        let entries = kb.help_entries();
        assert_eq!(entries.first().map(|(a, _)| *a), Some(Action::Quit));
        assert_eq!(
            kb.first_combo(Action::HideAllWindows).map(|c| c.display()),
            Some("H".to_string())
        );
    }
}
