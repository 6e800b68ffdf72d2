use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pickwheel_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

impl From<KeyEvent> for KeyBinding {
    fn from(key: KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

/// Runtime keymap for key-to-action lookup
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    /// Action of the "gg" sequence, if configured
    pending_g_action: Option<Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();
        let mut pending_g_action = None;

        let mut add_binding = |key_str: &str, action: Action| {
            if key_str == "gg" {
                pending_g_action = Some(action);
                return;
            }

            match parse_key_binding(key_str) {
                Some(binding) => {
                    if let Some(existing) = bindings.get(&binding) {
                        warn!(
                            "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                            key_str, existing, action
                        );
                    } else {
                        bindings.insert(binding, action);
                    }
                }
                None => warn!("Invalid key binding: '{}', ignoring", key_str),
            }
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.confirm, Action::Confirm);
        add_binding(&config.focus_left, Action::FocusLeft);
        add_binding(&config.focus_right, Action::FocusRight);
        add_binding(&config.next_panel, Action::NextPanel);
        add_binding(&config.prev_panel, Action::PrevPanel);
        add_binding(&config.next_item, Action::NextItem);
        add_binding(&config.prev_item, Action::PrevItem);
        add_binding(&config.fling_forward, Action::FlingForward);
        add_binding(&config.fling_back, Action::FlingBack);
        add_binding(&config.first_item, Action::FirstItem);
        add_binding(&config.last_item, Action::LastItem);
        add_binding(&config.help, Action::Help);

        // Not configurable
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        bindings.entry(KeyBinding::simple(KeyCode::Left)).or_insert(Action::FocusLeft);
        bindings.entry(KeyBinding::simple(KeyCode::Right)).or_insert(Action::FocusRight);
        bindings.entry(KeyBinding::simple(KeyCode::Up)).or_insert(Action::PrevItem);
        bindings.entry(KeyBinding::simple(KeyCode::Down)).or_insert(Action::NextItem);
        bindings.entry(KeyBinding::simple(KeyCode::PageDown)).or_insert(Action::FlingForward);
        bindings.entry(KeyBinding::simple(KeyCode::PageUp)).or_insert(Action::FlingBack);
        bindings.insert(KeyBinding::simple(KeyCode::Esc), Action::ExitMode);

        Self {
            bindings,
            pending_g_action,
        }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// Look up a key event, smoothing over how terminals report Shift
    ///
    /// Shifted symbols ("?") arrive with SHIFT set, uppercase letters may
    /// arrive without it, and Shift+Tab arrives as BackTab.
    pub fn lookup(&self, key: &KeyEvent) -> Option<&Action> {
        let binding = KeyBinding::from(*key);
        if let Some(action) = self.get(&binding) {
            return Some(action);
        }

        match binding.code {
            KeyCode::BackTab => self.get(&KeyBinding::shift(KeyCode::Tab)),
            KeyCode::Char(c) if c.is_ascii_uppercase() => self.get(&KeyBinding::shift(binding.code)),
            KeyCode::Char(_) if binding.modifiers == KeyModifiers::SHIFT => {
                self.get(&KeyBinding::simple(binding.code))
            }
            _ => None,
        }
    }

    /// Get the action for completed "gg" sequence
    pub fn get_pending_g_action(&self) -> Option<&Action> {
        self.pending_g_action.as_ref()
    }

    /// Check if a single 'g' press should start a pending sequence
    pub fn is_g_prefix(&self, binding: &KeyBinding) -> bool {
        self.pending_g_action.is_some()
            && binding.code == KeyCode::Char('g')
            && binding.modifiers == KeyModifiers::NONE
    }
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "j", "k", "h", "l", "q", etc.
/// - Uppercase (Shift): "G", "N", etc.
/// - Ctrl: "<C-d>", "<C-u>", etc.
/// - Shift: "<S-Tab>"
/// - Special keys: "<CR>", "<Esc>", "<Tab>", "<Space>", "<Left>", "<PageDown>", ...
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if let Some(inner) = s.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) {
        return parse_special_key(inner);
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c.is_ascii_uppercase() {
        return Some(KeyBinding::shift(KeyCode::Char(c)));
    }
    Some(KeyBinding::simple(KeyCode::Char(c)))
}

/// Parse special key notation (content inside <...>)
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        return parse_key_name(rest).map(KeyBinding::ctrl);
    }
    if let Some(rest) = inner.strip_prefix("S-") {
        return parse_key_name(rest).map(KeyBinding::shift);
    }
    parse_key_name(inner).map(KeyBinding::simple)
}

/// Parse a key name (without modifiers)
fn parse_key_name(name: &str) -> Option<KeyCode> {
    let code = match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" | "spc" => KeyCode::Char(' '),
        "bs" | "backspace" => KeyCode::Backspace,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        other => {
            if let Some(n) = other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                if (1..=12).contains(&n) {
                    return Some(KeyCode::F(n));
                }
                return None;
            }
            // Single character after a modifier ("d" in "<C-d>")
            let mut chars = name.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c.to_ascii_lowercase())
        }
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_keys() {
        assert_eq!(parse_key_binding("j"), Some(KeyBinding::simple(KeyCode::Char('j'))));
        assert_eq!(parse_key_binding("?"), Some(KeyBinding::simple(KeyCode::Char('?'))));
        assert_eq!(parse_key_binding("G"), Some(KeyBinding::shift(KeyCode::Char('G'))));
        assert_eq!(parse_key_binding("jj"), None);
        assert_eq!(parse_key_binding(""), None);
    }

    #[test]
    fn test_parse_modified_keys() {
        assert_eq!(parse_key_binding("<C-d>"), Some(KeyBinding::ctrl(KeyCode::Char('d'))));
        assert_eq!(parse_key_binding("<S-Tab>"), Some(KeyBinding::shift(KeyCode::Tab)));
        assert_eq!(parse_key_binding("<C-what>"), None);
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(parse_key_binding("<CR>"), Some(KeyBinding::simple(KeyCode::Enter)));
        assert_eq!(parse_key_binding("<Esc>"), Some(KeyBinding::simple(KeyCode::Esc)));
        assert_eq!(parse_key_binding("<Space>"), Some(KeyBinding::simple(KeyCode::Char(' '))));
        assert_eq!(parse_key_binding("<PageDown>"), Some(KeyBinding::simple(KeyCode::PageDown)));
        assert_eq!(parse_key_binding("<F5>"), Some(KeyBinding::simple(KeyCode::F(5))));
        assert_eq!(parse_key_binding("<F13>"), None);
    }

    #[test]
    fn test_keymap_from_config() {
        let keymap = Keymap::default();

        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Char('q'))), Some(&Action::Quit));
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Char('j'))), Some(&Action::NextItem));
        assert_eq!(keymap.get(&KeyBinding::ctrl(KeyCode::Char('d'))), Some(&Action::FlingForward));
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Enter)), Some(&Action::Confirm));
        assert_eq!(keymap.get_pending_g_action(), Some(&Action::FirstItem));
        assert!(keymap.is_g_prefix(&KeyBinding::simple(KeyCode::Char('g'))));
    }

    #[test]
    fn test_lookup_normalizes_shift() {
        let keymap = Keymap::default();

        let help = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(keymap.lookup(&help), Some(&Action::Help));

        let last = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE);
        assert_eq!(keymap.lookup(&last), Some(&Action::LastItem));

        let back = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(keymap.lookup(&back), Some(&Action::PrevPanel));
    }

    #[test]
    fn test_conflicting_binding_keeps_first() {
        let config = KeymapConfig {
            help: "q".to_string(),
            ..Default::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Char('q'))), Some(&Action::Quit));
    }
}
