//! Key Translation - Toolkit key events to logical key names
//!
//! A small state machine turning raw toolkit key events into the fixed
//! vocabulary of logical key names the application consumes: plain
//! directionals (`"LeftArrow"`, `"RightArrow"`, `"UpArrow"`, `"DownArrow"`),
//! the confirm key (`"Enter"`), single printable characters, and the two
//! space-modified names `"Special-Calendar"` / `"Special-Contact"`.
//!
//! The space bar is the extended-access modifier: while held, left/right
//! arrows take on their secondary meanings. Space itself never reaches the
//! application, and keys outside the vocabulary are consumed silently:
//! unknown keys are common and must not disrupt input handling.
//!
//! # Example
//!
//! ```
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use roadmap_shell::input::KeyTranslator;
//!
//! let mut keys = KeyTranslator::new();
//! keys.set_callback(Box::new(|name| println!("key: {name}")));
//! keys.handle(&KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// The single registered consumer of logical key names.
///
/// Unlike timer callbacks this one is never compared for identity, so a
/// boxed closure is fine.
pub type KeyInputCallback = Box<dyn Fn(&str)>;

// =============================================================================
// KEY TRANSLATOR
// =============================================================================

/// Modifier flag plus translation table, dispatching to one callback.
pub struct KeyTranslator {
    space_down: bool,
    callback: Option<KeyInputCallback>,
}

impl KeyTranslator {
    pub fn new() -> Self {
        Self {
            space_down: false,
            callback: None,
        }
    }

    /// Register the active key-input consumer, replacing any previous one.
    pub fn set_callback(&mut self, callback: KeyInputCallback) {
        self.callback = Some(callback);
    }

    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    /// Whether the extended-access modifier is currently held.
    pub fn modifier_down(&self) -> bool {
        self.space_down
    }

    /// Translate one toolkit key event and dispatch the result.
    ///
    /// The produced logical name (if any) is passed to the registered
    /// callback synchronously, before this call returns, and also handed
    /// back for callers that drive the translator directly.
    pub fn handle(&mut self, event: &KeyEvent) -> Option<String> {
        let name = self.translate(event)?;
        if let Some(callback) = &self.callback {
            callback(&name);
        }
        Some(name)
    }

    /// The translation table. Updates the modifier flag as a side effect;
    /// returns `None` for events that produce no logical name.
    fn translate(&mut self, event: &KeyEvent) -> Option<String> {
        match event.kind {
            // Releases are only observed to clear the modifier.
            KeyEventKind::Release => {
                if event.code == KeyCode::Char(' ') {
                    self.space_down = false;
                }
                None
            }
            // Auto-repeat navigates like a fresh press.
            KeyEventKind::Press | KeyEventKind::Repeat => self.translate_press(event.code),
        }
    }

    fn translate_press(&mut self, code: KeyCode) -> Option<String> {
        let name = match code {
            KeyCode::Char(' ') => {
                self.space_down = true;
                return None; // Invisible to downstream consumers
            }
            KeyCode::Left => {
                if self.space_down {
                    "Special-Calendar"
                } else {
                    "LeftArrow"
                }
            }
            KeyCode::Right => {
                if self.space_down {
                    "Special-Contact"
                } else {
                    "RightArrow"
                }
            }
            KeyCode::Up => "UpArrow",
            KeyCode::Down => "DownArrow",
            // The two device-level confirm variants merge into one name.
            KeyCode::Enter | KeyCode::Char('\r') => "Enter",
            KeyCode::Char(c) if c.is_ascii_graphic() => return Some(c.to_string()),
            _ => return None,
        };
        Some(name.to_string())
    }
}

impl Default for KeyTranslator {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
