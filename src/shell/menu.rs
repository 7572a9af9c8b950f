//! Menus and Toolbar - Window chrome models
//!
//! The shell owns only the models: labels, tooltips, separators and the
//! [`CallbackHandle`] bound to each action. Presentation belongs to the
//! external canvas; it walks these structures and calls back in through
//! `trigger` when the user activates an entry.

use std::path::PathBuf;

use crate::callback::{CallbackHandle, ShellCallback};
use crate::types::ToolbarOrientation;

// =============================================================================
// MENUS
// =============================================================================

/// Opaque handle for a menu created with [`MenuBar::new_menu`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuId(usize);

/// One activatable menu entry.
#[derive(Debug)]
pub struct MenuItem {
    pub label: String,
    pub tip: String,
    action: CallbackHandle,
}

impl MenuItem {
    /// Fire the bound action.
    pub fn activate(&self) {
        self.action.fire();
    }
}

#[derive(Debug)]
pub enum MenuEntry {
    Item(MenuItem),
    Separator,
}

/// A titled list of entries, attached to the bar or used as a popup.
#[derive(Debug, Default)]
pub struct Menu {
    pub title: String,
    entries: Vec<MenuEntry>,
}

impl Menu {
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }
}

/// The menu bar: a slot table of menus plus the attachment order.
///
/// Freed menu slots stay allocated so older [`MenuId`]s never alias a
/// newer menu.
#[derive(Debug, Default)]
pub struct MenuBar {
    slots: Vec<Option<Menu>>,
    attached: Vec<MenuId>,
}

impl MenuBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached, untitled menu.
    pub fn new_menu(&mut self) -> MenuId {
        self.slots.push(Some(Menu::default()));
        MenuId(self.slots.len() - 1)
    }

    /// Destroy a menu and detach it from the bar.
    pub fn free_menu(&mut self, id: MenuId) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            *slot = None;
        }
        self.attached.retain(|attached| *attached != id);
    }

    /// Title a menu and attach it to the bar.
    pub fn add_menu(&mut self, id: MenuId, label: &str) {
        if let Some(menu) = self.menu_mut(id) {
            menu.title = label.to_string();
            if !self.attached.contains(&id) {
                self.attached.push(id);
            }
        }
    }

    /// Append an activatable item, wrapping `callback` in a handle bound
    /// to the item's trigger.
    pub fn add_item(&mut self, id: MenuId, label: &str, tip: &str, callback: ShellCallback) {
        if let Some(menu) = self.menu_mut(id) {
            menu.entries.push(MenuEntry::Item(MenuItem {
                label: label.to_string(),
                tip: tip.to_string(),
                action: CallbackHandle::new(callback),
            }));
        }
    }

    pub fn add_separator(&mut self, id: MenuId) {
        if let Some(menu) = self.menu_mut(id) {
            menu.entries.push(MenuEntry::Separator);
        }
    }

    /// Activate the first item labelled `label` in menu `id`.
    ///
    /// Returns whether anything fired.
    pub fn trigger(&self, id: MenuId, label: &str) -> bool {
        let Some(menu) = self.menu(id) else {
            return false;
        };
        for entry in &menu.entries {
            if let MenuEntry::Item(item) = entry {
                if item.label == label {
                    item.activate();
                    return true;
                }
            }
        }
        false
    }

    pub fn menu(&self, id: MenuId) -> Option<&Menu> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    fn menu_mut(&mut self, id: MenuId) -> Option<&mut Menu> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    /// Menus currently attached to the bar, in attachment order.
    pub fn attached(&self) -> impl Iterator<Item = &Menu> {
        self.attached.iter().filter_map(|id| self.menu(*id))
    }
}

// =============================================================================
// TOOLBAR
// =============================================================================

/// One toolbar button.
#[derive(Debug)]
pub struct Tool {
    pub label: String,
    pub icon: Option<PathBuf>,
    pub tip: String,
    action: CallbackHandle,
}

impl Tool {
    pub fn activate(&self) {
        self.action.fire();
    }
}

#[derive(Debug)]
pub enum ToolEntry {
    Tool(Tool),
    Space,
}

/// The toolbar model: docking edge plus buttons and spacers.
#[derive(Debug)]
pub struct ToolBar {
    pub orientation: ToolbarOrientation,
    entries: Vec<ToolEntry>,
}

impl ToolBar {
    pub fn new(orientation: ToolbarOrientation) -> Self {
        Self {
            orientation,
            entries: Vec::new(),
        }
    }

    pub fn add_tool(
        &mut self,
        label: &str,
        icon: Option<PathBuf>,
        tip: &str,
        callback: ShellCallback,
    ) {
        self.entries.push(ToolEntry::Tool(Tool {
            label: label.to_string(),
            icon,
            tip: tip.to_string(),
            action: CallbackHandle::new(callback),
        }));
    }

    pub fn add_space(&mut self) {
        self.entries.push(ToolEntry::Space);
    }

    /// Activate the first tool labelled `label`.
    pub fn trigger(&self, label: &str) -> bool {
        for entry in &self.entries {
            if let ToolEntry::Tool(tool) = entry {
                if tool.label == label {
                    tool.activate();
                    return true;
                }
            }
        }
        false
    }

    pub fn entries(&self) -> &[ToolEntry] {
        &self.entries
    }
}

// =============================================================================
// TESTS
// =============================================================================
