// Chunk: docs/chunks/context_menu - Right-click menu
//! The right-click context menu.
//!
//! The menu always offers the same three items. Activating one yields the
//! [`Action`] the keyboard path would produce; Copy is only offered as an
//! action while text is selected.
//!
//! Hosted in another terminal there is nothing to draw a popup on, so the
//! menu is shown as a one-line prompt and items are picked by number.

use crate::dispatcher::Action;

/// An entry in the context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Copy,
    Paste,
    SelectAll,
}

impl MenuItem {
    /// Every item, in display order.
    pub const ALL: [MenuItem; 3] = [MenuItem::Copy, MenuItem::Paste, MenuItem::SelectAll];

    /// The item's label.
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Copy => "Copy",
            MenuItem::Paste => "Paste",
            MenuItem::SelectAll => "Select All",
        }
    }

    /// The digit that picks this item from the prompt.
    pub fn shortcut(&self) -> char {
        match self {
            MenuItem::Copy => '1',
            MenuItem::Paste => '2',
            MenuItem::SelectAll => '3',
        }
    }

    pub fn from_shortcut(ch: char) -> Option<MenuItem> {
        MenuItem::ALL.into_iter().find(|item| item.shortcut() == ch)
    }

    /// The action performed when this item is activated.
    ///
    /// Copy with nothing selected does nothing.
    pub fn action(&self, has_selection: bool) -> Option<Action> {
        match self {
            MenuItem::Copy if has_selection => Some(Action::Copy),
            MenuItem::Copy => None,
            MenuItem::Paste => Some(Action::Paste),
            MenuItem::SelectAll => Some(Action::SelectAll),
        }
    }
}

/// An open context menu.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    position: (f64, f64),
}

impl ContextMenu {
    /// Opens a menu at the pointer position.
    pub fn at(position: (f64, f64)) -> Self {
        Self { position }
    }

    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    pub fn items(&self) -> &'static [MenuItem] {
        &MenuItem::ALL
    }

    /// `"1) Copy 2) Paste 3) Select All"`.
    pub fn prompt(&self) -> String {
        self.items()
            .iter()
            .map(|item| format!("{}) {}", item.shortcut(), item.label()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Looks up an item by its label.
    pub fn item_labeled(&self, label: &str) -> Option<MenuItem> {
        self.items().iter().copied().find(|item| item.label() == label)
    }
}
