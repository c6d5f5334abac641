// menu.rs

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::history::{HistoryEntry, RecencyList};
use crate::signal::SubscriptionId;

pub const CLEAR_LABEL: &str = "Clear recent files";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuItem {
    /// 1-based position, also the quick-open key.
    Entry { number: usize, entry: HistoryEntry },
    Separator,
    Clear,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuItem::Entry { number, entry } => write!(f, "{}. {}", number, entry),
            MenuItem::Separator => write!(f, "---"),
            MenuItem::Clear => write!(f, "{}", CLEAR_LABEL),
        }
    }
}

/// Numbered view of the recent files, rebuilt from scratch on each change.
#[derive(Debug, Default)]
pub struct RecentMenu {
    items: Vec<MenuItem>,
    disabled: bool,
}

impl RecentMenu {
    pub fn new(list: &RecencyList) -> Self {
        let mut menu = Self::default();
        menu.refresh(list);
        menu
    }

    /// Renders `list` now and re-renders after every change to it.
    pub fn bind(list: &mut RecencyList) -> (Rc<RefCell<RecentMenu>>, SubscriptionId) {
        let menu = Rc::new(RefCell::new(RecentMenu::new(list)));
        let weak = Rc::downgrade(&menu);
        let id = list.subscribe(move |list| {
            if let Some(menu) = weak.upgrade() {
                menu.borrow_mut().refresh(list);
            }
        });
        (menu, id)
    }

    pub fn refresh(&mut self, list: &RecencyList) {
        self.items.clear();
        self.disabled = list.is_empty();
        if self.disabled {
            return;
        }
        self.items.extend(list.iter().enumerate().map(|(i, entry)| MenuItem::Entry {
            number: i + 1,
            entry: entry.clone(),
        }));
        self.items.push(MenuItem::Separator);
        self.items.push(MenuItem::Clear);
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn lines(&self) -> Vec<String> {
        self.items.iter().map(|item| item.to_string()).collect()
    }
}
