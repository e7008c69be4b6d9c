//! Per-row action menus

use std::collections::HashMap;

use crate::models::RowKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowActionState {
    pub is_menu_open: bool,
}

/// Menu state keyed by row identity; rows toggle independently
#[derive(Debug, Default)]
pub struct MenuState {
    rows: HashMap<RowKey, RowActionState>,
}

impl MenuState {
    /// Closed and absent are the same state, so closing removes the entry
    pub fn toggle(&mut self, key: &RowKey) {
        if self.rows.remove(key).is_none() {
            self.rows.insert(key.clone(), RowActionState { is_menu_open: true });
        }
    }

    pub fn close(&mut self, key: &RowKey) {
        self.rows.remove(key);
    }

    pub fn is_open(&self, key: &RowKey) -> bool {
        self.rows.get(key).is_some_and(|s| s.is_menu_open)
    }

    /// Keys of rows whose menu is open
    pub fn open_rows(&self) -> impl Iterator<Item = &RowKey> {
        self.rows
            .iter()
            .filter(|(_, state)| state.is_menu_open)
            .map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ResourceKind, Scope};

    fn key(ns: Option<&str>, name: &str) -> RowKey {
        RowKey {
            kind: ResourceKind::Certificate,
            scope: Scope::Namespace,
            namespace: ns.map(str::to_string),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut menus = MenuState::default();
        let a = key(Some("team-a"), "web");
        let b = key(Some("team-b"), "web");

        menus.toggle(&a);
        menus.toggle(&b);
        assert!(menus.is_open(&a));
        assert!(menus.is_open(&b));

        menus.toggle(&a);
        assert!(!menus.is_open(&a));
        assert!(menus.is_open(&b));
        assert_eq!(menus.open_rows().count(), 1);
    }

    #[test]
    fn test_closed_rows_leave_no_entry() {
        let mut menus = MenuState::default();
        let a = key(Some("team-a"), "web");
        let b = key(Some("team-a"), "api");

        menus.toggle(&a);
        menus.toggle(&b);
        menus.toggle(&a);
        menus.close(&b);
        assert!(menus.rows.is_empty());
    }

    #[test]
    fn test_close_unknown_row_is_noop() {
        let mut menus = MenuState::default();
        menus.close(&key(None, "x"));
        assert!(!menus.is_open(&key(None, "x")));
    }
}
