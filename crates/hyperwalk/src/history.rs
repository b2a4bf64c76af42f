//! Navigation history.
//!
//! A loaded location is addressed as `<prefix><location>`, with `#` as the
//! default prefix, so the page itself never reloads and the address can be
//! bookmarked.

use std::cell::RefCell;
use std::rc::Rc;

pub const DEFAULT_ADDRESS_PREFIX: &str = "#";

pub trait History {
    /// Push a new addressable state without reloading.
    fn push(&self, address: &str);
}

pub fn address_for(prefix: &str, location: &str) -> String {
    format!("{prefix}{location}")
}

/// Inverse of [`address_for`]; `None` when the address carries no location.
pub fn location_from_address<'a>(prefix: &str, address: &'a str) -> Option<&'a str> {
    address
        .strip_prefix(prefix)
        .filter(|location| !location.is_empty())
}

/// Records pushed addresses; used by the CLI and in tests.
#[derive(Clone, Default)]
pub struct MemoryHistory {
    entries: Rc<RefCell<Vec<String>>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn current(&self) -> Option<String> {
        self.entries.borrow().last().cloned()
    }
}

impl History for MemoryHistory {
    fn push(&self, address: &str) {
        self.entries.borrow_mut().push(address.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_round_trip() {
        let address = address_for(DEFAULT_ADDRESS_PREFIX, "/api/cluster/11");
        assert_eq!(address, "#/api/cluster/11");
        assert_eq!(
            location_from_address(DEFAULT_ADDRESS_PREFIX, &address),
            Some("/api/cluster/11")
        );
    }

    #[test]
    fn empty_or_foreign_addresses_have_no_location() {
        assert_eq!(location_from_address("#", ""), None);
        assert_eq!(location_from_address("#", "#"), None);
        assert_eq!(location_from_address("#", "/plain"), None);
    }

    #[test]
    fn memory_history_keeps_order() {
        let history = MemoryHistory::new();
        history.push("#/a");
        history.push("#/b");
        assert_eq!(history.entries(), vec!["#/a", "#/b"]);
        assert_eq!(history.current().as_deref(), Some("#/b"));
    }
}
