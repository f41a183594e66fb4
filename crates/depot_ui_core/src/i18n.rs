use std::collections::HashMap;

use tracing::{debug, warn};

/// Label key registry shared by every UI surface.
///
/// Extensions merge their default display strings in during the loading
/// phase; screens resolve keys at render time. The registry never fails a
/// lookup: a missing key resolves to itself so a misconfigured surface
/// stays renderable.
pub struct I18n {
    entries: HashMap<String, String>,
}

impl I18n {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Merge a table of label keys into the registry. Last write wins when
    /// a key is registered twice.
    pub fn register(&mut self, table: &[(&str, &str)]) {
        for &(key, text) in table {
            if let Some(previous) = self.entries.insert(key.to_string(), text.to_string()) {
                warn!(key, %previous, "overriding i18n entry");
            }
        }
        debug!(entries = table.len(), "registered i18n table");
    }

    /// Resolve a label key to its display text.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        match self.entries.get(key) {
            Some(text) => text.as_str(),
            None => {
                warn!(key, "no i18n entry, falling back to key");
                key
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resolves_registered_keys() {
        let mut i18n = I18n::new();
        i18n.register(&[("Greeting", "hello")]);
        assert_eq!(i18n.get("Greeting"), "hello");
        assert!(i18n.contains("Greeting"));
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        let i18n = I18n::new();
        assert_eq!(i18n.get("No_Such_Key"), "No_Such_Key");
        assert!(!i18n.contains("No_Such_Key"));
    }

    #[test]
    fn last_registration_wins() {
        let mut i18n = I18n::new();
        i18n.register(&[("Greeting", "hello")]);
        i18n.register(&[("Greeting", "hi")]);
        assert_eq!(i18n.get("Greeting"), "hi");
    }
}
