use serde::Deserialize;

use crate::errors::Result;

/// UI-facing host configuration. `base_url` is the externally reachable
/// root of the application, used when composing links into repository
/// content.
#[derive(Clone, Debug, Deserialize)]
pub struct UiConfig {
    pub base_url: String,
}

impl UiConfig {
    pub fn from_yaml(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserializes_from_yaml() {
        let config = UiConfig::from_yaml("base_url: https://host.example\n").unwrap();
        assert_eq!(config.base_url, "https://host.example");
    }

    #[test]
    fn rejects_missing_base_url() {
        assert!(UiConfig::from_yaml("{}").is_err());
    }
}
