use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One stored artifact within a repository, as presented by the host's
/// asset listing model. Read-only input to link strategies.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub repository_name: String,
    pub name: String,
    pub format: String,
}

/// A repository's persisted configuration document.
///
/// `attributes` holds one nested object per facet section, eg
/// `storage.blobStoreName` or `cargo.allowedRegistries`. The document is
/// owned by the host configuration store; settings forms read and write it
/// only through their declared attribute bindings.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConfig {
    pub repository_name: String,
    pub recipe_name: String,
    pub online: bool,
    pub attributes: Value,
}

impl RepositoryConfig {
    pub fn new(repository_name: &str, recipe_name: &str) -> Self {
        Self {
            repository_name: repository_name.to_string(),
            recipe_name: recipe_name.to_string(),
            online: true,
            attributes: Value::Object(serde_json::Map::new()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn asset_record_uses_host_field_names() {
        let asset: AssetRecord = serde_json::from_str(
            r#"{"repositoryName": "my-cargo", "name": "serde-1.0.0.crate", "format": "cargo"}"#,
        )
        .unwrap();
        assert_eq!(asset.repository_name, "my-cargo");
        assert_eq!(asset.name, "serde-1.0.0.crate");
        assert_eq!(asset.format, "cargo");
    }

    #[test]
    fn new_config_starts_with_empty_attributes() {
        let config = RepositoryConfig::new("my-cargo", "cargo-hosted");
        assert!(config.online);
        assert_eq!(config.attributes, Value::Object(serde_json::Map::new()));
    }
}
