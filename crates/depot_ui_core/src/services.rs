use std::sync::Arc;

use tracing::debug;

use crate::config::UiConfig;
use crate::errors::Result;
use crate::facets::{
    FacetRegistry, StorageFacet, StorageFacetHosted, CORE_STRINGS, STORAGE_FACET,
    STORAGE_FACET_HOSTED,
};
use crate::i18n::I18n;
use crate::urls::{RepositoryUrls, UrlBuilder};

/// A UI format extension.
///
/// The host discovers plugins at start and installs each exactly once,
/// before any screen that depends on them renders. `register` is expected
/// to merge string tables before registering the surfaces that reference
/// them.
pub trait UiPlugin {
    fn name(&self) -> &str;
    fn register(&self, services: &mut UiServices) -> Result<()>;
}

/// The UI-facing services a host constructs once at start and threads
/// through extension loading and rendering. Registries are plain fields of
/// this value rather than process globals; whoever holds the services
/// decides who may register into them.
pub struct UiServices {
    i18n: I18n,
    repository_urls: RepositoryUrls,
    facets: FacetRegistry,
}

impl UiServices {
    /// Build the services from host configuration. The core string table
    /// and the storage facets every recipe composes are registered here,
    /// ahead of any extension.
    pub fn new(config: &UiConfig) -> Result<Self> {
        let mut i18n = I18n::new();
        i18n.register(CORE_STRINGS);

        let mut facets = FacetRegistry::new();
        facets.add_facet(STORAGE_FACET, Arc::new(StorageFacet))?;
        facets.add_facet(STORAGE_FACET_HOSTED, Arc::new(StorageFacetHosted))?;

        Ok(Self {
            i18n,
            repository_urls: RepositoryUrls::new(UrlBuilder::new(&config.base_url)),
            facets,
        })
    }

    /// Install a plugin, letting it register its contributions.
    pub fn install(&mut self, plugin: &dyn UiPlugin) -> Result<()> {
        debug!(plugin = plugin.name(), "installing ui plugin");
        plugin.register(self)
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn i18n_mut(&mut self) -> &mut I18n {
        &mut self.i18n
    }

    pub fn repository_urls(&self) -> &RepositoryUrls {
        &self.repository_urls
    }

    pub fn repository_urls_mut(&mut self) -> &mut RepositoryUrls {
        &mut self.repository_urls
    }

    pub fn facets(&self) -> &FacetRegistry {
        &self.facets
    }

    pub fn facets_mut(&mut self) -> &mut FacetRegistry {
        &mut self.facets
    }
}
