use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::errors::{Error, Result};
use crate::records::AssetRecord;

/// A renderable link: display text paired with a target URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

/// Builds absolute URLs under the application's configured base URL.
#[derive(Clone, Debug)]
pub struct UrlBuilder {
    base_url: String,
}

impl UrlBuilder {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn link(&self, href: String, text: String) -> Link {
        Link { text, href }
    }
}

/// Computes the link shown for an asset stored in a repository of one
/// format.
///
/// Implementations must be pure: read the record, return a value. Any
/// string is a legal repository or asset name; strategies are expected to
/// encode rather than reject.
pub trait AssetUrlStrategy: Send + Sync {
    fn asset_link(&self, urls: &UrlBuilder, asset: &AssetRecord) -> Link;
}

/// Format-keyed registry of [`AssetUrlStrategy`] implementations.
///
/// Each format extension registers its strategy once during the loading
/// phase; asset listings dispatch through [`RepositoryUrls::asset_link`]
/// whenever they render a download link.
pub struct RepositoryUrls {
    urls: UrlBuilder,
    strategies: HashMap<String, Arc<dyn AssetUrlStrategy>>,
}

impl RepositoryUrls {
    pub fn new(urls: UrlBuilder) -> Self {
        Self {
            urls,
            strategies: HashMap::new(),
        }
    }

    /// Register the strategy for a format. A second registration under the
    /// same format is a load-ordering defect and is rejected.
    pub fn add_strategy(
        &mut self,
        format: &str,
        strategy: Arc<dyn AssetUrlStrategy>,
    ) -> Result<()> {
        if self.strategies.contains_key(format) {
            return Err(Error::DuplicateUrlStrategy(format.to_string()));
        }
        self.strategies.insert(format.to_string(), strategy);
        debug!(format, "registered asset url strategy");
        Ok(())
    }

    pub fn contains(&self, format: &str) -> bool {
        self.strategies.contains_key(format)
    }

    /// Render the link for an asset, dispatching on the record's format.
    pub fn asset_link(&self, asset: &AssetRecord) -> Result<Link> {
        let strategy = self
            .strategies
            .get(&asset.format)
            .ok_or_else(|| Error::UnknownFormat(asset.format.clone()))?;
        Ok(strategy.asset_link(&self.urls, asset))
    }

    pub fn url_builder(&self) -> &UrlBuilder {
        &self.urls
    }
}
