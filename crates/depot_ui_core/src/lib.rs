//! # Depot UI Core
//!
//! Service boundary between the depot application shell and its UI format
//! extensions. An extension contributes a string table, an asset link
//! strategy, and one or more settings-form facets by registering into the
//! [`UiServices`] a host constructs once at start; screens later resolve
//! labels, links, and form sections through the same services.
//!
//! Everything here is synchronous and free of I/O. Rendering, persistence,
//! and the save pipeline stay on the host side of the boundary.

mod config;
pub use config::UiConfig;

mod errors;
pub use errors::{Error, Result};

mod i18n;
pub use i18n::I18n;

mod records;
pub use records::{AssetRecord, RepositoryConfig};

pub mod form;

mod facets;
pub use facets::{
    FacetRegistry, SettingsFacet, StorageFacet, StorageFacetHosted, STORAGE_FACET,
    STORAGE_FACET_HOSTED,
};

mod urls;
pub use urls::{AssetUrlStrategy, Link, RepositoryUrls, UrlBuilder};

mod services;
pub use services::{UiPlugin, UiServices};
