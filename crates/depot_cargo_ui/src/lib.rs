//! Cargo registry format support for the depot UI: asset links that point
//! at this application's repository content endpoint, a settings facet for
//! the allowed upstream registries, and the display strings both screens
//! resolve.

mod facet;
pub use facet::{CargoRegistryFacet, ALLOWED_REGISTRIES, DEFAULT_REGISTRY_INDEX, WIDGET_ID};

mod recipe;
pub use recipe::{hosted_settings_form, RECIPE_NAME};

mod strings;

mod urls;
pub use urls::CargoUrls;

use std::sync::Arc;

use tracing::debug;

use depot_ui_core::{Result, UiPlugin, UiServices};

/// Name of the repository format this plugin adds.
pub const FORMAT_NAME: &str = "cargo";

/// Plugs cargo format support into the host UI services.
pub struct CargoUi;

impl UiPlugin for CargoUi {
    fn name(&self) -> &str {
        "depot-cargo-ui"
    }

    fn register(&self, services: &mut UiServices) -> Result<()> {
        // strings first: the facet resolves them at instantiation
        strings::register(services.i18n_mut());
        services
            .repository_urls_mut()
            .add_strategy(FORMAT_NAME, Arc::new(CargoUrls))?;
        services
            .facets_mut()
            .add_facet(WIDGET_ID, Arc::new(CargoRegistryFacet))?;
        debug!(format = FORMAT_NAME, "registered cargo ui contributions");
        Ok(())
    }
}
