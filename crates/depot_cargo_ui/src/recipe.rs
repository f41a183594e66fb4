use depot_ui_core::form::SettingsForm;
use depot_ui_core::{FacetRegistry, I18n, Result, STORAGE_FACET, STORAGE_FACET_HOSTED};

use crate::facet::WIDGET_ID;

/// Recipe name for hosted cargo repositories.
pub const RECIPE_NAME: &str = "cargo-hosted";

/// Settings form shown for hosted cargo repositories: the host storage
/// facets followed by the cargo registry facet. The form is a plain value
/// handed to the host's settings renderer.
pub fn hosted_settings_form(facets: &FacetRegistry, i18n: &I18n) -> Result<SettingsForm> {
    Ok(SettingsForm::new(vec![
        facets.section(STORAGE_FACET, i18n)?,
        facets.section(STORAGE_FACET_HOSTED, i18n)?,
        facets.section(WIDGET_ID, i18n)?,
    ]))
}
