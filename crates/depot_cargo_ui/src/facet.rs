use depot_ui_core::form::{FormField, FormSection};
use depot_ui_core::{I18n, SettingsFacet};

/// Attribute path the allowed-registries value binds to. Server-side
/// validation of cargo repositories reads the same path; the two must not
/// drift apart.
pub const ALLOWED_REGISTRIES: &str = "cargo.allowedRegistries";

/// Upstream index suggested for new repositories.
pub const DEFAULT_REGISTRY_INDEX: &str = "https://github.com/rust-lang/crates.io-index";

/// Widget id the facet is discoverable under in the facet registry.
pub const WIDGET_ID: &str = "cargo-registry-facet";

/// Settings fragment for cargo repositories: one URL field naming the
/// upstream registry crates in this repository may depend on.
pub struct CargoRegistryFacet;

impl SettingsFacet for CargoRegistryFacet {
    fn section(&self, i18n: &I18n) -> FormSection {
        FormSection::new(
            i18n.get("Repository_Facet_CargoRegistryFacet_Title"),
            vec![FormField::url(
                ALLOWED_REGISTRIES,
                "allowedRegistries",
                i18n.get("Repository_Facet_CargoRegistryFacet_AllowedRegistries_FieldLabel"),
            )
            .help_text(i18n.get("Repository_Facet_CargoRegistryFacet_AllowedRegistries_HelpText"))
            .empty_text(i18n.get("Repository_Facet_CargoRegistryFacet_AllowedRegistries_EmptyText"))
            .value(DEFAULT_REGISTRY_INDEX)],
        )
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use depot_ui_core::form::{FieldKind, SettingsForm};
    use depot_ui_core::RepositoryConfig;

    use super::*;
    use crate::strings;

    fn cargo_i18n() -> I18n {
        let mut i18n = I18n::new();
        strings::register(&mut i18n);
        i18n
    }

    #[test]
    fn declares_a_single_allowed_registries_field() {
        let section = CargoRegistryFacet.section(&cargo_i18n());
        assert_eq!(section.title, "Cargo Settings");
        assert_eq!(section.fields.len(), 1);

        let field = &section.fields[0];
        assert_eq!(field.kind, FieldKind::Url);
        assert_eq!(field.bind.as_str(), ALLOWED_REGISTRIES);
        assert_eq!(field.item_id, "allowedRegistries");
        assert_eq!(field.value, Some(json!(DEFAULT_REGISTRY_INDEX)));
    }

    #[test]
    fn every_label_resolves_to_table_text() {
        let section = CargoRegistryFacet.section(&cargo_i18n());
        let field = &section.fields[0];

        for text in [
            Some(&section.title),
            Some(&field.label),
            field.help_text.as_ref(),
            field.empty_text.as_ref(),
        ] {
            let text = text.expect("facet label missing");
            assert!(!text.is_empty());
            // a resolved label never looks like its own key
            assert!(!text.contains("Repository_Facet_CargoRegistryFacet"));
        }
    }

    #[test]
    fn allowed_registries_round_trips_through_the_form() {
        let mut form = SettingsForm::new(vec![CargoRegistryFacet.section(&cargo_i18n())]);
        form.field_mut("allowedRegistries").unwrap().value =
            Some(json!("https://registry.example/index"));

        let mut config = RepositoryConfig::new("my-cargo", "cargo-hosted");
        form.submit(&mut config).unwrap();
        assert_eq!(
            config.attributes,
            json!({"cargo": {"allowedRegistries": "https://registry.example/index"}})
        );

        let mut reloaded = SettingsForm::new(vec![CargoRegistryFacet.section(&cargo_i18n())]);
        reloaded.load(&config);
        assert_eq!(
            reloaded.field("allowedRegistries").unwrap().value,
            Some(json!("https://registry.example/index"))
        );
    }

    #[test]
    fn default_value_passes_url_validation() {
        let form = SettingsForm::new(vec![CargoRegistryFacet.section(&cargo_i18n())]);
        let mut config = RepositoryConfig::new("my-cargo", "cargo-hosted");
        form.submit(&mut config).unwrap();
        assert_eq!(
            config.attributes,
            json!({"cargo": {"allowedRegistries": DEFAULT_REGISTRY_INDEX}})
        );
    }
}
