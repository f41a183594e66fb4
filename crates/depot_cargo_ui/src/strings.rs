use depot_ui_core::I18n;

/// Default display strings for every cargo UI surface. The settings facet
/// and the search screens resolve these through the host registry; this
/// table is the only place cargo display text lives.
pub(crate) const STRINGS: &[(&str, &str)] = &[
    ("Repository_Facet_CargoRegistryFacet_Title", "Cargo Settings"),
    (
        "Repository_Facet_CargoRegistryFacet_AllowedRegistries_FieldLabel",
        "Allowed registries",
    ),
    (
        "Repository_Facet_CargoRegistryFacet_AllowedRegistries_HelpText",
        "URL of the upstream crate index that dependencies may be resolved from",
    ),
    (
        "Repository_Facet_CargoRegistryFacet_AllowedRegistries_EmptyText",
        "https://github.com/rust-lang/crates.io-index",
    ),
    ("SearchCargo_Group", "Cargo Repositories"),
    ("SearchCargo_Text", "Cargo"),
    (
        "SearchCargo_Description",
        "Search for components in Cargo repositories",
    ),
    ("SearchCargo_License_FieldLabel", "License"),
];

pub(crate) fn register(i18n: &mut I18n) {
    i18n.register(STRINGS);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_entry_has_display_text() {
        for &(key, text) in STRINGS {
            assert!(!text.is_empty(), "empty display text for {key}");
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = STRINGS.iter().map(|&(key, _)| key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), STRINGS.len());
    }

    #[test]
    fn registered_table_resolves() {
        let mut i18n = I18n::new();
        register(&mut i18n);
        assert_eq!(i18n.get("SearchCargo_Text"), "Cargo");
    }
}
