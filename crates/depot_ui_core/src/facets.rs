use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::errors::{Error, Result};
use crate::form::{FormField, FormSection};
use crate::i18n::I18n;

/// An instantiable settings-form fragment.
///
/// A facet produces one titled section with its display text resolved
/// through the string registry at instantiation time. Implementations are
/// stateless templates; any persisted state lives in the attribute document
/// the produced fields bind to.
pub trait SettingsFacet: Send + Sync {
    fn section(&self, i18n: &I18n) -> FormSection;
}

/// Widget-id-keyed registry of [`SettingsFacet`] implementations, used by
/// repository recipes to compose their settings forms.
pub struct FacetRegistry {
    facets: HashMap<String, Arc<dyn SettingsFacet>>,
}

impl FacetRegistry {
    pub fn new() -> Self {
        Self {
            facets: HashMap::new(),
        }
    }

    pub fn add_facet(&mut self, widget_id: &str, facet: Arc<dyn SettingsFacet>) -> Result<()> {
        if self.facets.contains_key(widget_id) {
            return Err(Error::DuplicateFacet(widget_id.to_string()));
        }
        self.facets.insert(widget_id.to_string(), facet);
        debug!(widget_id, "registered settings facet");
        Ok(())
    }

    pub fn contains(&self, widget_id: &str) -> bool {
        self.facets.contains_key(widget_id)
    }

    /// Instantiate the fragment registered under `widget_id`.
    pub fn section(&self, widget_id: &str, i18n: &I18n) -> Result<FormSection> {
        let facet = self
            .facets
            .get(widget_id)
            .ok_or_else(|| Error::UnknownFacet(widget_id.to_string()))?;
        Ok(facet.section(i18n))
    }
}

impl Default for FacetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub const STORAGE_FACET: &str = "storage-facet";
pub const STORAGE_FACET_HOSTED: &str = "storage-hosted-facet";

pub(crate) const CORE_STRINGS: &[(&str, &str)] = &[
    ("Repository_Facet_StorageFacet_Title", "Storage"),
    ("Repository_Facet_StorageFacet_BlobStore_FieldLabel", "Blob store"),
    (
        "Repository_Facet_StorageFacet_BlobStore_HelpText",
        "Blob store used to store repository contents",
    ),
    (
        "Repository_Facet_StorageFacet_ContentTypeValidation_FieldLabel",
        "Strict Content Type Validation",
    ),
    (
        "Repository_Facet_StorageFacet_ContentTypeValidation_HelpText",
        "Validate that all content uploaded to this repository is of a MIME type appropriate for the repository format",
    ),
    ("Repository_Facet_StorageFacetHosted_Title", "Hosted"),
    (
        "Repository_Facet_StorageFacetHosted_Deployment_FieldLabel",
        "Deployment policy",
    ),
    (
        "Repository_Facet_StorageFacetHosted_Deployment_HelpText",
        "Controls if deployments of and updates to artifacts are allowed",
    ),
];

/// Storage settings common to every repository: which blob store holds the
/// content and whether uploads are MIME-checked.
pub struct StorageFacet;

impl SettingsFacet for StorageFacet {
    fn section(&self, i18n: &I18n) -> FormSection {
        FormSection::new(
            i18n.get("Repository_Facet_StorageFacet_Title"),
            vec![
                // blob store names are supplied by the host at render time
                FormField::select(
                    "storage.blobStoreName",
                    "blobStoreName",
                    i18n.get("Repository_Facet_StorageFacet_BlobStore_FieldLabel"),
                )
                .help_text(i18n.get("Repository_Facet_StorageFacet_BlobStore_HelpText"))
                .required(),
                FormField::checkbox(
                    "storage.strictContentTypeValidation",
                    "strictContentTypeValidation",
                    i18n.get("Repository_Facet_StorageFacet_ContentTypeValidation_FieldLabel"),
                )
                .help_text(i18n.get("Repository_Facet_StorageFacet_ContentTypeValidation_HelpText"))
                .value(true),
            ],
        )
    }
}

/// Deployment-policy settings for hosted repositories.
pub struct StorageFacetHosted;

impl SettingsFacet for StorageFacetHosted {
    fn section(&self, i18n: &I18n) -> FormSection {
        FormSection::new(
            i18n.get("Repository_Facet_StorageFacetHosted_Title"),
            vec![FormField::select(
                "storage.writePolicy",
                "writePolicy",
                i18n.get("Repository_Facet_StorageFacetHosted_Deployment_FieldLabel"),
            )
            .help_text(i18n.get("Repository_Facet_StorageFacetHosted_Deployment_HelpText"))
            .options(&["ALLOW", "ALLOW_ONCE", "DENY"])
            .value("ALLOW")],
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::form::FieldKind;

    fn core_i18n() -> I18n {
        let mut i18n = I18n::new();
        i18n.register(CORE_STRINGS);
        i18n
    }

    #[test]
    fn registry_rejects_duplicate_widget_ids() {
        let mut facets = FacetRegistry::new();
        facets.add_facet(STORAGE_FACET, Arc::new(StorageFacet)).unwrap();
        match facets.add_facet(STORAGE_FACET, Arc::new(StorageFacet)) {
            Err(Error::DuplicateFacet(id)) => assert_eq!(id, STORAGE_FACET),
            other => panic!("expected duplicate facet error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_widget_id_is_an_error() {
        let facets = FacetRegistry::new();
        match facets.section("no-such-facet", &core_i18n()) {
            Err(Error::UnknownFacet(id)) => assert_eq!(id, "no-such-facet"),
            other => panic!("expected unknown facet error, got {other:?}"),
        }
    }

    #[test]
    fn storage_facet_binds_blob_store_and_validation() {
        let section = StorageFacet.section(&core_i18n());
        assert_eq!(section.title, "Storage");
        assert_eq!(section.fields.len(), 2);

        let blob_store = &section.fields[0];
        assert_eq!(blob_store.kind, FieldKind::Select);
        assert_eq!(blob_store.bind.as_str(), "storage.blobStoreName");
        assert!(blob_store.required);

        let validation = &section.fields[1];
        assert_eq!(validation.kind, FieldKind::Checkbox);
        assert_eq!(
            validation.bind.as_str(),
            "storage.strictContentTypeValidation"
        );
        assert_eq!(validation.value, Some(serde_json::Value::Bool(true)));
    }

    #[test]
    fn hosted_facet_defaults_to_allowing_redeployment() {
        let section = StorageFacetHosted.section(&core_i18n());
        let policy = &section.fields[0];
        assert_eq!(policy.bind.as_str(), "storage.writePolicy");
        assert_eq!(policy.options, vec!["ALLOW", "ALLOW_ONCE", "DENY"]);
        assert_eq!(policy.value, Some(serde_json::Value::from("ALLOW")));
    }
}
