use urlencoding::encode;

use depot_ui_core::{AssetRecord, AssetUrlStrategy, Link, UrlBuilder};

/// Link strategy for assets stored in cargo repositories.
///
/// The link targets this application's repository content endpoint, not
/// the upstream registry. Repository and asset names are percent-encoded
/// one path segment at a time so names containing `/`, `?`, `#`, or spaces
/// cannot change the shape of the path; the display text stays the raw
/// asset name.
pub struct CargoUrls;

impl AssetUrlStrategy for CargoUrls {
    fn asset_link(&self, urls: &UrlBuilder, asset: &AssetRecord) -> Link {
        let href = format!(
            "{}/repository/{}/{}",
            urls.base_url(),
            encode(&asset.repository_name),
            encode(&asset.name),
        );
        urls.link(href, asset.name.clone())
    }
}
