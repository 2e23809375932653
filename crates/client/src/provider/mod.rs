//! Provider implementations and registration wiring.
//!
//! The host calls [`register`] once with its configuration and receives
//! the capability table it routes scrape calls through. Provider identity
//! is built here and passed into the providers explicitly; nothing reads
//! it from global state.

pub mod artwork;
pub mod metadata;

pub use artwork::CsfdArtworkProvider;
pub use metadata::CsfdMetadataProvider;

use std::sync::Arc;

use csfd_core::{AppConfig, ProviderInfo, Registration, ScrapeError};

use crate::fetch::{FetchClient, FetchConfig, PageFetcher};

/// Stable id of the metadata/search provider.
pub const METADATA_PROVIDER_ID: &str = "csfd";

/// Stable id of the artwork provider.
pub const ARTWORK_PROVIDER_ID: &str = "csfd-artwork";

fn metadata_provider_info() -> ProviderInfo {
    ProviderInfo::new(
        METADATA_PROVIDER_ID,
        "Česko-Slovenská filmová databáze (CSFD.cz)",
        "Movie metadata from the Czech/Slovak film database. Available languages: CZ",
        Some("csfd_cz.png"),
    )
}

fn artwork_provider_info() -> ProviderInfo {
    ProviderInfo::new(
        ARTWORK_PROVIDER_ID,
        "CSFD.cz galerie",
        "Gallery artwork from the Czech/Slovak film database. Available languages: CZ",
        Some("csfd_cz.png"),
    )
}

/// Build the capability table for the host.
///
/// One HTTP client is shared by both providers; each call through the
/// table is otherwise independent.
pub fn register(config: &AppConfig) -> Result<Registration, ScrapeError> {
    let fetcher: Arc<dyn PageFetcher> = Arc::new(FetchClient::new(FetchConfig::from(config))?);

    let mut registration = Registration::new();
    registration.add_metadata(Arc::new(CsfdMetadataProvider::new(
        metadata_provider_info(),
        &config.base_url,
        Arc::clone(&fetcher),
    )));
    registration.add_artwork(Arc::new(CsfdArtworkProvider::new(
        artwork_provider_info(),
        &config.base_url,
        fetcher,
    )));

    Ok(registration)
}
