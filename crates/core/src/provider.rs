//! Host-facing provider contracts.
//!
//! The host application discovers providers through a [`Registration`]
//! capability table and talks to them only through the traits below. This
//! keeps the scraper free of any plugin-framework dependency: the host
//! owns discovery, the scraper exposes entry points.

use std::sync::Arc;

use crate::error::ScrapeError;
use crate::model::{ArtworkEntry, MovieMetadata, ProviderInfo, SearchCandidate};

/// Input to a metadata scrape.
///
/// Exactly one way of identifying the movie is needed; resolution
/// precedence is site id, then a prior search result, then a best-effort
/// lookup by IMDb id.
#[derive(Debug, Clone, Default)]
pub struct ScrapeRequest {
    /// Site-specific numeric id, as a string.
    pub id: Option<String>,
    /// A result from an earlier `search` call, already carrying a detail URL.
    pub prior_result: Option<SearchCandidate>,
    /// Fallback identifier from the IMDb catalog.
    pub imdb_id: Option<String>,
}

impl ScrapeRequest {
    /// Request by site-specific id.
    pub fn by_id(id: &str) -> Self {
        Self { id: Some(id.to_string()), ..Default::default() }
    }

    /// Request from a prior search result.
    pub fn from_result(result: SearchCandidate) -> Self {
        Self { prior_result: Some(result), ..Default::default() }
    }
}

/// Movie metadata and search capability.
#[async_trait::async_trait]
pub trait MovieMetadataProvider: Send + Sync {
    /// Static provider identity.
    fn provider_info(&self) -> &ProviderInfo;

    /// Scrape one movie's metadata record.
    ///
    /// Fails with [`ScrapeError::Resolution`] when no detail URL can be
    /// derived from the request, and with fetch/parse errors when the
    /// document itself is unavailable. Individual field failures degrade
    /// that field to unset instead of failing the record.
    async fn get_metadata(&self, request: &ScrapeRequest) -> Result<MovieMetadata, ScrapeError>;

    /// Search for movies by title, best first.
    ///
    /// Never fails: any error during the search is absorbed and logged,
    /// yielding an empty list.
    async fn search(&self, query: &str, year_hint: Option<&str>) -> Vec<SearchCandidate>;
}

/// Movie artwork capability.
#[async_trait::async_trait]
pub trait MovieArtworkProvider: Send + Sync {
    /// Static provider identity.
    fn provider_info(&self) -> &ProviderInfo;

    /// Fetch gallery artwork for a movie by site-specific id.
    ///
    /// A movie without a gallery yields an empty list; only fetch/parse
    /// failures are errors.
    async fn artwork(&self, id: &str) -> Result<Vec<ArtworkEntry>, ScrapeError>;
}

/// Capability table handed to the host at registration.
#[derive(Default)]
pub struct Registration {
    metadata: Vec<Arc<dyn MovieMetadataProvider>>,
    artwork: Vec<Arc<dyn MovieArtworkProvider>>,
}

impl Registration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a metadata/search provider.
    pub fn add_metadata(&mut self, provider: Arc<dyn MovieMetadataProvider>) {
        self.metadata.push(provider);
    }

    /// Register an artwork provider.
    pub fn add_artwork(&mut self, provider: Arc<dyn MovieArtworkProvider>) {
        self.artwork.push(provider);
    }

    /// All registered metadata providers.
    pub fn metadata_providers(&self) -> &[Arc<dyn MovieMetadataProvider>] {
        &self.metadata
    }

    /// All registered artwork providers.
    pub fn artwork_providers(&self) -> &[Arc<dyn MovieArtworkProvider>] {
        &self.artwork
    }

    /// Look up a metadata provider by its stable id.
    pub fn metadata_by_id(&self, id: &str) -> Option<Arc<dyn MovieMetadataProvider>> {
        self.metadata.iter().find(|p| p.provider_info().id == id).cloned()
    }

    /// Look up an artwork provider by its stable id.
    pub fn artwork_by_id(&self, id: &str) -> Option<Arc<dyn MovieArtworkProvider>> {
        self.artwork.iter().find(|p| p.provider_info().id == id).cloned()
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("metadata", &self.metadata.iter().map(|p| &p.provider_info().id).collect::<Vec<_>>())
            .field("artwork", &self.artwork.iter().map(|p| &p.provider_info().id).collect::<Vec<_>>())
            .finish()
    }
}
