//! Scraping engine for the csfd metadata plugin.
//!
//! This crate provides the HTTP page fetcher, the HTML-to-metadata
//! extraction pipeline, search-result scoring, and the provider
//! implementations the host drives through `csfd-core`'s capability table.

pub mod extract;
pub mod fetch;
pub mod provider;
pub mod score;

pub use extract::{FieldError, extract_movie, parse_gallery, parse_search_results};
pub use fetch::{FetchClient, FetchConfig, FetchResponse, PageFetcher};
pub use provider::{
    ARTWORK_PROVIDER_ID, CsfdArtworkProvider, CsfdMetadataProvider, METADATA_PROVIDER_ID, register,
};
pub use score::{RelevanceScorer, TitleSimilarityScorer};
