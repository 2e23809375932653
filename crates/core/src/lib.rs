//! Core types and shared contracts for the csfd scraper.
//!
//! This crate provides:
//! - The metadata/search/artwork data model handed to the host
//! - The canonical genre enumeration and generic genre lookup
//! - Unified fatal error types
//! - Configuration structures
//! - Host-facing provider traits and the registration capability table

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::AppConfig;
pub use error::ScrapeError;
pub use model::{
    ArtworkEntry, ArtworkKind, CastEntry, CastRole, Genre, MediaKind, MovieMetadata, ProviderInfo, SearchCandidate,
};
pub use provider::{MovieArtworkProvider, MovieMetadataProvider, Registration, ScrapeRequest};
