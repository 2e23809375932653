//! Data model shared between the scraper and the host application.
//!
//! All types here are plain data: created per call, populated by the
//! extraction pipeline, and handed to the host as-is. Nothing retains
//! identity or state beyond the call that produced it.

mod genre;

pub use genre::Genre;

use serde::{Deserialize, Serialize};

/// Static identity of a provider, exposed once at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Stable provider id the host keys capabilities by (e.g. "csfd").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description shown in the host UI.
    pub description: String,
    /// Icon resource name, if the provider ships one.
    pub icon: Option<String>,
}

impl ProviderInfo {
    pub fn new(id: &str, name: &str, description: &str, icon: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.map(str::to_string),
        }
    }
}

/// Kind of media a search candidate refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Movie,
}

/// Role of one credited person on a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastRole {
    Director,
    Writer,
    Actor,
    Other,
}

/// One credited person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastEntry {
    pub name: String,
    pub role: CastRole,
}

impl CastEntry {
    pub fn new(name: &str, role: CastRole) -> Self {
        Self { name: name.to_string(), role }
    }
}

/// The extraction target: one movie's metadata record.
///
/// Extractors fill fields incrementally; any field an extractor could not
/// recover stays unset rather than failing the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieMetadata {
    /// Id of the provider that produced this record.
    pub provider_id: String,
    /// Local title.
    pub title: String,
    /// Original title, when the site lists one.
    pub original_title: Option<String>,
    /// Four-digit release year.
    pub year: Option<String>,
    /// Genres in document order; duplicates are preserved.
    pub genres: Vec<Genre>,
    /// Rating on a 0.0–10.0 scale.
    pub rating: Option<f64>,
    /// Number of votes behind the rating.
    pub vote_count: Option<u32>,
    pub plot: Option<String>,
    /// Absolute poster URL.
    pub poster_url: Option<String>,
    /// Credited people in document order.
    pub cast: Vec<CastEntry>,
}

impl MovieMetadata {
    /// Fresh, empty record stamped with the producing provider's id.
    pub fn new(provider_id: &str) -> Self {
        Self { provider_id: provider_id.to_string(), ..Default::default() }
    }

    /// Cast entries with the given role, in document order.
    pub fn cast_with_role(&self, role: CastRole) -> impl Iterator<Item = &CastEntry> {
        self.cast.iter().filter(move |c| c.role == role)
    }
}

/// One candidate row parsed from a search-results listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCandidate {
    /// Id of the provider that produced this candidate.
    pub provider_id: String,
    /// Site-specific id of the movie.
    pub id: String,
    pub title: String,
    pub year: Option<String>,
    pub poster_url: Option<String>,
    /// Absolute detail-page URL.
    pub url: String,
    pub media_kind: MediaKind,
    /// Relevance score against the query, in [0, 1] minus any year penalty.
    pub score: f32,
}

/// Kind of artwork a gallery entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtworkKind {
    Poster,
    Background,
}

/// One image found on a gallery page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkEntry {
    /// Id of the provider that produced this entry.
    pub provider_id: String,
    pub kind: ArtworkKind,
    /// Full-size image URL.
    pub url: String,
    /// Smaller preview, when the site offers one.
    pub preview_url: Option<String>,
    /// Known pixel dimensions, when the site states them.
    pub size: Option<(u32, u32)>,
}
