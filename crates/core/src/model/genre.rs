//! Canonical genre enumeration shared with the host application.

use serde::{Deserialize, Serialize};

/// The closed set of genres the host application understands.
///
/// Scrapers translate their source vocabulary into this set; several source
/// labels may map onto the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Disaster,
    Documentary,
    Drama,
    Erotic,
    Family,
    Fantasy,
    FilmNoir,
    GameShow,
    History,
    Horror,
    Music,
    Musical,
    Mystery,
    News,
    RealityTv,
    RoadMovie,
    Romance,
    ScienceFiction,
    Short,
    Sport,
    TalkShow,
    Thriller,
    TvMovie,
    War,
    Western,
}

impl Genre {
    /// Human-readable display name, as the host shows it.
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Disaster => "Disaster",
            Genre::Documentary => "Documentary",
            Genre::Drama => "Drama",
            Genre::Erotic => "Erotic",
            Genre::Family => "Family",
            Genre::Fantasy => "Fantasy",
            Genre::FilmNoir => "Film Noir",
            Genre::GameShow => "Game Show",
            Genre::History => "History",
            Genre::Horror => "Horror",
            Genre::Music => "Music",
            Genre::Musical => "Musical",
            Genre::Mystery => "Mystery",
            Genre::News => "News",
            Genre::RealityTv => "Reality TV",
            Genre::RoadMovie => "Road Movie",
            Genre::Romance => "Romance",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Short => "Short",
            Genre::Sport => "Sport",
            Genre::TalkShow => "Talk Show",
            Genre::Thriller => "Thriller",
            Genre::TvMovie => "TV Movie",
            Genre::War => "War",
            Genre::Western => "Western",
        }
    }

    /// Best-effort lookup of a genre from an arbitrary label.
    ///
    /// Matches case-insensitively against the display names plus a few common
    /// aliases. This is the generic fallback scrapers use when their own
    /// translation table has no mapping for a token.
    pub fn from_label(label: &str) -> Option<Genre> {
        let needle = label.trim();
        if needle.is_empty() {
            return None;
        }

        for genre in Genre::ALL {
            if genre.label().eq_ignore_ascii_case(needle) {
                return Some(genre);
            }
        }

        match needle.to_ascii_lowercase().as_str() {
            "sci-fi" | "scifi" => Some(Genre::ScienceFiction),
            "film-noir" => Some(Genre::FilmNoir),
            "reality-tv" => Some(Genre::RealityTv),
            "television movie" => Some(Genre::TvMovie),
            _ => None,
        }
    }

    /// All variants, in display order.
    pub const ALL: [Genre; 30] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Comedy,
        Genre::Crime,
        Genre::Disaster,
        Genre::Documentary,
        Genre::Drama,
        Genre::Erotic,
        Genre::Family,
        Genre::Fantasy,
        Genre::FilmNoir,
        Genre::GameShow,
        Genre::History,
        Genre::Horror,
        Genre::Music,
        Genre::Musical,
        Genre::Mystery,
        Genre::News,
        Genre::RealityTv,
        Genre::RoadMovie,
        Genre::Romance,
        Genre::ScienceFiction,
        Genre::Short,
        Genre::Sport,
        Genre::TalkShow,
        Genre::Thriller,
        Genre::TvMovie,
        Genre::War,
        Genre::Western,
    ];
}
