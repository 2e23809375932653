//! Parsing of a movie's gallery page into artwork entries.

use std::sync::LazyLock;

use csfd_core::{ArtworkEntry, ArtworkKind};
use regex::Regex;
use scraper::{Html, Selector};

use crate::extract::normalize::repair_image_url;

static PHOTO_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".photo").expect("invalid selector"));

/// Single-quoted background-image URL embedded in an inline style.
static STYLE_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'([^']*)'").expect("invalid regex"));

/// Parse a gallery page into artwork entries, in document order.
///
/// Each photo element carries its image as an inline `background-image`
/// style; photos whose style has no quoted URL are skipped. No ranking,
/// no dedup. A page without photos yields an empty list.
pub fn parse_gallery(html: &str, provider_id: &str) -> Vec<ArtworkEntry> {
    let doc = Html::parse_document(html);
    let mut artwork = Vec::new();

    for photo in doc.select(&PHOTO_SELECTOR) {
        let Some(style) = photo.value().attr("style") else {
            continue;
        };
        let Some(caps) = STYLE_URL.captures(style) else {
            continue;
        };

        let url = repair_image_url(&caps[1]);
        tracing::debug!("found artwork at {}", url);

        artwork.push(ArtworkEntry {
            provider_id: provider_id.to_string(),
            kind: ArtworkKind::Background,
            url,
            preview_url: None,
            size: None,
        });
    }

    artwork
}
