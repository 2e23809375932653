//! Parsing of a search-results listing page into scored candidates.

use std::cmp::Ordering;
use std::sync::LazyLock;

use csfd_core::{MediaKind, SearchCandidate};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::extract::normalize::{repair_image_url, strip_parentheses, year_after_comma};
use crate::score::RelevanceScorer;

static FILM_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.film").expect("invalid selector"));
static DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").expect("invalid selector"));
static FILM_YEAR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".film-year").expect("invalid selector"));
static POSTER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".film-poster-small").expect("invalid selector"));

/// Numeric site id inside a detail-page link.
static FILM_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"film/(\d+)").expect("invalid regex"));

/// Score subtracted when a year hint does not match the candidate's year.
/// A tie-breaking nudge, not a filter.
const YEAR_MISMATCH_PENALTY: f32 = 0.01;

fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<Vec<_>>().join(" ").trim().to_string()
}

/// Parse one results-listing page into candidates, best first.
///
/// `query` must already be scrubbed (see
/// [`scrub_query`](crate::extract::normalize::scrub_query)); `year_hint`
/// nudges candidates whose year disagrees. The sort is stable, so equal
/// scores keep document order.
pub fn parse_search_results(
    html: &str, query: &str, year_hint: Option<&str>, base_url: &str, provider_id: &str, scorer: &dyn RelevanceScorer,
) -> Vec<SearchCandidate> {
    let doc = Html::parse_document(html);
    let mut candidates = Vec::new();

    let film_links: Vec<_> = doc.select(&FILM_LINK_SELECTOR).collect();
    tracing::debug!("found {} search results", film_links.len());

    for link in film_links {
        let Some(href) = link.value().attr("href") else {
            tracing::debug!("skipping film link without href");
            continue;
        };

        let id = FILM_ID
            .captures(href)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default();
        let title = element_text(link);
        let url = if href.starts_with('/') {
            format!("{}{}", base_url.trim_end_matches('/'), href)
        } else {
            format!("{}/{}", base_url.trim_end_matches('/'), href)
        };

        let year = extract_year(link);
        let poster_url = extract_poster(link);

        if title.is_empty() && url.is_empty() {
            continue;
        }

        let mut score = scorer.score(query, &title);
        if let Some(hint) = year_hint
            && !hint.is_empty()
            && hint != "0"
            && year.as_deref() != Some(hint)
        {
            tracing::debug!("year hint {} does not match candidate year, downgrading score by 0.01", hint);
            score -= YEAR_MISMATCH_PENALTY;
        }

        tracing::debug!("found movie {:?} ({:?})", title, year);

        candidates.push(SearchCandidate {
            provider_id: provider_id.to_string(),
            id,
            title,
            year,
            poster_url,
            url,
            media_kind: MediaKind::Movie,
            score,
        });
    }

    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates
}

/// Year from the entry's description paragraph, or from the alternate
/// `"film-year"` fragment the "further matches" section uses.
fn extract_year(link: ElementRef<'_>) -> Option<String> {
    if let Some(description) = parent_element(link)
        .and_then(parent_element)
        .and_then(|gp| gp.select(&DESCRIPTION_SELECTOR).next())
    {
        return year_after_comma(&element_text(description));
    }

    parent_element(link)
        .and_then(|p| p.select(&FILM_YEAR_SELECTOR).next())
        .map(|el| strip_parentheses(&element_text(el)))
        .filter(|year| !year.is_empty())
}

/// Thumbnail from the nearest listing-entry ancestor, protocol-repaired.
fn extract_poster(link: ElementRef<'_>) -> Option<String> {
    parent_element(link)
        .and_then(parent_element)
        .and_then(parent_element)
        .and_then(|entry| entry.select(&POSTER_SELECTOR).next())
        .and_then(|img| img.value().attr("src"))
        .map(repair_image_url)
}
