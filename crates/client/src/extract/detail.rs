//! Field extractors for a movie detail page.
//!
//! Each extractor owns one field of the record: it reads the fragments it
//! needs from the parsed document and writes its field, or reports a
//! [`FieldError`] when the structure it expects is absent.

use std::sync::LazyLock;

use csfd_core::{CastEntry, CastRole, MovieMetadata};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::extract::FieldError;
use crate::extract::normalize::{repair_image_url, unsort_title, year_after_comma};
use crate::extract::translate::translate_genre_line;

static OG_TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[property="og:title"]"#).expect("invalid selector"));
static HEADER_H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".header h1").expect("invalid selector"));
static ORIGIN_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".origin").expect("invalid selector"));
static GENRE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".genre").expect("invalid selector"));
static AVERAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".average").expect("invalid selector"));
static VOTE_COUNT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[data-rating-count]").expect("invalid selector"));
static PLOT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#plots .content div").expect("invalid selector"));
static POSTER_IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#poster img").expect("invalid selector"));
static CREATORS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".creators").expect("invalid selector"));
static H4_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h4").expect("invalid selector"));
static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("invalid selector"));

/// `"Local Title / Original Title (YYYY)"`
static OG_TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*) / (.*) \(([0-9]{4})\)$").expect("invalid regex"));

/// Heading labels the site uses for creator blocks.
const CAST_ROLE_TABLE: &[(&str, CastRole)] = &[
    ("Režie:", CastRole::Director),
    ("Předloha:", CastRole::Writer),
    ("Hrají:", CastRole::Actor),
];

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<Vec<_>>().join(" ").trim().to_string()
}

/// Title, original title and year.
///
/// Primary path is the `og:title` page-metadata tag; when its content does
/// not have the `"A / B (YYYY)"` shape, the visible heading supplies the
/// title and the origin line the year. A year neither path yields stays
/// unset.
pub fn extract_title_year(doc: &Html, md: &mut MovieMetadata) -> Result<(), FieldError> {
    let og_content = doc
        .select(&OG_TITLE_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("content"));

    if let Some(content) = og_content
        && let Some(caps) = OG_TITLE_PATTERN.captures(content)
    {
        md.title = unsort_title(&caps[1]);
        md.original_title = Some(unsort_title(&caps[2]));
        md.year = Some(caps[3].to_string());
        return Ok(());
    }

    let header = doc
        .select(&HEADER_H1_SELECTOR)
        .next()
        .ok_or(FieldError::MissingElement(".header h1"))?;

    // the year span inside the heading is not part of the title
    let title = header
        .children()
        .find_map(|node| {
            node.value()
                .as_text()
                .map(|t| t.text.trim().to_string())
                .filter(|t| !t.is_empty())
        })
        .ok_or(FieldError::MissingElement(".header h1 text"))?;
    md.title = title;

    if let Some(origin) = doc.select(&ORIGIN_SELECTOR).next() {
        md.year = year_after_comma(&element_text(origin));
    }

    Ok(())
}

/// Genres, in document order, duplicates preserved.
pub fn extract_genres(doc: &Html, md: &mut MovieMetadata) -> Result<(), FieldError> {
    for genre_el in doc.select(&GENRE_SELECTOR) {
        md.genres.extend(translate_genre_line(&element_text(genre_el)));
    }
    Ok(())
}

/// Rating on a 0–10 scale, plus the vote count when the page carries one.
pub fn extract_rating(doc: &Html, md: &mut MovieMetadata) -> Result<(), FieldError> {
    if let Some(count_el) = doc.select(&VOTE_COUNT_SELECTOR).next()
        && let Some(raw) = count_el.value().attr("data-rating-count")
    {
        match raw.trim().parse::<u32>() {
            Ok(count) => md.vote_count = Some(count),
            Err(_) => tracing::debug!("unparsable vote count {:?}", raw),
        }
    }

    let Some(average) = doc.select(&AVERAGE_SELECTOR).next() else {
        return Ok(());
    };

    let text = element_text(average);
    if text.is_empty() {
        return Ok(());
    }

    let percent = text.replace('%', "");
    match percent.trim().parse::<f64>() {
        Ok(value) => {
            md.rating = Some(value / 10.0);
            Ok(())
        }
        Err(_) => Err(FieldError::Unparsable { field: "rating", value: text }),
    }
}

/// Plot from the first text block of the plot section.
///
/// A missing section is this extractor's structural failure; a section
/// whose text is empty just leaves the plot unset.
pub fn extract_plot(doc: &Html, md: &mut MovieMetadata) -> Result<(), FieldError> {
    let block = doc
        .select(&PLOT_SELECTOR)
        .next()
        .ok_or(FieldError::MissingElement("#plots .content div"))?;

    let plot = element_text(block);
    if !plot.is_empty() {
        md.plot = Some(plot);
    }
    Ok(())
}

/// Poster URL from the poster container, protocol-repaired.
pub fn extract_poster(doc: &Html, md: &mut MovieMetadata) -> Result<(), FieldError> {
    let img = doc
        .select(&POSTER_IMG_SELECTOR)
        .next()
        .ok_or(FieldError::MissingElement("#poster img"))?;

    let src = img
        .value()
        .attr("src")
        .ok_or(FieldError::MissingElement("#poster img[src]"))?;

    md.poster_url = Some(repair_image_url(src));
    Ok(())
}

/// Credited people from the creators container.
///
/// Each heading classifies its block; every linked name after the heading
/// becomes one cast entry with that role. Headings outside the known
/// vocabulary classify as [`CastRole::Other`].
pub fn extract_cast(doc: &Html, md: &mut MovieMetadata) -> Result<(), FieldError> {
    let creators = doc
        .select(&CREATORS_SELECTOR)
        .next()
        .ok_or(FieldError::MissingElement(".creators"))?;

    for heading in creators.select(&H4_SELECTOR) {
        let role = classify_heading(&element_text(heading));

        let Some(block) = heading.parent().and_then(ElementRef::wrap) else {
            continue;
        };
        for person in block.select(&ANCHOR_SELECTOR) {
            let name = element_text(person);
            if !name.is_empty() {
                md.cast.push(CastEntry::new(&name, role));
            }
        }
    }

    Ok(())
}

fn classify_heading(text: &str) -> CastRole {
    CAST_ROLE_TABLE
        .iter()
        .find(|(label, _)| *label == text)
        .map(|(_, role)| *role)
        .unwrap_or(CastRole::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MovieMetadata {
        MovieMetadata::new("csfd")
    }

    #[test]
    fn test_title_year_og_tag() {
        let doc = Html::parse_document(
            r#"<html><head><meta property="og:title" content="Planeta opic / Planet of the Apes (1968)"></head></html>"#,
        );
        let mut md = record();
        extract_title_year(&doc, &mut md).unwrap();

        assert_eq!(md.title, "Planeta opic");
        assert_eq!(md.original_title.as_deref(), Some("Planet of the Apes"));
        assert_eq!(md.year.as_deref(), Some("1968"));
    }

    #[test]
    fn test_title_year_og_tag_sortable_names() {
        let doc = Html::parse_document(
            r#"<html><head><meta property="og:title" content="Nenávist, La / Haine, La (1995)"></head></html>"#,
        );
        let mut md = record();
        extract_title_year(&doc, &mut md).unwrap();

        assert_eq!(md.title, "La Nenávist");
        assert_eq!(md.original_title.as_deref(), Some("La Haine"));
        assert_eq!(md.year.as_deref(), Some("1995"));
    }

    #[test]
    fn test_title_year_fallback_to_heading() {
        let doc = Html::parse_document(
            r#"<html><head><meta property="og:title" content="Malá čarodějnice"></head>
            <body>
                <div class="header"><h1>Malá čarodějnice <span>(TV seriál)</span></h1></div>
                <p class="origin">Československo / Německo, 1984, 7x28 min</p>
            </body></html>"#,
        );
        let mut md = record();
        extract_title_year(&doc, &mut md).unwrap();

        assert_eq!(md.title, "Malá čarodějnice");
        assert_eq!(md.original_title, None);
        assert_eq!(md.year.as_deref(), Some("1984"));
    }

    #[test]
    fn test_title_year_fallback_without_year() {
        let doc = Html::parse_document(
            r#"<html><body><div class="header"><h1>Bez roku</h1></div></body></html>"#,
        );
        let mut md = record();
        extract_title_year(&doc, &mut md).unwrap();

        assert_eq!(md.title, "Bez roku");
        assert_eq!(md.year, None);
    }

    #[test]
    fn test_title_year_nothing_to_read() {
        let doc = Html::parse_document("<html><body></body></html>");
        let mut md = record();
        let result = extract_title_year(&doc, &mut md);

        assert!(matches!(result, Err(FieldError::MissingElement(_))));
        assert!(md.title.is_empty());
    }

    #[test]
    fn test_rating_percent() {
        let doc = Html::parse_document(r#"<div class="rating"><h2 class="average">86%</h2></div>"#);
        let mut md = record();
        extract_rating(&doc, &mut md).unwrap();
        assert_eq!(md.rating, Some(8.6));
        assert_eq!(md.vote_count, None);
    }

    #[test]
    fn test_rating_empty_stays_unset() {
        let doc = Html::parse_document(r#"<div class="rating"><h2 class="average"></h2></div>"#);
        let mut md = record();
        extract_rating(&doc, &mut md).unwrap();
        assert_eq!(md.rating, None);
    }

    #[test]
    fn test_rating_non_numeric_stays_unset() {
        let doc = Html::parse_document(r#"<div class="rating"><h2 class="average">n/a%</h2></div>"#);
        let mut md = record();
        let result = extract_rating(&doc, &mut md);
        assert!(matches!(result, Err(FieldError::Unparsable { field: "rating", .. })));
        assert_eq!(md.rating, None);
    }

    #[test]
    fn test_rating_vote_count() {
        let doc = Html::parse_document(
            r#"<div class="rating"><h2 class="average" data-rating-count="8366">86%</h2></div>"#,
        );
        let mut md = record();
        extract_rating(&doc, &mut md).unwrap();
        assert_eq!(md.rating, Some(8.6));
        assert_eq!(md.vote_count, Some(8366));
    }

    #[test]
    fn test_plot_missing_section_is_error() {
        let doc = Html::parse_document("<html><body></body></html>");
        let mut md = record();
        let result = extract_plot(&doc, &mut md);
        assert!(matches!(result, Err(FieldError::MissingElement(_))));
        assert_eq!(md.plot, None);
    }

    #[test]
    fn test_plot_empty_section_stays_unset() {
        let doc = Html::parse_document(r#"<div id="plots"><div class="content"><div>   </div></div></div>"#);
        let mut md = record();
        extract_plot(&doc, &mut md).unwrap();
        assert_eq!(md.plot, None);
    }

    #[test]
    fn test_poster_protocol_repair() {
        let doc = Html::parse_document(r#"<div id="poster"><img src="//img.csfd.cz/p.jpg"></div>"#);
        let mut md = record();
        extract_poster(&doc, &mut md).unwrap();
        assert_eq!(md.poster_url.as_deref(), Some("http://img.csfd.cz/p.jpg"));
    }

    #[test]
    fn test_cast_director_heading() {
        let doc = Html::parse_document(
            r#"<div class="creators"><div><h4>Režie:</h4>
                <a href="/t/1">Franklin J. Schaffner</a></div></div>"#,
        );
        let mut md = record();
        extract_cast(&doc, &mut md).unwrap();

        assert_eq!(md.cast.len(), 1);
        assert_eq!(md.cast[0].name, "Franklin J. Schaffner");
        assert_eq!(md.cast[0].role, CastRole::Director);
    }

    #[test]
    fn test_cast_unknown_heading_is_other() {
        let doc = Html::parse_document(
            r#"<div class="creators"><div><h4>Kamera:</h4>
                <a href="/t/2">Leon Shamroy</a></div></div>"#,
        );
        let mut md = record();
        extract_cast(&doc, &mut md).unwrap();

        assert_eq!(md.cast.len(), 1);
        assert_eq!(md.cast[0].role, CastRole::Other);
    }

    #[test]
    fn test_classify_heading_exact_match_only() {
        assert_eq!(classify_heading("Režie:"), CastRole::Director);
        assert_eq!(classify_heading("Předloha:"), CastRole::Writer);
        assert_eq!(classify_heading("Hrají:"), CastRole::Actor);
        assert_eq!(classify_heading("Režie"), CastRole::Other);
        assert_eq!(classify_heading("režie:"), CastRole::Other);
    }
}
