//! HTML-to-metadata extraction pipeline.
//!
//! Everything in this module is synchronous and in-memory: it consumes a
//! parsed document and writes fields into a record. Network access and
//! orchestration live in the providers.
//!
//! ### Failure policy
//! A missing DOM fragment degrades the one field an extractor owns to
//! "unset" and is reported as a [`FieldError`]; the caller logs it and
//! keeps going. No extractor failure aborts a record.

pub mod detail;
pub mod gallery;
pub mod normalize;
pub mod search;
pub mod translate;

pub use gallery::parse_gallery;
pub use search::parse_search_results;
pub use translate::{translate, translate_genre_line};

use csfd_core::MovieMetadata;
use scraper::Html;

/// One field extractor's structural assumption was violated.
///
/// Recovered locally: the field stays unset and processing continues.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FieldError {
    /// An expected element or attribute is absent from the document.
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    /// An element was found but its text could not be interpreted.
    #[error("unparsable {field}: {value:?}")]
    Unparsable { field: &'static str, value: String },
}

/// Run all detail-page extractors against one parsed document, in order.
///
/// Order is fixed: title/year, genres, rating, plot, poster, cast. Each
/// failure is logged and the remaining extractors still run.
pub fn extract_movie(doc: &Html, md: &mut MovieMetadata) {
    report("title/year", detail::extract_title_year(doc, md));
    report("genres", detail::extract_genres(doc, md));
    report("rating", detail::extract_rating(doc, md));
    report("plot", detail::extract_plot(doc, md));
    report("poster", detail::extract_poster(doc, md));
    report("cast", detail::extract_cast(doc, md));
}

fn report(field: &str, result: Result<(), FieldError>) {
    if let Err(err) = result {
        tracing::warn!(field, error = %err, "field extraction failed, leaving field unset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csfd_core::{CastRole, Genre};

    /// Stand-in for a real detail page, reduced to the fragments the
    /// extractors look at.
    const DETAIL_FIXTURE: &str = r#"
        <html>
        <head>
            <meta property="og:title" content="Planeta opic / Planet of the Apes (1968)">
        </head>
        <body>
            <div class="header"><h1>Planeta opic <span class="year">(1968)</span></h1></div>
            <p class="origin">USA, 1968, 112 min</p>
            <p class="genre">Sci-Fi / Dobrodružný</p>
            <div class="rating">
                <h2 class="average" data-rating-count="8366">86%</h2>
            </div>
            <div id="poster">
                <img src="//img.csfd.cz/files/images/film/posters/159/527/poster.jpg" alt="poster">
            </div>
            <div id="plots">
                <div class="content">
                    <div>Někde ve vesmíru přece musí být něco, co je lepší než člověk.</div>
                </div>
            </div>
            <div class="creators">
                <div><h4>Režie:</h4> <a href="/tvurce/2841">Franklin J. Schaffner</a></div>
                <div><h4>Předloha:</h4> <a href="/tvurce/7382">Pierre Boulle</a></div>
                <div><h4>Hrají:</h4>
                    <a href="/tvurce/44">Charlton Heston</a>,
                    <a href="/tvurce/45">Roddy McDowall</a>
                </div>
            </div>
        </body>
        </html>
    "#;

    #[test]
    fn test_extract_movie_end_to_end() {
        let doc = Html::parse_document(DETAIL_FIXTURE);
        let mut md = MovieMetadata::new("csfd");
        extract_movie(&doc, &mut md);

        assert_eq!(md.title, "Planeta opic");
        assert_eq!(md.original_title.as_deref(), Some("Planet of the Apes"));
        assert_eq!(md.year.as_deref(), Some("1968"));
        assert_eq!(md.genres, vec![Genre::ScienceFiction, Genre::Adventure]);
        assert_eq!(md.rating, Some(8.6));
        assert_eq!(md.vote_count, Some(8366));
        assert!(
            md.plot
                .as_deref()
                .unwrap()
                .starts_with("Někde ve vesmíru přece musí být něco")
        );
        assert_eq!(
            md.poster_url.as_deref(),
            Some("http://img.csfd.cz/files/images/film/posters/159/527/poster.jpg")
        );

        assert_eq!(md.cast_with_role(CastRole::Director).count(), 1);
        assert_eq!(md.cast_with_role(CastRole::Writer).count(), 1);
        assert_eq!(md.cast_with_role(CastRole::Actor).count(), 2);
        assert_eq!(
            md.cast_with_role(CastRole::Actor).next().map(|c| c.name.as_str()),
            Some("Charlton Heston")
        );
    }

    #[test]
    fn test_extract_movie_empty_document_degrades() {
        let doc = Html::parse_document("<html><body></body></html>");
        let mut md = MovieMetadata::new("csfd");
        extract_movie(&doc, &mut md);

        assert!(md.title.is_empty());
        assert!(md.year.is_none());
        assert!(md.genres.is_empty());
        assert!(md.rating.is_none());
        assert!(md.plot.is_none());
        assert!(md.poster_url.is_none());
        assert!(md.cast.is_empty());
    }
}
