//! Translation of the site's Czech genre vocabulary into canonical genres.

use csfd_core::Genre;

/// Exact-match table from source labels to canonical genres.
///
/// Several labels share a target on purpose. A `None` target marks a label
/// the site uses that has no genre equivalent; the caller's generic lookup
/// gets a chance at those and at anything not listed here.
const GENRE_TABLE: &[(&str, Option<Genre>)] = &[
    ("Akční", Some(Genre::Action)),
    ("Animovaný", Some(Genre::Animation)),
    ("Dobrodružný", Some(Genre::Adventure)),
    ("Dokumentární", Some(Genre::Documentary)),
    ("Drama", Some(Genre::Drama)),
    ("Erotický", Some(Genre::Erotic)),
    ("Experimentální", Some(Genre::Erotic)),
    ("Fantasy", Some(Genre::Fantasy)),
    ("Film-Noir", Some(Genre::FilmNoir)),
    ("Historický", Some(Genre::History)),
    ("Horor", Some(Genre::Horror)),
    ("Hudební", Some(Genre::Music)),
    ("IMAX", Some(Genre::Disaster)),
    ("Katastrofický", Some(Genre::Disaster)),
    ("Komedie", Some(Genre::Comedy)),
    ("Krátkometrážní", Some(Genre::Short)),
    ("Krimi", Some(Genre::Crime)),
    ("Loutkový", Some(Genre::Musical)),
    ("Muzikál", Some(Genre::Musical)),
    ("Mysteriózní", Some(Genre::Mystery)),
    ("Podobenství", Some(Genre::News)),
    ("Poetický", Some(Genre::News)),
    ("Pohádka", Some(Genre::News)),
    ("Povídkový", Some(Genre::News)),
    ("Psychologický", Some(Genre::News)),
    ("Publicistický", Some(Genre::News)),
    ("Reality-TV", Some(Genre::RealityTv)),
    ("Road movie", Some(Genre::RoadMovie)),
    ("Rodinný", Some(Genre::Family)),
    ("Romantický", Some(Genre::Romance)),
    ("Sci-Fi", Some(Genre::ScienceFiction)),
    ("Soutěžní", Some(Genre::GameShow)),
    ("Sportovní", Some(Genre::Sport)),
    ("Talk-show", Some(Genre::TalkShow)),
    ("Taneční", Some(Genre::TvMovie)),
    ("Telenovela", Some(Genre::TvMovie)),
    ("Thriller", Some(Genre::Thriller)),
    ("Válečný", Some(Genre::War)),
    ("Western", Some(Genre::Western)),
    // listed by the site, no genre equivalent
    ("Životopisný", None),
];

/// Translate one genre token from the site's vocabulary.
///
/// Returns `None` both for recognized-but-unmapped labels and for labels
/// not in the table; the distinction does not matter to callers, which
/// fall back to [`Genre::from_label`] either way.
pub fn translate(label: &str) -> Option<Genre> {
    GENRE_TABLE
        .iter()
        .find(|(source, _)| *source == label)
        .and_then(|(_, genre)| *genre)
}

/// Translate a slash-delimited genre line into canonical genres.
///
/// Tokens are split on `" / "` and run through [`translate`], then through
/// the generic lookup. Tokens both miss on are dropped with a debug log.
/// Document order and duplicates are preserved.
pub fn translate_genre_line(line: &str) -> Vec<Genre> {
    let mut genres = Vec::new();
    for token in line.split(" / ") {
        match translate(token).or_else(|| Genre::from_label(token)) {
            Some(genre) => genres.push(genre),
            None => tracing::debug!("no genre mapping for {:?}", token),
        }
    }
    genres
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_labels() {
        assert_eq!(translate("Akční"), Some(Genre::Action));
        assert_eq!(translate("Komedie"), Some(Genre::Comedy));
        assert_eq!(translate("Sci-Fi"), Some(Genre::ScienceFiction));
        assert_eq!(translate("Válečný"), Some(Genre::War));
    }

    #[test]
    fn test_translate_many_to_one() {
        assert_eq!(translate("IMAX"), Some(Genre::Disaster));
        assert_eq!(translate("Katastrofický"), Some(Genre::Disaster));
        assert_eq!(translate("Loutkový"), Some(Genre::Musical));
        assert_eq!(translate("Muzikál"), Some(Genre::Musical));
        assert_eq!(translate("Taneční"), Some(Genre::TvMovie));
        assert_eq!(translate("Telenovela"), Some(Genre::TvMovie));
    }

    #[test]
    fn test_translate_unmapped_label() {
        // listed in the source vocabulary, intentionally without a mapping
        assert_eq!(translate("Životopisný"), None);
    }

    #[test]
    fn test_translate_unknown_label() {
        assert_eq!(translate("Nonexistent"), None);
        assert_eq!(translate(""), None);
    }

    #[test]
    fn test_table_totality() {
        for (label, genre) in GENRE_TABLE {
            assert_eq!(translate(label), *genre);
        }
    }

    #[test]
    fn test_translate_genre_line() {
        assert_eq!(
            translate_genre_line("Sci-Fi / Dobrodružný"),
            vec![Genre::ScienceFiction, Genre::Adventure]
        );
    }

    #[test]
    fn test_translate_genre_line_fallback() {
        // "Western" hits the table; "Drama" would too, but e.g. an English
        // label unknown to the table falls through to the generic lookup
        assert_eq!(translate_genre_line("Western / Mystery"), vec![Genre::Western, Genre::Mystery]);
    }

    #[test]
    fn test_translate_genre_line_drops_unknown() {
        assert_eq!(translate_genre_line("Životopisný / Drama"), vec![Genre::Drama]);
    }

    #[test]
    fn test_translate_genre_line_preserves_duplicates() {
        assert_eq!(translate_genre_line("Drama / Drama"), vec![Genre::Drama, Genre::Drama]);
    }
}
