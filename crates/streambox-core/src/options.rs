use std::collections::BTreeSet;
use streambox_models::Movie;

/// Distinct languages present in the catalog, sorted ascending
pub fn unique_languages(movies: &[Movie]) -> Vec<String> {
    sorted_labels(movies.iter().map(|movie| movie.language.as_str()))
}

/// Distinct genres present in the catalog, sorted ascending
pub fn unique_genres(movies: &[Movie]) -> Vec<String> {
    sorted_labels(movies.iter().flat_map(|movie| movie.genres.iter().map(String::as_str)))
}

fn sorted_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    labels
        .filter(|label| !label.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        assert!(unique_languages(&[]).is_empty());
        assert!(unique_genres(&[]).is_empty());
    }

    #[test]
    fn test_unique_languages_sorted_without_duplicates() {
        let movies = vec![
            Movie::new("1", "Parasite", "Korean"),
            Movie::new("2", "Inception", "English"),
            Movie::new("3", "Oldboy", "Korean"),
            Movie::new("4", "Amelie", "French"),
        ];
        assert_eq!(unique_languages(&movies), vec!["English", "French", "Korean"]);
    }

    #[test]
    fn test_unique_genres_skips_movies_without_genres() {
        let movies = vec![
            Movie::new("1", "Parasite", "Korean").with_genres(["Thriller", "Drama"]),
            Movie::new("2", "Unknown", "English"),
            Movie::new("3", "Inception", "English").with_genres(["Sci-Fi", "Drama"]),
        ];
        assert_eq!(unique_genres(&movies), vec!["Drama", "Sci-Fi", "Thriller"]);
    }

    #[test]
    fn test_blank_language_is_not_an_option() {
        let movies = vec![Movie::new("1", "Mystery", ""), Movie::new("2", "Heat", "English")];
        assert_eq!(unique_languages(&movies), vec!["English"]);
    }
}
