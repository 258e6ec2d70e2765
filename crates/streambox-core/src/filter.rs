// Catalog filtering: language/genre selection, title search, trending

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use streambox_models::Movie;
use tracing::debug;

/// Keep the movies that pass both the language and the genre test
///
/// An empty selection is no constraint. Language matches are exact and
/// case-sensitive; the genre test passes when any of the movie's genres is
/// selected. Input order is preserved.
pub fn filter_movies(movies: &[Movie], selected_languages: &[&str], selected_genres: &[&str]) -> Vec<Movie> {
    let filtered: Vec<Movie> = movies
        .iter()
        .filter(|movie| passes_language(movie, selected_languages))
        .filter(|movie| passes_genres(movie, selected_genres))
        .cloned()
        .collect();

    debug!(
        "filter_movies: input_count={}, languages={:?}, genres={:?}, result_count={}",
        movies.len(),
        selected_languages,
        selected_genres,
        filtered.len()
    );

    filtered
}

/// Case-insensitive substring match on title; a blank query keeps everything
pub fn search_movies(movies: &[Movie], query: &str) -> Vec<Movie> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return movies.to_vec();
    }

    movies
        .iter()
        .filter(|movie| movie.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn trending_movies(movies: &[Movie]) -> Vec<Movie> {
    movies.iter().filter(|movie| movie.is_trending).cloned().collect()
}

fn passes_language(movie: &Movie, selected: &[&str]) -> bool {
    selected.is_empty() || selected.contains(&movie.language.as_str())
}

fn passes_genres(movie: &Movie, selected: &[&str]) -> bool {
    selected.is_empty() || movie.genres.iter().any(|genre| selected.contains(&genre.as_str()))
}

/// The selections a user toggles while browsing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    pub selected_languages: BTreeSet<String>,
    pub selected_genres: BTreeSet<String>,
    pub search_query: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a language in or out of the selection; returns whether it is now selected
    pub fn toggle_language(&mut self, language: &str) -> bool {
        toggle(&mut self.selected_languages, language)
    }

    /// Flip a genre in or out of the selection; returns whether it is now selected
    pub fn toggle_genre(&mut self, genre: &str) -> bool {
        toggle(&mut self.selected_genres, genre)
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn clear(&mut self) {
        self.selected_languages.clear();
        self.selected_genres.clear();
        self.search_query.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected_languages.is_empty()
            && self.selected_genres.is_empty()
            && self.search_query.trim().is_empty()
    }

    /// Language, genre and search tests combined
    pub fn apply(&self, movies: &[Movie]) -> Vec<Movie> {
        let languages: Vec<&str> = self.selected_languages.iter().map(String::as_str).collect();
        let genres: Vec<&str> = self.selected_genres.iter().map(String::as_str).collect();
        let filtered = filter_movies(movies, &languages, &genres);
        search_movies(&filtered, &self.search_query)
    }
}

fn toggle(set: &mut BTreeSet<String>, label: &str) -> bool {
    if set.remove(label) {
        false
    } else {
        set.insert(label.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Movie> {
        vec![
            Movie::new("1", "Parasite", "Korean").with_genres(["Thriller"]),
            Movie::new("2", "Inception", "English").with_genres(["Sci-Fi"]),
            Movie::new("3", "Oldboy", "Korean").with_genres(["Action", "Thriller"]).trending(true),
            Movie::new("4", "Interstellar", "English").with_genres(["Sci-Fi", "Drama"]).trending(true),
            Movie::new("5", "Untitled", "French"),
        ]
    }

    fn ids(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_no_constraints_is_identity() {
        let movies = catalog();
        assert_eq!(filter_movies(&movies, &[], &[]), movies);
    }

    #[test]
    fn test_language_filter() {
        let catalog = vec![
            Movie::new("1", "Parasite", "Korean").with_genres(["Thriller"]),
            Movie::new("2", "Inception", "English").with_genres(["Sci-Fi"]),
        ];
        let result = filter_movies(&catalog, &["Korean"], &[]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "1");
    }

    #[test]
    fn test_language_filter_is_case_sensitive() {
        assert!(filter_movies(&catalog(), &["korean"], &[]).is_empty());
    }

    #[test]
    fn test_multiple_languages() {
        let result = filter_movies(&catalog(), &["French", "Korean"], &[]);
        assert_eq!(ids(&result), vec!["1", "3", "5"]);
    }

    #[test]
    fn test_genre_filter_matches_any_selected_genre() {
        let result = filter_movies(&catalog(), &[], &["Drama", "Action"]);
        assert_eq!(ids(&result), vec!["3", "4"]);
        assert!(result.iter().all(|m| m.has_genre("Drama") || m.has_genre("Action")));
    }

    #[test]
    fn test_movie_without_genres_fails_genre_test() {
        let result = filter_movies(&catalog(), &["French"], &["Thriller"]);
        assert!(result.is_empty());

        let result = filter_movies(&catalog(), &["French"], &[]);
        assert_eq!(ids(&result), vec!["5"]);
    }

    #[test]
    fn test_language_and_genre_combine_with_and() {
        let result = filter_movies(&catalog(), &["English"], &["Drama"]);
        assert_eq!(ids(&result), vec!["4"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let result = search_movies(&catalog(), "STEL");
        assert_eq!(ids(&result), vec!["4"]);
        assert_eq!(search_movies(&catalog(), "   ").len(), 5);
        assert!(search_movies(&catalog(), "matrix").is_empty());
    }

    #[test]
    fn test_search_and_filter_commute() {
        let movies = catalog();
        let search_first = filter_movies(&search_movies(&movies, "o"), &["Korean"], &["Thriller"]);
        let filter_first = search_movies(&filter_movies(&movies, &["Korean"], &["Thriller"]), "o");
        assert_eq!(search_first, filter_first);
        assert_eq!(ids(&filter_first), vec!["3"]);
    }

    #[test]
    fn test_trending_movies() {
        assert_eq!(ids(&trending_movies(&catalog())), vec!["3", "4"]);
    }

    #[test]
    fn test_criteria_toggle_and_apply() {
        let mut criteria = FilterCriteria::new();
        assert!(criteria.is_empty());
        assert_eq!(criteria.apply(&catalog()).len(), 5);

        assert!(criteria.toggle_language("Korean"));
        assert!(criteria.toggle_genre("Thriller"));
        criteria.set_search("old");
        assert_eq!(ids(&criteria.apply(&catalog())), vec!["3"]);

        assert!(!criteria.toggle_language("Korean"));
        assert!(criteria.selected_languages.is_empty());

        criteria.clear();
        assert!(criteria.is_empty());
    }
}
