use chrono::{DateTime, Utc};
use streambox_models::{Movie, MovieId};
use crate::filter::{trending_movies, FilterCriteria};
use crate::options::{unique_genres, unique_languages};

/// The last fetched catalog together with the user's current filter selection
#[derive(Debug, Default)]
pub struct CatalogView {
    movies: Vec<Movie>,
    criteria: FilterCriteria,
    source: Option<String>,
    loaded_at: Option<DateTime<Utc>>,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched catalog; the filter selection is kept
    pub fn replace(&mut self, movies: Vec<Movie>, source: &str) {
        self.movies = movies;
        self.source = Some(source.to_string());
        self.loaded_at = Some(Utc::now());
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn find(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| &movie.id == id)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    /// Movies passing the current criteria, in catalog order
    pub fn visible(&self) -> Vec<Movie> {
        self.criteria.apply(&self.movies)
    }

    pub fn trending(&self) -> Vec<Movie> {
        trending_movies(&self.movies)
    }

    pub fn languages(&self) -> Vec<String> {
        unique_languages(&self.movies)
    }

    pub fn genres(&self) -> Vec<String> {
        unique_genres(&self.movies)
    }
}
