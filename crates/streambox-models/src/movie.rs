use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Stable identifier of a movie within a catalog snapshot
///
/// External data carries ids either as strings or as numbers. Both are
/// normalized to the string form on ingestion, so `"42"` and `42` name the
/// same movie.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MovieId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for MovieId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MovieId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum AnyId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match AnyId::deserialize(deserializer)? {
            AnyId::Text(s) => MovieId::new(s),
            AnyId::Unsigned(n) => MovieId(n.to_string()),
            AnyId::Signed(n) => MovieId(n.to_string()),
        })
    }
}

/// Canonical movie record used by filtering, collections and persistence
///
/// Persisted collections are JSON arrays of this shape (camelCase keys).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub is_trending: bool,
}

impl Movie {
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            language: language.into(),
            genres: Vec::new(),
            rating: None,
            poster_url: None,
            is_trending: false,
        }
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = normalize_rating(Some(rating as f64));
        self
    }

    pub fn with_poster_url(mut self, url: impl Into<String>) -> Self {
        self.poster_url = Some(url.into());
        self
    }

    pub fn trending(mut self, is_trending: bool) -> Self {
        self.is_trending = is_trending;
        self
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// Movie record as delivered by a catalog, before normalization
///
/// Catalog payloads disagree on field names (`poster` vs `posterUrl`,
/// `status` vs `isTrending`) and on id types. Everything is optional
/// except the id; [`RawMovie::normalize`] folds it into a [`Movie`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMovie {
    pub id: Option<MovieId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, alias = "poster")]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub is_trending: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
}

impl RawMovie {
    /// Normalize into the canonical shape
    ///
    /// Returns `None` when the record has no usable id, since collections
    /// and filtering key everything by id.
    pub fn normalize(self) -> Option<Movie> {
        let id = self.id.filter(|id| !id.is_empty())?;

        let genres = self
            .genres
            .unwrap_or_default()
            .into_iter()
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .collect();

        let is_trending = self.is_trending.unwrap_or_else(|| {
            self.status
                .as_deref()
                .map(|s| s.trim().eq_ignore_ascii_case("trending"))
                .unwrap_or(false)
        });

        Some(Movie {
            id,
            title: self.title.map(|t| t.trim().to_string()).unwrap_or_default(),
            language: self.language.map(|l| l.trim().to_string()).unwrap_or_default(),
            genres,
            rating: normalize_rating(self.rating),
            poster_url: self.poster_url.filter(|p| !p.trim().is_empty()),
            is_trending,
        })
    }
}

// Ratings outside 0-10 are treated as unknown
fn normalize_rating(rating: Option<f64>) -> Option<f32> {
    rating
        .filter(|r| r.is_finite() && (0.0..=10.0).contains(r))
        .map(|r| r as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_id_accepts_numbers_and_strings() {
        let from_number: MovieId = serde_json::from_str("42").unwrap();
        let from_string: MovieId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(serde_json::to_string(&from_number).unwrap(), "\"42\"");
    }

    #[test]
    fn test_movie_serializes_camel_case() {
        let movie = Movie::new("1", "Parasite", "Korean")
            .with_genres(["Thriller"])
            .with_poster_url("https://img/parasite.jpg")
            .trending(true);
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["posterUrl"], "https://img/parasite.jpg");
        assert_eq!(json["isTrending"], true);
        assert!(json.get("rating").is_none());
    }

    #[test]
    fn test_raw_movie_normalizes_alternate_shapes() {
        let raw: RawMovie = serde_json::from_str(
            r#"{"id": 7, "title": " Dune ", "language": "English", "poster": "p.jpg", "status": "Trending", "rating": 8.1}"#,
        )
        .unwrap();
        let movie = raw.normalize().unwrap();
        assert_eq!(movie.id.as_str(), "7");
        assert_eq!(movie.title, "Dune");
        assert_eq!(movie.poster_url.as_deref(), Some("p.jpg"));
        assert!(movie.is_trending);
        assert!(movie.genres.is_empty());
        assert!((movie.rating.unwrap() - 8.1).abs() < 1e-6);
    }

    #[test]
    fn test_raw_movie_explicit_flag_wins_over_status() {
        let raw: RawMovie = serde_json::from_str(
            r#"{"id": "3", "title": "Roma", "isTrending": false, "status": "trending", "genres": null}"#,
        )
        .unwrap();
        let movie = raw.normalize().unwrap();
        assert!(!movie.is_trending);
        assert!(movie.genres.is_empty());
        assert_eq!(movie.language, "");
    }

    #[test]
    fn test_raw_movie_without_id_is_dropped() {
        let raw: RawMovie = serde_json::from_str(r#"{"title": "Nameless"}"#).unwrap();
        assert!(raw.normalize().is_none());

        let blank: RawMovie = serde_json::from_str(r#"{"id": "  ", "title": "Blank"}"#).unwrap();
        assert!(blank.normalize().is_none());
    }

    #[test]
    fn test_out_of_range_rating_is_dropped() {
        let raw: RawMovie = serde_json::from_str(r#"{"id": "9", "title": "X", "rating": 11.5}"#).unwrap();
        assert_eq!(raw.normalize().unwrap().rating, None);
    }

    #[test]
    fn test_with_rating_applies_same_range() {
        assert_eq!(Movie::new("1", "Heat", "English").with_rating(7.5).rating, Some(7.5));
        assert_eq!(Movie::new("1", "Heat", "English").with_rating(-1.0).rating, None);
        assert_eq!(Movie::new("1", "Heat", "English").with_rating(f32::NAN).rating, None);
    }

    #[test]
    fn test_persisted_movie_tolerates_missing_genres() {
        let movie: Movie = serde_json::from_str(r#"{"id": 5, "title": "Heat", "language": "English"}"#).unwrap();
        assert_eq!(movie.id, MovieId::from("5"));
        assert!(movie.genres.is_empty());
        assert!(!movie.is_trending);
    }
}
