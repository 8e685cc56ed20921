use serde::{Deserialize, Deserializer, Serialize};

use crate::enum_display_fromstr;
use crate::error::MarqueeError;

/// Number of records shown in the featured strip on the home screen.
pub const FEATURED_COUNT: usize = 6;

/// A movie record as stored by the catalog API.
///
/// Favorites use the same shape; copies made from the catalog carry no summary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub poster: String,
    pub title: String,
    #[serde(default)]
    pub genre: String,
    /// Running time in minutes
    #[serde(default, deserialize_with = "lenient_u32")]
    pub duration: u32,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub release_year: i32,
    /// 0-5, fractional ratings allowed
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: f64,
    #[serde(default)]
    pub summary: String,
}

/// Body of a create request against the movie collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub poster: String,
    pub title: String,
    pub genre: Genre,
    pub duration: u32,
    pub release_year: i32,
    pub rating: f64,
    pub summary: String,
}

/// Body of a create request against the favorites collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteMovie {
    pub poster: String,
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub duration: u32,
    pub rating: f64,
}

impl From<&Movie> for FavoriteMovie {
    fn from(movie: &Movie) -> Self {
        Self {
            poster: movie.poster.clone(),
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            release_year: movie.release_year,
            duration: movie.duration,
            rating: movie.rating,
        }
    }
}

/// Confirmation returned by a create request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    #[serde(default)]
    pub acknowledged: Option<bool>,
    #[serde(default)]
    pub inserted_id: Option<String>,
}

/// Confirmation returned by a delete request.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    #[serde(default)]
    pub deleted_count: u64,
}

impl DeleteResult {
    /// The server only reports success through a positive count.
    pub fn deleted(&self) -> bool {
        self.deleted_count > 0
    }
}

/// Which remote collection a screen or action works against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Collection {
    #[default]
    #[serde(rename = "movie")]
    Movies,
    #[serde(rename = "favmovie")]
    Favorites,
}

enum_display_fromstr!(
    Collection,
    MarqueeError::InvalidCollection,
    {
        Movies => "movie" | "movies" | "catalog",
        Favorites => "favmovie" | "favorites" | "favourites" | "fav",
    }
);

impl Collection {
    /// Path segment of this collection under the API base URL.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Collection::Movies => "movie",
            Collection::Favorites => "favmovie",
        }
    }

    /// Human-readable noun for count labels.
    pub fn noun(&self) -> &'static str {
        match self {
            Collection::Movies => "movie",
            Collection::Favorites => "favorite movie",
        }
    }
}

/// Genres accepted by the create form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Mystery,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Thriller,
    Animation,
    Documentary,
}

enum_display_fromstr!(
    Genre,
    MarqueeError::InvalidGenre,
    {
        Action => "Action",
        Adventure => "Adventure",
        Comedy => "Comedy",
        Drama => "Drama",
        Fantasy => "Fantasy",
        Horror => "Horror",
        Mystery => "Mystery",
        Romance => "Romance",
        SciFi => "Sci-Fi" | "scifi" | "sci fi",
        Thriller => "Thriller",
        Animation => "Animation",
        Documentary => "Documentary",
    }
);

/// Featured strip: the head of the seed list.
pub fn featured(movies: &[Movie]) -> &[Movie] {
    &movies[..movies.len().min(FEATURED_COUNT)]
}

// Records written by older web forms carry numeric fields as strings, so
// "120" is accepted as well as 120.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(0.0),
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom("number out of range")),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(0.0),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected a number, got '{s}'"))),
        other => Err(D::Error::custom(format!("expected a number, got {other}"))),
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_number(deserializer).map(|n| if n.is_finite() { n } else { 0.0 })
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = lenient_f64(deserializer)?;
    Ok(n.round().clamp(0.0, u32::MAX as f64) as u32)
}

fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = lenient_f64(deserializer)?;
    Ok(n.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
}
