use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format_duration;
use crate::types::Movie;

/// A row in the movie listing table
#[derive(Tabled)]
struct MovieRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Genre")]
    genre: String,
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Duration")]
    duration: String,
}

impl From<&Movie> for MovieRow {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.clone(),
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            year: movie.release_year.to_string(),
            rating: format!("{:.1}", movie.rating),
            duration: format_duration(movie.duration),
        }
    }
}

pub fn format_movie_table(movies: &[Movie]) -> String {
    let rows: Vec<MovieRow> = movies.iter().map(MovieRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}
