use owo_colors::OwoColorize;

use crate::types::Movie;

pub mod table;

pub use table::format_movie_table;

/// Five-star rating bar, rounded to the nearest half star.
pub fn format_stars(rating: f64) -> String {
    let halves = (rating.clamp(0.0, 5.0) * 2.0).round() as usize;
    let full = halves / 2;
    let half = halves % 2;
    let empty = 5 - full - half;
    format!(
        "{}{}{}",
        "★".repeat(full),
        "½".repeat(half),
        "☆".repeat(empty)
    )
}

/// "2h 20m" style running time
pub fn format_duration(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Format a movie for single-line display with colors
pub fn format_movie_line(movie: &Movie) -> String {
    let id_padded = format!("{:24}", movie.id);
    let year = if movie.release_year > 0 {
        format!("({})", movie.release_year)
    } else {
        String::new()
    };
    format!(
        "{} {} {} {} {}",
        id_padded.cyan(),
        format_stars(movie.rating).yellow(),
        movie.title.bold(),
        year.dimmed(),
        movie.genre.magenta()
    )
}

/// Multi-line detail view used by `show`.
pub fn format_movie_detail(movie: &Movie) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", movie.title.bold()));
    out.push_str(&format!(
        "{} {:.1}  {}  {}  {}\n",
        format_stars(movie.rating).yellow(),
        movie.rating,
        movie.release_year,
        format_duration(movie.duration),
        movie.genre.magenta()
    ));
    if !movie.summary.is_empty() {
        out.push_str(&format!("\n{}\n", movie.summary));
    }
    if !movie.poster.is_empty() {
        out.push_str(&format!("\n{} {}\n", "Poster:".dimmed(), movie.poster));
    }
    out.push_str(&format!("{} {}", "ID:".dimmed(), movie.id.cyan()));
    out
}
