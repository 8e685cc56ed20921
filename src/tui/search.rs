//! Title highlighting for search results
//!
//! The server decides which movies match; this only marks the characters in
//! each title that line up with the query so the list can color them.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::types::Movie;

/// A movie row with the character indices of its title to highlight
#[derive(Debug, Clone, Default)]
pub struct HighlightedMovie {
    pub movie: Movie,
    pub title_indices: Vec<usize>,
}

/// Compute title highlights for a list the server already filtered.
pub fn highlight_titles(movies: &[Movie], query: &str) -> Vec<HighlightedMovie> {
    let query = query.trim();
    if query.is_empty() {
        return movies
            .iter()
            .map(|movie| HighlightedMovie {
                movie: movie.clone(),
                title_indices: vec![],
            })
            .collect();
    }

    let matcher = SkimMatcherV2::default().smart_case();

    movies
        .iter()
        .map(|movie| HighlightedMovie {
            movie: movie.clone(),
            title_indices: matcher
                .fuzzy_indices(&movie.title, query)
                .map(|(_, indices)| indices)
                .unwrap_or_default(),
        })
        .collect()
}

/// Split `text` into runs of (segment, is_match) for rendering.
pub fn split_highlights(text: &str, indices: &[usize]) -> Vec<(String, bool)> {
    let mut runs: Vec<(String, bool)> = Vec::new();
    for (i, ch) in text.chars().enumerate() {
        let matched = indices.contains(&i);
        match runs.last_mut() {
            Some((run, flag)) if *flag == matched => run.push(ch),
            _ => runs.push((ch.to_string(), matched)),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            id: title.to_lowercase(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_query_has_no_highlights() {
        let rows = highlight_titles(&[movie("Batman")], "  ");
        assert_eq!(rows.len(), 1);
        assert!(rows[0].title_indices.is_empty());
    }

    #[test]
    fn test_highlight_marks_matching_characters() {
        let rows = highlight_titles(&[movie("Batman Begins")], "bat");
        assert_eq!(rows[0].title_indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_non_matching_title_is_kept() {
        let rows = highlight_titles(&[movie("Heat")], "zzz");
        assert_eq!(rows.len(), 1);
        assert!(rows[0].title_indices.is_empty());
    }

    #[test]
    fn test_split_highlights_groups_runs() {
        let runs = split_highlights("Batman", &[0, 1, 2]);
        assert_eq!(
            runs,
            vec![("Bat".to_string(), true), ("man".to_string(), false)]
        );
        assert_eq!(split_highlights("", &[]), vec![]);
    }
}
