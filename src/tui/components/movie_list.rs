//! Scrollable movie list component
//!
//! Displays movies with selection highlighting, search match highlighting,
//! and "more above/below" indicators.

use iocraft::prelude::*;

use crate::display::format_stars;
use crate::tui::search::{HighlightedMovie, split_highlights};
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct MovieListProps {
    pub movies: Vec<HighlightedMovie>,
    pub selected_index: usize,
    /// First visible row
    pub scroll_offset: usize,
    pub has_focus: bool,
    /// Rows that fit inside the border; the parent knows the terminal height.
    pub visible_height: usize,
}

/// Rows to render between `start` and the returned end, leaving room for
/// the scroll indicators.
pub fn visible_window(start: usize, total: usize, height: usize) -> (usize, bool, bool) {
    let has_more_above = start > 0;
    let rows = height.saturating_sub(has_more_above as usize);
    let has_more_below = start + rows < total;
    let rows = rows.saturating_sub(has_more_below as usize);
    let end = (start + rows).min(total);
    (end, has_more_above, end < total)
}

#[component]
pub fn MovieList(props: &MovieListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let total = props.movies.len();
    let start = props.scroll_offset.min(total);
    let (end, has_more_above, has_more_below) = visible_window(start, total, props.visible_height);

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
        ) {
            #(has_more_above.then(|| element! {
                View(height: 1, padding_left: 1) {
                    Text(content: format!("  {} more above", start), color: theme.text_dimmed)
                }
            }))

            #(props.movies[start..end].iter().enumerate().map(|(i, row)| {
                let is_selected = start + i == props.selected_index;
                element! {
                    MovieRow(
                        row: row.clone(),
                        is_selected,
                    )
                }
            }))

            #(has_more_below.then(|| element! {
                View(height: 1, padding_left: 1) {
                    Text(content: format!("  {} more below", total - end), color: theme.text_dimmed)
                }
            }))
        }
    }
}

#[derive(Default, Props)]
pub struct MovieRowProps {
    pub row: HighlightedMovie,
    pub is_selected: bool,
}

#[component]
pub fn MovieRow(props: &MovieRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let movie = &props.row.movie;

    let bg_color = props.is_selected.then_some(theme.highlight);
    let text_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };
    let indicator = if props.is_selected { ">" } else { " " };
    let year = if movie.release_year > 0 {
        movie.release_year.to_string()
    } else {
        String::new()
    };

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            padding_left: 1,
            padding_right: 1,
            background_color: bg_color,
        ) {
            View(width: 2, flex_shrink: 0.0) {
                Text(content: indicator, color: text_color)
            }
            View(width: 6, flex_shrink: 0.0) {
                Text(
                    content: format_stars(movie.rating),
                    color: if props.is_selected { text_color } else { theme.rating_color(movie.rating) },
                )
            }
            View(width: 5, flex_shrink: 0.0, padding_left: 1) {
                Text(content: year, color: if props.is_selected { text_color } else { theme.year })
            }
            View(flex_grow: 1.0, overflow: Overflow::Hidden, padding_left: 1) {
                #(split_highlights(&movie.title, &props.row.title_indices).into_iter().map(|(run, matched)| {
                    element! {
                        Text(
                            content: run,
                            color: if matched { theme.search_match } else { text_color },
                            weight: if matched { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }))
            }
        }
    }
}
