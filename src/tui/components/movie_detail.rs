//! Detail pane for the selected movie

use iocraft::prelude::*;

use crate::display::{format_duration, format_stars};
use crate::tui::theme::theme;
use crate::types::Movie;

#[derive(Default, Props)]
pub struct MovieDetailProps {
    pub movie: Option<Movie>,
}

#[component]
pub fn MovieDetail(props: &MovieDetailProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(movie) = props.movie.as_ref() else {
        return element! {
            View(
                width: 100pct,
                height: 100pct,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(content: "No movie selected", color: theme.text_dimmed)
            }
        };
    };

    let facts = format!(
        "{}  {}  {}",
        movie.release_year,
        format_duration(movie.duration),
        movie.genre
    );

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: movie.title.clone(), color: theme.text, weight: Weight::Bold)
            View(flex_direction: FlexDirection::Row, column_gap: 1) {
                Text(content: format_stars(movie.rating), color: theme.rating_color(movie.rating))
                Text(content: format!("{:.1}", movie.rating), color: theme.text_dimmed)
            }
            Text(content: facts, color: theme.genre)
            View(margin_top: 1, flex_grow: 1.0, overflow: Overflow::Hidden) {
                Text(content: movie.summary.clone(), color: theme.text, wrap: TextWrap::Wrap)
            }
            #((!movie.poster.is_empty()).then(|| element! {
                Text(content: format!("Poster: {}", movie.poster), color: theme.text_dimmed)
            }))
            Text(content: format!("ID: {}", movie.id), color: theme.id_color)
        }
    }
}
