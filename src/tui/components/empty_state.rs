//! Empty state component
//!
//! Shown in place of the list when there is nothing to display.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::Collection;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// The collection has no records
    #[default]
    NoMovies,
    /// The server found nothing for the query
    NoSearchResults(String),
}

#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
    pub collection: Collection,
}

/// Title, message and hint for an empty state
pub fn empty_state_text(kind: &EmptyStateKind, collection: Collection) -> (String, String, String) {
    match (kind, collection) {
        (EmptyStateKind::NoMovies, Collection::Movies) => (
            "No Movies".to_string(),
            "The catalog is empty.".to_string(),
            "Run 'marquee add' to add the first one.".to_string(),
        ),
        (EmptyStateKind::NoMovies, Collection::Favorites) => (
            "No Favorites".to_string(),
            "You haven't saved any favorites yet.".to_string(),
            "Press 'f' on a movie in 'marquee browse' to add one.".to_string(),
        ),
        (EmptyStateKind::NoSearchResults(query), _) => (
            "No Results".to_string(),
            format!("No movies match \"{query}\"."),
            "Try a different search term, or press Esc to clear.".to_string(),
        ),
    }
}

#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let (title, message, hint) = empty_state_text(&props.kind, props.collection);

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding: 2,
        ) {
            Text(content: title, color: theme.text, weight: Weight::Bold)
            View(margin_top: 1, max_width: 60) {
                Text(content: message, color: theme.text_dimmed)
            }
            View(margin_top: 2) {
                Text(content: hint, color: theme.text_dimmed)
            }
        }
    }
}
