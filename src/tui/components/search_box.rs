//! Title search input.
//!
//! Each keystroke is handed to the catalog, which debounces it before any
//! request goes out. The right edge shows whether a search is in flight.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::Collection;

pub fn placeholder(collection: Collection) -> &'static str {
    match collection {
        Collection::Movies => "Search movies by title",
        Collection::Favorites => "Search your favorites",
    }
}

#[derive(Default, Props)]
pub struct SearchBoxProps {
    pub value: Option<State<String>>,
    pub collection: Collection,
    pub has_focus: bool,
    pub loading: bool,
}

#[component]
pub fn SearchBox(props: &SearchBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };
    let Some(mut value) = props.value else {
        return element!(View);
    };
    let show_placeholder = !props.has_focus && value.read().is_empty();

    element! {
        View(
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color,
            padding_left: 1,
            padding_right: 1,
            height: 3,
        ) {
            View(margin_right: 1) {
                Text(content: "/", color: theme.search_match, weight: Weight::Bold)
            }
            View(flex_grow: 1.0) {
                #(if show_placeholder {
                    element!(Text(content: placeholder(props.collection), color: theme.text_dimmed))
                        .into_any()
                } else {
                    element!(TextInput(
                        value: value.to_string(),
                        has_focus: props.has_focus,
                        on_change: move |text| value.set(text),
                        color: theme.text,
                    ))
                    .into_any()
                })
            }
            #(props.loading.then(|| element! {
                Text(content: "searching...", color: theme.text_dimmed)
            }))
        }
    }
}
