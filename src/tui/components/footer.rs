//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use crate::tui::keymap::Mode;
use crate::tui::theme::theme;
use crate::types::Collection;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "C-q", "Tab")
    pub key: String,
    /// Description of the action
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", shortcut.key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", shortcut.action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

const NAVIGATION: [(&str, &str); 2] = [("j/k", "Up/Down"), ("g/G", "Top/Bottom")];

fn entries(pairs: &[(&str, &str)]) -> Vec<Shortcut> {
    pairs.iter().map(|(key, action)| Shortcut::new(*key, *action)).collect()
}

/// Footer contents for the part of the screen that has focus.
///
/// Kept in step with [`map_key`](crate::tui::keymap::map_key).
pub fn shortcuts_for(mode: Mode, collection: Collection) -> Vec<Shortcut> {
    match mode {
        Mode::List => {
            let mut out = entries(&NAVIGATION);
            out.extend(entries(&[("/", "Search"), ("Esc", "Clear"), ("s", "Sort")]));
            match collection {
                Collection::Movies => {
                    out.extend(entries(&[("f", "Favorite"), ("d", "Delete")]))
                }
                Collection::Favorites => out.push(Shortcut::new("d", "Remove")),
            }
            out.push(Shortcut::new("q", "Quit"));
            out
        }
        Mode::Search => entries(&[
            ("Enter", "Search Now"),
            ("Tab", "Exit Search"),
            ("Esc", "Clear & Exit"),
            ("C-q", "Quit"),
        ]),
        Mode::Confirm => entries(&[("y", "Yes"), ("n", "No"), ("Esc", "Cancel")]),
        Mode::Error => entries(&[("Esc", "Close")]),
    }
}
