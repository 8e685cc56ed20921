//! App header bar component

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct HeaderProps {
    /// Screen name shown after the app title
    pub subtitle: Option<String>,
    /// e.g. "Found 3 movies"
    pub count_label: Option<String>,
    /// Active sort key label
    pub sort_label: Option<String>,
    /// Signed-in user, if any
    pub user: Option<String>,
}

#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let title = match &props.subtitle {
        Some(sub) => format!("Marquee - {sub}"),
        None => "Marquee".to_string(),
    };
    let user = props
        .user
        .clone()
        .unwrap_or_else(|| "not signed in".to_string());

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(content: title, color: theme.text, weight: Weight::Bold)
            View(flex_direction: FlexDirection::Row, column_gap: 2) {
                #(props.sort_label.clone().map(|label| element! {
                    Text(content: format!("sort: {label}"), color: theme.text)
                }))
                #(props.count_label.clone().map(|label| element! {
                    Text(content: label, color: theme.text)
                }))
                Text(content: user, color: theme.text)
            }
        }
    }
}
