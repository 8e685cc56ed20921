//! Modal dialogs drawn over the browser: delete confirmation and action errors

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Backdrop painted behind the confirmation dialog
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogKind {
    #[default]
    Confirm,
    Error,
}

impl DialogKind {
    pub fn title(self) -> &'static str {
        match self {
            DialogKind::Confirm => "Are you sure?",
            DialogKind::Error => "Error",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            DialogKind::Confirm => "[y]es / [n]o",
            DialogKind::Error => "Press Esc to close",
        }
    }

    pub fn border_color(self) -> Color {
        match self {
            DialogKind::Confirm => Color::Yellow,
            DialogKind::Error => Color::Red,
        }
    }

    fn width(self) -> Size {
        match self {
            DialogKind::Confirm => Size::Length(60),
            DialogKind::Error => Size::Percent(70.0),
        }
    }

    fn backdrop(self) -> Option<Color> {
        (self == DialogKind::Confirm).then_some(MODAL_BACKDROP)
    }
}

#[derive(Default, Props)]
struct DialogFrameProps<'a> {
    kind: DialogKind,
    children: Vec<AnyElement<'a>>,
}

/// Centered double-bordered box with a title row and a key hint
#[component]
fn DialogFrame<'a>(props: &mut DialogFrameProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let kind = props.kind;

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: kind.backdrop(),
        ) {
            View(
                width: kind.width(),
                background_color: theme.background,
                border_style: BorderStyle::Double,
                border_color: kind.border_color(),
                padding: 1,
                flex_direction: FlexDirection::Column,
            ) {
                View(
                    width: 100pct,
                    padding_bottom: 1,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: kind.title(), color: kind.border_color(), weight: Weight::Bold)
                }
                View(width: 100pct, flex_direction: FlexDirection::Column, overflow: Overflow::Hidden) {
                    #(std::mem::take(&mut props.children))
                }
                View(
                    width: 100pct,
                    padding_top: 1,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: kind.hint(), color: theme.text_dimmed)
                }
            }
        }
    }
}

#[derive(Default, Props)]
pub struct ConfirmDialogProps {
    pub message: String,
    /// Title of the movie the action applies to
    pub subject: Option<String>,
}

/// Yes/no prompt shown before a delete
#[component]
pub fn ConfirmDialog(props: &ConfirmDialogProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        DialogFrame(kind: DialogKind::Confirm) {
            Text(content: props.message.clone(), color: theme.text)
            #(props.subject.clone().map(|subject| element! {
                View(margin_top: 1) {
                    Text(content: subject, color: theme.search_match, weight: Weight::Bold)
                }
            }))
        }
    }
}

#[derive(Default, Props)]
pub struct ErrorModalProps {
    pub message: String,
}

/// Full text of a failed action
#[component]
pub fn ErrorModal(props: &ErrorModalProps) -> impl Into<AnyElement<'static>> {
    element! {
        DialogFrame(kind: DialogKind::Error) {
            Text(content: props.message.clone(), color: Color::Red)
        }
    }
}
