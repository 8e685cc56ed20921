//! Toast notifications for action outcomes

use iocraft::prelude::*;

use crate::actions::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    pub fn color(&self) -> Color {
        match self.level {
            ToastLevel::Info => Color::Cyan,
            ToastLevel::Warning => Color::Yellow,
            ToastLevel::Error => Color::Red,
            ToastLevel::Success => Color::Green,
        }
    }
}

impl From<&Outcome> for Toast {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Done { message, .. } => Toast::success(*message),
            Outcome::Unchanged { message } => Toast::warning(*message),
            Outcome::Cancelled => Toast::info("Cancelled"),
        }
    }
}

/// Render a toast bar, or nothing
pub fn render_toast(toast: &Option<Toast>) -> Option<AnyElement<'static>> {
    toast.as_ref().map(|t| {
        element! {
            View(
                width: 100pct,
                height: 3,
                flex_shrink: 0.0,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                background_color: Color::Black,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: t.color(),
            ) {
                Text(content: t.message.clone(), color: t.color())
            }
        }
        .into_any()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Route;

    #[test]
    fn test_toast_from_outcome() {
        let done = Outcome::Done {
            message: "Movie added to favourites",
            route: Route::Home,
            id: None,
        };
        let toast = Toast::from(&done);
        assert_eq!(toast.level, ToastLevel::Success);
        assert_eq!(toast.message, "Movie added to favourites");

        let unchanged = Outcome::Unchanged {
            message: "Movie was not deleted",
        };
        assert_eq!(Toast::from(&unchanged).level, ToastLevel::Warning);
        assert_eq!(Toast::from(&Outcome::Cancelled).level, ToastLevel::Info);
    }

    #[test]
    fn test_toast_colors() {
        assert!(matches!(Toast::error("x").color(), Color::Red));
        assert!(matches!(Toast::success("x").color(), Color::Green));
    }
}
