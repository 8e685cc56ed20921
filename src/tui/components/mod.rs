//! Shared TUI components

pub mod dialogs;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod movie_detail;
pub mod movie_list;
pub mod search_box;
pub mod toast;

pub use dialogs::{
    ConfirmDialog, ConfirmDialogProps, DialogKind, ErrorModal, ErrorModalProps, MODAL_BACKDROP,
};
pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{Footer, FooterProps, Shortcut, shortcuts_for};
pub use header::{Header, HeaderProps};
pub use movie_detail::{MovieDetail, MovieDetailProps};
pub use movie_list::{MovieList, MovieListProps, MovieRow, MovieRowProps};
pub use search_box::{SearchBox, SearchBoxProps};
pub use toast::{Toast, ToastLevel, render_toast};
