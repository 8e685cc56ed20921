//! Interactive terminal browser for the catalog and favorites

pub mod browser;
pub mod components;
pub mod keymap;
pub mod navigation;
pub mod search;
pub mod theme;

pub use browser::{BrowseContext, CatalogBrowser, CatalogBrowserProps, SharedCatalog};
pub use search::{HighlightedMovie, highlight_titles};
pub use theme::Theme;
