pub mod macros;

pub mod actions;
pub mod api;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod session;
pub mod tui;
pub mod types;
pub mod validation;

pub use actions::{Outcome, Route};
pub use api::{HttpMovieApi, MovieApi};
pub use catalog::{CatalogView, ListState, SortKey};
pub use config::{Config, UserProfile};
pub use error::{MarqueeError, Result};
pub use session::Session;
pub use types::{Collection, Genre, Movie};
