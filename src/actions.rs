//! Record lifecycle actions: create, delete, favorite add and remove, and
//! feedback submission.
//!
//! Actions never update local state optimistically. Local state only changes
//! after the server confirms, and only in the way the confirmation allows.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::MovieApi;
use crate::catalog::CatalogView;
use crate::enum_display_fromstr;
use crate::error::{MarqueeError, Result};
use crate::session::Session;
use crate::types::{Collection, FavoriteMovie, Movie};
use crate::validation::{FeedbackForm, MovieForm};

/// Screen an action sends the user to when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    AllMovies,
    Favorites,
}

enum_display_fromstr!(
    Route,
    MarqueeError::Other,
    {
        Home => "home" | "/",
        AllMovies => "allmovies" | "/allmovies" | "movies",
        Favorites => "favorites" | "/myfavourite" | "myfavourite" | "favourites",
    }
);

/// Result of a lifecycle action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The server confirmed the change
    Done {
        message: &'static str,
        route: Route,
        id: Option<String>,
    },
    /// The server answered but reported nothing changed
    Unchanged { message: &'static str },
    /// The user declined the confirmation prompt
    Cancelled,
}

impl Outcome {
    /// Where to navigate, if anywhere.
    pub fn route(&self) -> Option<Route> {
        match self {
            Outcome::Done { route, .. } => Some(*route),
            _ => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Done { message, .. } | Outcome::Unchanged { message } => *message,
            Outcome::Cancelled => "Cancelled",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done { .. })
    }
}

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Confirmation given up front, e.g. `--yes` or an accepted dialog.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Prompt on stdin. Refuses when stdin is not a terminal.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        if !atty::is(atty::Stream::Stdin) {
            return Err(MarqueeError::Other(format!(
                "{prompt}: refusing without confirmation, pass --yes to proceed"
            )));
        }

        print!("{prompt}? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(input.trim().eq_ignore_ascii_case("y") || input.trim().eq_ignore_ascii_case("yes"))
    }
}

/// A list that can drop a record after the server confirms a delete.
pub trait LocalList {
    fn remove_local(&mut self, id: &str) -> bool;
}

impl LocalList for Vec<Movie> {
    fn remove_local(&mut self, id: &str) -> bool {
        let before = self.len();
        self.retain(|m| m.id != id);
        self.len() != before
    }
}

impl<A: MovieApi + 'static> LocalList for CatalogView<A> {
    fn remove_local(&mut self, id: &str) -> bool {
        CatalogView::remove_local(self, id)
    }
}

/// A view shared with a UI that keeps rendering while the request runs.
impl<A: MovieApi + 'static> LocalList for Arc<Mutex<CatalogView<A>>> {
    fn remove_local(&mut self, id: &str) -> bool {
        self.lock().remove_local(id)
    }
}

pub const DELETE_MOVIE_PROMPT: &str = "Delete this movie? You won't be able to revert this";
pub const REMOVE_FAVORITE_PROMPT: &str = "Remove this movie from your favorites";

/// Validate the form, then create the record. The form is cleared on success.
pub async fn create_movie<A: MovieApi>(
    api: &A,
    session: &Session,
    form: &mut MovieForm,
) -> Result<Outcome> {
    session.require_signed_in()?;
    let movie = form.to_new_movie()?;

    let inserted = api.create_movie(&movie).await?;
    tracing::info!(
        "created movie '{}' ({})",
        movie.title,
        inserted.inserted_id.as_deref().unwrap_or("no id")
    );

    form.clear();
    Ok(Outcome::Done {
        message: "Movie has been added successfully",
        route: Route::Home,
        id: inserted.inserted_id,
    })
}

/// Delete a catalog record after confirmation.
pub async fn delete_movie<A: MovieApi>(
    api: &A,
    session: &Session,
    id: &str,
    confirm: &impl Confirm,
) -> Result<Outcome> {
    session.require_signed_in()?;
    if !confirm.confirm(DELETE_MOVIE_PROMPT)? {
        return Ok(Outcome::Cancelled);
    }

    let result = api.delete(Collection::Movies, id).await?;
    if !result.deleted() {
        tracing::warn!("delete of movie {id} reported nothing deleted");
        return Ok(Outcome::Unchanged {
            message: "Movie was not deleted",
        });
    }

    tracing::info!("deleted movie {id}");
    Ok(Outcome::Done {
        message: "Movie removed successfully",
        route: Route::AllMovies,
        id: Some(id.to_string()),
    })
}

/// Copy a catalog record into favorites.
pub async fn add_favorite<A: MovieApi>(
    api: &A,
    session: &Session,
    movie: &Movie,
) -> Result<Outcome> {
    session.require_signed_in()?;

    let inserted = api.add_favorite(&FavoriteMovie::from(movie)).await?;
    tracing::info!("added '{}' to favorites", movie.title);

    Ok(Outcome::Done {
        message: "Movie added to favourites",
        route: Route::Home,
        id: inserted.inserted_id,
    })
}

/// Remove a favorite after confirmation, then drop it from `local`.
pub async fn remove_favorite<A: MovieApi>(
    api: &A,
    session: &Session,
    id: &str,
    confirm: &impl Confirm,
    local: &mut impl LocalList,
) -> Result<Outcome> {
    session.require_signed_in()?;
    if !confirm.confirm(REMOVE_FAVORITE_PROMPT)? {
        return Ok(Outcome::Cancelled);
    }

    let result = api.delete(Collection::Favorites, id).await?;
    if !result.deleted() {
        tracing::warn!("delete of favorite {id} reported nothing deleted");
        return Ok(Outcome::Unchanged {
            message: "Movie was not removed from favorites",
        });
    }

    local.remove_local(id);
    tracing::info!("removed favorite {id}");
    Ok(Outcome::Done {
        message: "Movie has been removed from favorites",
        route: Route::Favorites,
        id: Some(id.to_string()),
    })
}

/// Validate and acknowledge a feedback form. Nothing leaves the client.
pub fn submit_feedback(form: &mut FeedbackForm) -> Result<Outcome> {
    form.validate()?;
    tracing::info!(
        "feedback received from {} ({} stars)",
        form.email.trim(),
        form.rating
    );
    form.clear();
    Ok(Outcome::Done {
        message: "Your feedback has been received successfully",
        route: Route::Home,
        id: None,
    })
}
