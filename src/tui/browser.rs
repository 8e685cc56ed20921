//! Catalog browser (`marquee browse`)
//!
//! Layout:
//! ```text
//! +------------------------------------------+
//! | Header (count, sort, user)               |
//! +------------------------------------------+
//! | SearchBox                                |
//! +--------------------+---------------------+
//! | MovieList          | MovieDetail         |
//! +--------------------+---------------------+
//! | Toast (optional)                         |
//! | Footer                                   |
//! +------------------------------------------+
//! ```
//!
//! Keystrokes in the search box go through the catalog's debouncer; the list
//! re-renders whenever the reconciler publishes a new state.

use std::sync::Arc;

use iocraft::prelude::*;
use parking_lot::Mutex;

use crate::actions::{self, AssumeYes, DELETE_MOVIE_PROMPT, Outcome, REMOVE_FAVORITE_PROMPT};
use crate::api::HttpMovieApi;
use crate::catalog::CatalogView;
use crate::error::Result;
use crate::session::Session;
use crate::tui::components::{
    ConfirmDialog, EmptyState, EmptyStateKind, ErrorModal, Footer, Header, MovieDetail,
    MovieList, SearchBox, Toast, render_toast, shortcuts_for,
};
use crate::tui::keymap::{KeyAction, Mode, map_key};
use crate::tui::navigation::ListCursor;
use crate::tui::search::highlight_titles;
use crate::tui::theme::theme;
use crate::types::{Collection, Movie};

pub type SharedCatalog = Arc<Mutex<CatalogView<HttpMovieApi>>>;

/// Everything the browser needs, built before the screen starts.
#[derive(Clone)]
pub struct BrowseContext {
    pub catalog: SharedCatalog,
    pub api: Arc<HttpMovieApi>,
    pub session: Session,
}

impl BrowseContext {
    fn collection(&self) -> Collection {
        self.catalog.lock().collection()
    }
}

#[derive(Debug, Clone)]
enum PendingAction {
    Favorite(Movie),
    Delete(Movie),
}

async fn run_action(ctx: &BrowseContext, action: PendingAction) -> Result<Outcome> {
    let api = ctx.api.as_ref();
    match action {
        PendingAction::Favorite(movie) => actions::add_favorite(api, &ctx.session, &movie).await,
        PendingAction::Delete(movie) => match ctx.collection() {
            Collection::Movies => {
                let outcome = actions::delete_movie(api, &ctx.session, &movie.id, &AssumeYes).await?;
                if outcome.is_done() {
                    ctx.catalog.lock().remove_local(&movie.id);
                }
                Ok(outcome)
            }
            Collection::Favorites => {
                let mut local = ctx.catalog.clone();
                actions::remove_favorite(api, &ctx.session, &movie.id, &AssumeYes, &mut local)
                    .await
            }
        },
    }
}

fn subtitle(collection: Collection) -> &'static str {
    match collection {
        Collection::Movies => "All Movies",
        Collection::Favorites => "Favorites",
    }
}

#[derive(Default, Props)]
pub struct CatalogBrowserProps {
    pub context: Option<BrowseContext>,
}

#[component]
pub fn CatalogBrowser<'a>(props: &CatalogBrowserProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let Some(ctx) = props.context.clone() else {
        return element! {
            View { Text(content: "No catalog loaded", color: theme.text_dimmed) }
        };
    };
    let collection = ctx.collection();

    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let mut search_query = hooks.use_state(String::new);
    let mut pushed_query = hooks.use_state(String::new);
    let mut cursor = hooks.use_state(ListCursor::default);
    let mut mode = hooks.use_state(Mode::default);
    let mut toast: State<Option<Toast>> = hooks.use_state(|| None);
    let mut error_message: State<Option<String>> = hooks.use_state(|| None);
    let mut pending: State<Option<Movie>> = hooks.use_state(|| None);
    let mut tick = hooks.use_state(|| 0u64);
    let mut should_exit = hooks.use_state(|| false);

    // Re-render on every state the reconciler publishes
    hooks.use_future({
        let catalog = ctx.catalog.clone();
        async move {
            let mut updates = catalog.lock().subscribe();
            while updates.changed().await.is_ok() {
                tick.set(tick.get().wrapping_add(1));
            }
        }
    });

    let action_handler: Handler<PendingAction> = hooks.use_async_handler({
        let ctx = ctx.clone();
        move |action: PendingAction| {
            let ctx = ctx.clone();
            let mut toast = toast;
            let mut error_message = error_message;
            let mut mode = mode;
            async move {
                match run_action(&ctx, action).await {
                    Ok(outcome) => toast.set(Some(Toast::from(&outcome))),
                    Err(e) => {
                        tracing::warn!("action failed: {e}");
                        toast.set(Some(Toast::error("Action failed")));
                        error_message.set(Some(e.to_string()));
                        mode.set(Mode::Error);
                    }
                }
            }
        }
    });

    // Hand each edit of the search box to the debouncer
    let typed = search_query.to_string();
    if typed != *pushed_query.read() {
        pushed_query.set(typed.clone());
        ctx.catalog.lock().set_query(typed);
    }

    let (state, visible, count_label, sort_label) = {
        let catalog = ctx.catalog.lock();
        (
            catalog.state(),
            catalog.visible(),
            catalog.count_label(),
            catalog.sort_key().label(),
        )
    };
    let rows = highlight_titles(&visible, &state.query);

    let toast_rows = if toast.read().is_some() { 3 } else { 0 };
    // header (1) + search box (3) + footer (1) + list borders (2)
    let list_height = (height as usize).saturating_sub(7 + toast_rows);

    let mut current = cursor.get();
    current.clamp(rows.len());
    if current != cursor.get() {
        cursor.set(current);
    }
    let selected_movie = rows.get(current.selected).map(|r| r.movie.clone());

    hooks.use_terminal_events({
        let ctx = ctx.clone();
        let selected_movie = selected_movie.clone();
        let row_count = rows.len();
        let action_handler = action_handler.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let Some(action) = map_key(mode.get(), collection, code, modifiers) else {
                    return;
                };
                if mode.get() == Mode::List {
                    toast.set(None);
                }

                let mut next = cursor.get();
                match action {
                    KeyAction::Quit => should_exit.set(true),
                    KeyAction::FocusSearch => mode.set(Mode::Search),
                    KeyAction::LeaveSearch => mode.set(Mode::List),
                    KeyAction::ClearSearch => {
                        search_query.set(String::new());
                        pushed_query.set(String::new());
                        ctx.catalog.lock().submit_query("");
                        mode.set(Mode::List);
                    }
                    KeyAction::SubmitSearch => {
                        let query = search_query.to_string();
                        pushed_query.set(query.clone());
                        ctx.catalog.lock().submit_query(query);
                        mode.set(Mode::List);
                    }
                    KeyAction::Up => next.up(),
                    KeyAction::Down => next.down(row_count, list_height),
                    KeyAction::Top => next.top(),
                    KeyAction::Bottom => next.bottom(row_count, list_height),
                    KeyAction::CycleSort => {
                        ctx.catalog.lock().cycle_sort_key();
                        next.top();
                    }
                    KeyAction::Favorite => {
                        if let Some(movie) = selected_movie.clone() {
                            action_handler.clone()(PendingAction::Favorite(movie));
                        }
                    }
                    KeyAction::RequestDelete => {
                        if let Some(movie) = selected_movie.clone() {
                            pending.set(Some(movie));
                            mode.set(Mode::Confirm);
                        }
                    }
                    KeyAction::ConfirmYes => {
                        let target = pending.read().as_ref().cloned();
                        pending.set(None);
                        mode.set(Mode::List);
                        if let Some(movie) = target {
                            action_handler.clone()(PendingAction::Delete(movie));
                        }
                    }
                    KeyAction::ConfirmNo => {
                        pending.set(None);
                        mode.set(Mode::List);
                        toast.set(Some(Toast::from(&Outcome::Cancelled)));
                    }
                    KeyAction::CloseError => {
                        error_message.set(None);
                        mode.set(Mode::List);
                    }
                }
                if next != cursor.get() {
                    cursor.set(next);
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let shortcuts = shortcuts_for(mode.get(), collection);

    let empty_kind = (rows.is_empty() && !state.loading).then(|| {
        if state.query.is_empty() {
            EmptyStateKind::NoMovies
        } else {
            EmptyStateKind::NoSearchResults(state.query.clone())
        }
    });

    let confirm_prompt = match collection {
        Collection::Movies => DELETE_MOVIE_PROMPT,
        Collection::Favorites => REMOVE_FAVORITE_PROMPT,
    };
    let pending_title = pending.read().as_ref().map(|m| m.title.clone());
    let error_text = error_message.read().as_ref().cloned();
    let toast_view = render_toast(&toast.read());

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                subtitle: Some(subtitle(collection).to_string()),
                count_label: Some(count_label),
                sort_label: Some(sort_label.to_string()),
                user: ctx.session.display_name().map(str::to_string),
            )

            View(width: 100pct, padding_left: 1, padding_right: 1) {
                SearchBox(
                    value: Some(search_query),
                    collection,
                    has_focus: mode.get() == Mode::Search,
                    loading: state.loading,
                )
            }

            #(state.error.clone().map(|message| element! {
                View(height: 1, padding_left: 2) {
                    Text(content: message, color: Color::Red)
                }
            }))

            #(match empty_kind {
                Some(kind) => element! {
                    View(flex_grow: 1.0, width: 100pct) {
                        EmptyState(kind, collection)
                    }
                },
                None => element! {
                    View(flex_grow: 1.0, flex_direction: FlexDirection::Row, width: 100pct) {
                        View(width: 45pct, height: 100pct) {
                            MovieList(
                                movies: rows,
                                selected_index: current.selected,
                                scroll_offset: current.offset,
                                has_focus: mode.get() == Mode::List,
                                visible_height: list_height,
                            )
                        }
                        View(flex_grow: 1.0, height: 100pct) {
                            MovieDetail(movie: selected_movie)
                        }
                    }
                },
            })

            #(toast_view)

            Footer(shortcuts)

            #((mode.get() == Mode::Confirm).then(|| element! {
                ConfirmDialog(
                    message: confirm_prompt.to_string(),
                    subject: pending_title,
                )
            }))

            #(error_text.filter(|_| mode.get() == Mode::Error).map(|message| element! {
                ErrorModal(message)
            }))
        }
    }
}
