//! Keeps a catalog list in step with the settled search query.
//!
//! A blank query restores the seed list without touching the network. Any
//! other query triggers one search request. Each settled query takes a
//! generation number and only the newest generation may write the list, so
//! a slow reply to an old query can never replace a newer result.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::MovieApi;
use crate::types::{Collection, Movie};

/// Message shown when a search request fails for any reason.
pub const SEARCH_FAILED: &str = "Search failed. Please try again.";

/// Snapshot of a catalog screen's list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub movies: Arc<Vec<Movie>>,
    /// The settled query the list reflects (or is loading for)
    pub query: String,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped every time `movies` is replaced
    pub revision: u64,
}

impl ListState {
    fn seeded(seed: Arc<Vec<Movie>>) -> Self {
        Self {
            movies: seed,
            query: String::new(),
            loading: false,
            error: None,
            revision: 0,
        }
    }
}

pub struct Reconciler<A> {
    api: Arc<A>,
    collection: Collection,
    seed: Mutex<Arc<Vec<Movie>>>,
    state: Arc<watch::Sender<ListState>>,
    generation: Arc<AtomicU64>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl<A> Reconciler<A>
where
    A: MovieApi + 'static,
{
    pub fn new(api: Arc<A>, collection: Collection, seed: Arc<Vec<Movie>>) -> Self {
        let (state, _) = watch::channel(ListState::seeded(seed.clone()));
        Self {
            api,
            collection,
            seed: Mutex::new(seed),
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: Mutex::new(None),
        }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn seed(&self) -> Arc<Vec<Movie>> {
        self.seed.lock().clone()
    }

    /// Current state snapshot
    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state.subscribe()
    }

    /// Apply a settled query. Must be called from within a tokio runtime.
    pub fn settle(&self, query: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.cancel();

        // Whitespace only decides blankness; the text is searched as typed
        if query.trim().is_empty() {
            let seed = self.seed();
            self.state.send_modify(|s| {
                s.movies = seed;
                s.query.clear();
                s.loading = false;
                s.error = None;
                s.revision += 1;
            });
            return;
        }

        let query = query.to_string();
        self.state.send_modify(|s| {
            s.query = query.clone();
            s.loading = true;
            s.error = None;
        });

        let api = self.api.clone();
        let state = self.state.clone();
        let latest = self.generation.clone();
        let collection = self.collection;

        tracing::debug!("searching {collection} for {query:?} (generation {generation})");
        let handle = tokio::spawn(async move {
            let result = api.search(collection, &query).await;
            state.send_if_modified(|s| {
                if latest.load(Ordering::SeqCst) != generation {
                    tracing::debug!("discarding stale results for {query:?}");
                    return false;
                }
                match result {
                    Ok(movies) => {
                        s.movies = Arc::new(movies);
                        s.revision += 1;
                    }
                    Err(e) => {
                        tracing::warn!("search for {query:?} failed: {e}");
                        s.error = Some(SEARCH_FAILED.to_string());
                    }
                }
                s.loading = false;
                true
            });
        });
        *self.in_flight.lock() = Some(handle);
    }

    /// Drop a record from the displayed list and from the seed.
    ///
    /// Used after a confirmed delete; returns whether the list held it.
    pub fn remove_local(&self, id: &str) -> bool {
        {
            let mut seed = self.seed.lock();
            if seed.iter().any(|m| m.id == id) {
                *seed = Arc::new(seed.iter().filter(|m| m.id != id).cloned().collect());
            }
        }

        self.state.send_if_modified(|s| {
            if !s.movies.iter().any(|m| m.id == id) {
                return false;
            }
            s.movies = Arc::new(s.movies.iter().filter(|m| m.id != id).cloned().collect());
            s.revision += 1;
            true
        })
    }
}

impl<A> Reconciler<A> {
    /// Abort the in-flight search, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.in_flight.lock().take() {
            handle.abort();
        }
    }
}

impl<A> Drop for Reconciler<A> {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::api::fake::{FakeApi, SearchReply};

    fn movie(id: &str, title: &str) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn seed() -> Arc<Vec<Movie>> {
        Arc::new(vec![
            movie("1", "Batman Begins"),
            movie("2", "Heat"),
            movie("3", "The Batman"),
            movie("4", "Alien"),
            movie("5", "Arrival"),
        ])
    }

    async fn settled(rx: &mut watch::Receiver<ListState>) -> ListState {
        rx.wait_for(|s| !s.loading).await.unwrap().clone()
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_state_is_seed() {
        let api = Arc::new(FakeApi::default());
        let reconciler = Reconciler::new(api.clone(), Collection::Movies, seed());
        let state = reconciler.state();
        assert_eq!(*state.movies, *seed());
        assert!(!state.loading);
        assert!(api.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_success_replaces_list() {
        let api = Arc::new(FakeApi::default());
        let hits = vec![movie("1", "Batman Begins"), movie("3", "The Batman")];
        api.push_search(SearchReply::ok(hits.clone()));

        let reconciler = Reconciler::new(api.clone(), Collection::Movies, seed());
        let mut rx = reconciler.subscribe();
        reconciler.settle("bat");
        assert!(reconciler.state().loading);

        let state = settled(&mut rx).await;
        assert_eq!(*state.movies, hits);
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.revision, 1);
        assert_eq!(api.calls(), vec!["GET /movie?search=bat"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_query_restores_seed_without_request() {
        let api = Arc::new(FakeApi::default());
        api.push_search(SearchReply::ok(vec![movie("2", "Heat")]));

        let reconciler = Reconciler::new(api.clone(), Collection::Movies, seed());
        let mut rx = reconciler.subscribe();
        reconciler.settle("heat");
        settled(&mut rx).await;

        reconciler.settle("   ");
        let state = reconciler.state();
        assert_eq!(*state.movies, *seed());
        assert!(!state.loading);
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_keeps_list_and_sets_error() {
        let api = Arc::new(FakeApi::default());
        api.push_search(SearchReply::fail(500));

        let reconciler = Reconciler::new(api.clone(), Collection::Favorites, seed());
        let mut rx = reconciler.subscribe();
        reconciler.settle("bat");

        let state = settled(&mut rx).await;
        assert_eq!(*state.movies, *seed());
        assert_eq!(state.error.as_deref(), Some(SEARCH_FAILED));
        assert!(!state.loading);
        assert_eq!(state.revision, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unreachable_backend_keeps_list_and_sets_error() {
        let api = Arc::new(FakeApi::default());
        api.push_search(SearchReply::ok(vec![movie("4", "Alien")]));
        api.push_search(SearchReply::unreachable());

        let reconciler = Reconciler::new(api.clone(), Collection::Movies, seed());
        let mut rx = reconciler.subscribe();
        reconciler.settle("alien");
        let before = settled(&mut rx).await;

        reconciler.settle("heat");
        let state = settled(&mut rx).await;
        assert_eq!(*state.movies, *before.movies);
        assert_eq!(state.error.as_deref(), Some(SEARCH_FAILED));
        assert!(!state.loading);
        assert_eq!(state.revision, before.revision);
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_is_sent_untrimmed() {
        let api = Arc::new(FakeApi::default());
        let reconciler = Reconciler::new(api.clone(), Collection::Movies, seed());
        let mut rx = reconciler.subscribe();

        reconciler.settle("the batman ");
        let state = settled(&mut rx).await;
        assert_eq!(state.query, "the batman ");
        assert_eq!(api.calls(), vec!["GET /movie?search=the batman "]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_query_clears_previous_error() {
        let api = Arc::new(FakeApi::default());
        api.push_search(SearchReply::fail(503));
        api.push_search(SearchReply::ok(vec![movie("4", "Alien")]));

        let reconciler = Reconciler::new(api.clone(), Collection::Movies, seed());
        let mut rx = reconciler.subscribe();
        reconciler.settle("x");
        assert!(settled(&mut rx).await.error.is_some());

        reconciler.settle("alien");
        assert!(reconciler.state().error.is_none());
        let state = settled(&mut rx).await;
        assert!(state.error.is_none());
        assert_eq!(state.movies.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_older_reply_never_overwrites_newer() {
        let api = Arc::new(FakeApi::default());
        api.push_search(SearchReply::ok(vec![movie("2", "Heat")]).after(Duration::from_secs(3)));
        api.push_search(
            SearchReply::ok(vec![movie("4", "Alien")]).after(Duration::from_millis(100)),
        );

        let reconciler = Reconciler::new(api.clone(), Collection::Movies, seed());
        let mut rx = reconciler.subscribe();
        reconciler.settle("heat");
        tokio::task::yield_now().await;
        reconciler.settle("alien");

        let state = settled(&mut rx).await;
        assert_eq!(state.query, "alien");
        assert_eq!(ids(&state.movies), vec!["4"]);

        tokio::time::sleep(Duration::from_secs(5)).await;
        let state = reconciler.state();
        assert_eq!(ids(&state.movies), vec!["4"]);
        assert_eq!(state.revision, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_after_pending_search_wins() {
        let api = Arc::new(FakeApi::default());
        api.push_search(SearchReply::ok(vec![movie("2", "Heat")]).after(Duration::from_secs(1)));

        let reconciler = Reconciler::new(api.clone(), Collection::Movies, seed());
        reconciler.settle("heat");
        tokio::task::yield_now().await;
        reconciler.settle("");

        tokio::time::sleep(Duration::from_secs(2)).await;
        let state = reconciler.state();
        assert_eq!(*state.movies, *seed());
        assert!(!state.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remove_local_survives_seed_restore() {
        let api = Arc::new(FakeApi::default());
        let reconciler = Reconciler::new(api, Collection::Favorites, seed());

        assert!(reconciler.remove_local("2"));
        assert_eq!(reconciler.state().movies.len(), 4);
        assert_eq!(reconciler.state().revision, 1);

        reconciler.settle("");
        let state = reconciler.state();
        assert_eq!(state.movies.len(), 4);
        assert!(state.movies.iter().all(|m| m.id != "2"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_in_flight_search() {
        let api = Arc::new(FakeApi::default());
        api.push_search(SearchReply::ok(vec![movie("2", "Heat")]).after(Duration::from_secs(1)));

        let reconciler = Reconciler::new(api.clone(), Collection::Movies, seed());
        let rx = reconciler.subscribe();
        reconciler.settle("heat");
        tokio::task::yield_now().await;
        drop(reconciler);

        tokio::time::sleep(Duration::from_secs(2)).await;
        // Sender gone, last value is still the loading snapshot
        assert!(rx.has_changed().is_err());
        assert!(rx.borrow().loading);
    }

    fn ids(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.id.as_str()).collect()
    }
}
