//! The search-and-sort view shared by the movie and favorites screens.
//!
//! A [`CatalogView`] owns one debouncer and one reconciler, and it keeps a
//! memoized sorted projection of the current list. It is created with the
//! seed list already loaded. Dropping it cancels pending input and in-flight
//! requests.

pub mod debounce;
pub mod reconciler;
pub mod sort;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use reconciler::{ListState, Reconciler, SEARCH_FAILED};
pub use sort::SortKey;

use crate::api::MovieApi;
use crate::types::{Collection, Movie};

struct Projection {
    revision: u64,
    key: SortKey,
    movies: Arc<Vec<Movie>>,
}

pub struct CatalogView<A> {
    reconciler: Arc<Reconciler<A>>,
    debouncer: Debouncer,
    pump: JoinHandle<()>,
    raw_query: String,
    sort_key: SortKey,
    projection: Mutex<Option<Projection>>,
}

impl<A> CatalogView<A>
where
    A: MovieApi + 'static,
{
    /// Must be called from within a tokio runtime.
    pub fn new(api: Arc<A>, collection: Collection, seed: Vec<Movie>) -> Self {
        Self::with_debounce(api, collection, seed, SEARCH_DEBOUNCE)
    }

    pub fn with_debounce(
        api: Arc<A>,
        collection: Collection,
        seed: Vec<Movie>,
        delay: Duration,
    ) -> Self {
        let reconciler = Arc::new(Reconciler::new(api, collection, Arc::new(seed)));
        let (debouncer, mut settled) = Debouncer::new(delay);

        let target = reconciler.clone();
        let pump = tokio::spawn(async move {
            while let Some(query) = settled.recv().await {
                target.settle(&query);
            }
        });

        Self {
            reconciler,
            debouncer,
            pump,
            raw_query: String::new(),
            sort_key: SortKey::default(),
            projection: Mutex::new(None),
        }
    }

    pub fn collection(&self) -> Collection {
        self.reconciler.collection()
    }

    /// Text currently in the search box
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// Feed the full search box contents after each edit.
    pub fn set_query(&mut self, raw: impl Into<String>) {
        self.raw_query = raw.into();
        self.debouncer.push(self.raw_query.clone());
    }

    /// Apply a query immediately, skipping the debounce window.
    ///
    /// Any edit still waiting out its window is discarded.
    pub fn submit_query(&mut self, raw: impl Into<String>) {
        self.raw_query = raw.into();
        self.debouncer.cancel();
        self.reconciler.settle(&self.raw_query);
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Advance to the next sort key offered for this collection.
    pub fn cycle_sort_key(&mut self) -> SortKey {
        self.sort_key = self.sort_key.next_for(self.collection());
        self.sort_key
    }

    pub fn state(&self) -> ListState {
        self.reconciler.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.reconciler.subscribe()
    }

    /// Current list in the selected order.
    ///
    /// Recomputed only when the list revision or the sort key changes.
    pub fn visible(&self) -> Arc<Vec<Movie>> {
        let state = self.reconciler.state();
        let mut memo = self.projection.lock();
        if let Some(p) = memo.as_ref()
            && p.revision == state.revision
            && p.key == self.sort_key
        {
            return p.movies.clone();
        }

        let movies = Arc::new(sort::sorted(&state.movies, self.sort_key));
        *memo = Some(Projection {
            revision: state.revision,
            key: self.sort_key,
            movies: movies.clone(),
        });
        movies
    }

    /// "Found N movies" / "N favorite movies", or "Searching..." while loading.
    pub fn count_label(&self) -> String {
        let state = self.reconciler.state();
        count_label(self.collection(), state.loading, state.movies.len())
    }

    /// Remove a record from the local list after a confirmed delete.
    pub fn remove_local(&mut self, id: &str) -> bool {
        self.reconciler.remove_local(id)
    }
}

impl<A> Drop for CatalogView<A> {
    fn drop(&mut self) {
        self.pump.abort();
        self.reconciler.cancel();
    }
}

pub fn count_label(collection: Collection, loading: bool, count: usize) -> String {
    if loading {
        return "Searching...".to_string();
    }
    let noun = if count == 1 {
        collection.noun().to_string()
    } else {
        format!("{}s", collection.noun())
    };
    match collection {
        Collection::Movies => format!("Found {count} {noun}"),
        Collection::Favorites => format!("{count} {noun}"),
    }
}
