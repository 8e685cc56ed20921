//! Access to the remote movie catalog.
//!
//! Everything that talks to the backend goes through [`MovieApi`], so the
//! catalog view and the record actions can run against an in-memory fake.

mod http;

pub use http::HttpMovieApi;

use std::future::Future;

use crate::error::Result;
use crate::types::{Collection, DeleteResult, FavoriteMovie, InsertResult, Movie, NewMovie};

/// Common interface for catalog backends
pub trait MovieApi: Send + Sync {
    /// Every record of a collection, in server order
    fn list(&self, collection: Collection) -> impl Future<Output = Result<Vec<Movie>>> + Send;

    /// Records matching a free-text query
    fn search(
        &self,
        collection: Collection,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Movie>>> + Send;

    /// A single record by id
    fn get(&self, collection: Collection, id: &str) -> impl Future<Output = Result<Movie>> + Send;

    /// Add a record to the catalog
    fn create_movie(&self, movie: &NewMovie) -> impl Future<Output = Result<InsertResult>> + Send;

    /// Copy a record into the favorites collection
    fn add_favorite(
        &self,
        favorite: &FavoriteMovie,
    ) -> impl Future<Output = Result<InsertResult>> + Send;

    /// Delete a record by id
    fn delete(
        &self,
        collection: Collection,
        id: &str,
    ) -> impl Future<Output = Result<DeleteResult>> + Send;
}
