use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::MovieApi;
use crate::config::Config;
use crate::error::{MarqueeError, Result};
use crate::types::{Collection, DeleteResult, FavoriteMovie, InsertResult, Movie, NewMovie};

/// Longest error body carried into an error message
const MAX_ERROR_BODY: usize = 200;

/// REST client for the catalog backend.
#[derive(Debug, Clone)]
pub struct HttpMovieApi {
    client: Client,
    base_url: Url,
}

impl HttpMovieApi {
    /// Create a client from configuration
    ///
    /// Configures HTTP client with 30s connect timeout and 60s total timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url()?)
    }

    pub fn new(base_url: Url) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(MarqueeError::Config(format!(
                "'{base_url}' cannot be used as an API base URL"
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base>/<segments...>`, keeping any path prefix already on the base.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| {
                MarqueeError::Config(format!(
                    "'{}' cannot be used as an API base URL",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("{method} {url}");
        self.client.request(method, url)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = check_status(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_body<B, T>(&self, url: Url, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        self.send_json(self.request(Method::POST, url).json(body))
            .await
    }
}

/// Map non-2xx responses to [`MarqueeError::Api`], keeping a short body excerpt.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.trim().chars().take(MAX_ERROR_BODY).collect()
    };

    Err(MarqueeError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Percent-encode a query value, leaving only unreserved characters bare.
///
/// Spaces become `%20` rather than the form-style `+`.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'!' | b'~' | b'*'
            | b'\'' | b'(' | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

impl MovieApi for HttpMovieApi {
    async fn list(&self, collection: Collection) -> Result<Vec<Movie>> {
        let url = self.endpoint(&[collection.path_segment()])?;
        self.send_json(self.request(Method::GET, url)).await
    }

    async fn search(&self, collection: Collection, query: &str) -> Result<Vec<Movie>> {
        let mut url = self.endpoint(&[collection.path_segment()])?;
        url.set_query(Some(&format!("search={}", encode_component(query))));
        self.send_json(self.request(Method::GET, url)).await
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Movie> {
        let url = self.endpoint(&[collection.path_segment(), id])?;
        match self.send_json(self.request(Method::GET, url)).await {
            Err(MarqueeError::Api { status: 404, .. }) => {
                Err(MarqueeError::MovieNotFound(id.to_string()))
            }
            other => other,
        }
    }

    async fn create_movie(&self, movie: &NewMovie) -> Result<InsertResult> {
        let url = self.endpoint(&[Collection::Movies.path_segment()])?;
        self.send_body(url, movie).await
    }

    async fn add_favorite(&self, favorite: &FavoriteMovie) -> Result<InsertResult> {
        let url = self.endpoint(&[Collection::Favorites.path_segment()])?;
        self.send_body(url, favorite).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<DeleteResult> {
        let url = self.endpoint(&[collection.path_segment(), id])?;
        self.send_json(self.request(Method::DELETE, url)).await
    }
}
