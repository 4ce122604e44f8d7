//! HTTP client for the keepsake API.
//!
//! List calls are cached per endpoint path in a [`QueryCache`]; a successful
//! create drops the cached list of the same resource so the next read shows
//! the server-confirmed state.

mod cache;

use reqwest::Response;
use serde_json::Value;
use url::Url;

use crate::api::{Endpoint, ErrorBody, LoveNotes, Memories, Resource, Timeline};
use crate::error::{KeepsakeError, Result};
use crate::model::{
    InsertLoveNote, InsertMemory, InsertTimelineEvent, LoveNote, Memory, TimelineEvent,
};

pub use cache::QueryCache;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    cache: QueryCache,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        install_crypto_provider();
        let base_url = Url::parse(base_url)?;
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url,
            cache: QueryCache::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    fn url(&self, endpoint: Endpoint) -> Result<Url> {
        Ok(self.base_url.join(endpoint.path)?)
    }

    /// Lists a resource, reusing the cached result when there is one.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R::Entity>> {
        let value = self
            .cache
            .get_or_fetch(R::LIST.path, || self.fetch_list::<R>())
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn fetch_list<R: Resource>(&self) -> Result<Value> {
        tracing::debug!(endpoint = %R::LIST, "Fetching");
        let response = self.http.get(self.url(R::LIST)?).send().await?;
        if !response.status().is_success() {
            return Err(KeepsakeError::Api {
                status: response.status().as_u16(),
                message: R::FETCH_FAILED.to_string(),
            });
        }
        Ok(response.json::<Value>().await?)
    }

    /// Creates a resource and invalidates its cached list.
    pub async fn create<R: Resource>(&self, insert: &R::Insert) -> Result<R::Entity> {
        tracing::debug!(endpoint = %R::CREATE, "Sending");
        let response = self
            .http
            .post(self.url(R::CREATE)?)
            .json(insert)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(server_error(response, R::CREATE_FAILED).await);
        }

        let entity = response.json::<R::Entity>().await?;
        self.cache.invalidate(R::LIST.path);
        Ok(entity)
    }

    pub async fn memories(&self) -> Result<Vec<Memory>> {
        self.list::<Memories>().await
    }

    pub async fn create_memory(&self, insert: &InsertMemory) -> Result<Memory> {
        self.create::<Memories>(insert).await
    }

    pub async fn love_notes(&self) -> Result<Vec<LoveNote>> {
        self.list::<LoveNotes>().await
    }

    pub async fn create_love_note(&self, insert: &InsertLoveNote) -> Result<LoveNote> {
        self.create::<LoveNotes>(insert).await
    }

    pub async fn timeline(&self) -> Result<Vec<TimelineEvent>> {
        self.list::<Timeline>().await
    }

    pub async fn create_timeline_event(
        &self,
        insert: &InsertTimelineEvent,
    ) -> Result<TimelineEvent> {
        self.create::<Timeline>(insert).await
    }
}

/// Turns a non-success response into an error carrying the server's
/// `message`, or `fallback` when the body has none.
async fn server_error(response: Response, fallback: &str) -> KeepsakeError {
    let status = response.status().as_u16();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string());
    KeepsakeError::Api { status, message }
}

/// reqwest is built without a bundled TLS provider; install ring once per
/// process before the first client is created.
fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
