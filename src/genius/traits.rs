//! Trait definition for the Genius API.
//!
//! The trait enables dependency injection and mocking for tests.
//! Production code uses [`GeniusClient`], while tests substitute
//! [`mocks::MockGenius`], which serves canned JSON bodies per endpoint.
//!
//! # Example
//!
//! ```ignore
//! use sample_explorer::genius::GeniusApi;
//!
//! async fn count_hits<T: GeniusApi + ?Sized>(api: &T) -> usize {
//!     api.search("Hip Hop Hooray").await.map(|r| r.hits.len()).unwrap_or(0)
//! }
//! ```

use async_trait::async_trait;

use super::client::GeniusClient;
use super::dto;
use super::error::GeniusError;

/// Search endpoint template
pub const SEARCH_ENDPOINT: &str = "/search";

/// Song detail endpoint template
pub const SONG_ENDPOINT: &str = "/songs/{song_id}";

/// Access to the Genius API.
///
/// Only [`GeniusApi::get`] talks to the network; the typed endpoint methods
/// decode its JSON, so a body with an unexpected shape surfaces as
/// [`GeniusError::Parse`].
#[async_trait]
pub trait GeniusApi: Send + Sync {
    /// Issue one GET and return the parsed JSON body.
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value, GeniusError>;

    /// Free-text song search.
    async fn search(&self, query: &str) -> Result<dto::SearchResponse, GeniusError> {
        let body = self.get(SEARCH_ENDPOINT, &[("q", query.to_string())]).await?;
        let envelope: dto::Envelope<dto::SearchResponse> = serde_json::from_value(body)?;
        Ok(envelope.response)
    }

    /// Full song object, including its relationships.
    async fn song(&self, song_id: u64) -> Result<dto::Song, GeniusError> {
        let body = self
            .get(SONG_ENDPOINT, &[("song_id", song_id.to_string())])
            .await?;
        let envelope: dto::Envelope<dto::SongResponse> = serde_json::from_value(body)?;
        Ok(envelope.response.song)
    }
}

#[async_trait]
impl GeniusApi for GeniusClient {
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value, GeniusError> {
        GeniusClient::get(self, endpoint, params).await
    }
}
