//! OMDb APIクライアント (reqwest)

use std::time::Duration;

use async_trait::async_trait;
use movie_lookup_common::{parse_movie_response, FetchError, Movie};

use super::MovieApi;
use crate::config::Config;
use crate::error::{MovieLookupError, Result};

pub struct OmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MovieLookupError::ApiCall(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.api_base_url.clone(),
            config.get_api_key()?,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl MovieApi for OmdbClient {
    async fn get_movie_details(&self, imdb_id: &str) -> std::result::Result<Movie, FetchError> {
        let response = self
            .http
            .get(self.endpoint())
            .query(&[("apikey", self.api_key.as_str()), ("i", imdb_id), ("plot", "full")])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !status.is_success() {
            // 401等でもOMDbは {"Response":"False","Error":...} を返すことがある
            return Err(match parse_movie_response(&body) {
                Err(e @ (FetchError::NotFound | FetchError::Api(_))) => e,
                _ => FetchError::Transport(format!("API error: {}", status)),
            });
        }

        parse_movie_response(&body)
    }
}
