//! geci.me client
//!
//! Two requests: search by title for a list of matches, then download the
//! first match's `.lrc` file.

use super::{LyricSource, Query};
use crate::lyrics::error::SourceError;
use crate::lyrics::http::HttpClient;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct GeciSearchResponse {
    result: Option<Vec<GeciEntry>>,
}

#[derive(Debug, Deserialize)]
struct GeciEntry {
    lrc: String,
}

pub struct GeciSource {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl GeciSource {
    pub const DEFAULT_BASE_URL: &'static str = "https://geci.me";

    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self::with_base_url(http, Self::DEFAULT_BASE_URL)
    }

    pub fn with_base_url(http: Arc<dyn HttpClient>, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn search(&self, song_name: &str) -> Result<Option<String>, SourceError> {
        let url = format!(
            "{}/api/lyric/{}",
            self.base_url,
            urlencoding::encode(song_name)
        );
        let response = self.http.get(&url)?;
        if !response.is_success() {
            tracing::debug!(status = response.status, "geci search failed");
            return Ok(None);
        }

        let parsed: GeciSearchResponse = serde_json::from_str(&response.body)?;
        Ok(parsed
            .result
            .and_then(|entries| entries.into_iter().next())
            .map(|entry| entry.lrc))
    }
}

impl LyricSource for GeciSource {
    fn name(&self) -> &str {
        "geci"
    }

    // the search endpoint ignores the artist
    fn fetch(&self, query: &Query) -> Result<Option<String>, SourceError> {
        let Some(lrc_url) = self.search(&query.song_name)? else {
            return Ok(None);
        };

        let response = self.http.get(&lrc_url)?;
        if !response.is_success() {
            tracing::debug!(status = response.status, url = %lrc_url, "geci lrc download failed");
            return Ok(None);
        }
        Ok(Some(response.body))
    }
}
