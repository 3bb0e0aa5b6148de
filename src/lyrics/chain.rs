//! Ordered source chain
//!
//! Normalizes the title, asks each source in turn, and returns the first
//! response that passes validation. When every source fails the caller still
//! gets a document: the synthesized fallback.

use crate::config::Config;
use crate::lyrics::document::LyricDocument;
use crate::lyrics::error::SourceError;
use crate::lyrics::fallback::generate_fallback;
use crate::lyrics::http::{HttpClient, ReqwestClient};
use crate::lyrics::normalize::normalize;
use crate::lyrics::sources::{
    GeciSource, LyricSource, LyricsOvhSource, PlaceholderSource, Query, SourceKind,
};
use crate::lyrics::validate::is_valid;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct LyricFetcher {
    sources: Vec<Box<dyn LyricSource>>,
}

impl LyricFetcher {
    /// Chain over `sources`, tried in the given order.
    pub fn new(sources: Vec<Box<dyn LyricSource>>) -> Self {
        Self { sources }
    }

    /// Build the configured chain on a real HTTP client.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let http = ReqwestClient::new(&cfg.http.user_agent, cfg.http.timeout())?;
        Ok(Self::with_http(cfg, Arc::new(http)))
    }

    /// Build the configured chain on the given HTTP client.
    pub fn with_http(cfg: &Config, http: Arc<dyn HttpClient>) -> Self {
        let sources = cfg
            .sources
            .order
            .iter()
            .map(|kind| -> Box<dyn LyricSource> {
                match kind {
                    SourceKind::LyricsOvh => Box::new(LyricsOvhSource::with_base_url(
                        http.clone(),
                        &cfg.sources.lyrics_ovh_base_url,
                        &cfg.sources.default_artist,
                    )),
                    SourceKind::Geci => Box::new(GeciSource::with_base_url(
                        http.clone(),
                        &cfg.sources.geci_base_url,
                    )),
                    SourceKind::Placeholder => Box::new(PlaceholderSource),
                }
            })
            .collect();
        Self::new(sources)
    }

    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|s| s.name())
    }

    /// Lyrics for a raw display title, as text. Never empty.
    pub fn fetch_lyrics(&self, song_name: &str, artist: Option<&str>) -> String {
        self.fetch(song_name, artist).into_body()
    }

    /// Lyrics for a raw display title, with the source that produced them.
    pub fn fetch(&self, song_name: &str, artist: Option<&str>) -> LyricDocument {
        let name = normalize(song_name);
        if name.trim().is_empty() {
            warn!("blank song title, skipping sources");
            return LyricDocument::fallback(generate_fallback(&name));
        }

        let query = Query::new(name, artist);
        info!(song = %query.song_name, artist = ?query.artist, "looking up lyrics");

        for source in &self.sources {
            match Self::try_source(source.as_ref(), &query) {
                Ok(body) => {
                    info!(source = source.name(), song = %query.song_name, "lyrics found");
                    return LyricDocument::from_source(source.name(), body);
                }
                Err(e) => {
                    debug!(source = source.name(), kind = e.kind(), error = %e, "source skipped");
                }
            }
        }

        warn!(song = %query.song_name, "no source had lyrics, using fallback");
        LyricDocument::fallback(generate_fallback(&query.song_name))
    }

    /// One attempt against one source, with "nothing" and "rejected" folded
    /// into errors so the caller only sees hit or miss.
    fn try_source(source: &dyn LyricSource, query: &Query) -> Result<String, SourceError> {
        match source.fetch(query)? {
            Some(body) if is_valid(Some(&body)) => Ok(body),
            Some(body) => Err(SourceError::ContentInvalid(preview(&body))),
            None => Err(SourceError::ContentInvalid("no result".to_string())),
        }
    }
}

fn preview(body: &str) -> String {
    let mut out: String = body.chars().take(40).collect();
    if body.chars().nth(40).is_some() {
        out.push('…');
    }
    out
}
