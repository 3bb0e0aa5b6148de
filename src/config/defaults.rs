use super::{Config, HttpConfig, LogConfig, SourcesConfig};
use crate::lyrics::http::ReqwestClient;
use crate::lyrics::sources::{GeciSource, LyricsOvhSource, SourceKind};

pub fn defaults() -> Config {
    Config {
        http: http(),
        sources: sources(),
        log: LogConfig::default(),
    }
}

pub fn http() -> HttpConfig {
    HttpConfig {
        user_agent: ReqwestClient::DEFAULT_USER_AGENT.to_string(),
        timeout_secs: 10,
    }
}

pub fn sources() -> SourcesConfig {
    SourcesConfig {
        order: vec![
            SourceKind::LyricsOvh,
            SourceKind::Geci,
            SourceKind::Placeholder,
        ],
        lyrics_ovh_base_url: LyricsOvhSource::DEFAULT_BASE_URL.to_string(),
        geci_base_url: GeciSource::DEFAULT_BASE_URL.to_string(),
        default_artist: LyricsOvhSource::DEFAULT_ARTIST.to_string(),
    }
}
