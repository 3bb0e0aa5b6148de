use crate::lyrics::sources::SourceKind;
use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod defaults;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub sources: SourcesConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Sent with every request; some lyric sites refuse non-browser agents.
    pub user_agent: String,
    /// Per-request timeout. A source that times out is skipped.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Sources tried in this order until one returns a valid lyric.
    pub order: Vec<SourceKind>,
    pub lyrics_ovh_base_url: String,
    pub geci_base_url: String,
    /// Artist used for artist-keyed lookups when the caller has none.
    pub default_artist: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// trace, debug, info, warn or error
    pub level: String,
}

impl HttpConfig {
    /// Never shorter than one second; `timeout_secs = 0` would fail every request.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        defaults::http()
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        defaults::sources()
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    pub fn max_level(&self) -> anyhow::Result<tracing::Level> {
        self.level
            .parse()
            .with_context(|| format!("invalid log level {:?}", self.level))
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    write_config(&path, cfg)
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "songlyric", "songlyric")
        .context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

/// Read the config file, writing the defaults first if it does not exist.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = defaults::defaults();
        write_config(&path, &cfg)?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

fn write_config(path: &Path, cfg: &Config) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("songlyric-test-{}-{name}", std::process::id()))
            .join("config.toml")
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.http.timeout_secs, 10);
        assert_eq!(cfg.http.timeout(), Duration::from_secs(10));
        assert_eq!(
            cfg.sources.order,
            vec![SourceKind::LyricsOvh, SourceKind::Geci, SourceKind::Placeholder]
        );
        assert_eq!(cfg.sources.default_artist, "Various Artists");
        assert_eq!(cfg.log.max_level().unwrap(), tracing::Level::INFO);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[sources]
order = ["geci", "lyrics_ovh"]

[http]
timeout_secs = 3
"#,
        )
        .unwrap();
        assert_eq!(cfg.sources.order, vec![SourceKind::Geci, SourceKind::LyricsOvh]);
        assert_eq!(cfg.sources.geci_base_url, "https://geci.me");
        assert_eq!(cfg.http.timeout_secs, 3);
        assert!(cfg.http.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_zero_timeout_clamped() {
        let cfg: Config = toml::from_str("[http]\ntimeout_secs = 0\n").unwrap();
        assert_eq!(cfg.http.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_unknown_source_rejected() {
        let parsed = toml::from_str::<Config>("[sources]\norder = [\"netease\"]\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_bad_log_level() {
        let cfg = LogConfig {
            level: "loud".to_string(),
        };
        assert!(cfg.max_level().is_err());
    }

    #[test]
    fn test_load_writes_defaults_then_reads_back() {
        let path = scratch_path("load");
        let _ = fs::remove_file(&path);

        let first = load(Some(&path)).unwrap();
        assert!(path.exists());

        let mut edited = first.clone();
        edited.sources.order = vec![SourceKind::Placeholder];
        edited.log.level = "debug".to_string();
        save(&edited, Some(&path)).unwrap();

        let second = load(Some(&path)).unwrap();
        assert_eq!(second.sources.order, vec![SourceKind::Placeholder]);
        assert_eq!(second.log.level, "debug");

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
