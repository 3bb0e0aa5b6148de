//! Lyric lookup for noisy song titles.
//!
//! ```no_run
//! use songlyric::{config::Config, LyricFetcher};
//!
//! let fetcher = LyricFetcher::from_config(&Config::default())?;
//! println!("{}", fetcher.fetch_lyrics("【MV】孤勇者 - 官方高清版_Bilibili", None));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod lyrics;

pub use lyrics::{LyricDocument, LyricFetcher, generate_fallback, is_valid, normalize};
