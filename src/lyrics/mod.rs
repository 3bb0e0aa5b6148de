//! Lyric acquisition
//!
//! This module provides:
//! - Title normalization for noisy video titles
//! - An ordered chain of lyric sources with validation of each response
//! - A deterministic fallback document when every source comes up empty

pub mod chain;
pub mod document;
pub mod error;
pub mod fallback;
pub mod http;
pub mod normalize;
pub mod sources;
pub mod validate;

pub use chain::LyricFetcher;
pub use document::{LyricDocument, Origin, TimedLine};
pub use error::SourceError;
pub use fallback::generate_fallback;
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use normalize::normalize;
pub use sources::{LyricSource, Query, SourceKind};
pub use validate::is_valid;
