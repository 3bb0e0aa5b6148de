use super::{LyricSource, Query};
use crate::lyrics::error::SourceError;
use crate::lyrics::fallback::generate_placeholder;

/// Local last-resort source: a "lyrics are loading, enjoy the song" document.
/// Sits at the end of the default chain, ahead of the final fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderSource;

impl LyricSource for PlaceholderSource {
    fn name(&self) -> &str {
        "placeholder"
    }

    fn fetch(&self, query: &Query) -> Result<Option<String>, SourceError> {
        Ok(Some(generate_placeholder(&query.song_name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_answers() {
        let got = PlaceholderSource.fetch(&Query::new("稻香", None)).unwrap();
        assert_eq!(got, Some(generate_placeholder("稻香")));
    }
}
