//! Synthesized lyric documents
//!
//! Both documents use the `[mm:ss.cc] text` line shape so the display can
//! treat them like any provider lyric. The timestamps are cosmetic.

/// Document returned when no source produced an acceptable lyric.
///
/// Pure function of `song_name`; the same input always yields the same bytes.
pub fn generate_fallback(song_name: &str) -> String {
    format!(
        "🎵 《{song_name}》

[00:00.00] ⚠️ 未找到精确匹配的歌词
[00:05.00] 
[00:10.00] 可能的原因:
[00:15.00] • 歌曲名称不标准
[00:20.00] • 歌词库中暂无此歌曲
[00:25.00] • 网络连接问题
[00:30.00] 
[00:35.00] 💡 建议:
[00:40.00] 1. 检查歌曲名称是否正确
[00:45.00] 2. 尝试手动搜索歌词
[00:50.00] 3. 享受纯音乐版本
[00:55.00] 
[01:00.00] 🎶 音乐无国界，享受此刻...
"
    )
}

/// "Still loading, enjoy the song" document served by the placeholder source.
pub fn generate_placeholder(song_name: &str) -> String {
    format!(
        "🎵 《{song_name}》歌词

[00:00.00] 歌曲: {song_name}
[00:05.00] 艺术家: 未知
[00:10.00] 专辑: 未知
[00:15.00] 
[00:20.00] 这是一首美妙的音乐
[00:25.00] 歌词正在努力加载中
[00:30.00] 请享受这段旋律时光
[00:35.00] 
[00:40.00] 如果这里没有显示歌词
[00:45.00] 可能是因为:
[00:50.00] 1. 歌曲名称不匹配
[00:55.00] 2. 歌词库中没有此歌曲
[01:00.00] 3. 网络连接问题
[01:05.00] 
[01:10.00] 🎶 音乐继续播放中...
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::document::LyricDocument;
    use crate::lyrics::validate::is_valid;

    #[test]
    fn test_fallback_is_deterministic() {
        assert_eq!(generate_fallback("同一首歌"), generate_fallback("同一首歌"));
        assert_ne!(generate_fallback("同一首歌"), generate_fallback("另一首歌"));
    }

    #[test]
    fn test_fallback_content() {
        let doc = generate_fallback("孤勇者");
        assert!(doc.starts_with("🎵 《孤勇者》\n"));
        assert!(doc.contains("[00:00.00] ⚠️ 未找到精确匹配的歌词"));
        assert!(doc.contains("网络连接问题"));
        assert!(doc.ends_with("[01:00.00] 🎶 音乐无国界，享受此刻...\n"));
    }

    #[test]
    fn test_blank_lines_keep_trailing_space() {
        let doc = generate_fallback("孤勇者");
        for stamp in ["[00:05.00] \n", "[00:30.00] \n", "[00:55.00] \n"] {
            assert!(doc.contains(stamp), "missing {stamp:?}");
        }
        let doc = generate_placeholder("孤勇者");
        for stamp in ["[00:15.00] \n", "[00:35.00] \n", "[01:05.00] \n"] {
            assert!(doc.contains(stamp), "missing {stamp:?}");
        }
    }

    #[test]
    fn test_fallback_line_shape() {
        let doc = LyricDocument::fallback(generate_fallback("孤勇者"));
        let lines = doc.timed_lines();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0].text, "🎵 《孤勇者》");
        assert_eq!(lines[1].time_ms, 0);
        assert_eq!(lines[1].text, "⚠️ 未找到精确匹配的歌词");
        assert_eq!(lines.last().map(|l| l.time_ms), Some(60_000));
    }

    #[test]
    fn test_placeholder_passes_validation() {
        let doc = generate_placeholder("孤勇者");
        assert!(doc.contains("歌曲: 孤勇者"));
        assert!(doc.contains("歌词正在努力加载中"));
        assert!(is_valid(Some(&doc)));
    }

    #[test]
    fn test_fallback_differs_from_placeholder() {
        assert_ne!(generate_fallback("晴天"), generate_placeholder("晴天"));
    }
}
