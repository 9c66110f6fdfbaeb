//! 情绪分类器
//!
//! 把情绪提示或文本中的关键词映射到封闭的语气集合。
//! 固定关键词表，不做任何超出子串匹配的语言理解。

use super::value_objects::Tone;

/// 关键词 → 语气 映射表
///
/// 表序即扫描序：多个关键词同时出现时，先声明者先命中
const EMOTION_KEYWORDS: &[(&str, Tone)] = &[
    ("cheerful", Tone::Cheerful),
    ("playful", Tone::Cheerful),
    ("excited", Tone::Cheerful),
    ("happy", Tone::Cheerful),
    ("laugh", Tone::Cheerful),
    ("sad", Tone::Sad),
    ("cry", Tone::Sad),
    ("angry", Tone::Angry),
    ("shout", Tone::Angry),
    ("calm", Tone::Calm),
    ("whisper", Tone::Calm),
    ("nervous", Tone::Suspenseful),
    ("suspenseful", Tone::Suspenseful),
    ("confident", Tone::Confident),
    ("inspiring", Tone::Confident),
];

/// 精确匹配情绪提示
///
/// 提示必须与表中关键词完全相等（已小写、已去空白）
fn tone_for_hint(hint: &str) -> Option<Tone> {
    EMOTION_KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == hint)
        .map(|(_, tone)| *tone)
}

/// 扫描文本中的情绪关键词
///
/// 按表序找第一个作为子串出现的关键词
fn tone_for_text(text: &str) -> Option<Tone> {
    let lowered = text.to_lowercase();
    EMOTION_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, tone)| *tone)
}

/// 推断语气
///
/// 优先级：显式提示 > 文本关键词 > neutral。
/// 纯函数：相同 (hint, text) 总是产生相同语气
pub fn classify_tone(hint: Option<&str>, text: &str) -> Tone {
    if let Some(hint) = hint {
        if let Some(tone) = tone_for_hint(hint) {
            return tone;
        }
    }
    tone_for_text(text).unwrap_or(Tone::Neutral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_exact_match_wins() {
        assert_eq!(classify_tone(Some("angry"), "a happy day"), Tone::Angry);
    }

    #[test]
    fn test_unknown_hint_falls_back_to_text_scan() {
        assert_eq!(classify_tone(Some("wistful"), "she began to cry"), Tone::Sad);
    }

    #[test]
    fn test_text_scan_is_case_insensitive() {
        assert_eq!(classify_tone(None, "Please CALM down"), Tone::Calm);
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        // "happy" 先于 "sad" 声明，同时出现时 cheerful 胜出
        assert_eq!(classify_tone(None, "sad yet happy"), Tone::Cheerful);
    }

    #[test]
    fn test_substring_match() {
        // "laughing" 包含关键词 "laugh"
        assert_eq!(classify_tone(None, "they were laughing"), Tone::Cheerful);
    }

    #[test]
    fn test_no_match_is_neutral() {
        assert_eq!(classify_tone(None, "the door opened"), Tone::Neutral);
        assert_eq!(classify_tone(Some("unknown"), "the door opened"), Tone::Neutral);
    }

    #[test]
    fn test_every_keyword_maps_to_itself_via_hint() {
        for (keyword, tone) in EMOTION_KEYWORDS {
            assert_eq!(classify_tone(Some(keyword), ""), *tone);
        }
    }
}
