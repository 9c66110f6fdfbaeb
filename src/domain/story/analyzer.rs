//! 故事切分流水线
//!
//! 把自由文本确定性地切成有序朗读片段：
//! 行规范化 → 对白分类 → 情绪推断 + 音色分配 → 片段构建
//!
//! 整条流水线同步、无 IO、无共享状态；登记表随每次调用新建，
//! 对独立文档可安全地重复或并行调用。

use super::emotion::classify_tone;
use super::line::{classify_line, normalize_lines, LineClass};
use super::segment::Segment;
use super::voices::{VoicePool, VoiceRegistry, NARRATOR};

/// 对一个文档做故事切分
///
/// 输入 N 个非空行，输出恰好 N 个片段，顺序与原文一致。
/// 空白输入返回空列表，不是错误
pub fn segment_story(text: &str, pool: VoicePool) -> Vec<Segment> {
    let mut registry = VoiceRegistry::new(pool);

    normalize_lines(text)
        .into_iter()
        .map(|line| build_segment(classify_line(line), &mut registry))
        .collect()
}

/// 使用默认音色池切分（便捷方法）
pub fn segment_story_default(text: &str) -> Vec<Segment> {
    segment_story(text, VoicePool::default())
}

/// 把一个分类结果落成片段
fn build_segment(class: LineClass, registry: &mut VoiceRegistry) -> Segment {
    match class {
        LineClass::Structured { name, hint, text } => {
            let voice = registry.voice_for(&name);
            let tone = classify_tone(Some(&hint), &text);
            Segment::new(text, name, voice, tone)
        }
        LineClass::Generic { text } => {
            let (label, voice) = registry.mint_generic();
            let tone = classify_tone(None, &text);
            Segment::new(text, label, voice, tone)
        }
        LineClass::Narration { text } => {
            let voice = registry.narrator_voice();
            let tone = classify_tone(None, &text);
            Segment::new(text, NARRATOR, voice, tone)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tone;

    #[test]
    fn test_structured_dialogue_line() {
        // Scenario A
        let segments = segment_story_default(r#"Tom (angry): "Stop right now""#);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].character, "Tom");
        assert_eq!(segments[0].tone, Tone::Angry);
        assert_eq!(segments[0].text, "Stop right now.");
        assert_eq!(segments[0].voice.as_str(), "sarah");
    }

    #[test]
    fn test_generic_dialogue_line() {
        // Scenario B
        let segments = segment_story_default(r#"She said, "Please calm down""#);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].character, "Character 1");
        assert_eq!(segments[0].voice.as_str(), "sarah");
        assert_eq!(segments[0].tone, Tone::Calm);
    }

    #[test]
    fn test_narration_line() {
        // Scenario C
        let segments = segment_story_default("The sun set over the hills");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].character, "Narrator");
        assert_eq!(segments[0].voice.as_str(), "david");
        assert_eq!(segments[0].tone, Tone::Neutral);
        assert_eq!(segments[0].text, "The sun set over the hills.");
    }

    #[test]
    fn test_voice_is_per_name_tone_is_per_line() {
        // Scenario D
        let text = "Tom (angry): \"Stop\"\nTom (calm): \"Sorry\"";
        let segments = segment_story_default(text);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].character, "Tom");
        assert_eq!(segments[1].character, "Tom");
        assert_eq!(segments[0].voice, segments[1].voice);
        assert_eq!(segments[0].tone, Tone::Angry);
        assert_eq!(segments[1].tone, Tone::Calm);
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        assert!(segment_story_default("").is_empty());
        assert!(segment_story_default("  \n\t\n  ").is_empty());
    }

    #[test]
    fn test_one_segment_per_line_in_order() {
        let text = "First line\nSecond line\n\nThird line";
        let segments = segment_story_default(text);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text, "First line.");
        assert_eq!(segments[1].text, "Second line.");
        assert_eq!(segments[2].text, "Third line.");
    }

    #[test]
    fn test_mixed_story() {
        let text = concat!(
            "The rain kept falling.\n",
            "Tom (sad): \"I lost the letter\"\n",
            "\"Who is there?\"\n",
            "Tom (happy): \"Found it!\"\n",
            "\"It was just the wind.\"\n",
        );
        let segments = segment_story_default(text);
        assert_eq!(segments.len(), 5);

        assert_eq!(segments[0].character, "Narrator");
        assert_eq!(segments[0].voice.as_str(), "david");

        assert_eq!(segments[1].character, "Tom");
        assert_eq!(segments[1].voice.as_str(), "sarah");
        assert_eq!(segments[1].tone, Tone::Sad);

        // 每条匿名引号行都是新的匿名说话人
        assert_eq!(segments[2].character, "Character 1");
        assert_eq!(segments[2].voice.as_str(), "alex");

        assert_eq!(segments[3].character, "Tom");
        assert_eq!(segments[3].voice.as_str(), "sarah");
        assert_eq!(segments[3].tone, Tone::Cheerful);

        assert_eq!(segments[4].character, "Character 2");
        assert_eq!(segments[4].voice.as_str(), "emma");
    }

    #[test]
    fn test_narrator_voice_stable_across_calls() {
        let first = segment_story_default("A quiet morning");
        let second = segment_story_default("Another quiet morning");
        assert_eq!(first[0].voice, second[0].voice);
    }

    #[test]
    fn test_registry_resets_between_calls() {
        // 新文档重新从 index 1 开始分配
        let first = segment_story_default("Anna (happy): \"Hi\"");
        let second = segment_story_default("Bella (sad): \"Bye\"");
        assert_eq!(first[0].voice.as_str(), "sarah");
        assert_eq!(second[0].voice.as_str(), "sarah");
    }
}
