//! 朗读片段

use serde::{Deserialize, Serialize};

use super::value_objects::{AudioRef, Tone, VoiceId};

/// 朗读片段 - 一个朗读单元
///
/// 不变量：
/// - text 总是以 `.`、`!` 或 `?` 结尾
/// - emotion 与 tone 始终相等（非 neutral 时为冗余展示字段）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// 要朗读的文本（旁白行或对白内容）
    pub text: String,
    /// 显示名："Narrator"、具名角色或 "Character N"
    pub character: String,
    /// 音色池中的音色标识
    pub voice: VoiceId,
    /// 朗读语气
    pub tone: Tone,
    /// 与 tone 同值，供下游展示
    pub emotion: Tone,
    /// 已合成音频的引用，合成成功前为 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_ref: Option<AudioRef>,
}

impl Segment {
    /// 构建片段，补齐缺失的句末标点
    pub fn new(text: impl Into<String>, character: impl Into<String>, voice: VoiceId, tone: Tone) -> Self {
        Self {
            text: ensure_terminal_punctuation(text.into()),
            character: character.into(),
            voice,
            tone,
            emotion: tone,
            audio_ref: None,
        }
    }

    /// 附加合成结果
    pub fn with_audio(mut self, audio_ref: AudioRef) -> Self {
        self.audio_ref = Some(audio_ref);
        self
    }
}

/// 若文本不以 `.`、`!`、`?` 结尾则追加 `.`
fn ensure_terminal_punctuation(mut text: String) -> String {
    if !text.ends_with(['.', '!', '?']) {
        text.push('.');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_period_when_missing() {
        let segment = Segment::new("Stop right now", "Tom", VoiceId::from("sarah"), Tone::Angry);
        assert_eq!(segment.text, "Stop right now.");
    }

    #[test]
    fn test_keeps_existing_terminal_punctuation() {
        for text in ["Done.", "Really?", "Go!"] {
            let segment = Segment::new(text, "Narrator", VoiceId::from("david"), Tone::Neutral);
            assert_eq!(segment.text, text);
        }
    }

    #[test]
    fn test_emotion_mirrors_tone() {
        let angry = Segment::new("x", "Tom", VoiceId::from("sarah"), Tone::Angry);
        assert_eq!(angry.emotion, Tone::Angry);

        let neutral = Segment::new("x", "Narrator", VoiceId::from("david"), Tone::Neutral);
        assert_eq!(neutral.emotion, Tone::Neutral);
    }

    #[test]
    fn test_audio_ref_absent_until_attached() {
        let segment = Segment::new("x", "Narrator", VoiceId::from("david"), Tone::Neutral);
        assert!(segment.audio_ref.is_none());

        let with_audio = segment.with_audio(AudioRef::new("/audio/seg-0.wav"));
        assert_eq!(with_audio.audio_ref.unwrap().as_str(), "/audio/seg-0.wav");
    }
}
