//! Story Context - Value Objects

use serde::{Deserialize, Serialize};

/// 音色标识
///
/// 来自固定音色池的标识符（如 "david"、"sarah"）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoiceId(String);

impl VoiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VoiceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// 合成音频引用
///
/// 指向已合成音频的 URL，由合成服务返回
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudioRef(String);

impl AudioRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AudioRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 朗读语气
///
/// 封闭的语气集合，分类器只会输出这些值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Neutral,
    Cheerful,
    Sad,
    Angry,
    Calm,
    Suspenseful,
    Confident,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Cheerful => "cheerful",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Calm => "calm",
            Self::Suspenseful => "suspenseful",
            Self::Confident => "confident",
        }
    }

    /// 全部语气（目录接口使用）
    pub fn all() -> &'static [Tone] {
        &[
            Self::Neutral,
            Self::Cheerful,
            Self::Sad,
            Self::Angry,
            Self::Calm,
            Self::Suspenseful,
            Self::Confident,
        ]
    }

    /// 语气描述（目录接口使用）
    pub fn description(&self) -> &'static str {
        match self {
            Self::Neutral => "Balanced, even delivery",
            Self::Cheerful => "Bright and upbeat delivery",
            Self::Sad => "Soft, somber, and emotional",
            Self::Angry => "Sharp and forceful delivery",
            Self::Calm => "Slow, soothing delivery",
            Self::Suspenseful => "Tense, anticipating delivery",
            Self::Confident => "Assured and inspiring delivery",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_serializes_lowercase() {
        let json = serde_json::to_string(&Tone::Suspenseful).unwrap();
        assert_eq!(json, "\"suspenseful\"");
    }

    #[test]
    fn test_tone_all_contains_neutral_first() {
        assert_eq!(Tone::all()[0], Tone::Neutral);
        assert_eq!(Tone::all().len(), 7);
    }

    #[test]
    fn test_voice_id_display() {
        let voice = VoiceId::new("david");
        assert_eq!(voice.to_string(), "david");
    }
}
