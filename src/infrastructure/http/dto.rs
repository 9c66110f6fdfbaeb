//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::Segment;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Story DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct NarrateRequest {
    pub text: String,
    pub user_id: String,
}

/// 单个片段的响应视图
///
/// `audioRef` 命名沿用前端约定
#[derive(Debug, Serialize)]
pub struct SegmentDto {
    pub text: String,
    pub character: String,
    pub voice: String,
    pub tone: String,
    pub emotion: String,
    #[serde(rename = "audioRef", skip_serializing_if = "Option::is_none")]
    pub audio_ref: Option<String>,
}

impl From<Segment> for SegmentDto {
    fn from(segment: Segment) -> Self {
        Self {
            text: segment.text,
            character: segment.character,
            voice: segment.voice.as_str().to_string(),
            tone: segment.tone.as_str().to_string(),
            emotion: segment.emotion.as_str().to_string(),
            audio_ref: segment.audio_ref.map(|r| r.as_str().to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SegmentsResponse {
    pub total: usize,
    pub segments: Vec<SegmentDto>,
}

#[derive(Debug, Serialize)]
pub struct NarratedSegmentsResponse {
    pub total: usize,
    pub failed: usize,
    pub segments: Vec<SegmentDto>,
}

#[derive(Debug, Serialize)]
pub struct MergedAudioResponse {
    pub audio_url: String,
    pub segments_count: usize,
}

// ============================================================================
// Catalog DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ToneDto {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct TonesResponse {
    pub tones: Vec<ToneDto>,
}

#[derive(Debug, Serialize)]
pub struct VoiceDto {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<VoiceDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Tone, VoiceId};

    #[test]
    fn test_segment_dto_omits_missing_audio_ref() {
        let segment = Segment::new("Hello", "Narrator", VoiceId::from("david"), Tone::Neutral);
        let dto = SegmentDto::from(segment);
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("audioRef").is_none());
        assert_eq!(json["tone"], "neutral");
    }

    #[test]
    fn test_segment_dto_renames_audio_ref() {
        let segment = Segment::new("Hello", "Narrator", VoiceId::from("david"), Tone::Neutral)
            .with_audio(crate::domain::AudioRef::new("/audio/x.wav"));
        let json = serde_json::to_value(SegmentDto::from(segment)).unwrap();
        assert_eq!(json["audioRef"], "/audio/x.wav");
    }
}
