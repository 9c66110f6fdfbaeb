//! Story Command Handlers
//!
//! 切分与朗读编排：远端优先回退本地、逐片段节拍合成、整篇合并合成

use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::application::commands::{NarrateMerged, NarrateSegments, SegmentStory};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    SpeechSynthesizerPort, StoryAnalyzerPort, SynthesisError, SynthesisRequest,
};
use crate::domain::{segment_story, AudioRef, Segment, VoicePool};

// ============================================================================
// SegmentStory
// ============================================================================

/// 片段列表来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentationSource {
    /// 远端文档分析服务
    Remote,
    /// 本地切分引擎（回退路径）
    Local,
}

/// 切分响应
#[derive(Debug, Clone)]
pub struct SegmentStoryResponse {
    pub segments: Vec<Segment>,
    pub source: SegmentationSource,
}

/// SegmentStory Handler - 切分故事
///
/// 远端分析服务为首选主路径；其不可用或失败时静默回退到
/// 本地引擎，回退本身绝不是对调用方可见的错误
pub struct SegmentStoryHandler {
    analyzer: Option<Arc<dyn StoryAnalyzerPort>>,
    voice_pool: VoicePool,
}

impl SegmentStoryHandler {
    pub fn new(analyzer: Option<Arc<dyn StoryAnalyzerPort>>, voice_pool: VoicePool) -> Self {
        Self {
            analyzer,
            voice_pool,
        }
    }

    pub async fn handle(&self, command: SegmentStory) -> Result<SegmentStoryResponse, ApplicationError> {
        if let Some(analyzer) = &self.analyzer {
            match analyzer.analyze(&command.text, &command.user_id).await {
                Ok(segments) => {
                    tracing::info!(
                        user_id = %command.user_id,
                        total = segments.len(),
                        "Story segmented by remote analyzer"
                    );
                    return Ok(SegmentStoryResponse {
                        segments,
                        source: SegmentationSource::Remote,
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        user_id = %command.user_id,
                        error = %e,
                        "Remote analyzer failed, falling back to local engine"
                    );
                }
            }
        }

        let segments = segment_story(&command.text, self.voice_pool.clone());
        tracing::info!(
            user_id = %command.user_id,
            total = segments.len(),
            "Story segmented by local engine"
        );

        Ok(SegmentStoryResponse {
            segments,
            source: SegmentationSource::Local,
        })
    }
}

// ============================================================================
// NarrateSegments (逐片段模式)
// ============================================================================

/// 逐片段朗读配置
#[derive(Debug, Clone)]
pub struct NarrationConfig {
    /// 相邻合成请求之间的节拍延迟
    ///
    /// 顺序逐个请求是有意的背压策略，以延迟换取不压垮下游合成服务
    pub pacing_delay: Duration,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            pacing_delay: Duration::from_secs(1),
        }
    }
}

/// 逐片段朗读响应
#[derive(Debug, Clone)]
pub struct NarrateSegmentsResponse {
    /// 合成成功的片段带 audio_ref，失败的保持为 None
    pub segments: Vec<Segment>,
    /// 合成失败的片段数
    pub failed: usize,
}

/// NarrateSegments Handler - 逐片段合成编排
///
/// 按顺序逐个请求合成服务；单片段失败只在本地记录
/// （该片段不带 audio_ref），整批从不中止，已完成的片段不受影响
pub struct NarrateSegmentsHandler {
    segmenter: Arc<SegmentStoryHandler>,
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
    config: NarrationConfig,
}

impl NarrateSegmentsHandler {
    pub fn new(
        segmenter: Arc<SegmentStoryHandler>,
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        config: NarrationConfig,
    ) -> Self {
        Self {
            segmenter,
            synthesizer,
            config,
        }
    }

    pub async fn handle(&self, command: NarrateSegments) -> Result<NarrateSegmentsResponse, ApplicationError> {
        let segmented = self
            .segmenter
            .handle(SegmentStory {
                text: command.text,
                user_id: command.user_id.clone(),
            })
            .await?;

        // 批次 ID，用于把一次朗读的全部日志串起来
        let batch_id = Uuid::new_v4();
        let total = segmented.segments.len();
        let mut segments = Vec::with_capacity(total);
        let mut failed = 0;

        tracing::info!(
            batch_id = %batch_id,
            user_id = %command.user_id,
            total,
            "Per-segment narration started"
        );

        for (index, segment) in segmented.segments.into_iter().enumerate() {
            // 请求之间的节拍延迟，首个请求不等待
            if index > 0 {
                tokio::time::sleep(self.config.pacing_delay).await;
            }

            let request = SynthesisRequest {
                text: segment.text.clone(),
                voice: segment.voice.clone(),
                tone: segment.tone,
            };

            match self.synthesizer.synthesize(request).await {
                Ok(response) => {
                    tracing::debug!(
                        batch_id = %batch_id,
                        index,
                        voice = %segment.voice,
                        audio_url = %response.audio_url,
                        "Segment synthesized"
                    );
                    segments.push(segment.with_audio(AudioRef::new(response.audio_url)));
                }
                Err(e) => {
                    failed += 1;
                    match &e {
                        SynthesisError::NetworkError(_) | SynthesisError::Timeout => {
                            tracing::warn!(batch_id = %batch_id, index, error = %e, "Segment synthesis failed (network)");
                        }
                        _ => {
                            tracing::warn!(batch_id = %batch_id, index, error = %e, "Segment synthesis failed (service)");
                        }
                    }
                    segments.push(segment);
                }
            }
        }

        tracing::info!(
            batch_id = %batch_id,
            user_id = %command.user_id,
            total,
            failed,
            "Per-segment narration completed"
        );

        Ok(NarrateSegmentsResponse { segments, failed })
    }
}

// ============================================================================
// NarrateMerged (整篇合并模式)
// ============================================================================

/// 整篇合并朗读响应
#[derive(Debug, Clone)]
pub struct NarrateMergedResponse {
    pub audio_url: String,
    pub segments_count: usize,
}

/// NarrateMerged Handler - 整篇合并合成
///
/// 对完整原文（而非片段列表）做一次合成请求；
/// 失败作为单一终态错误向上传播，无部分结果
pub struct NarrateMergedHandler {
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
}

impl NarrateMergedHandler {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizerPort>) -> Self {
        Self { synthesizer }
    }

    pub async fn handle(&self, command: NarrateMerged) -> Result<NarrateMergedResponse, ApplicationError> {
        let response = self
            .synthesizer
            .synthesize_document(&command.text)
            .await
            .map_err(|e| ApplicationError::ExternalServiceError(e.to_string()))?;

        tracing::info!(
            user_id = %command.user_id,
            segments_count = response.segments_count,
            audio_url = %response.audio_url,
            "Merged narration completed"
        );

        Ok(NarrateMergedResponse {
            audio_url: response.audio_url,
            segments_count: response.segments_count,
        })
    }
}
