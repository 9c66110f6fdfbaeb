//! Speech Synthesizer Port - 语音合成服务抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Tone, VoiceId};

/// 合成错误
///
/// 区分网络错误与服务端报告的错误，调用方可据此决定重试策略
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 单片段合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 要合成的文本
    pub text: String,
    /// 音色标识
    pub voice: VoiceId,
    /// 朗读语气
    pub tone: Tone,
}

/// 单片段合成响应
#[derive(Debug, Clone)]
pub struct SynthesisResponse {
    /// 可播放的音频 URL
    pub audio_url: String,
    /// 服务端生成的文件名
    pub filename: Option<String>,
    /// 文件大小（字节）
    pub file_size: Option<u64>,
}

/// 整篇合并合成响应
#[derive(Debug, Clone)]
pub struct MergedSynthesisResponse {
    /// 合并后的音频 URL
    pub audio_url: String,
    /// 服务端内部切分出的片段数
    pub segments_count: usize,
}

/// Speech Synthesizer Port
///
/// 外部语音合成服务的抽象接口
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 合成单个片段
    async fn synthesize(&self, request: SynthesisRequest)
        -> Result<SynthesisResponse, SynthesisError>;

    /// 整篇合并合成
    ///
    /// 发送完整原文，由服务端内部切分并拼接；失败即整体失败，无部分结果
    async fn synthesize_document(
        &self,
        text: &str,
    ) -> Result<MergedSynthesisResponse, SynthesisError>;

    /// 检查合成服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
