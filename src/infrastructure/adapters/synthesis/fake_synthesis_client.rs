//! Fake Synthesis Client - 用于测试与离线运行的合成客户端
//!
//! 不调用任何外部服务，返回确定性的伪造音频 URL

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{
    MergedSynthesisResponse, SpeechSynthesizerPort, SynthesisError, SynthesisRequest,
    SynthesisResponse,
};
use crate::domain::segment_story_default;

/// Fake Synthesis Client 配置
#[derive(Debug, Clone)]
pub struct FakeSynthesisClientConfig {
    /// 伪造音频 URL 的前缀
    pub audio_base_path: String,
    /// 模拟的合成延迟（毫秒）
    pub latency_ms: u64,
}

impl Default for FakeSynthesisClientConfig {
    fn default() -> Self {
        Self {
            audio_base_path: "/audio/fake".to_string(),
            latency_ms: 50,
        }
    }
}

/// Fake Synthesis Client
///
/// 每次请求返回递增编号的伪造音频 URL；
/// 合并模式用本地引擎数片段，模拟服务端内部切分
pub struct FakeSynthesisClient {
    config: FakeSynthesisClientConfig,
    counter: AtomicUsize,
}

impl FakeSynthesisClient {
    pub fn new(config: FakeSynthesisClientConfig) -> Self {
        tracing::info!(
            audio_base_path = %config.audio_base_path,
            latency_ms = config.latency_ms,
            "FakeSynthesisClient initialized"
        );
        Self {
            config,
            counter: AtomicUsize::new(0),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(FakeSynthesisClientConfig::default())
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeSynthesisClient {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SynthesisError> {
        tracing::debug!(
            text_len = request.text.len(),
            voice = %request.voice,
            tone = %request.tone,
            "FakeSynthesisClient: returning fabricated audio"
        );

        // 模拟合成延迟
        tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;

        let index = self.counter.fetch_add(1, Ordering::Relaxed);
        let filename = format!("segment_{}_{}.wav", request.voice, index);

        Ok(SynthesisResponse {
            audio_url: format!("{}/{}", self.config.audio_base_path, filename),
            filename: Some(filename),
            file_size: Some(request.text.len() as u64 * 1024),
        })
    }

    async fn synthesize_document(
        &self,
        text: &str,
    ) -> Result<MergedSynthesisResponse, SynthesisError> {
        tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;

        let segments_count = segment_story_default(text).len();
        let index = self.counter.fetch_add(1, Ordering::Relaxed);

        Ok(MergedSynthesisResponse {
            audio_url: format!("{}/merged_{}.wav", self.config.audio_base_path, index),
            segments_count,
        })
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Tone, VoiceId};

    #[tokio::test]
    async fn test_fabricated_urls_are_unique() {
        let client = FakeSynthesisClient::new(FakeSynthesisClientConfig {
            audio_base_path: "/audio/test".to_string(),
            latency_ms: 0,
        });

        let request = SynthesisRequest {
            text: "Hello.".to_string(),
            voice: VoiceId::from("david"),
            tone: Tone::Neutral,
        };

        let first = client.synthesize(request.clone()).await.unwrap();
        let second = client.synthesize(request).await.unwrap();
        assert_ne!(first.audio_url, second.audio_url);
        assert!(first.audio_url.starts_with("/audio/test/"));
    }

    #[tokio::test]
    async fn test_merged_counts_segments() {
        let client = FakeSynthesisClient::new(FakeSynthesisClientConfig {
            audio_base_path: "/audio/test".to_string(),
            latency_ms: 0,
        });

        let response = client
            .synthesize_document("First line\nSecond line")
            .await
            .unwrap();
        assert_eq!(response.segments_count, 2);
    }
}
