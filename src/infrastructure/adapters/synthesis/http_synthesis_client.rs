//! HTTP Synthesis Client - 调用外部语音合成 HTTP 服务
//!
//! 实现 SpeechSynthesizerPort trait，通过 HTTP 调用外部合成服务
//!
//! 外部合成 API:
//! POST {base}/api/story/narration/audio
//! Request: {"text": "...", "voice": "...", "tone": "..."}  (JSON)
//! Response: {"success": true, "audio_url": "...", "filename": "...", "file_size": 123}
//!
//! POST {base}/api/story/narration/merged
//! Request: {"text": "..."}  (JSON)
//! Response: {"success": true, "audio_url": "...", "segments_count": 5}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{
    MergedSynthesisResponse, SpeechSynthesizerPort, SynthesisError, SynthesisRequest,
    SynthesisResponse,
};

/// 单片段合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct SegmentHttpRequest {
    text: String,
    voice: String,
    tone: String,
}

/// 单片段合成响应体 (JSON)
#[derive(Debug, Deserialize)]
struct SegmentHttpResponse {
    success: bool,
    #[serde(default)]
    audio_url: Option<String>,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    file_size: Option<u64>,
    #[serde(default)]
    error: Option<String>,
}

/// 整篇合并合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct MergedHttpRequest {
    text: String,
}

/// 整篇合并合成响应体 (JSON)
#[derive(Debug, Deserialize)]
struct MergedHttpResponse {
    success: bool,
    #[serde(default)]
    audio_url: Option<String>,
    #[serde(default)]
    segments_count: Option<usize>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP 合成客户端配置
#[derive(Debug, Clone)]
pub struct HttpSynthesisClientConfig {
    /// 合成服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpSynthesisClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 120,
        }
    }
}

impl HttpSynthesisClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 合成客户端
///
/// 通过 HTTP 调用外部语音合成服务
pub struct HttpSynthesisClient {
    client: Client,
    config: HttpSynthesisClientConfig,
}

impl HttpSynthesisClient {
    /// 创建新的 HTTP 合成客户端
    pub fn new(config: HttpSynthesisClientConfig) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SynthesisError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn segment_url(&self) -> String {
        format!("{}/api/story/narration/audio", self.config.base_url)
    }

    fn merged_url(&self) -> String {
        format!("{}/api/story/narration/merged", self.config.base_url)
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url)
    }

    fn map_transport_error(e: reqwest::Error) -> SynthesisError {
        if e.is_timeout() {
            SynthesisError::Timeout
        } else if e.is_connect() {
            SynthesisError::NetworkError(format!("Cannot connect to synthesis service: {}", e))
        } else {
            SynthesisError::NetworkError(e.to_string())
        }
    }
}

#[async_trait]
impl SpeechSynthesizerPort for HttpSynthesisClient {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SynthesisError> {
        let http_request = SegmentHttpRequest {
            text: request.text,
            voice: request.voice.as_str().to_string(),
            tone: request.tone.as_str().to_string(),
        };

        tracing::debug!(
            url = %self.segment_url(),
            text_len = http_request.text.len(),
            voice = %http_request.voice,
            tone = %http_request.tone,
            "Sending segment synthesis request"
        );

        let response = self
            .client
            .post(self.segment_url())
            .json(&http_request)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SynthesisError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: SegmentHttpResponse = response
            .json()
            .await
            .map_err(|e| SynthesisError::InvalidResponse(e.to_string()))?;

        if !body.success {
            return Err(SynthesisError::ServiceError(
                body.error.unwrap_or_else(|| "unknown service error".to_string()),
            ));
        }

        let audio_url = body.audio_url.ok_or_else(|| {
            SynthesisError::InvalidResponse("success response missing audio_url".to_string())
        })?;

        Ok(SynthesisResponse {
            audio_url,
            filename: body.filename,
            file_size: body.file_size,
        })
    }

    async fn synthesize_document(
        &self,
        text: &str,
    ) -> Result<MergedSynthesisResponse, SynthesisError> {
        let http_request = MergedHttpRequest {
            text: text.to_string(),
        };

        tracing::debug!(
            url = %self.merged_url(),
            text_len = text.len(),
            "Sending merged synthesis request"
        );

        let response = self
            .client
            .post(self.merged_url())
            .json(&http_request)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SynthesisError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: MergedHttpResponse = response
            .json()
            .await
            .map_err(|e| SynthesisError::InvalidResponse(e.to_string()))?;

        if !body.success {
            return Err(SynthesisError::ServiceError(
                body.error.unwrap_or_else(|| "unknown service error".to_string()),
            ));
        }

        let audio_url = body.audio_url.ok_or_else(|| {
            SynthesisError::InvalidResponse("success response missing audio_url".to_string())
        })?;

        tracing::info!(
            audio_url = %audio_url,
            segments_count = ?body.segments_count,
            "Merged synthesis completed"
        );

        Ok(MergedSynthesisResponse {
            audio_url,
            segments_count: body.segments_count.unwrap_or(0),
        })
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
