//! HTTP Analyzer Client - 调用远端文档分析服务
//!
//! 实现 StoryAnalyzerPort trait。远端服务是首选主路径，
//! 这里的任何错误都只会让调用方回退到本地切分引擎
//!
//! 远端分析 API:
//! POST {base}/api/story/narration
//! Request: {"text": "...", "user_id": "..."}  (JSON)
//! Response: {"segments": [{"text", "character", "voice", "tone", "emotion"}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{AnalyzerError, StoryAnalyzerPort};
use crate::domain::Segment;

/// 分析请求体 (JSON)
#[derive(Debug, Serialize)]
struct AnalyzeHttpRequest {
    text: String,
    user_id: String,
}

/// 分析响应体 (JSON)
#[derive(Debug, Deserialize)]
struct AnalyzeHttpResponse {
    segments: Vec<Segment>,
}

/// HTTP 分析客户端配置
#[derive(Debug, Clone)]
pub struct HttpAnalyzerClientConfig {
    /// 分析服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    ///
    /// 刻意比合成超时短：主路径超时应尽快让位给本地回退
    pub timeout_secs: u64,
}

impl Default for HttpAnalyzerClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

/// HTTP 分析客户端
pub struct HttpAnalyzerClient {
    client: Client,
    config: HttpAnalyzerClientConfig,
}

impl HttpAnalyzerClient {
    /// 创建新的 HTTP 分析客户端
    pub fn new(config: HttpAnalyzerClientConfig) -> Result<Self, AnalyzerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnalyzerError::Unavailable(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn analyze_url(&self) -> String {
        format!("{}/api/story/narration", self.config.base_url)
    }
}

#[async_trait]
impl StoryAnalyzerPort for HttpAnalyzerClient {
    async fn analyze(&self, text: &str, user_id: &str) -> Result<Vec<Segment>, AnalyzerError> {
        let http_request = AnalyzeHttpRequest {
            text: text.to_string(),
            user_id: user_id.to_string(),
        };

        tracing::debug!(
            url = %self.analyze_url(),
            text_len = text.len(),
            "Sending story analysis request"
        );

        let response = self
            .client
            .post(self.analyze_url())
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnalyzerError::Timeout
                } else {
                    AnalyzerError::Unavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzerError::Unavailable(format!("HTTP {}", status)));
        }

        let body: AnalyzeHttpResponse = response
            .json()
            .await
            .map_err(|e| AnalyzerError::InvalidResponse(e.to_string()))?;

        tracing::debug!(total = body.segments.len(), "Story analysis completed");

        Ok(body.segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_url() {
        let client = HttpAnalyzerClient::new(HttpAnalyzerClientConfig {
            base_url: "http://analyzer:8000".to_string(),
            timeout_secs: 10,
        })
        .unwrap();
        assert_eq!(client.analyze_url(), "http://analyzer:8000/api/story/narration");
    }

    #[test]
    fn test_segment_deserializes_from_analyzer_payload() {
        let payload = r#"{
            "segments": [
                {"text": "Stop right now.", "character": "Tom", "voice": "sarah",
                 "tone": "angry", "emotion": "angry"}
            ]
        }"#;
        let body: AnalyzeHttpResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(body.segments.len(), 1);
        assert_eq!(body.segments[0].character, "Tom");
        assert!(body.segments[0].audio_ref.is_none());
    }
}
