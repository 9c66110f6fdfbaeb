//! Story Analyzer Port - 远端文档分析服务抽象
//!
//! 首选主路径：远端服务可能返回预切分的片段列表。
//! 任何失败都会触发回退到本地切分引擎，对调用方不可见

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Segment;

/// 分析服务错误
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Analyzer unavailable: {0}")]
    Unavailable(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Story Analyzer Port
///
/// 远端文档分析服务的抽象接口
#[async_trait]
pub trait StoryAnalyzerPort: Send + Sync {
    /// 分析故事文本，返回预切分的片段列表
    async fn analyze(&self, text: &str, user_id: &str) -> Result<Vec<Segment>, AnalyzerError>;
}
