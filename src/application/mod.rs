//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（StoryAnalyzer、SpeechSynthesizer）
//! - commands: CQRS 命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::{
        NarrateMergedHandler, NarrateMergedResponse, NarrateSegmentsHandler,
        NarrateSegmentsResponse, NarrationConfig, SegmentStoryHandler, SegmentStoryResponse,
        SegmentationSource,
    },
    NarrateMerged, NarrateSegments, SegmentStory,
};

pub use error::ApplicationError;

pub use ports::{
    AnalyzerError, MergedSynthesisResponse, SpeechSynthesizerPort, StoryAnalyzerPort,
    SynthesisError, SynthesisRequest, SynthesisResponse,
};
