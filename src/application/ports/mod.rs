//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod speech_synthesizer;
mod story_analyzer;

pub use speech_synthesizer::{
    MergedSynthesisResponse, SpeechSynthesizerPort, SynthesisError, SynthesisRequest,
    SynthesisResponse,
};
pub use story_analyzer::{AnalyzerError, StoryAnalyzerPort};
