//! Analyzer Adapters - StoryAnalyzerPort 实现

mod http_analyzer_client;

pub use http_analyzer_client::{HttpAnalyzerClient, HttpAnalyzerClientConfig};
