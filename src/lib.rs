//! Narravox - 故事朗读切分与合成编排系统
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Story Context: 故事切分上下文（行规范化、对白识别、情绪推断、音色分配）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（StoryAnalyzer, SpeechSynthesizer）
//! - Commands: CQRS 命令处理器（切分、逐片段朗读、整篇合并朗读）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: Analyzer Client, Synthesis Client（HTTP 与 Fake 实现）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
