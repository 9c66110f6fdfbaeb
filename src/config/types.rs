//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 远端分析服务配置
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// 语音合成服务配置
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// 朗读编排配置
    #[serde(default)]
    pub narration: NarrationSettings,

    /// 音色池配置
    #[serde(default)]
    pub voices: VoicesConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5070
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 远端分析服务配置
///
/// 首选主路径；禁用或失败时走本地切分引擎
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// 是否启用远端分析
    #[serde(default = "default_analyzer_enabled")]
    pub enabled: bool,

    /// 分析服务基础 URL
    #[serde(default = "default_analyzer_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_analyzer_timeout")]
    pub timeout_secs: u64,
}

fn default_analyzer_enabled() -> bool {
    true
}

fn default_analyzer_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_analyzer_timeout() -> u64 {
    10
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            enabled: default_analyzer_enabled(),
            url: default_analyzer_url(),
            timeout_secs: default_analyzer_timeout(),
        }
    }
}

/// 语音合成服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisConfig {
    /// 合成服务基础 URL
    #[serde(default = "default_synthesis_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_synthesis_timeout")]
    pub timeout_secs: u64,

    /// 使用伪造合成客户端（离线运行/联调）
    #[serde(default)]
    pub fake: bool,
}

fn default_synthesis_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_synthesis_timeout() -> u64 {
    120
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            url: default_synthesis_url(),
            timeout_secs: default_synthesis_timeout(),
            fake: false,
        }
    }
}

/// 朗读编排配置
#[derive(Debug, Clone, Deserialize)]
pub struct NarrationSettings {
    /// 逐片段模式下相邻请求之间的节拍延迟（毫秒）
    #[serde(default = "default_pacing_delay_ms")]
    pub pacing_delay_ms: u64,
}

fn default_pacing_delay_ms() -> u64 {
    1000
}

impl Default for NarrationSettings {
    fn default() -> Self {
        Self {
            pacing_delay_ms: default_pacing_delay_ms(),
        }
    }
}

/// 音色池配置
///
/// 顺序即池序：首个音色保留给旁白
#[derive(Debug, Clone, Deserialize)]
pub struct VoicesConfig {
    #[serde(default = "default_voice_pool")]
    pub pool: Vec<String>,
}

fn default_voice_pool() -> Vec<String> {
    vec![
        "david".to_string(),
        "sarah".to_string(),
        "alex".to_string(),
        "emma".to_string(),
        "michael".to_string(),
    ]
}

impl Default for VoicesConfig {
    fn default() -> Self {
        Self {
            pool: default_voice_pool(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5070);
        assert_eq!(config.synthesis.url, "http://localhost:8000");
        assert_eq!(config.narration.pacing_delay_ms, 1000);
        assert_eq!(config.voices.pool.len(), 5);
        assert_eq!(config.voices.pool[0], "david");
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:5070");
    }
}
