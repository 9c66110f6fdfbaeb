//! Narravox - 故事朗读切分与合成编排系统
//!
//! - Domain: story/ (Bounded Context)
//! - Application: commands, ports
//! - Infrastructure: http, adapters

use std::sync::Arc;
use std::time::Duration;

use narravox::application::{NarrationConfig, SpeechSynthesizerPort, StoryAnalyzerPort};
use narravox::config::{load_config, print_config};
use narravox::domain::{VoiceId, VoicePool};
use narravox::infrastructure::adapters::{
    FakeSynthesisClient, HttpAnalyzerClient, HttpAnalyzerClientConfig, HttpSynthesisClient,
    HttpSynthesisClientConfig,
};
use narravox::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},narravox={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Narravox - 故事朗读切分与合成编排系统");
    print_config(&config);

    // 构建音色池（index 0 为旁白）
    let voice_pool = VoicePool::new(
        config
            .voices
            .pool
            .iter()
            .map(|id| VoiceId::new(id.clone()))
            .collect(),
    )
    .map_err(|e| anyhow::anyhow!("Invalid voice pool: {}", e))?;

    // 创建远端分析客户端（首选主路径，可禁用）
    let analyzer: Option<Arc<dyn StoryAnalyzerPort>> = if config.analyzer.enabled {
        let analyzer_config = HttpAnalyzerClientConfig {
            base_url: config.analyzer.url.clone(),
            timeout_secs: config.analyzer.timeout_secs,
        };
        Some(Arc::new(
            HttpAnalyzerClient::new(analyzer_config)
                .map_err(|e| anyhow::anyhow!("Failed to create analyzer client: {}", e))?,
        ))
    } else {
        None
    };

    // 创建合成客户端
    let synthesizer: Arc<dyn SpeechSynthesizerPort> = if config.synthesis.fake {
        Arc::new(FakeSynthesisClient::with_defaults())
    } else {
        let synthesis_config = HttpSynthesisClientConfig {
            base_url: config.synthesis.url.clone(),
            timeout_secs: config.synthesis.timeout_secs,
        };
        Arc::new(
            HttpSynthesisClient::new(synthesis_config)
                .map_err(|e| anyhow::anyhow!("Failed to create synthesis client: {}", e))?,
        )
    };

    // 朗读编排配置
    let narration_config = NarrationConfig {
        pacing_delay: Duration::from_millis(config.narration.pacing_delay_ms),
    };

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(analyzer, synthesizer, voice_pool, narration_config);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
