//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping                     GET   健康检查
//! - /api/tones                    GET   朗读语气目录
//! - /api/voices                   GET   音色池目录
//! - /api/story/narrate            POST  切分故事为朗读片段
//! - /api/story/narrate/audio      POST  逐片段合成音频
//! - /api/story/narrate/merged     POST  整篇合并合成音频

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/tones", get(handlers::list_tones))
        .route("/voices", get(handlers::list_voices))
        .nest("/story", story_routes())
}

/// Story 路由
fn story_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/narrate", post(handlers::narrate))
        .route("/narrate/audio", post(handlers::narrate_audio))
        .route("/narrate/merged", post(handlers::narrate_merged))
}
