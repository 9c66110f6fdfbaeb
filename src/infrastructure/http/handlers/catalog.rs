//! Catalog Handlers - 语气与音色目录
//!
//! 前端启动时拉取可用语气/音色列表

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::domain::Tone;
use crate::infrastructure::http::dto::{
    ApiResponse, ToneDto, TonesResponse, VoiceDto, VoicesResponse,
};
use crate::infrastructure::http::state::AppState;

/// 首字母大写的展示名
fn display_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// 列出全部朗读语气
pub async fn list_tones() -> Json<ApiResponse<TonesResponse>> {
    let tones = Tone::all()
        .iter()
        .map(|tone| ToneDto {
            id: tone.as_str().to_string(),
            name: display_name(tone.as_str()),
            description: tone.description().to_string(),
        })
        .collect();

    Json(ApiResponse::success(TonesResponse { tones }))
}

/// 列出音色池全部音色
pub async fn list_voices(State(state): State<Arc<AppState>>) -> Json<ApiResponse<VoicesResponse>> {
    let voices = state
        .voice_pool
        .voices()
        .iter()
        .enumerate()
        .map(|(index, voice)| VoiceDto {
            id: voice.as_str().to_string(),
            name: display_name(voice.as_str()),
            description: if index == 0 {
                "Narrator voice".to_string()
            } else {
                "Character voice".to_string()
            },
        })
        .collect();

    Json(ApiResponse::success(VoicesResponse { voices }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("david"), "David");
        assert_eq!(display_name(""), "");
    }
}
