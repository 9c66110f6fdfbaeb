//! Story HTTP Handlers - 故事朗读接口

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{NarrateMerged, NarrateSegments, SegmentStory};
use crate::infrastructure::http::dto::{
    ApiResponse, MergedAudioResponse, NarrateRequest, NarratedSegmentsResponse, SegmentDto,
    SegmentsResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 切分故事为朗读片段
///
/// 远端分析服务优先，失败时静默回退本地引擎；
/// 空白文本返回空列表而非错误
pub async fn narrate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NarrateRequest>,
) -> Result<Json<ApiResponse<SegmentsResponse>>, ApiError> {
    let response = state
        .segment_story_handler
        .handle(SegmentStory {
            text: request.text,
            user_id: request.user_id,
        })
        .await?;

    let segments: Vec<SegmentDto> = response.segments.into_iter().map(SegmentDto::from).collect();

    Ok(Json(ApiResponse::success(SegmentsResponse {
        total: segments.len(),
        segments,
    })))
}

/// 逐片段合成音频
///
/// 单片段失败不影响整批，失败片段不带 audioRef
pub async fn narrate_audio(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NarrateRequest>,
) -> Result<Json<ApiResponse<NarratedSegmentsResponse>>, ApiError> {
    let response = state
        .narrate_segments_handler
        .handle(NarrateSegments {
            text: request.text,
            user_id: request.user_id,
        })
        .await?;

    let failed = response.failed;
    let segments: Vec<SegmentDto> = response.segments.into_iter().map(SegmentDto::from).collect();

    Ok(Json(ApiResponse::success(NarratedSegmentsResponse {
        total: segments.len(),
        failed,
        segments,
    })))
}

/// 整篇合并合成音频
///
/// 失败作为单一错误返回，调用方可整篇重试
pub async fn narrate_merged(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NarrateRequest>,
) -> Result<Json<ApiResponse<MergedAudioResponse>>, ApiError> {
    let response = state
        .narrate_merged_handler
        .handle(NarrateMerged {
            text: request.text,
            user_id: request.user_id,
        })
        .await?;

    Ok(Json(ApiResponse::success(MergedAudioResponse {
        audio_url: response.audio_url,
        segments_count: response.segments_count,
    })))
}
