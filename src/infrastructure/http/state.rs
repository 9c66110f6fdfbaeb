//! Application State

use std::sync::Arc;

use crate::application::{
    NarrateMergedHandler, NarrateSegmentsHandler, NarrationConfig, SegmentStoryHandler,
    SpeechSynthesizerPort, StoryAnalyzerPort,
};
use crate::domain::VoicePool;

/// 应用状态
///
/// 持有所有 Command Handlers 与音色池目录
pub struct AppState {
    pub voice_pool: VoicePool,

    // ========== Command Handlers ==========
    pub segment_story_handler: Arc<SegmentStoryHandler>,
    pub narrate_segments_handler: NarrateSegmentsHandler,
    pub narrate_merged_handler: NarrateMergedHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        analyzer: Option<Arc<dyn StoryAnalyzerPort>>,
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        voice_pool: VoicePool,
        narration_config: NarrationConfig,
    ) -> Self {
        let segment_story_handler =
            Arc::new(SegmentStoryHandler::new(analyzer, voice_pool.clone()));

        Self {
            voice_pool,
            segment_story_handler: segment_story_handler.clone(),
            narrate_segments_handler: NarrateSegmentsHandler::new(
                segment_story_handler,
                synthesizer.clone(),
                narration_config,
            ),
            narrate_merged_handler: NarrateMergedHandler::new(synthesizer),
        }
    }
}
