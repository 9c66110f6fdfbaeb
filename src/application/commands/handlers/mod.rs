//! Command Handlers

mod story_handlers;

pub use story_handlers::{
    NarrateMergedHandler, NarrateMergedResponse, NarrateSegmentsHandler, NarrateSegmentsResponse,
    NarrationConfig, SegmentStoryHandler, SegmentStoryResponse, SegmentationSource,
};
