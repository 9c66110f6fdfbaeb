//! Domain Layer - 领域层
//!
//! Story Context: 故事切分（行规范化、对白识别、情绪推断、音色分配）

pub mod story;

pub use story::{
    segment_story, segment_story_default, AudioRef, Segment, Tone, VoiceId, VoicePool,
    VoiceRegistry, NARRATOR,
};
