//! Story Context - 故事切分上下文
//!
//! 本地故事切分引擎：远端文档分析服务不可用时的确定性回退路径

mod analyzer;
mod emotion;
mod line;
mod segment;
mod value_objects;
mod voices;

pub use analyzer::{segment_story, segment_story_default};
pub use emotion::classify_tone;
pub use line::{classify_line, normalize_lines, LineClass};
pub use segment::Segment;
pub use value_objects::{AudioRef, Tone, VoiceId};
pub use voices::{VoicePool, VoiceRegistry, NARRATOR};
