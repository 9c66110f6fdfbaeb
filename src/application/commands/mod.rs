//! CQRS Commands

pub mod handlers;
mod story_commands;

pub use story_commands::{NarrateMerged, NarrateSegments, SegmentStory};
