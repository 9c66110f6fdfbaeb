//! HTTP Handlers

mod catalog;
mod ping;
mod story;

pub use catalog::{list_tones, list_voices};
pub use ping::ping;
pub use story::{narrate, narrate_audio, narrate_merged};
