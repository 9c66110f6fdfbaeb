//! Synthesis Adapters - SpeechSynthesizerPort 实现

mod fake_synthesis_client;
mod http_synthesis_client;

pub use fake_synthesis_client::{FakeSynthesisClient, FakeSynthesisClientConfig};
pub use http_synthesis_client::{HttpSynthesisClient, HttpSynthesisClientConfig};
