use crate::services::llm::LlmClient;

pub mod error;
pub mod modules;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
