pub mod contract;
pub mod llm;
pub mod prompt;
