use serde::{Deserialize, Serialize};

use crate::services::llm::ChatMessage;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default, rename = "documentContext")]
    pub document_context: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// The model's reply contract for document QA. `pages` is shape-checked as
/// an array only; entries pass through uncoerced.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentAnswer {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<serde_json::Value>>,
}
