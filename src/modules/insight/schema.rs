use serde::{Deserialize, Serialize};

use crate::services::llm::ChatMessage;

#[derive(Debug, Deserialize)]
pub struct InsightRequest {
    #[serde(default)]
    pub schema: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// One turn of the analysis loop: the model either asks for a query to be
/// run or delivers its final insights. Unknown `action` values fail at
/// deserialization as unknown variants.
///
/// Per-insight fields (`title`, `description`, `type`, `priority`) are
/// deliberately not deep-validated; only the array shape is enforced.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum InsightTurn {
    Query {
        sql: String,
        reasoning: String,
    },
    Insight {
        summary: String,
        insights: Vec<serde_json::Value>,
    },
}
