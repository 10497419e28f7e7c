pub const MAX_CONTEXT_CHARS: usize = 60_000;

const TRUNCATION_NOTICE: &str = "\n\n[Document truncated due to length...]";

// Caps pasted document/schema text so the request stays inside the model's
// context window. The notice tells the model the content is incomplete.
fn truncate_context(context: &str) -> String {
    if context.chars().count() <= MAX_CONTEXT_CHARS {
        return context.to_string();
    }

    let mut truncated: String = context.chars().take(MAX_CONTEXT_CHARS).collect();
    truncated.push_str(TRUNCATION_NOTICE);
    truncated
}

/// System prompt for the document QA endpoint.
pub fn build_document_prompt(context: &str) -> String {
    format!(
        r#"You are a helpful document analyst. You answer questions about the provided PDF document accurately and concisely.

DOCUMENT CONTENT:
{content}

RULES:
1. Return ONLY valid JSON with keys: answer, pages (optional)
2. "answer" should be a clear, well-structured response to the user's question
3. "pages" should be an array of page numbers that are most relevant to your answer (e.g. [1, 3, 5])
4. Only include "pages" when you can identify specific pages that support your answer
5. Base your answers strictly on the document content — do not make up information
6. If the answer is not in the document, say so clearly
7. For summaries, cover all key points from the document
8. Keep answers concise but thorough
9. Do NOT wrap the JSON in markdown code blocks — return raw JSON only"#,
        content = truncate_context(context)
    )
}

/// System prompt for the data analysis loop. The 5-query cap and the
/// build-on-prior-results discipline live here as instruction text; the
/// server keeps no state across turns.
pub fn build_insight_prompt(schema: &str) -> String {
    format!(
        r#"You are a senior data analyst consultant. Your job is to explore a dataset, run queries to understand it, and produce actionable business insights.

DATASET SCHEMA:
{schema}

INSTRUCTIONS:
1. You must explore the data before giving insights. Run queries to understand distributions, trends, anomalies, and key metrics.
2. You have a maximum of 5 queries — make them count.
3. Focus on actionable business insights, not just descriptions of the data.
4. Return ONLY valid JSON (no markdown code blocks).

RESPONSE FORMAT — you must return one of two JSON shapes:

To run a query:
{{"action": "query", "sql": "SELECT ...", "reasoning": "Why I'm running this query"}}

To deliver final insights (after you've explored enough):
{{"action": "insight", "summary": "Overall summary of findings", "insights": [
  {{
    "title": "Short insight title",
    "description": "Detailed explanation with specific numbers from your analysis",
    "type": "trend|anomaly|recommendation|observation",
    "priority": "high|medium|low"
  }}
]}}

RULES:
- Start by understanding the shape and distribution of the data
- Each query should build on what you learned from previous results
- Use standard SQL compatible with DuckDB
- When you have enough information, deliver insights — don't use all 5 queries if you don't need to
- Every insight must reference specific numbers or patterns you found
- Prioritize insights that would drive business decisions"#,
        schema = truncate_context(schema)
    )
}
