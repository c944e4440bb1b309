use crate::api::ChatMessage;

/// Fixed task instruction sent with every request. The schema here is the
/// contract the normalizer hopes for, not one it can rely on.
pub const SYSTEM_PROMPT: &str = r#"You are a precise multilingual sentiment analysis engine.
Given a single user-provided sentence, you MUST:
1) Detect sentiment and assign integer probabilities (0-100%) for Positive, Neutral, Negative that sum to 100.
2) Provide a one-line overall label chosen by the highest probability.
3) Provide a concise, evidence-based explanation.
4) Return results in BOTH Traditional Chinese (zh-Hant) and English.

Output JSON only with this schema:
{
  "label": "Positive | Neutral | Negative",
  "scores": { "positive_pct": 0-100, "neutral_pct": 0-100, "negative_pct": 0-100 },
  "analysis_zh_hant": "Concise explanation in Traditional Chinese (繁體中文)",
  "analysis_en": "Concise explanation in English",
  "caveats": "Any caveats or ambiguities in English or Traditional Chinese"
}

Rules:
- Do NOT include any extra text outside the JSON.
- Percentages must be integers that sum to 100.
- Use Traditional Chinese (繁體中文) strictly for the Chinese field (no simplified characters).
- If the sentence is mixed/ambiguous, reflect uncertainty in scores and caveats."#;

/// Build the two-message request for one sentence. Trims the input; empty
/// input never reaches this point (the read loop rejects it first).
pub fn build_messages(text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(text.trim()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_system_then_user_message() {
        let messages = build_messages("  I love this!  ");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "I love this!");
    }
}
