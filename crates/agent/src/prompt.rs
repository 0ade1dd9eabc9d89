//! Fixed instruction contract for the completion backend.

use fireboard_core::assistant::schema::ConversationTurn;

use crate::llm::ChatMessage;

/// System instruction sent with every generative attempt. The vocabulary
/// spelled out here must stay in sync with the schema enums in
/// `fireboard-core`; the validator is the enforcement point either way.
pub const SYSTEM_INSTRUCTION: &str = "\
Ты — ассистент дашборда распределения обращений. Отвечай только на русском языке.\n\
Верни строго один JSON-объект без какого-либо текста вне его, с полями:\n\
- \"reply\": короткий ответ пользователю;\n\
- \"widgets\": массив максимум из 4 описаний виджетов.\n\
Каждый виджет: {\"kind\", \"source\", \"title\", опционально \"orientation\", \"helper\", \"topN\"}.\n\
Допустимые \"kind\": bar, doughnut, list, stat.\n\
Для kind=stat допустимые \"source\": ticketsTotal, avgPriority, vipShare, inRouting.\n\
Для остальных kind допустимые \"source\": byCity, byType, bySentiment, byOffice, byLanguage, topCities.\n\
Поле \"orientation\" (horizontal или vertical) указывай только для kind=bar, для остальных опускай.\n\
Если запрос неоднозначный, предложи 1-2 наиболее подходящих виджета.";

/// Composes the message sequence: fixed instruction, sanitized history, then
/// the user query as the final turn.
pub fn build_messages(query: &str, history: &[ConversationTurn]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(SYSTEM_INSTRUCTION));
    for turn in history {
        messages.push(ChatMessage { role: turn.role.as_str().to_string(), content: turn.content.clone() });
    }
    messages.push(ChatMessage::user(query));
    messages
}

#[cfg(test)]
mod tests {
    use fireboard_core::assistant::schema::Speaker;

    use super::*;

    #[test]
    fn messages_are_instruction_then_history_then_query() {
        let history = vec![
            ConversationTurn { role: Speaker::User, content: "покажи города".to_string() },
            ConversationTurn { role: Speaker::Assistant, content: "построил".to_string() },
        ];

        let messages = build_messages("а теперь по офисам", &history);

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_INSTRUCTION);
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[2].role, "assistant");
        assert_eq!(messages[3].role, "user");
        assert_eq!(messages[3].content, "а теперь по офисам");
    }

    #[test]
    fn instruction_spells_out_the_whole_source_vocabulary() {
        for source in [
            "ticketsTotal",
            "avgPriority",
            "vipShare",
            "inRouting",
            "byCity",
            "byType",
            "bySentiment",
            "byOffice",
            "byLanguage",
            "topCities",
        ] {
            assert!(SYSTEM_INSTRUCTION.contains(source), "missing {source}");
        }
    }
}
