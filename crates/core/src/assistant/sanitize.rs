//! Plan sanitation for generative output.
//!
//! The single most important repair rule lives here: any malformed or empty
//! generative payload degrades to the deterministic planner instead of
//! reaching the caller as a broken or empty plan.

use serde_json::Value;

use super::planner::plan_deterministically;
use super::schema::{truncate_chars, AssistantPlan, MAX_REPLY_CHARS, MAX_WIDGETS_PER_PLAN};
use super::validate::validate_widget;

/// Rebuilds an untrusted plan payload into a valid [`AssistantPlan`], falling
/// back to the deterministic planner when nothing usable survives.
///
/// Idempotent on valid input: sanitizing an already-sanitized plan returns it
/// unchanged.
pub fn sanitize_plan(raw: &Value, original_query: &str) -> AssistantPlan {
    let Some(record) = raw.as_object() else {
        return plan_deterministically(original_query);
    };

    let reply = record.get("reply").and_then(Value::as_str).unwrap_or_default().trim();

    let widgets: Vec<_> = record
        .get("widgets")
        .and_then(Value::as_array)
        .map(|candidates| {
            candidates.iter().filter_map(validate_widget).take(MAX_WIDGETS_PER_PLAN).collect()
        })
        .unwrap_or_default();

    if widgets.is_empty() {
        return plan_deterministically(original_query);
    }

    let reply = if reply.is_empty() {
        let titles: Vec<&str> = widgets.iter().map(|widget| widget.title.as_str()).collect();
        format!("Построил виджеты: {}.", titles.join(", "))
    } else {
        reply.to_string()
    };

    AssistantPlan { reply: truncate_chars(&reply, MAX_REPLY_CHARS).to_string(), widgets }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::assistant::schema::SourceId;

    #[test]
    fn non_record_payload_falls_back_to_deterministic_plan() {
        let query = "покажи типы обращений";

        assert_eq!(sanitize_plan(&json!("oops"), query), plan_deterministically(query));
        assert_eq!(sanitize_plan(&json!(null), query), plan_deterministically(query));
    }

    #[test]
    fn empty_reply_and_empty_widgets_fall_back_to_deterministic_plan() {
        let query = "где больше всего обращений";
        let raw = json!({"reply": "", "widgets": []});

        assert_eq!(sanitize_plan(&raw, query), plan_deterministically(query));
    }

    #[test]
    fn all_invalid_widgets_fall_back_to_deterministic_plan() {
        let query = "тональность обращений";
        let raw = json!({
            "reply": "вот виджеты",
            "widgets": [
                {"kind": "stat", "source": "byCity", "title": "x"},
                {"kind": "pie", "source": "byType", "title": "y"},
                "not a widget"
            ]
        });

        assert_eq!(sanitize_plan(&raw, query), plan_deterministically(query));
    }

    #[test]
    fn keeps_valid_widgets_and_drops_invalid_ones_in_order() {
        let raw = json!({
            "reply": "готово",
            "widgets": [
                {"kind": "bar", "source": "byType", "title": "Типы обращений"},
                {"kind": "stat", "source": "byType", "title": "bad pairing"},
                {"kind": "doughnut", "source": "bySentiment", "title": "Тональность"}
            ]
        });

        let plan = sanitize_plan(&raw, "любой запрос");

        assert_eq!(plan.reply, "готово");
        let sources: Vec<SourceId> = plan.widgets.iter().map(|widget| widget.source).collect();
        assert_eq!(sources, vec![SourceId::ByType, SourceId::BySentiment]);
    }

    #[test]
    fn stops_collecting_after_four_valid_widgets() {
        let widget = json!({"kind": "list", "source": "byOffice", "title": "Офисы"});
        let raw = json!({
            "reply": "много виджетов",
            "widgets": vec![widget; 6]
        });

        let plan = sanitize_plan(&raw, "офисы");

        assert_eq!(plan.widgets.len(), 4);
    }

    #[test]
    fn synthesizes_reply_from_titles_when_reply_is_blank() {
        let raw = json!({
            "reply": "   ",
            "widgets": [
                {"kind": "bar", "source": "byCity", "title": "География обращений"},
                {"kind": "stat", "source": "vipShare", "title": "Доля VIP обращений"}
            ]
        });

        let plan = sanitize_plan(&raw, "города и vip");

        assert_eq!(plan.reply, "Построил виджеты: География обращений, Доля VIP обращений.");
    }

    #[test]
    fn truncates_oversized_reply() {
        let raw = json!({
            "reply": "о".repeat(1000),
            "widgets": [{"kind": "bar", "source": "byCity", "title": "География"}]
        });

        let plan = sanitize_plan(&raw, "города");

        assert_eq!(plan.reply.chars().count(), MAX_REPLY_CHARS);
    }

    #[test]
    fn sanitation_is_a_fixed_point_on_valid_output() {
        let raw = json!({
            "reply": "вот распределение",
            "widgets": [
                {"kind": "bar", "source": "byType", "title": "Типы обращений", "orientation": "horizontal"},
                {"kind": "list", "source": "topCities", "title": "Топ города", "topN": 5}
            ]
        });

        let once = sanitize_plan(&raw, "типы");
        let round_tripped = serde_json::to_value(&once).expect("serializable");
        let twice = sanitize_plan(&round_tripped, "типы");

        assert_eq!(once, twice);
    }
}
