//! Deterministic fallback planner.
//!
//! Keyword-driven and side-effect-free: for a fixed query string the output
//! is byte-identical across calls. Every failure mode of the generative path
//! terminates here, so this module must always succeed.

use super::schema::{
    truncate_chars, AssistantPlan, Orientation, SourceId, WidgetKind, WidgetSpec, MAX_REPLY_CHARS,
    MAX_WIDGETS_PER_PLAN,
};

/// One keyword rule with its predefined widget. Declaration order in
/// [`PLAN_RULES`] is the tie-break when several rules fire.
struct PlanRule {
    keywords: &'static [&'static str],
    kind: WidgetKind,
    source: SourceId,
    title: &'static str,
    orientation: Option<Orientation>,
    helper: Option<&'static str>,
    top_n: Option<i64>,
}

const PLAN_RULES: &[PlanRule] = &[
    PlanRule {
        keywords: &["город", "географ", "населен", "регион", "област"],
        kind: WidgetKind::Bar,
        source: SourceId::ByCity,
        title: "География обращений",
        orientation: Some(Orientation::Vertical),
        helper: None,
        top_n: None,
    },
    PlanRule {
        keywords: &["тип", "категор"],
        kind: WidgetKind::Bar,
        source: SourceId::ByType,
        title: "Типы обращений",
        orientation: Some(Orientation::Horizontal),
        helper: None,
        top_n: None,
    },
    PlanRule {
        keywords: &["тональн", "эмоци", "настроен"],
        kind: WidgetKind::Doughnut,
        source: SourceId::BySentiment,
        title: "Тональность обращений",
        orientation: None,
        helper: None,
        top_n: None,
    },
    PlanRule {
        keywords: &["офис", "подраздел", "бизнес-единиц"],
        kind: WidgetKind::List,
        source: SourceId::ByOffice,
        title: "Распределение по офисам",
        orientation: None,
        helper: None,
        top_n: None,
    },
    PlanRule {
        keywords: &["vip", "премиум"],
        kind: WidgetKind::Stat,
        source: SourceId::VipShare,
        title: "Доля VIP обращений",
        orientation: None,
        helper: Some("От всех обращений"),
        top_n: None,
    },
    PlanRule {
        keywords: &["приоритет", "срочн"],
        kind: WidgetKind::Stat,
        source: SourceId::AvgPriority,
        title: "Средний приоритет",
        orientation: None,
        helper: Some("По шкале 1-10"),
        top_n: None,
    },
    PlanRule {
        keywords: &["очеред", "маршрут"],
        kind: WidgetKind::Stat,
        source: SourceId::InRouting,
        title: "В маршрутизации",
        orientation: None,
        helper: Some("Обращения в обработке"),
        top_n: None,
    },
    PlanRule {
        keywords: &["топ", "лидер", "максим", "больше"],
        kind: WidgetKind::List,
        source: SourceId::TopCities,
        title: "Топ города по обращениям",
        orientation: None,
        helper: None,
        top_n: Some(3),
    },
];

// Indexes into PLAN_RULES used when no rule fires.
const DEFAULT_RULES: &[usize] = &[1, 0];

const REFINE_HINT: &str = "Уточните запрос: город, офис, тональность, VIP или очередь.";

impl PlanRule {
    fn matches(&self, normalized_query: &str) -> bool {
        self.keywords.iter().any(|keyword| normalized_query.contains(keyword))
    }

    fn widget(&self) -> WidgetSpec {
        WidgetSpec {
            kind: self.kind,
            source: self.source,
            title: self.title.to_string(),
            orientation: self.orientation,
            helper: self.helper.map(str::to_string),
            top_n: self.top_n,
        }
    }
}

/// Derives a widget plan from the query text alone. Always succeeds.
pub fn plan_deterministically(query: &str) -> AssistantPlan {
    let normalized = normalize_query(query);

    let mut widgets: Vec<WidgetSpec> = PLAN_RULES
        .iter()
        .filter(|rule| rule.matches(&normalized))
        .map(PlanRule::widget)
        .collect();

    if widgets.is_empty() {
        widgets = DEFAULT_RULES.iter().map(|&index| PLAN_RULES[index].widget()).collect();
    }

    widgets.truncate(MAX_WIDGETS_PER_PLAN);

    let titles: Vec<&str> = widgets.iter().map(|widget| widget.title.as_str()).collect();
    let reply = format!("Готово! Построил виджеты: {}. {REFINE_HINT}", titles.join(", "));

    AssistantPlan { reply: truncate_chars(&reply, MAX_REPLY_CHARS).to_string(), widgets }
}

/// Lower-cases the query and replaces `.` `,` `?` `!` `:` with spaces.
/// Other punctuation is left intact.
fn normalize_query(query: &str) -> String {
    query
        .to_lowercase()
        .chars()
        .map(|ch| if matches!(ch, '.' | ',' | '?' | '!' | ':') { ' ' } else { ch })
        .collect()
}
