//! Widget vocabulary and plan shapes shared by the validator and planners.
//!
//! The enumerations and limits below are the whole output contract: a widget
//! that passes [`crate::assistant::validate::validate_widget`] renders on the
//! dashboard without further client-side checks.

use serde::{Deserialize, Serialize};

/// Upper bound on widgets in a single plan.
pub const MAX_WIDGETS_PER_PLAN: usize = 4;
/// Widget titles are cut to this many characters.
pub const MAX_TITLE_CHARS: usize = 80;
/// Helper captions are cut to this many characters.
pub const MAX_HELPER_CHARS: usize = 120;
/// Assistant replies are cut to this many characters.
pub const MAX_REPLY_CHARS: usize = 600;
/// Only this many trailing conversation turns are kept per request.
pub const MAX_HISTORY_TURNS: usize = 8;
/// A single conversation turn is cut to this many characters.
pub const MAX_TURN_CHARS: usize = 1000;
/// Inclusive bounds for the `topN` display hint.
pub const TOP_N_MIN: i64 = 1;
pub const TOP_N_MAX: i64 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Bar,
    Doughnut,
    List,
    Stat,
}

impl WidgetKind {
    /// Parses a kind name, lower-casing before the match.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "bar" => Some(Self::Bar),
            "doughnut" => Some(Self::Doughnut),
            "list" => Some(Self::List),
            "stat" => Some(Self::Stat),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Doughnut => "doughnut",
            Self::List => "list",
            Self::Stat => "stat",
        }
    }

    /// The stat-source and series-source vocabularies are disjoint; a kind
    /// only accepts sources from its own set.
    pub fn accepts(&self, source: SourceId) -> bool {
        match self {
            Self::Stat => source.is_stat(),
            Self::Bar | Self::Doughnut | Self::List => !source.is_stat(),
        }
    }
}

/// Abstract identifier of a pre-aggregated statistic. Resolved to actual
/// numbers by the dashboard, never by this component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceId {
    // stat sources
    TicketsTotal,
    AvgPriority,
    VipShare,
    InRouting,
    // series sources
    ByCity,
    ByType,
    BySentiment,
    ByOffice,
    ByLanguage,
    TopCities,
}

impl SourceId {
    /// Parses a source id in its canonical camelCase spelling.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "ticketsTotal" => Some(Self::TicketsTotal),
            "avgPriority" => Some(Self::AvgPriority),
            "vipShare" => Some(Self::VipShare),
            "inRouting" => Some(Self::InRouting),
            "byCity" => Some(Self::ByCity),
            "byType" => Some(Self::ByType),
            "bySentiment" => Some(Self::BySentiment),
            "byOffice" => Some(Self::ByOffice),
            "byLanguage" => Some(Self::ByLanguage),
            "topCities" => Some(Self::TopCities),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TicketsTotal => "ticketsTotal",
            Self::AvgPriority => "avgPriority",
            Self::VipShare => "vipShare",
            Self::InRouting => "inRouting",
            Self::ByCity => "byCity",
            Self::ByType => "byType",
            Self::BySentiment => "bySentiment",
            Self::ByOffice => "byOffice",
            Self::ByLanguage => "byLanguage",
            Self::TopCities => "topCities",
        }
    }

    pub fn is_stat(&self) -> bool {
        matches!(self, Self::TicketsTotal | Self::AvgPriority | Self::VipShare | Self::InRouting)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Parses an orientation, lower-casing before the match.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }
}

/// A single renderable dashboard element.
///
/// Constructed only by the widget validator or the deterministic rule table;
/// there is no partially-valid representation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSpec {
    pub kind: WidgetKind,
    pub source: SourceId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper: Option<String>,
    #[serde(rename = "topN", skip_serializing_if = "Option::is_none")]
    pub top_n: Option<i64>,
}

/// The final response payload: a short natural-language reply plus 1..=4
/// schema-valid widgets, ordered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantPlan {
    pub reply: String,
    pub widgets: Vec<WidgetSpec>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "user" => Some(Self::User),
            "assistant" => Some(Self::Assistant),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One sanitized conversation turn. Lives only for the duration of a single
/// planning call; history is never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Speaker,
    pub content: String,
}

/// Cuts `text` to at most `max_chars` Unicode scalars. Byte truncation would
/// split Cyrillic product text mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
