//! Widget candidate validator.
//!
//! Generative output is treated as hostile: candidates arrive as raw JSON and
//! are either rebuilt into a fully valid [`WidgetSpec`] or rejected outright.
//! Optional fields degrade individually (a bad `topN` drops the field, not
//! the widget); required fields short-circuit.

use serde_json::Value;

use super::schema::{
    truncate_chars, Orientation, SourceId, WidgetKind, WidgetSpec, MAX_HELPER_CHARS,
    MAX_TITLE_CHARS, TOP_N_MAX, TOP_N_MIN,
};

/// Validates one raw widget candidate. Returns `None` on any structural
/// violation; never panics, never returns a partial widget.
pub fn validate_widget(raw: &Value) -> Option<WidgetSpec> {
    let record = raw.as_object()?;

    let kind = WidgetKind::parse(record.get("kind")?.as_str()?)?;
    let source_raw = record.get("source")?.as_str()?;
    let title = record.get("title")?.as_str()?.trim();
    if title.is_empty() {
        return None;
    }

    let source = SourceId::parse(source_raw)?;
    if !kind.accepts(source) {
        return None;
    }

    let helper = record
        .get("helper")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| truncate_chars(value, MAX_HELPER_CHARS).to_string());

    // Orientation is meaningful for bar charts only; an unparseable value is
    // simply absent, not an error.
    let orientation = match kind {
        WidgetKind::Bar => {
            record.get("orientation").and_then(Value::as_str).and_then(Orientation::parse)
        }
        _ => None,
    };

    let top_n = record.get("topN").and_then(coerce_integer).map(|n| n.clamp(TOP_N_MIN, TOP_N_MAX));

    Some(WidgetSpec {
        kind,
        source,
        title: truncate_chars(title, MAX_TITLE_CHARS).to_string(),
        orientation,
        helper,
        top_n,
    })
}

/// Accepts JSON integers and integral floats; completion backends routinely
/// emit `5.0` where `5` is meant. Anything else is not coercible.
fn coerce_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value.as_f64().filter(|f| f.is_finite() && f.fract() == 0.0).map(|f| f as i64)
}
