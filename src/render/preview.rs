use crate::model::Payload;
use itertools::Itertools;
use serde_json::{Number, Value};

/// Maximum number of characters shown for a single preview string.
pub const PREVIEW_LIMIT: usize = 20;
/// Maximum number of object fields shown before collapsing into a marker.
pub const FIELD_LIMIT: usize = 3;
/// Appended to truncated strings and shown as the overflow marker.
pub const ELLIPSIS: &str = "...";

/// What a preview entry stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Field,
    /// Collapsed fields beyond [`FIELD_LIMIT`]
    More,
}

/// One visible line of a field preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEntry {
    pub kind: EntryKind,
    /// Visible text, at most `PREVIEW_LIMIT + ELLIPSIS.len()` characters
    pub text: String,
    /// Untruncated hover text
    pub detail: String,
}

/// Preview of one input item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewItem {
    /// A `null` item; nothing is drawn
    Blank,
    Fields(Vec<PreviewEntry>),
    Scalar(String),
}

impl PreviewItem {
    pub fn is_blank(&self) -> bool {
        matches!(self, PreviewItem::Blank)
    }

    /// Strings that end up on screen, in drawing order.
    pub fn visible(&self) -> Vec<&str> {
        match self {
            PreviewItem::Blank => Vec::new(),
            PreviewItem::Fields(entries) => entries.iter().map(|e| e.text.as_str()).collect(),
            PreviewItem::Scalar(text) => vec![text.as_str()],
        }
    }
}

/// Formats step inputs into bounded previews.
pub struct PreviewFormatter;

impl PreviewFormatter {
    /// Normalizes a payload into preview items and formats each of them.
    pub fn format_payload(payload: Payload<'_>) -> Vec<PreviewItem> {
        payload.items().into_iter().map(Self::format_item).collect()
    }

    /// Formats a single preview item.
    pub fn format_item(item: Payload<'_>) -> PreviewItem {
        match item {
            Payload::Null => PreviewItem::Blank,
            Payload::Object(map) => Self::format_fields(map.iter().map(|(k, v)| (k.clone(), v))),
            // An array nested inside an array item is shown by index.
            Payload::Array(items) => {
                Self::format_fields(items.iter().enumerate().map(|(i, v)| (i.to_string(), v)))
            }
            Payload::Scalar(value) => PreviewItem::Scalar(truncate(&Self::scalar_text(value))),
        }
    }

    fn format_fields<'v>(fields: impl Iterator<Item = (String, &'v Value)>) -> PreviewItem {
        let combined: Vec<String> = fields
            .map(|(key, value)| Self::field_text(&key, value))
            .collect();

        let mut entries: Vec<PreviewEntry> = combined
            .iter()
            .take(FIELD_LIMIT)
            .map(|text| PreviewEntry {
                kind: EntryKind::Field,
                text: truncate(text),
                detail: text.clone(),
            })
            .collect();

        if combined.len() > FIELD_LIMIT {
            entries.push(PreviewEntry {
                kind: EntryKind::More,
                text: ELLIPSIS.to_string(),
                detail: combined[FIELD_LIMIT..].iter().join(", "),
            });
        }
        PreviewItem::Fields(entries)
    }

    /// `key:value` with the value as compact JSON, quotes and slashes removed.
    pub fn field_text(key: &str, value: &Value) -> String {
        format!("{}:{}", key, compact_text(value).replace(['"', '/'], ""))
    }

    fn scalar_text(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => number_text(n),
            other => other.to_string(),
        }
    }
}

/// Compact JSON of `value` with numbers in display form.
fn compact_text(value: &Value) -> String {
    match value {
        Value::Number(n) => number_text(n),
        Value::Array(items) => format!("[{}]", items.iter().map(compact_text).join(",")),
        Value::Object(map) => format!(
            "{{{}}}",
            map.iter()
                .map(|(k, v)| format!("{}:{}", Value::String(k.clone()), compact_text(v)))
                .join(",")
        ),
        other => other.to_string(),
    }
}

/// Display text of a number. Integer literals keep every digit; other
/// numbers use the shortest decimal form, so `25.0` shows as `25` and `1e2`
/// as `100`. Magnitudes from 1e21 up keep their document text.
pub fn number_text(number: &Number) -> String {
    let raw = number.to_string();
    if !raw.contains(['.', 'e', 'E']) {
        return raw;
    }
    match number.as_f64() {
        Some(value) if value == 0.0 => "0".to_string(),
        Some(value) if value.is_finite() && value.abs() < 1e21 => value.to_string(),
        _ => raw,
    }
}

/// Cuts `text` to [`PREVIEW_LIMIT`] characters, appending [`ELLIPSIS`] if
/// anything was removed.
pub fn truncate(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_LIMIT) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_limit() {
        assert_eq!(truncate("short"), "short");
        assert_eq!(truncate("exactly_twenty_chars"), "exactly_twenty_chars");
        assert_eq!(truncate("exactly_twenty_chars!"), "exactly_twenty_chars...");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let text = "№".repeat(21);
        let cut = truncate(&text);
        assert_eq!(cut.chars().count(), PREVIEW_LIMIT + ELLIPSIS.len());
        assert!(cut.starts_with(&"№".repeat(20)));
    }

    #[test]
    fn number_text_drops_float_noise() {
        let value: Value = serde_json::from_str("[25.0, 1e2, 1.50, -0.0, 0.25, 12345678901234567890123]").unwrap();
        let texts: Vec<String> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| number_text(v.as_number().unwrap()))
            .collect();
        assert_eq!(texts, ["25", "100", "1.5", "0", "0.25", "12345678901234567890123"]);
    }

    #[test]
    fn field_text_strips_quotes_and_slashes() {
        let value = serde_json::json!({"path": "/dev/tty"});
        assert_eq!(PreviewFormatter::field_text("k", &value), "k:{path:devtty}");
    }
}
