//! Content document model.
//!
//! Decoding is deliberately lenient: scalars accept any JSON value, sequences that are not
//! arrays count as absent, and sequence elements that fail to decode become empty records. Only
//! section presence is checked.

use leptos::logging;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::{Map, Value};
use site_host::ContentError;

/// Key of the about section in the content document.
pub const ABOUT_SECTION_KEY: &str = "about";
/// Key of the schedule/results section in the content document.
pub const SCHEDULE_SECTION_KEY: &str = "scheduleResults";

/// Number spelled the way a browser stringifies it: integral values without a fraction.
fn display_number(number: &serde_json::Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if let Some(uint) = number.as_u64() {
        return uint.to_string();
    }
    match number.as_f64() {
        Some(float) if float == 0.0 => "0".to_string(),
        Some(float) => float.to_string(),
        None => number.to_string(),
    }
}

/// JavaScript-style truthiness for JSON values.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Scalar content field that accepts any JSON value.
pub struct Text(Value);

impl Text {
    /// Whether the value is truthy (not null, `false`, `0` or `""`).
    pub fn is_truthy(&self) -> bool {
        is_truthy(&self.0)
    }

    /// Display form: strings verbatim, integral numbers without a fraction (`2024.0` is
    /// `"2024"`), booleans in JSON spelling, null as `""`.
    pub fn display(&self) -> String {
        match &self.0 {
            Value::Null => String::new(),
            Value::String(text) => text.clone(),
            Value::Number(number) => display_number(number),
            other => other.to_string(),
        }
    }

    /// Display form for truthy values, `None` otherwise.
    pub fn truthy_text(&self) -> Option<String> {
        self.is_truthy().then(|| self.display())
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self)
    }
}

fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| T::deserialize(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
/// The about page section.
pub struct AboutSection {
    /// Page heading.
    pub title: Text,
    /// Lead paragraph.
    pub lead: Text,
    /// Guiding principles; `None` when absent or not an array.
    #[serde(deserialize_with = "lenient_seq")]
    pub principles: Option<Vec<Principle>>,
    /// Chronological history entries; `None` when absent or not an array.
    #[serde(deserialize_with = "lenient_seq")]
    pub history: Option<Vec<HistoryEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
/// One principle with a short title and a body paragraph.
pub struct Principle {
    /// Bold sub-heading.
    pub title: Text,
    /// Paragraph text.
    pub body: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
/// One history line.
pub struct HistoryEntry {
    /// Year label.
    pub year: Text,
    /// What happened.
    pub detail: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
/// The schedule/results page section.
pub struct ScheduleSection {
    /// Page heading.
    pub title: Text,
    /// Last-updated label.
    pub updated: Text,
    /// Seasons in display order; `None` when absent or not an array.
    #[serde(deserialize_with = "lenient_seq")]
    pub seasons: Option<Vec<Season>>,
    /// Trailing note paragraph.
    pub note: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
/// One season of matches.
pub struct Season {
    /// Season year label.
    pub year: Text,
    /// Matches in display order; `None` when absent or not an array.
    #[serde(deserialize_with = "lenient_seq")]
    pub matches: Option<Vec<MatchRecord>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
/// One table row of the schedule.
pub struct MatchRecord {
    /// Match date.
    pub date: Text,
    /// Event name.
    pub name: Text,
    /// Venue.
    pub location: Text,
    /// Outcome.
    pub result: Text,
    /// Free-form remark.
    pub note: Text,
}

impl MatchRecord {
    /// Cell values in column order, falsy values rendered as `""`.
    pub fn cells(&self) -> [String; 5] {
        [
            &self.date,
            &self.name,
            &self.location,
            &self.result,
            &self.note,
        ]
        .map(|field| field.truthy_text().unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// The fetched content document: an open mapping from section keys to section payloads.
pub struct ContentDocument {
    sections: Map<String, Value>,
}

impl ContentDocument {
    /// Wraps a decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Malformed`] when `value` is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self, ContentError> {
        match value {
            Value::Object(sections) => Ok(Self { sections }),
            other => Err(ContentError::Malformed(format!(
                "expected a JSON object at the top level, found `{other}`"
            ))),
        }
    }

    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Malformed`] when `raw` is not JSON or not an object.
    pub fn from_json_str(raw: &str) -> Result<Self, ContentError> {
        let value = serde_json::from_str(raw).map_err(|e| ContentError::Malformed(e.to_string()))?;
        Self::from_value(value)
    }

    /// Raw section payload, treating falsy payloads as absent.
    pub fn raw_section(&self, key: &str) -> Option<&Value> {
        self.sections.get(key).filter(|value| is_truthy(value))
    }

    /// Decodes a present section. A section that cannot be decoded is logged and treated as
    /// absent.
    pub fn section<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.raw_section(key)?;
        match T::deserialize(raw) {
            Ok(section) => Some(section),
            Err(err) => {
                logging::warn!("content section `{key}` could not be decoded: {err}");
                None
            }
        }
    }

    /// The about section, if present.
    pub fn about(&self) -> Option<AboutSection> {
        self.section(ABOUT_SECTION_KEY)
    }

    /// The schedule/results section, if present.
    pub fn schedule_results(&self) -> Option<ScheduleSection> {
        self.section(SCHEDULE_SECTION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn doc(value: Value) -> ContentDocument {
        ContentDocument::from_value(value).expect("object document")
    }

    #[test]
    fn top_level_must_be_an_object() {
        assert!(matches!(
            ContentDocument::from_json_str("[1, 2]"),
            Err(ContentError::Malformed(_))
        ));
        assert!(matches!(
            ContentDocument::from_json_str("{not json"),
            Err(ContentError::Malformed(_))
        ));
        assert_eq!(
            ContentDocument::from_json_str("{}").expect("empty object"),
            ContentDocument::default()
        );
    }

    #[test]
    fn falsy_sections_are_absent() {
        let document = doc(json!({ "about": null, "scheduleResults": false }));
        assert_eq!(document.about(), None);
        assert_eq!(document.schedule_results(), None);
        assert_eq!(doc(json!({})).about(), None);
    }

    #[test]
    fn undecodable_section_is_absent() {
        assert_eq!(doc(json!({ "about": "just a string" })).about(), None);
    }

    #[test]
    fn scalars_follow_truthiness_and_display_rules() {
        let record: MatchRecord = serde_json::from_value(json!({
            "date": "2024-01-01",
            "name": 0,
            "location": 12,
            "result": false,
        }))
        .expect("match record");

        assert_eq!(
            record.cells(),
            [
                "2024-01-01".to_string(),
                String::new(),
                "12".to_string(),
                String::new(),
                String::new(),
            ]
        );
        assert_eq!(Text::default().display(), "");
        assert_eq!(Text::from("x").truthy_text().as_deref(), Some("x"));
    }

    #[test]
    fn numbers_display_like_the_browser() {
        let text = |value: Value| Text(value).display();

        assert_eq!(text(json!(2024.0)), "2024");
        assert_eq!(text(json!(1.5)), "1.5");
        assert_eq!(text(json!(-0.0)), "0");
        assert_eq!(text(json!(-3)), "-3");
        assert_eq!(text(json!(u64::MAX)), u64::MAX.to_string());
        assert_eq!(text(json!(true)), "true");

        let season: Season = serde_json::from_str(r#"{"year": 2024.0}"#).expect("season");
        assert_eq!(season.year.display(), "2024");
    }

    #[test]
    fn non_array_sequences_are_absent_and_bad_elements_are_empty() {
        let about: AboutSection = serde_json::from_value(json!({
            "title": "T",
            "principles": { "title": "not a list" },
            "history": [{ "year": 1999, "detail": "Founded" }, null],
        }))
        .expect("about section");

        assert_eq!(about.principles, None);
        let history = about.history.expect("history array");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].year.display(), "1999");
        assert_eq!(history[1], HistoryEntry::default());
    }
}
