//! Content values: the decoded shape of any API response.
//!
//! Responses are converted once, at the fetch boundary, from
//! `serde_json::Value` into [`ContentValue`]. The renderer only ever sees this
//! union, so it never has to inspect raw JSON.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Number, Value as JsonValue};

pub const ID_FIELD: &str = "id";
pub const LABEL_FIELD: &str = "label";
pub const NAME_FIELD: &str = "name";
pub const URL_FIELD: &str = "url";

/// Fields consumed as presentation metadata, never rendered as sections.
pub const RESERVED_FIELDS: [&str; 4] = [ID_FIELD, LABEL_FIELD, NAME_FIELD, URL_FIELD];

/// Envelope field used by collection endpoints.
pub const RESULTS_FIELD: &str = "results";

pub fn is_reserved(field: &str) -> bool {
    RESERVED_FIELDS.contains(&field)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentValue {
    Scalar(Scalar),
    Sequence(Vec<ContentValue>),
    Record(Record),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scalar {
    Null,
    Bool(bool),
    /// Kept as a JSON number so integers never gain a fractional part.
    Number(Number),
    Text(String),
}

/// Field name -> value, in the order the data source delivered them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: IndexMap<String, ContentValue>,
}

impl ContentValue {
    pub fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Text(text.into()))
    }

    /// Empty values are skipped by the renderer when they appear as fields.
    ///
    /// Only `null`, `""`, `[]` and `{}` count; `0` and `false` are content.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(Scalar::Null) => true,
            Self::Scalar(Scalar::Text(text)) => text.is_empty(),
            Self::Scalar(_) => false,
            Self::Sequence(items) => items.is_empty(),
            Self::Record(record) => record.is_empty(),
        }
    }

    /// Containers are always truthy, even when empty.
    fn is_truthy(&self) -> bool {
        match self {
            Self::Scalar(Scalar::Null) => false,
            Self::Scalar(Scalar::Bool(value)) => *value,
            Self::Scalar(Scalar::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
            Self::Scalar(Scalar::Text(text)) => !text.is_empty(),
            Self::Sequence(_) | Self::Record(_) => true,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ContentValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Textual form of a scalar; `None` for null and for containers.
    pub fn to_text(&self) -> Option<String> {
        self.as_scalar().and_then(Scalar::to_text)
    }

    /// The value to display for a response body.
    ///
    /// Collection endpoints wrap their items as `{"results": [...], "count": n}`;
    /// the items are shown and the rest of the envelope is dropped. A missing
    /// `results`, or one that is `null`, `""`, `0` or `false`, leaves the body
    /// as it is.
    pub fn unwrap_envelope(self) -> Self {
        match self {
            Self::Record(mut record) => {
                let has_results = record.get(RESULTS_FIELD).is_some_and(Self::is_truthy);
                if has_results {
                    record.fields.swap_remove(RESULTS_FIELD).unwrap_or_else(Self::null)
                } else {
                    Self::Record(record)
                }
            }
            other => other,
        }
    }
}

impl Scalar {
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; a repeated name keeps its first position.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ContentValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&ContentValue> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContentValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Title text: `label` when present and non-empty, otherwise `name`.
    pub fn title_text(&self) -> Option<String> {
        let non_empty = |field: &str| {
            self.get(field)
                .and_then(ContentValue::to_text)
                .filter(|text| !text.is_empty())
        };
        non_empty(LABEL_FIELD).or_else(|| non_empty(NAME_FIELD))
    }

    /// Drill-down location from the `url` field.
    pub fn location(&self) -> Option<&str> {
        match self.get(URL_FIELD) {
            Some(ContentValue::Scalar(Scalar::Text(url))) if !url.is_empty() => Some(url),
            _ => None,
        }
    }

    /// Fields rendered as sections: not reserved, not empty, in source order.
    pub fn content_fields(&self) -> impl Iterator<Item = (&str, &ContentValue)> {
        self.iter()
            .filter(|(name, value)| !is_reserved(name) && !value.is_empty())
    }
}

impl From<JsonValue> for ContentValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Scalar(Scalar::Null),
            JsonValue::Bool(value) => Self::Scalar(Scalar::Bool(value)),
            JsonValue::Number(number) => Self::Scalar(Scalar::Number(number)),
            JsonValue::String(text) => Self::Scalar(Scalar::Text(text)),
            JsonValue::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(map) => Self::Record(Record {
                fields: map
                    .into_iter()
                    .map(|(name, value)| (name, Self::from(value)))
                    .collect(),
            }),
        }
    }
}

impl From<Record> for ContentValue {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Vec<ContentValue>> for ContentValue {
    fn from(items: Vec<ContentValue>) -> Self {
        Self::Sequence(items)
    }
}

impl From<&str> for ContentValue {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for ContentValue {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<bool> for ContentValue {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for ContentValue {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Number(value.into()))
    }
}
