use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One upstream book record. Only the keys the normalizer consults are kept;
/// `null` and absent keys both land as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    pub title: Option<Value>,
    pub name: Option<Value>,
    #[serde(rename = "bookTitle")]
    pub book_title: Option<Value>,
    pub author: Option<AuthorField>,
    pub authors: Option<Value>,
    pub writer: Option<Value>,
    pub isbn: Option<Value>,
    #[serde(rename = "ISBN")]
    pub isbn_upper: Option<Value>,
    pub identifiers: Option<Value>,
    #[serde(rename = "industryIdentifiers")]
    pub industry_identifiers: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AuthorField {
    Name(String),
    Person(Map<String, Value>),
    Other(Value),
}

/// `{type, identifier}` entry of an `identifiers` or `industryIdentifiers` list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Identifier {
    #[serde(rename = "type")]
    pub kind: Option<Value>,
    pub identifier: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl RawRecord {
    /// Anything that is not a JSON object is treated as an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

impl Identifier {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(_) => serde_json::from_value(value.clone()).ok(),
            _ => None,
        }
    }
}

impl CanonicalBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }
}
