//! Maps loosely shaped upstream records onto [`CanonicalBook`].
//!
//! Every field is an ordered chain of candidate lookups; the first candidate
//! that yields non-empty text wins. Absent keys, `null` and `""` are empty.
//! Numbers count as text so numeric ISBNs survive.

use crate::domain::model::{AuthorField, CanonicalBook, Identifier, RawRecord};
use serde_json::Value;

pub fn normalize(raw: &RawRecord) -> CanonicalBook {
    CanonicalBook {
        title: normalize_title(raw),
        author: normalize_author(raw),
        isbn: normalize_isbn(raw),
    }
}

fn normalize_title(raw: &RawRecord) -> String {
    [&raw.title, &raw.name, &raw.book_title]
        .into_iter()
        .find_map(|field| field.as_ref().and_then(scalar_text))
        .unwrap_or_default()
}

fn normalize_author(raw: &RawRecord) -> String {
    match &raw.author {
        Some(AuthorField::Name(name)) if !name.is_empty() => return name.clone(),
        // A person object decides the author on its own, even without a name.
        Some(AuthorField::Person(person)) => {
            return person.get("name").and_then(scalar_text).unwrap_or_default();
        }
        _ => {}
    }

    [&raw.authors, &raw.writer]
        .into_iter()
        .find_map(|field| field.as_ref().and_then(joined_text))
        .unwrap_or_default()
}

fn normalize_isbn(raw: &RawRecord) -> String {
    [&raw.isbn, &raw.isbn_upper]
        .into_iter()
        .find_map(|field| field.as_ref().and_then(first_text))
        .or_else(|| raw.identifiers.as_ref().and_then(isbn_from_identifiers))
        .or_else(|| {
            raw.industry_identifiers
                .as_ref()
                .and_then(first_identifier)
        })
        .unwrap_or_default()
}

/// Prefers an entry whose type mentions "isbn", otherwise the first entry.
fn isbn_from_identifiers(value: &Value) -> Option<String> {
    let entries: Vec<Identifier> = value
        .as_array()?
        .iter()
        .map(|entry| Identifier::from_value(entry).unwrap_or_default())
        .collect();

    entries
        .iter()
        .find(|entry| {
            entry
                .kind
                .as_ref()
                .and_then(Value::as_str)
                .is_some_and(|kind| kind.to_lowercase().contains("isbn"))
        })
        .and_then(identifier_text)
        .or_else(|| entries.first().and_then(identifier_text))
}

fn first_identifier(value: &Value) -> Option<String> {
    value
        .as_array()?
        .first()
        .and_then(Identifier::from_value)
        .as_ref()
        .and_then(identifier_text)
}

fn identifier_text(entry: &Identifier) -> Option<String> {
    entry.identifier.as_ref().and_then(scalar_text)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => items.iter().find_map(scalar_text),
        other => scalar_text(other),
    }
}

/// Author lists may hold plain names or `{name}` objects.
fn joined_text(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => {
            let names: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::Object(obj) => obj.get("name").and_then(scalar_text),
                    other => scalar_text(other),
                })
                .collect();
            if names.is_empty() {
                None
            } else {
                Some(names.join(", "))
            }
        }
        other => scalar_text(other),
    }
}
