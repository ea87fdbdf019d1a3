//! Interpretation store over named collections of JSON documents.
//!
//! Mirrors the layout of the interpretation database: an
//! `ascendant_interpretations` collection keyed by Thai sign name, and a
//! house collection keyed by house number. Field and key names vary between
//! data sets, so each lookup tries a fixed list of alternatives.

use crate::error::StoreError;
use crate::interpretation::store::{InterpretationRecord, InterpretationStore};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

pub const ASCENDANT_COLLECTION: &str = "ascendant_interpretations";

/// House collections, in the order they are consulted.
pub const HOUSE_COLLECTIONS: &[&str] = &["house_interpretations", "house_meanings"];

const SIGN_KEY: &str = "sign";
const HOUSE_KEYS: &[&str] = &["house_number", "number"];
const ASCENDANT_TEXT_FIELDS: &[&str] = &["interpretation", "text"];
const HOUSE_TEXT_FIELDS: &[&str] = &["meaning", "description", "text"];

#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    collections: HashMap<String, Vec<Value>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, name: impl Into<String>, documents: Vec<Value>) -> Self {
        self.collections.insert(name.into(), documents);
        self
    }

    /// Build from a JSON object mapping collection names to document arrays.
    pub fn from_value(value: Value) -> Result<Self, StoreError> {
        let Value::Object(root) = value else {
            return Err(StoreError::Malformed {
                collection: "<root>".to_string(),
                message: "expected an object of collections".to_string(),
            });
        };

        let mut collections = HashMap::new();
        for (name, documents) in root {
            match documents {
                Value::Array(documents) => {
                    collections.insert(name, documents);
                }
                other => {
                    return Err(StoreError::Malformed {
                        collection: name,
                        message: format!("expected an array of documents, got {}", kind(&other)),
                    });
                }
            }
        }
        Ok(Self { collections })
    }

    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Load a JSON export of the interpretation collections.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let store = Self::from_json_str(&text)?;
        log::info!(
            "Loaded interpretation store from {} ({} collections)",
            path.display(),
            store.collections.len()
        );
        Ok(store)
    }

    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    fn collection(&self, name: &str) -> Option<&[Value]> {
        self.collections.get(name).map(Vec::as_slice)
    }

    fn find_one<'a>(
        documents: &'a [Value],
        predicate: impl Fn(&Map<String, Value>) -> bool,
    ) -> Option<&'a Value> {
        documents
            .iter()
            .find(|doc| doc.as_object().is_some_and(|obj| predicate(obj)))
    }
}

#[async_trait]
impl InterpretationStore for DocumentStore {
    fn name(&self) -> &str {
        "document"
    }

    async fn find_by_sign(&self, sign_name: &str) -> Result<InterpretationRecord, StoreError> {
        let Some(documents) = self.collection(ASCENDANT_COLLECTION) else {
            return Ok(InterpretationRecord::empty());
        };
        let record = Self::find_one(documents, |doc| {
            doc.get(SIGN_KEY).and_then(Value::as_str) == Some(sign_name)
        })
        .map(|doc| InterpretationRecord::from_fields(doc, ASCENDANT_TEXT_FIELDS))
        .unwrap_or_default();
        Ok(record)
    }

    async fn find_by_house(&self, house_number: u8) -> Result<InterpretationRecord, StoreError> {
        let Some(documents) = HOUSE_COLLECTIONS
            .iter()
            .find_map(|name| self.collection(name))
        else {
            return Ok(InterpretationRecord::empty());
        };

        let record = HOUSE_KEYS
            .iter()
            .find_map(|key| {
                Self::find_one(documents, |doc| {
                    doc.get(*key).is_some_and(|v| matches_number(v, house_number))
                })
            })
            .map(|doc| InterpretationRecord::from_fields(doc, HOUSE_TEXT_FIELDS))
            .unwrap_or_default();
        Ok(record)
    }
}

// 3 and 3.0 are the same key.
fn matches_number(value: &Value, expected: u8) -> bool {
    value.as_f64() == Some(f64::from(expected))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
