//! The interpretation store capability and its null implementation.

use crate::error::StoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Interpretation text as returned by a store, already normalized to one
/// field regardless of how the backing record names it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationRecord {
    pub text: Option<String>,
}

impl InterpretationRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Take the first candidate field holding a non-blank string, trimmed.
    pub fn from_fields(document: &Value, fields: &[&str]) -> Self {
        let text = fields.iter().find_map(|field| {
            document
                .get(*field)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        });
        Self { text }
    }

    /// The text, if present and not blank.
    pub fn into_text(self) -> Option<String> {
        self.text.filter(|text| !text.trim().is_empty())
    }
}

/// Keyed source of interpretation text.
///
/// Implementations report failures as [`StoreError`]; the lookup adapter
/// turns every failure into placeholder text.
#[async_trait]
pub trait InterpretationStore: Send + Sync {
    fn name(&self) -> &str;

    /// Ascendant interpretation for a Thai sign name.
    async fn find_by_sign(&self, sign_name: &str) -> Result<InterpretationRecord, StoreError>;

    /// Meaning of a house, 1..=12.
    async fn find_by_house(&self, house_number: u8) -> Result<InterpretationRecord, StoreError>;
}

/// Store used when none is configured. Always returns an empty record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

#[async_trait]
impl InterpretationStore for NullStore {
    fn name(&self) -> &str {
        "null"
    }

    async fn find_by_sign(&self, _sign_name: &str) -> Result<InterpretationRecord, StoreError> {
        Ok(InterpretationRecord::empty())
    }

    async fn find_by_house(&self, _house_number: u8) -> Result<InterpretationRecord, StoreError> {
        Ok(InterpretationRecord::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_fields_priority() {
        let doc = json!({"text": "fallback", "interpretation": "primary"});
        assert_eq!(
            InterpretationRecord::from_fields(&doc, &["interpretation", "text"]),
            InterpretationRecord::new("primary")
        );
    }

    #[test]
    fn test_from_fields_skips_blank_and_non_string() {
        let doc = json!({"meaning": "   ", "description": 42, "text": "  ตัวตน  "});
        assert_eq!(
            InterpretationRecord::from_fields(&doc, &["meaning", "description", "text"]),
            InterpretationRecord::new("ตัวตน")
        );
    }

    #[test]
    fn test_from_fields_nothing_usable() {
        let doc = json!({"sign": "เมษ"});
        assert_eq!(
            InterpretationRecord::from_fields(&doc, &["interpretation", "text"]),
            InterpretationRecord::empty()
        );
    }

    #[test]
    fn test_into_text_drops_blank() {
        assert_eq!(InterpretationRecord::new(" ").into_text(), None);
        assert_eq!(InterpretationRecord::new("x").into_text(), Some("x".to_string()));
    }

    #[tokio::test]
    async fn test_null_store_is_empty() {
        let store = NullStore;
        assert_eq!(store.find_by_sign("เมษ").await.unwrap(), InterpretationRecord::empty());
        assert_eq!(store.find_by_house(1).await.unwrap(), InterpretationRecord::empty());
    }
}
