//! Optional interpretation text for computed positions.
//!
//! Lookups are presentation-only and never influence the numbers. Any store
//! failure degrades to placeholder text.

pub mod document_store;
pub mod format;
pub mod lookup;
pub mod store;

pub use document_store::DocumentStore;
pub use format::{ascendant_line, house_line, ASCENDANT_PLACEHOLDER, HOUSE_PLACEHOLDER};
pub use lookup::{ChartReading, InterpretationLookup, DEFAULT_LOOKUP_TIMEOUT};
pub use store::{InterpretationRecord, InterpretationStore, NullStore};
