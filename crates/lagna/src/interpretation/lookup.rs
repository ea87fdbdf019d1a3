//! Bounded interpretation lookups rendered into reply lines.

use crate::ascendant::AscendantResult;
use crate::chart::BirthChart;
use crate::error::StoreError;
use crate::houses::HouseCusp;
use crate::interpretation::format::{
    ascendant_line, house_line, house_unavailable, ASCENDANT_PLACEHOLDER, ASCENDANT_UNAVAILABLE,
    HOUSE_PLACEHOLDER,
};
use crate::interpretation::store::{InterpretationRecord, InterpretationStore, NullStore};
use futures::future::join_all;
use log::warn;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Upper bound on a single store round trip.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Rendered interpretation lines for a whole chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartReading {
    pub ascendant: String,
    /// House number -> rendered line.
    pub houses: BTreeMap<u8, String>,
}

impl ChartReading {
    /// Ascendant line first, then houses 1..=12.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.ascendant.as_str()).chain(self.houses.values().map(String::as_str))
    }
}

/// Fetches interpretation text and renders it into reply lines.
///
/// Never fails: unreachable, slow, or empty stores produce placeholder text.
#[derive(Clone)]
pub struct InterpretationLookup {
    store: Arc<dyn InterpretationStore>,
    timeout: Duration,
}

impl InterpretationLookup {
    pub fn new(store: Arc<dyn InterpretationStore>) -> Self {
        Self {
            store,
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    /// Lookup with no backing store; every text is a placeholder.
    pub fn offline() -> Self {
        Self::new(Arc::new(NullStore))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Interpretation line for a computed Ascendant.
    pub async fn ascendant_text(&self, ascendant: &AscendantResult) -> String {
        let text = self
            .fetch(
                &format!("ascendant {}", ascendant.sign_name()),
                self.store.find_by_sign(ascendant.sign_name()),
            )
            .await
            .unwrap_or_else(|| ASCENDANT_PLACEHOLDER.to_string());
        ascendant_line(&text, &ascendant.position)
    }

    /// Interpretation line for one house cusp.
    pub async fn house_text(&self, cusp: &HouseCusp) -> String {
        let meaning = self
            .fetch(
                &format!("house {}", cusp.number),
                self.store.find_by_house(cusp.number),
            )
            .await
            .unwrap_or_else(|| HOUSE_PLACEHOLDER.to_string());
        house_line(cusp.number, &meaning, &cusp.position)
    }

    /// Like [`Self::ascendant_text`], with a fixed message when no Ascendant
    /// could be computed.
    pub async fn describe_ascendant(&self, ascendant: Option<&AscendantResult>) -> String {
        match ascendant {
            Some(ascendant) => self.ascendant_text(ascendant).await,
            None => ASCENDANT_UNAVAILABLE.to_string(),
        }
    }

    /// Like [`Self::house_text`], with a fixed message when the house could
    /// not be computed.
    pub async fn describe_house(&self, house_number: u8, cusp: Option<&HouseCusp>) -> String {
        match cusp {
            Some(cusp) => self.house_text(cusp).await,
            None => house_unavailable(house_number),
        }
    }

    /// All interpretation lines for a chart. Lookups run concurrently.
    pub async fn read_chart(&self, chart: &BirthChart) -> ChartReading {
        let (ascendant, house_lines) = tokio::join!(
            self.ascendant_text(&chart.ascendant),
            join_all(chart.houses.iter().map(|cusp| self.house_text(cusp)))
        );
        let houses = chart
            .houses
            .iter()
            .map(|cusp| cusp.number)
            .zip(house_lines)
            .collect();
        ChartReading { ascendant, houses }
    }

    async fn fetch<F>(&self, what: &str, lookup: F) -> Option<String>
    where
        F: Future<Output = Result<InterpretationRecord, StoreError>>,
    {
        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(Ok(record)) => record.into_text(),
            Ok(Err(e)) => {
                warn!(
                    "Interpretation lookup for {} failed on {} store: {}",
                    what,
                    self.store.name(),
                    e
                );
                None
            }
            Err(_) => {
                warn!(
                    "Interpretation lookup for {} timed out after {:?} on {} store",
                    what,
                    self.timeout,
                    self.store.name()
                );
                None
            }
        }
    }
}

impl Default for InterpretationLookup {
    fn default() -> Self {
        Self::offline()
    }
}

impl fmt::Debug for InterpretationLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterpretationLookup")
            .field("store", &self.store.name())
            .field("timeout", &self.timeout)
            .finish()
    }
}
