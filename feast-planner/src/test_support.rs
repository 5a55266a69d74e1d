//! Test-only utilities for `feast-planner`.
//!
//! Available to unit and behavioural tests, and to other crates through the
//! `test-support` feature.

use std::sync::Mutex;

use feast_core::{AvailabilityError, AvailabilitySource, Ingredient, Market, MarketCatalog};

/// An [`AvailabilitySource`] that remembers every ingredient list it was
/// asked about before answering from a [`MarketCatalog`].
#[derive(Debug)]
pub struct RecordingSource {
    catalog: MarketCatalog,
    requests: Mutex<Vec<Vec<Ingredient>>>,
}

impl RecordingSource {
    /// Wrap `markets` in a recording catalog.
    #[must_use]
    pub fn new(markets: Vec<Market>) -> Self {
        Self {
            catalog: MarketCatalog::new(markets),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Ingredient lists seen so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<Vec<Ingredient>> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl AvailabilitySource for RecordingSource {
    fn markets_for(&self, ingredients: &[Ingredient]) -> Result<Vec<Market>, AvailabilityError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(ingredients.to_vec());
        }
        self.catalog.markets_for(ingredients)
    }
}
