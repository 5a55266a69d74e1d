//! Trip planning requests, responses and the planner boundary.

use std::collections::HashSet;
use std::time::Duration;

use thiserror::Error;

use crate::{AvailabilityError, Ingredient, TripResult};

/// Stops allowed on a trip when the caller does not say otherwise.
pub const DEFAULT_MAX_STOPS: u8 = 3;

#[cfg(feature = "serde")]
const fn default_max_stops() -> u8 {
    DEFAULT_MAX_STOPS
}

/// Parameters for a planning request.
///
/// # Examples
/// ```rust
/// use feast_core::{Ingredient, TripRequest};
///
/// let request = TripRequest::new(vec![
///     Ingredient::new("tomato")?,
///     Ingredient::new("basil")?,
/// ])
/// .with_owned(vec![Ingredient::new("basil")?])
/// .with_max_stops(2);
/// assert_eq!(request.unowned(), vec![Ingredient::new("tomato")?]);
/// # Ok::<(), feast_core::IngredientError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TripRequest {
    /// Ingredients the recipe calls for.
    pub ingredients: Vec<Ingredient>,
    /// Ingredients the caller already holds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub owned: Vec<Ingredient>,
    /// Upper bound on markets visited.
    #[cfg_attr(feature = "serde", serde(default = "default_max_stops"))]
    pub max_stops: u8,
}

/// Reasons a [`TripRequest`] is rejected by [`TripRequest::validate_detailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TripRequestValidationError {
    /// The request names no ingredients.
    #[error("request must name at least one ingredient")]
    NoIngredients,
    /// Every requested ingredient is already owned.
    #[error("every requested ingredient is already owned")]
    NothingToBuy,
    /// `max_stops` was zero.
    #[error("max stops must be at least one")]
    ZeroStops,
}

impl TripRequest {
    /// Construct a request with no owned ingredients and the default stop
    /// bound.
    pub const fn new(ingredients: Vec<Ingredient>) -> Self {
        Self {
            ingredients,
            owned: Vec::new(),
            max_stops: DEFAULT_MAX_STOPS,
        }
    }

    /// Replace the owned ingredients while returning `self` for chaining.
    #[must_use]
    pub fn with_owned(mut self, owned: Vec<Ingredient>) -> Self {
        self.owned = owned;
        self
    }

    /// Replace the stop bound while returning `self` for chaining.
    #[must_use]
    pub const fn with_max_stops(mut self, max_stops: u8) -> Self {
        self.max_stops = max_stops;
        self
    }

    /// Ingredients still to buy, deduplicated in first-occurrence order.
    pub fn unowned(&self) -> Vec<Ingredient> {
        let owned: HashSet<&Ingredient> = self.owned.iter().collect();
        let mut seen = HashSet::new();
        self.ingredients
            .iter()
            .filter(|ingredient| !owned.contains(ingredient))
            .filter(|ingredient| seen.insert(*ingredient))
            .cloned()
            .collect()
    }

    /// Check the request and report the first problem found.
    ///
    /// Planners accept invalid requests and answer them with an empty plan;
    /// this check is for input surfaces that prefer to reject them.
    ///
    /// # Errors
    /// Returns the matching [`TripRequestValidationError`].
    pub fn validate_detailed(&self) -> Result<(), TripRequestValidationError> {
        if self.ingredients.is_empty() {
            return Err(TripRequestValidationError::NoIngredients);
        }
        if self.max_stops == 0 {
            return Err(TripRequestValidationError::ZeroStops);
        }
        if self.unowned().is_empty() {
            return Err(TripRequestValidationError::NothingToBuy);
        }
        Ok(())
    }
}

/// Search statistics reported alongside a plan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Diagnostics {
    /// Wall-clock time spent planning.
    pub solve_time: Duration,
    /// Market combinations scored.
    pub combinations_evaluated: u64,
    /// Largest trip length searched.
    pub stops_searched: u8,
    /// Whether the evaluation budget cut the search short.
    pub budget_exhausted: bool,
}

/// Result of a planning request.
///
/// `trip` is `None` when no market carries any needed ingredient, or when the
/// request leaves nothing to search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanResponse {
    /// The chosen trip, if any.
    pub trip: Option<TripResult>,
    /// Search statistics.
    pub diagnostics: Diagnostics,
}

impl PlanResponse {
    /// A response with no trip.
    pub const fn no_trip(diagnostics: Diagnostics) -> Self {
        Self {
            trip: None,
            diagnostics,
        }
    }
}

/// Errors returned by [`TripPlanner::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Availability data could not be fetched.
    #[error("failed to fetch market availability: {0}")]
    Source(#[from] AvailabilityError),
}

/// Choose markets covering a request's ingredients.
///
/// Implementations resolve degenerate requests (no ingredients, zero stops)
/// to a response without a trip rather than an error. Planners must be
/// `Send + Sync` so they can run on a worker thread.
pub trait TripPlanner: Send + Sync {
    /// Plan a trip for `request`.
    ///
    /// # Errors
    /// Returns [`PlanError`] when the planner's collaborators fail.
    fn plan(&self, request: &TripRequest) -> Result<PlanResponse, PlanError>;
}
