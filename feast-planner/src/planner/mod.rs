//! `ExhaustivePlanner`: the trip planner backed by the bounded search.

use std::time::Instant;

use feast_core::{
    AvailabilitySource, Diagnostics, PlanError, PlanResponse, TripPlanner, TripRequest,
};
use log::debug;

use crate::{SearchLimits, search};

/// Tuning for [`ExhaustivePlanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlannerConfig {
    /// Cap on combinations scored per request. `None` searches every trip
    /// length up to the request's stop bound.
    pub evaluation_budget: Option<u64>,
}

/// Planner that fetches candidate markets from an [`AvailabilitySource`] and
/// searches every combination up to the request's stop bound.
///
/// # Examples
/// ```rust
/// use feast_core::{Ingredient, MarketCatalog, TripPlanner, TripRequest};
/// use feast_core::{Availability, Market};
/// use feast_planner::ExhaustivePlanner;
///
/// let tomato = Ingredient::new("tomato")?;
/// let catalog = MarketCatalog::new(vec![Market::new(
///     "Riverside",
///     Availability::new().with(tomato.clone(), true),
/// )]);
/// let planner = ExhaustivePlanner::new(catalog);
///
/// let response = planner.plan(&TripRequest::new(vec![tomato]))?;
/// assert_eq!(response.trip.map(|trip| trip.coverage_count), Some(1));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustivePlanner<S>
where
    S: AvailabilitySource,
{
    source: S,
    config: PlannerConfig,
}

impl<S> ExhaustivePlanner<S>
where
    S: AvailabilitySource,
{
    /// Construct a planner using default configuration.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_config(source, PlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(source: S, config: PlannerConfig) -> Self {
        Self { source, config }
    }

    /// The planner's configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    const fn limits(&self, max_stops: u8) -> SearchLimits {
        SearchLimits {
            max_stops,
            evaluation_budget: self.config.evaluation_budget,
        }
    }
}

impl<S> TripPlanner for ExhaustivePlanner<S>
where
    S: AvailabilitySource + Send + Sync,
{
    fn plan(&self, request: &TripRequest) -> Result<PlanResponse, PlanError> {
        let started_at = Instant::now();
        let needed = request.unowned();
        if needed.is_empty() || request.max_stops == 0 {
            debug!("nothing to plan: {} ingredients still needed", needed.len());
            return Ok(PlanResponse::no_trip(Diagnostics {
                solve_time: started_at.elapsed(),
                ..Diagnostics::default()
            }));
        }

        let markets = self.source.markets_for(&needed)?;
        debug!(
            "searching {} markets for {} ingredients",
            markets.len(),
            needed.len()
        );
        let outcome = search(&markets, &needed, self.limits(request.max_stops));

        Ok(PlanResponse {
            trip: outcome.trip,
            diagnostics: Diagnostics {
                solve_time: started_at.elapsed(),
                combinations_evaluated: outcome.combinations_evaluated,
                stops_searched: outcome.stops_searched,
                budget_exhausted: outcome.budget_exhausted,
            },
        })
    }
}
