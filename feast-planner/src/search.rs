//! Bounded exhaustive search for the best-covering set of markets.
//!
//! Trip lengths are tried from one stop upwards. Within a length, every
//! combination is scored and a new best is only taken on strictly greater
//! coverage, so ties resolve to whichever combination was generated first.
//! Once a full pass over a length reaches complete coverage, longer trips are
//! not considered.
//!
//! The search is exhaustive on purpose: markets near a shopper number in the
//! tens at most, and the work is `C(n, 1) + ... + C(n, max_stops)` coverage
//! evaluations. [`SearchLimits::evaluation_budget`] caps it for larger inputs.

use feast_core::{Ingredient, Market, TripResult};
use log::{debug, warn};

use crate::{Coverage, combinations, evaluate_coverage};

/// Bounds for [`search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Largest number of markets in a trip.
    pub max_stops: u8,
    /// Combinations the search may score before stopping early.
    ///
    /// Only checked between trip lengths, so a pass that has started always
    /// completes.
    pub evaluation_budget: Option<u64>,
}

impl SearchLimits {
    /// Limits with a stop bound and no evaluation budget.
    #[must_use]
    pub const fn new(max_stops: u8) -> Self {
        Self {
            max_stops,
            evaluation_budget: None,
        }
    }

    /// Set the evaluation budget while returning `self` for chaining.
    #[must_use]
    pub const fn with_evaluation_budget(mut self, budget: u64) -> Self {
        self.evaluation_budget = Some(budget);
        self
    }

    fn budget_spent(self, evaluated: u64) -> bool {
        self.evaluation_budget.is_some_and(|budget| evaluated >= budget)
    }
}

/// What [`search`] found, with counters describing the work done.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchOutcome {
    /// The best trip, or `None` when nothing is covered.
    pub trip: Option<TripResult>,
    /// Combinations scored.
    pub combinations_evaluated: u64,
    /// Largest trip length fully searched.
    pub stops_searched: u8,
    /// Whether the evaluation budget ended the search.
    pub budget_exhausted: bool,
}

struct Best<'a> {
    markets: Vec<&'a Market>,
    coverage: Coverage,
}

impl Best<'_> {
    fn into_trip(self, total_count: usize) -> TripResult {
        TripResult {
            markets: self.markets.into_iter().cloned().collect(),
            coverage_count: self.coverage.count(),
            total_count,
            ingredient_map: self.coverage.into_map(),
        }
    }
}

/// Find the combination of at most `limits.max_stops` markets covering the
/// most distinct `ingredients`.
///
/// Returns an outcome without a trip when `ingredients` or `markets` is empty,
/// when `max_stops` is zero, or when no market carries any ingredient.
#[must_use]
pub fn search(
    markets: &[Market],
    ingredients: &[Ingredient],
    limits: SearchLimits,
) -> SearchOutcome {
    let mut outcome = SearchOutcome::default();
    if ingredients.is_empty() {
        return outcome;
    }
    let total = ingredients.len();
    let mut best: Option<Best<'_>> = None;

    for stops in 1..=limits.max_stops {
        let size = usize::from(stops);
        if size > markets.len() {
            break;
        }
        if limits.budget_spent(outcome.combinations_evaluated) {
            warn!(
                "evaluation budget spent after {} combinations; stopping before {stops}-stop trips",
                outcome.combinations_evaluated
            );
            outcome.budget_exhausted = true;
            break;
        }

        best = search_size(
            markets,
            ingredients,
            size,
            best,
            &mut outcome.combinations_evaluated,
        );
        outcome.stops_searched = stops;

        let best_count = best.as_ref().map_or(0, |found| found.coverage.count());
        debug!("best coverage after {stops}-stop trips: {best_count}/{total}");
        if best_count == total {
            debug!("all {total} ingredients covered with {stops} stops");
            break;
        }
    }

    outcome.trip = best.map(|found| found.into_trip(total));
    outcome
}

/// Score every `size`-market combination against the best so far.
fn search_size<'a>(
    markets: &'a [Market],
    ingredients: &[Ingredient],
    size: usize,
    mut best: Option<Best<'a>>,
    evaluated: &mut u64,
) -> Option<Best<'a>> {
    for combination in combinations(markets, size) {
        *evaluated += 1;
        let coverage = evaluate_coverage(&combination, ingredients);
        let best_count = best.as_ref().map_or(0, |found| found.coverage.count());
        if coverage.count() > best_count {
            best = Some(Best {
                markets: combination,
                coverage,
            });
        }
    }
    best
}

/// Find the best trip of at most `max_stops` markets.
///
/// Equivalent to [`search`] without an evaluation budget, keeping only the
/// trip.
///
/// # Examples
/// ```
/// use feast_core::{Availability, Ingredient, Market};
/// use feast_planner::search_trip;
///
/// let tomato = Ingredient::new("tomato")?;
/// let basil = Ingredient::new("basil")?;
/// let markets = vec![
///     Market::new("A", Availability::new().with(tomato.clone(), true)),
///     Market::new(
///         "B",
///         Availability::new()
///             .with(tomato.clone(), true)
///             .with(basil.clone(), true),
///     ),
/// ];
///
/// let trip = search_trip(&markets, &[tomato, basil], 2).expect("B covers both");
/// assert_eq!(trip.markets.len(), 1);
/// assert_eq!(trip.markets.first().map(|market| market.name.as_str()), Some("B"));
/// assert!(trip.is_complete());
/// # Ok::<(), feast_core::IngredientError>(())
/// ```
#[must_use]
pub fn search_trip(
    markets: &[Market],
    ingredients: &[Ingredient],
    max_stops: u8,
) -> Option<TripResult> {
    search(markets, ingredients, SearchLimits::new(max_stops)).trip
}
