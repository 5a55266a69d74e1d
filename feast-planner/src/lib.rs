//! Coverage optimiser for Farmer Feast shopping trips.
//!
//! Given the ingredients a shopper still needs and the markets that might
//! sell them, this crate picks the smallest set of markets, up to a stop
//! bound, that covers the most ingredients. The pieces are layered:
//!
//! - [`combinations`] enumerates fixed-size market subsets in lexicographic
//!   order.
//! - [`evaluate_coverage`] scores one subset.
//! - [`search`] and [`search_trip`] run the bounded exhaustive search.
//! - [`ExhaustivePlanner`] implements [`TripPlanner`](feast_core::TripPlanner)
//!   on top of an [`AvailabilitySource`](feast_core::AvailabilitySource).
//!
//! Everything here is synchronous and allocation-local; a planner can be
//! shared between threads and called concurrently.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod combinations;
mod coverage;
mod planner;
mod search;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use combinations::{Combinations, combinations};
pub use coverage::{Coverage, evaluate_coverage};
pub use planner::{ExhaustivePlanner, PlannerConfig};
pub use search::{SearchLimits, SearchOutcome, search, search_trip};
