//! Facade crate for the Farmer Feast trip planner.
//!
//! This crate re-exports the core domain types and exposes the default
//! planner behind a feature flag.

#![forbid(unsafe_code)]

pub use feast_core::{
    Availability, AvailabilityError, AvailabilitySource, DEFAULT_MAX_STOPS, Diagnostics,
    GuideEntry, Ingredient, IngredientError, IngredientMap, ListingCatalog, Market,
    MarketCatalog, MarketDetails, PlanError, PlanResponse, ProductListing, TripPlanner,
    TripRequest, TripRequestValidationError, TripResult, markets_from_listings,
    vendors_for_product,
};

#[cfg(feature = "planner-exhaustive")]
pub use feast_planner::{ExhaustivePlanner, PlannerConfig, search_trip};
