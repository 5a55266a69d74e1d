//! Core domain types for the Farmer Feast trip planner.
//!
//! Ingredients are normalised on construction, markets carry an explicit
//! availability map, and planners implement [`TripPlanner`] against an
//! injected [`AvailabilitySource`]. Nothing in this crate performs I/O.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
mod ingredient;
mod market;
mod planner;
mod source;
mod trip;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{
    ListingCatalog, MarketCatalog, MarketVendors, ProductListing, markets_from_listings,
    vendors_for_product,
};
pub use ingredient::{Ingredient, IngredientError};
pub use market::{Availability, Market, MarketDetails};
pub use planner::{
    DEFAULT_MAX_STOPS, Diagnostics, PlanError, PlanResponse, TripPlanner, TripRequest,
    TripRequestValidationError,
};
pub use source::{AvailabilityError, AvailabilitySource};
pub use trip::{GuideEntry, IngredientMap, TripResult};
