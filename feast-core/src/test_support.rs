//! Test-only fixtures shared by unit and behaviour tests.
//!
//! The helpers panic on malformed fixture input, which keeps test setup terse.

use crate::{
    Availability, AvailabilityError, AvailabilitySource, Ingredient, Market, ProductListing,
};

/// Build an ingredient from a fixture name.
///
/// # Panics
/// Panics when `name` is blank.
pub fn ingredient(name: &str) -> Ingredient {
    Ingredient::new(name).expect("fixture ingredient names must not be blank")
}

/// Build a list of ingredients from fixture names.
///
/// # Panics
/// Panics when any name is blank.
pub fn ingredients(names: &[&str]) -> Vec<Ingredient> {
    names.iter().map(|name| ingredient(name)).collect()
}

/// Construct a market from `(ingredient, available)` pairs.
///
/// # Panics
/// Panics when any ingredient name is blank.
pub fn market(name: &str, entries: &[(&str, bool)]) -> Market {
    let availability = entries
        .iter()
        .map(|(ingredient_name, available)| (ingredient(ingredient_name), *available))
        .collect::<Availability>();
    Market::new(name, availability)
}

/// Construct a catalog row.
pub fn listing(market: &str, product: &str, farmer: &str) -> ProductListing {
    ProductListing {
        market: market.to_owned(),
        product: product.to_owned(),
        farmer: farmer.to_owned(),
    }
}

/// Availability source that always fails, for exercising error paths.
#[derive(Debug, Default, Copy, Clone)]
pub struct FailingSource;

impl AvailabilitySource for FailingSource {
    fn markets_for(&self, _ingredients: &[Ingredient]) -> Result<Vec<Market>, AvailabilityError> {
        Err(AvailabilityError::Unavailable {
            message: "catalog offline".to_owned(),
        })
    }
}
