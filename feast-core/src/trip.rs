//! Shopping trips chosen by a planner.
//!
//! A [`TripResult`] is the winning combination of markets together with the
//! coverage report that justified it.

use std::collections::{BTreeMap, HashSet};

use crate::{Ingredient, Market};

/// Market names supplying each covered ingredient.
///
/// Name lists keep the order in which the markets appear in the trip.
pub type IngredientMap = BTreeMap<Ingredient, Vec<String>>;

/// The best combination of markets found for a request.
///
/// # Examples
/// ```
/// use feast_core::{Availability, Ingredient, IngredientMap, Market, TripResult};
///
/// let tomato = Ingredient::new("tomato")?;
/// let basil = Ingredient::new("basil")?;
/// let market = Market::new("B", Availability::new().with(tomato.clone(), true));
/// let trip = TripResult {
///     markets: vec![market],
///     coverage_count: 1,
///     total_count: 2,
///     ingredient_map: IngredientMap::from([(tomato.clone(), vec!["B".to_owned()])]),
/// };
/// assert!(!trip.is_complete());
/// assert_eq!(trip.missing_ingredients(&[tomato, basil.clone()]), vec![basil]);
/// # Ok::<(), feast_core::IngredientError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TripResult {
    /// Markets to visit, in selection order.
    pub markets: Vec<Market>,
    /// Number of distinct ingredients covered by the trip.
    pub coverage_count: usize,
    /// Number of ingredients the caller still needed.
    pub total_count: usize,
    /// Covering markets for each covered ingredient.
    pub ingredient_map: IngredientMap,
}

/// One line of the per-ingredient shopping guide.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuideEntry {
    /// The requested ingredient.
    pub ingredient: Ingredient,
    /// Trip markets selling it; empty when no chosen market does.
    pub markets: Vec<String>,
}

impl GuideEntry {
    /// Whether any market on the trip sells this ingredient.
    pub fn is_found(&self) -> bool {
        !self.markets.is_empty()
    }
}

impl TripResult {
    /// Whether every needed ingredient is covered.
    pub const fn is_complete(&self) -> bool {
        self.coverage_count == self.total_count
    }

    /// Requested ingredients the trip does not cover, in request order.
    pub fn missing_ingredients(&self, requested: &[Ingredient]) -> Vec<Ingredient> {
        let mut seen = HashSet::new();
        requested
            .iter()
            .filter(|ingredient| !self.ingredient_map.contains_key(*ingredient))
            .filter(|ingredient| seen.insert(*ingredient))
            .cloned()
            .collect()
    }

    /// Ingredients to buy at the named market.
    pub fn purchases_at(&self, market_name: &str) -> Vec<&Ingredient> {
        self.ingredient_map
            .iter()
            .filter(|(_, markets)| markets.iter().any(|name| name == market_name))
            .map(|(ingredient, _)| ingredient)
            .collect()
    }

    /// Build the complete shopping guide for `requested`.
    ///
    /// Every requested ingredient gets one entry, including those no chosen
    /// market sells.
    pub fn guide(&self, requested: &[Ingredient]) -> Vec<GuideEntry> {
        requested
            .iter()
            .map(|ingredient| GuideEntry {
                ingredient: ingredient.clone(),
                markets: self
                    .ingredient_map
                    .get(ingredient)
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect()
    }
}
