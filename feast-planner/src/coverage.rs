//! Ingredient coverage of a market combination.

use feast_core::{Ingredient, IngredientMap, Market};

/// Which ingredients a combination satisfies, and by whom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Coverage {
    covered: IngredientMap,
}

impl Coverage {
    /// Number of distinct ingredients with at least one covering market.
    #[must_use]
    pub fn count(&self) -> usize {
        self.covered.len()
    }

    /// Whether `ingredient` is covered.
    #[must_use]
    pub fn covers(&self, ingredient: &Ingredient) -> bool {
        self.covered.contains_key(ingredient)
    }

    /// Covering market names, keyed by ingredient.
    #[must_use]
    pub const fn covered(&self) -> &IngredientMap {
        &self.covered
    }

    /// Consume the report, returning the ingredient map.
    #[must_use]
    pub fn into_map(self) -> IngredientMap {
        self.covered
    }
}

/// Compute which of `ingredients` the markets in `combination` supply.
///
/// An ingredient is covered when any market in the combination carries it.
/// Each covering list follows the combination's order and names a market at
/// most once.
///
/// # Examples
/// ```
/// use feast_core::{Availability, Ingredient, Market};
/// use feast_planner::evaluate_coverage;
///
/// let tomato = Ingredient::new("tomato")?;
/// let basil = Ingredient::new("basil")?;
/// let a = Market::new("A", Availability::new().with(tomato.clone(), true));
/// let c = Market::new("C", Availability::new().with(basil.clone(), true));
///
/// let coverage = evaluate_coverage(&[&a, &c], &[tomato.clone(), basil.clone()]);
/// assert_eq!(coverage.count(), 2);
/// assert_eq!(coverage.covered().get(&tomato), Some(&vec!["A".to_owned()]));
/// # Ok::<(), feast_core::IngredientError>(())
/// ```
#[must_use]
pub fn evaluate_coverage(combination: &[&Market], ingredients: &[Ingredient]) -> Coverage {
    let mut covered = IngredientMap::new();
    for ingredient in ingredients {
        for market in combination.iter().filter(|market| market.carries(ingredient)) {
            let suppliers = covered.entry(ingredient.clone()).or_default();
            if !suppliers.contains(&market.name) {
                suppliers.push(market.name.clone());
            }
        }
    }
    Coverage { covered }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feast_core::test_support::{ingredient, ingredients, market};
    use rstest::rstest;

    #[rstest]
    fn records_suppliers_in_combination_order() {
        let b = market("B", &[("basil", true)]);
        let a = market("A", &[("basil", true), ("tomato", true)]);
        let coverage = evaluate_coverage(&[&b, &a], &ingredients(&["tomato", "basil"]));

        assert_eq!(coverage.count(), 2);
        assert_eq!(
            coverage.covered().get(&ingredient("basil")),
            Some(&vec!["B".to_owned(), "A".to_owned()])
        );
        assert_eq!(
            coverage.covered().get(&ingredient("tomato")),
            Some(&vec!["A".to_owned()])
        );
    }

    #[rstest]
    fn uncovered_ingredients_are_absent() {
        let a = market("A", &[("tomato", true), ("basil", false)]);
        let coverage = evaluate_coverage(&[&a], &ingredients(&["tomato", "basil", "garlic"]));

        assert_eq!(coverage.count(), 1);
        assert!(coverage.covers(&ingredient("tomato")));
        assert!(!coverage.covers(&ingredient("basil")));
        assert!(!coverage.covers(&ingredient("garlic")));
    }

    #[rstest]
    fn duplicate_ingredients_count_once() {
        let a = market("A", &[("tomato", true)]);
        let coverage = evaluate_coverage(&[&a], &ingredients(&["tomato", "tomato"]));
        assert_eq!(coverage.count(), 1);
        assert_eq!(
            coverage.into_map().get(&ingredient("tomato")),
            Some(&vec!["A".to_owned()])
        );
    }

    #[rstest]
    fn empty_combination_covers_nothing() {
        let coverage = evaluate_coverage(&[], &ingredients(&["tomato"]));
        assert_eq!(coverage, Coverage::default());
    }
}
