//! Markets and their per-ingredient availability.

use std::collections::BTreeMap;

use crate::Ingredient;

/// Which ingredients a market carries.
///
/// Entries that are absent read as `false`, so a partially populated map never
/// fails a lookup.
///
/// # Examples
/// ```
/// use feast_core::{Availability, Ingredient};
///
/// let tomato = Ingredient::new("tomato")?;
/// let basil = Ingredient::new("basil")?;
/// let availability = Availability::new().with(tomato.clone(), true);
/// assert!(availability.carries(&tomato));
/// assert!(!availability.carries(&basil));
/// # Ok::<(), feast_core::IngredientError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Availability(BTreeMap<Ingredient, bool>);

impl Availability {
    /// Construct an empty availability map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, ingredient: Ingredient, available: bool) -> Self {
        self.set(ingredient, available);
        self
    }

    /// Insert or overwrite an entry.
    pub fn set(&mut self, ingredient: Ingredient, available: bool) {
        self.0.insert(ingredient, available);
    }

    /// Whether the market carries `ingredient`.
    pub fn carries(&self, ingredient: &Ingredient) -> bool {
        self.0.get(ingredient).copied().unwrap_or(false)
    }

    /// Insert `false` for every ingredient without an entry.
    pub fn fill_missing(&mut self, ingredients: &[Ingredient]) {
        for ingredient in ingredients {
            self.0.entry(ingredient.clone()).or_insert(false);
        }
    }

    /// Ingredients marked as available, in sorted order.
    pub fn available(&self) -> impl Iterator<Item = &Ingredient> + '_ {
        self.0
            .iter()
            .filter_map(|(ingredient, available)| available.then_some(ingredient))
    }

    /// Number of recorded entries, available or not.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no entries are recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Ingredient, bool)> for Availability {
    fn from_iter<I: IntoIterator<Item = (Ingredient, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Descriptive metadata carried alongside a market.
///
/// The planner never reads these fields; they are passed through to the
/// caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MarketDetails {
    /// Street address or area description.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub location: Option<String>,
    /// Opening hours as displayed to visitors.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub hours: Option<String>,
    /// Trading season, e.g. `"May - October"`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub season: Option<String>,
    /// Farmers selling at this market.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub farmers: Vec<String>,
}

/// A farmers market with known product availability.
///
/// # Examples
/// ```
/// use feast_core::{Availability, Ingredient, Market};
///
/// let tomato = Ingredient::new("tomato")?;
/// let market = Market::new("Riverside", Availability::new().with(tomato.clone(), true));
/// assert_eq!(market.name, "Riverside");
/// assert!(market.carries(&tomato));
/// # Ok::<(), feast_core::IngredientError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Market {
    /// Unique display name.
    pub name: String,
    /// Per-ingredient availability.
    #[cfg_attr(feature = "serde", serde(default))]
    pub availability: Availability,
    /// Opaque descriptive metadata.
    #[cfg_attr(feature = "serde", serde(default))]
    pub details: MarketDetails,
}

impl Market {
    /// Construct a market without descriptive metadata.
    pub fn new(name: impl Into<String>, availability: Availability) -> Self {
        Self {
            name: name.into(),
            availability,
            details: MarketDetails::default(),
        }
    }

    /// Attach descriptive metadata while returning `self` for chaining.
    #[must_use]
    pub fn with_details(mut self, details: MarketDetails) -> Self {
        self.details = details;
        self
    }

    /// Whether this market carries `ingredient`.
    pub fn carries(&self, ingredient: &Ingredient) -> bool {
        self.availability.carries(ingredient)
    }
}
