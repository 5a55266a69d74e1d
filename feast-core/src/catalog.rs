//! In-memory catalogs and listing aggregation.
//!
//! Catalog rows pair a product with the market and farmer selling it.
//! [`markets_from_listings`] folds those rows into per-market availability
//! maps for a set of ingredients.

use std::collections::HashMap;

use crate::{Availability, AvailabilityError, AvailabilitySource, Ingredient, Market};

/// A single catalog row: one farmer selling one product at one market.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductListing {
    /// Market name.
    pub market: String,
    /// Product name as listed, e.g. `"Tomatoes, heirloom"`.
    pub product: String,
    /// Farmer or vendor name.
    pub farmer: String,
}

/// Farmers selling a product at one market.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketVendors {
    /// Market name.
    pub market: String,
    /// Farmers at that market, without duplicates.
    pub farmers: Vec<String>,
}

/// Fold catalog rows into markets with availability for `ingredients`.
///
/// Each row counts towards the first ingredient its product starts with; rows
/// matching no ingredient are skipped. Markets are returned in the order they
/// first appear, farmers are collected without duplicates, and every market
/// records `false` for the ingredients it does not carry.
///
/// # Examples
/// ```
/// use feast_core::{Ingredient, ProductListing, markets_from_listings};
///
/// let tomato = Ingredient::new("tomato")?;
/// let basil = Ingredient::new("basil")?;
/// let rows = vec![ProductListing {
///     market: "Riverside".into(),
///     product: "Tomatoes, cherry".into(),
///     farmer: "Hill Farm".into(),
/// }];
/// let markets = markets_from_listings(rows, &[tomato.clone(), basil.clone()]);
/// assert_eq!(markets.len(), 1);
/// assert!(markets.iter().all(|m| m.carries(&tomato) && !m.carries(&basil)));
/// # Ok::<(), feast_core::IngredientError>(())
/// ```
pub fn markets_from_listings<I>(listings: I, ingredients: &[Ingredient]) -> Vec<Market>
where
    I: IntoIterator<Item = ProductListing>,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut markets: Vec<Market> = Vec::new();

    for listing in listings {
        let Some(matched) = ingredients
            .iter()
            .find(|ingredient| ingredient.matches_product(&listing.product))
        else {
            continue;
        };
        let position = *positions.entry(listing.market.clone()).or_insert_with(|| {
            markets.push(Market::new(listing.market.clone(), Availability::new()));
            markets.len() - 1
        });
        if let Some(market) = markets.get_mut(position) {
            market.availability.set(matched.clone(), true);
            if !market.details.farmers.contains(&listing.farmer) {
                market.details.farmers.push(listing.farmer);
            }
        }
    }

    for market in &mut markets {
        market.availability.fill_missing(ingredients);
    }
    markets
}

/// Markets and farmers selling exactly `product`, compared case-insensitively.
///
/// # Examples
/// ```
/// use feast_core::{ProductListing, vendors_for_product};
///
/// let rows = vec![
///     ProductListing { market: "Riverside".into(), product: "Kale".into(), farmer: "Hill Farm".into() },
///     ProductListing { market: "Riverside".into(), product: "kale".into(), farmer: "Hill Farm".into() },
/// ];
/// let vendors = vendors_for_product(&rows, "KALE");
/// assert_eq!(vendors.len(), 1);
/// assert_eq!(vendors.first().map(|v| v.farmers.len()), Some(1));
/// ```
pub fn vendors_for_product(listings: &[ProductListing], product: &str) -> Vec<MarketVendors> {
    let wanted = product.trim().to_lowercase();
    let mut vendors: Vec<MarketVendors> = Vec::new();
    for listing in listings
        .iter()
        .filter(|listing| listing.product.trim().to_lowercase() == wanted)
    {
        if let Some(existing) = vendors
            .iter_mut()
            .find(|entry| entry.market == listing.market)
        {
            if !existing.farmers.contains(&listing.farmer) {
                existing.farmers.push(listing.farmer.clone());
            }
        } else {
            vendors.push(MarketVendors {
                market: listing.market.clone(),
                farmers: vec![listing.farmer.clone()],
            });
        }
    }
    vendors
}

/// Availability source backed by in-memory catalog rows.
///
/// Lookups scan every row and are intended for catalogs loaded from a file.
#[derive(Debug, Clone, Default)]
pub struct ListingCatalog {
    listings: Vec<ProductListing>,
}

impl ListingCatalog {
    /// Create a catalog from a collection of rows.
    pub fn new<I>(listings: I) -> Self
    where
        I: IntoIterator<Item = ProductListing>,
    {
        Self {
            listings: listings.into_iter().collect(),
        }
    }

    /// All rows held by the catalog.
    pub fn listings(&self) -> &[ProductListing] {
        &self.listings
    }
}

impl AvailabilitySource for ListingCatalog {
    fn markets_for(&self, ingredients: &[Ingredient]) -> Result<Vec<Market>, AvailabilityError> {
        Ok(markets_from_listings(
            self.listings.iter().cloned(),
            ingredients,
        ))
    }
}

/// Availability source backed by precomputed markets.
#[derive(Debug, Clone, Default)]
pub struct MarketCatalog {
    markets: Vec<Market>,
}

impl MarketCatalog {
    /// Create a catalog from markets whose availability is already known.
    pub fn new<I>(markets: I) -> Self
    where
        I: IntoIterator<Item = Market>,
    {
        Self {
            markets: markets.into_iter().collect(),
        }
    }
}

impl AvailabilitySource for MarketCatalog {
    fn markets_for(&self, ingredients: &[Ingredient]) -> Result<Vec<Market>, AvailabilityError> {
        Ok(self
            .markets
            .iter()
            .cloned()
            .map(|mut market| {
                market.availability.fill_missing(ingredients);
                market
            })
            .collect())
    }
}
