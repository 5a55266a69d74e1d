//! Data access traits for market availability.
//!
//! The `AvailabilitySource` trait hides where availability data comes from,
//! whether a relational catalog, a remote service or an in-memory fixture.
//! Planners receive it as an explicit collaborator.

use thiserror::Error;

use crate::{Ingredient, Market};

/// Errors from [`AvailabilitySource::markets_for`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    /// The backing catalog could not be reached or queried.
    #[error("availability source unavailable: {message}")]
    Unavailable {
        /// Description of the failure, suitable for a retry notification.
        message: String,
    },
}

/// Fetch markets carrying any of a set of ingredients.
///
/// Implementations return each candidate market with an availability entry
/// for every requested ingredient. Markets may be returned even if they carry
/// nothing useful; planners ignore them.
///
/// # Examples
///
/// ```rust
/// use feast_core::{AvailabilityError, AvailabilitySource, Availability, Ingredient, Market};
///
/// struct SingleMarket;
///
/// impl AvailabilitySource for SingleMarket {
///     fn markets_for(&self, ingredients: &[Ingredient]) -> Result<Vec<Market>, AvailabilityError> {
///         let availability = ingredients
///             .iter()
///             .map(|ingredient| (ingredient.clone(), true))
///             .collect::<Availability>();
///         Ok(vec![Market::new("Everything Market", availability)])
///     }
/// }
///
/// let tomato = Ingredient::new("tomato")?;
/// let markets = SingleMarket.markets_for(&[tomato.clone()])?;
/// assert!(markets.iter().all(|market| market.carries(&tomato)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait AvailabilitySource {
    /// Return candidate markets for `ingredients`.
    ///
    /// # Errors
    /// Returns [`AvailabilityError`] when the backing data cannot be read.
    fn markets_for(&self, ingredients: &[Ingredient]) -> Result<Vec<Market>, AvailabilityError>;
}

impl<S: AvailabilitySource + ?Sized> AvailabilitySource for Box<S> {
    fn markets_for(&self, ingredients: &[Ingredient]) -> Result<Vec<Market>, AvailabilityError> {
        (**self).markets_for(ingredients)
    }
}
