//! Normalised ingredient names.
//!
//! Ingredients arrive from the extraction collaborator as free text. They are
//! trimmed and lowercased once, at construction, so every later comparison is
//! a plain string comparison.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A lowercase, trimmed ingredient name such as `"tomato"`.
///
/// # Examples
/// ```
/// use feast_core::Ingredient;
///
/// let ingredient = Ingredient::new("  Tomato ")?;
/// assert_eq!(ingredient.as_str(), "tomato");
/// # Ok::<(), feast_core::IngredientError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Ingredient(String);

/// Errors returned by [`Ingredient::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngredientError {
    /// The name was empty after trimming.
    #[error("ingredient name must not be empty")]
    Empty,
}

impl Ingredient {
    /// Normalise and validate an ingredient name.
    ///
    /// # Errors
    /// Returns [`IngredientError::Empty`] when `raw` contains only whitespace.
    pub fn new(raw: &str) -> Result<Self, IngredientError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IngredientError::Empty);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Borrow the normalised name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a catalog product name belongs to this ingredient.
    ///
    /// Products match by case-insensitive prefix, so `"tomato"` matches
    /// `"Tomatoes, heirloom"` but not `"Green tomato"`.
    ///
    /// # Examples
    /// ```
    /// use feast_core::Ingredient;
    ///
    /// let tomato = Ingredient::new("tomato")?;
    /// assert!(tomato.matches_product("Tomatoes, heirloom"));
    /// assert!(!tomato.matches_product("Green tomato"));
    /// # Ok::<(), feast_core::IngredientError>(())
    /// ```
    pub fn matches_product(&self, product: &str) -> bool {
        product.trim().to_lowercase().starts_with(self.as_str())
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ingredient {
    type Err = IngredientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ingredient {
    type Error = IngredientError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Ingredient> for String {
    fn from(value: Ingredient) -> Self {
        value.0
    }
}

impl AsRef<str> for Ingredient {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Ingredient {
    fn borrow(&self) -> &str {
        &self.0
    }
}
