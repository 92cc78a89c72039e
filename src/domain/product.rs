use super::amount::Amount;
use crate::error::{OrderError, Result};
use rust_decimal::Decimal;
use std::fmt;

/// An item that can be ordered: a name and a unit price.
///
/// Immutable once constructed; orders borrow it from the [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: String,
    price: Amount,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            price: Amount::new(price)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Amount {
        self.price
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ${}", self.name, self.price)
    }
}

/// The ordered list of products offered on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Looks up a product by its 1-based menu number.
    pub fn select(&self, number: usize) -> Result<&Product> {
        number
            .checked_sub(1)
            .and_then(|index| self.products.get(index))
            .ok_or_else(|| OrderError::InvalidSelection {
                input: number.to_string(),
                max: self.products.len(),
            })
    }

    /// Iterates over `(menu number, product)` pairs, numbered from 1.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Product)> {
        self.products.iter().enumerate().map(|(i, p)| (i + 1, p))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let menu = [
            ("Keyboard", 50u32),
            ("Mouse", 30),
            ("Monitor", 200),
            ("Headphones", 100),
        ];
        Self::new(
            menu.into_iter()
                .map(|(name, price)| Product {
                    name: name.to_string(),
                    price: Amount::from(price),
                })
                .collect(),
        )
    }
}
