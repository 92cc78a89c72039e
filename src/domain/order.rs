use super::amount::Amount;
use super::product::Product;
use crate::error::Result;

/// A request for `quantity` units of one catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order<'a> {
    pub product: &'a Product,
    pub quantity: u32,
}

impl<'a> Order<'a> {
    pub fn new(product: &'a Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Unit price times quantity.
    pub fn total(&self) -> Result<Amount> {
        self.product.price().checked_mul(self.quantity)
    }
}
