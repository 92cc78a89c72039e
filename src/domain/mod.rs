//! Domain layer: money, products, orders and the payment capability.

pub mod amount;
pub mod decorator;
pub mod order;
pub mod payment;
pub mod ports;
pub mod product;
