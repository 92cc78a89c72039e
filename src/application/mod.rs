//! Application layer containing the order/payment orchestration.
//!
//! This module defines the `PaymentFactory`, which turns a customer's selector
//! into a ready-to-use payment, and the `OrderPaymentService`, which charges
//! an order's total through it.

pub mod factory;
pub mod service;
