use miette::Diagnostic;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum OrderError {
    #[error("Invalid selection: {input:?} is not a menu number between 1 and {max}")]
    #[diagnostic(code(order::invalid_selection))]
    InvalidSelection { input: String, max: usize },
    #[error("Invalid quantity: {0:?} is not a positive whole number")]
    #[diagnostic(code(order::invalid_quantity))]
    InvalidQuantity(String),
    #[error("Unsupported payment type: {0:?}")]
    #[diagnostic(
        code(payment::unsupported_type),
        help("choose one of: card, bank_transfer")
    )]
    UnsupportedPaymentType(String),
    #[error("Amount must not be negative: {0}")]
    #[diagnostic(code(payment::negative_amount))]
    NegativeAmount(Decimal),
    #[error("Order total overflows: {amount} x {quantity}")]
    #[diagnostic(code(order::amount_overflow))]
    AmountOverflow { amount: Decimal, quantity: u32 },
    #[error("Quantity too large: {input} exceeds the maximum of {max}")]
    #[diagnostic(code(order::quantity_too_large))]
    QuantityTooLarge { input: String, max: u32 },
    #[error("IO error: {0}")]
    #[diagnostic(code(order::io))]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OrderError>;
