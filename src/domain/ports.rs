use super::amount::Amount;
use crate::error::Result;
use std::fmt;

/// The closed set of payment variants a customer can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Card,
    BankTransfer,
}

impl PaymentMethod {
    /// The selector string a customer types to pick this method.
    pub fn selector(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Receives the user-facing lines produced while paying.
pub trait ConfirmationSink {
    fn emit(&mut self, message: &str) -> Result<()>;
}

/// The capability of accepting an amount and confirming the payment.
///
/// Base variants and decorators both implement this, so a decorator can wrap
/// any other payment without the caller noticing.
pub trait Payment: Send + Sync {
    /// The variant at the bottom of any decorator chain.
    fn method(&self) -> PaymentMethod;

    fn pay(&self, amount: Amount, sink: &mut dyn ConfirmationSink) -> Result<()>;
}

pub type PaymentBox = Box<dyn Payment>;
pub type PaymentConstructor = fn() -> PaymentBox;
pub type PaymentDecoration = fn(PaymentBox) -> PaymentBox;
