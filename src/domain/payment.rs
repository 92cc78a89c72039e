use super::amount::Amount;
use super::ports::{ConfirmationSink, Payment, PaymentMethod};
use crate::error::Result;

/// Pays by card. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardPayment;

impl Payment for CardPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Card
    }

    fn pay(&self, amount: Amount, sink: &mut dyn ConfirmationSink) -> Result<()> {
        sink.emit(&format!("Paid {amount} by card."))
    }
}

/// Pays by bank transfer. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct BankTransferPayment;

impl Payment for BankTransferPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::BankTransfer
    }

    fn pay(&self, amount: Amount, sink: &mut dyn ConfirmationSink) -> Result<()> {
        sink.emit(&format!("Paid {amount} by bank transfer."))
    }
}
