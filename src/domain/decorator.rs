//! Wrappers that add behaviour in front of another [`Payment`].
//!
//! Each decorator owns exactly one inner payment, performs its own step, and
//! then forwards the unchanged amount to it.

use super::amount::Amount;
use super::ports::{ConfirmationSink, Payment, PaymentBox, PaymentMethod};
use crate::error::Result;

/// Announces the card security step before charging the card.
pub struct SecureCardPaymentDecorator {
    inner: PaymentBox,
}

impl SecureCardPaymentDecorator {
    pub fn new(inner: PaymentBox) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> PaymentBox {
        self.inner
    }
}

impl Payment for SecureCardPaymentDecorator {
    fn method(&self) -> PaymentMethod {
        self.inner.method()
    }

    fn pay(&self, amount: Amount, sink: &mut dyn ConfirmationSink) -> Result<()> {
        sink.emit("Security feature applied.")?;
        self.inner.pay(amount, sink)
    }
}

/// Records the transfer in the log before the bank transfer goes through.
pub struct LoggingBankTransferPaymentDecorator {
    inner: PaymentBox,
}

impl LoggingBankTransferPaymentDecorator {
    pub fn new(inner: PaymentBox) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> PaymentBox {
        self.inner
    }
}

impl Payment for LoggingBankTransferPaymentDecorator {
    fn method(&self) -> PaymentMethod {
        self.inner.method()
    }

    fn pay(&self, amount: Amount, sink: &mut dyn ConfirmationSink) -> Result<()> {
        sink.emit("Logging payment record.")?;
        tracing::info!(%amount, method = %self.inner.method(), "payment record");
        self.inner.pay(amount, sink)
    }
}
