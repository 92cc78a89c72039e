use crate::domain::decorator::{LoggingBankTransferPaymentDecorator, SecureCardPaymentDecorator};
use crate::domain::payment::{BankTransferPayment, CardPayment};
use crate::domain::ports::{PaymentBox, PaymentConstructor, PaymentDecoration, PaymentMethod};
use crate::error::{OrderError, Result};

/// One accepted selector and everything needed to build its payment.
struct Registration {
    selector: &'static str,
    method: PaymentMethod,
    build: PaymentConstructor,
    decorate: PaymentDecoration,
}

const REGISTRY: &[Registration] = &[
    Registration {
        selector: "card",
        method: PaymentMethod::Card,
        build: card,
        decorate: secure_card,
    },
    Registration {
        selector: "bank_transfer",
        method: PaymentMethod::BankTransfer,
        build: bank_transfer,
        decorate: logging_bank_transfer,
    },
];

fn card() -> PaymentBox {
    Box::new(CardPayment)
}

fn bank_transfer() -> PaymentBox {
    Box::new(BankTransferPayment)
}

fn secure_card(inner: PaymentBox) -> PaymentBox {
    Box::new(SecureCardPaymentDecorator::new(inner))
}

fn logging_bank_transfer(inner: PaymentBox) -> PaymentBox {
    Box::new(LoggingBankTransferPaymentDecorator::new(inner))
}

/// Builds payments from the selector string a customer typed.
///
/// Selectors are resolved through a single lookup table, so the base variant
/// and its add-on layer can never disagree about which method was chosen.
pub struct PaymentFactory;

impl PaymentFactory {
    /// Creates the bare payment variant for `selector`.
    pub fn create(selector: &str) -> Result<PaymentBox> {
        let registration = Self::lookup(selector)?;
        Ok((registration.build)())
    }

    /// Creates the payment for `selector` already wrapped in its matching decorator.
    pub fn create_decorated(selector: &str) -> Result<PaymentBox> {
        let registration = Self::lookup(selector)?;
        Ok((registration.decorate)((registration.build)()))
    }

    /// The selectors accepted by [`create`](Self::create), in menu order.
    pub fn selectors() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|r| r.selector)
    }

    fn lookup(selector: &str) -> Result<&'static Registration> {
        let registration = REGISTRY
            .iter()
            .find(|r| r.selector == selector)
            .ok_or_else(|| OrderError::UnsupportedPaymentType(selector.to_string()))?;
        tracing::debug!(selector, method = ?registration.method, "payment type resolved");
        Ok(registration)
    }
}
