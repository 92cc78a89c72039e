use crate::domain::amount::Amount;
use crate::domain::order::Order;
use crate::domain::ports::{ConfirmationSink, Payment};
use crate::error::Result;

/// Charges an order through whichever payment the caller chose.
///
/// Holds no state, so a fresh instance is as good as a shared one.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderPaymentService;

impl OrderPaymentService {
    pub fn new() -> Self {
        Self
    }

    /// Pays the order total with `payment` and returns the amount charged.
    ///
    /// A total that cannot be represented fails before anything is paid.
    /// Failures from the payment are returned as-is; nothing is retried.
    pub fn process_order(
        &self,
        order: &Order<'_>,
        payment: &dyn Payment,
        sink: &mut dyn ConfirmationSink,
    ) -> Result<Amount> {
        let total = order.total()?;
        tracing::info!(
            product = order.product.name(),
            quantity = order.quantity,
            %total,
            method = %payment.method(),
            "processing order"
        );
        payment.pay(total, sink)?;
        Ok(total)
    }
}
