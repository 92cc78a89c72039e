use order_pay::domain::amount::Amount;
use order_pay::domain::decorator::{LoggingBankTransferPaymentDecorator, SecureCardPaymentDecorator};
use order_pay::domain::payment::{BankTransferPayment, CardPayment};
use order_pay::domain::ports::{Payment, PaymentBox, PaymentMethod};
use order_pay::infrastructure::in_memory::RecordingSink;

#[test]
fn test_payments_as_trait_objects() {
    let payments: Vec<PaymentBox> = vec![
        Box::new(CardPayment) as PaymentBox,
        Box::new(BankTransferPayment),
        Box::new(SecureCardPaymentDecorator::new(Box::new(CardPayment))),
        Box::new(LoggingBankTransferPaymentDecorator::new(Box::new(
            BankTransferPayment,
        ))),
    ];

    let mut sink = RecordingSink::new();
    for payment in &payments {
        payment.pay(Amount::from(5), &mut sink).unwrap();
    }

    assert_eq!(
        sink.messages(),
        [
            "Paid 5 by card.",
            "Paid 5 by bank transfer.",
            "Security feature applied.",
            "Paid 5 by card.",
            "Logging payment record.",
            "Paid 5 by bank transfer.",
        ]
    );

    let methods: Vec<PaymentMethod> = payments.iter().map(|p| p.method()).collect();
    assert_eq!(
        methods,
        [
            PaymentMethod::Card,
            PaymentMethod::BankTransfer,
            PaymentMethod::Card,
            PaymentMethod::BankTransfer,
        ]
    );
}

#[test]
fn test_payment_moves_across_threads() {
    let payment: PaymentBox = Box::new(SecureCardPaymentDecorator::new(Box::new(CardPayment)));

    // Verify Send + Sync by paying from another thread
    let handle = std::thread::spawn(move || {
        let mut sink = RecordingSink::new();
        payment.pay(Amount::from(42), &mut sink).unwrap();
        sink.into_messages()
    });

    assert_eq!(
        handle.join().unwrap(),
        vec!["Security feature applied.", "Paid 42 by card."]
    );
}

#[test]
fn test_decorator_reports_inner_method() {
    let inner: Box<dyn Payment> = Box::new(BankTransferPayment);
    let decorated = LoggingBankTransferPaymentDecorator::new(inner);
    assert_eq!(decorated.method(), PaymentMethod::BankTransfer);
}
