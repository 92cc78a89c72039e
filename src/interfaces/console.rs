use crate::application::factory::PaymentFactory;
use crate::application::service::OrderPaymentService;
use crate::domain::amount::Amount;
use crate::domain::order::Order;
use crate::domain::product::{Catalog, Product};
use crate::error::{OrderError, Result};
use crate::infrastructure::console::ConsoleSink;
use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

/// Interactive menu that takes one order from prompt to payment confirmation.
///
/// Generic over its input and output so the same flow runs against a terminal
/// (`StdinLock`/`StdoutLock`) or in-memory buffers.
pub struct Storefront<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Storefront<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs one order: menu, product, quantity, payment type, then payment.
    ///
    /// Every answer is validated before anything is charged, so an error
    /// leaves no confirmation lines behind.
    pub fn run(&mut self, catalog: &Catalog) -> Result<Amount> {
        self.show_catalog(catalog)?;

        let answer = self.prompt("Select a product number: ")?;
        let product = select_product(catalog, &answer)?;

        let answer = self.prompt("Enter the quantity: ")?;
        let quantity = parse_quantity(&answer)?;
        let order = Order::new(product, quantity);

        let choices = PaymentFactory::selectors().collect::<Vec<_>>().join(" or ");
        let selector = self.prompt(&format!("Choose a payment method ({choices}): "))?;
        let payment = PaymentFactory::create_decorated(&selector)?;

        let mut sink = ConsoleSink::new(&mut self.output);
        OrderPaymentService::new().process_order(&order, payment.as_ref(), &mut sink)
    }

    pub fn show_catalog(&mut self, catalog: &Catalog) -> Result<()> {
        writeln!(self.output, "Menu:")?;
        for (number, product) in catalog.entries() {
            writeln!(self.output, "{number}. {product}")?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            )
            .into());
        }
        Ok(line.trim().to_string())
    }
}

/// Resolves a typed menu number against the catalog.
pub fn select_product<'a>(catalog: &'a Catalog, answer: &str) -> Result<&'a Product> {
    let number = answer
        .trim()
        .parse::<usize>()
        .map_err(|_| OrderError::InvalidSelection {
            input: answer.trim().to_string(),
            max: catalog.len(),
        })?;
    catalog.select(number)
}

/// Parses a typed quantity, which must be a whole number from 1 to `u32::MAX`.
pub fn parse_quantity(answer: &str) -> Result<u32> {
    let answer = answer.trim();
    match answer.parse::<u32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            Err(OrderError::QuantityTooLarge {
                input: answer.to_string(),
                max: u32::MAX,
            })
        }
        _ => Err(OrderError::InvalidQuantity(answer.to_string())),
    }
}
