//! Ticket
//!
//! The order confirmation handed back after a successful checkout: buyer
//! details, the line items exactly as they were at submission time, and the
//! derived totals. The item sequence is an owned snapshot, so later cart
//! mutations cannot retroactively alter an issued ticket.

use std::io;

use jiff::Timestamp;
use rand::{Rng, distributions::Alphanumeric, thread_rng};
use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{checkout::CheckoutForm, items::LineItem, pricing::OrderTotal};

/// Length of the generated ticket reference.
const REFERENCE_LEN: usize = 9;

/// Errors that can occur when rendering a ticket.
#[derive(Debug, Error)]
pub enum TicketError {
    /// The ticket could not be written to the output.
    #[error("io error")]
    Io(#[from] io::Error),
}

/// Buyer details carried onto the ticket. Payment fields never leave the
/// checkout form.
#[derive(Debug, Clone, PartialEq)]
pub struct Buyer {
    /// Given name.
    pub name: String,

    /// Surname.
    pub surname: String,

    /// Contact email.
    pub email: String,

    /// Shipping street.
    pub street: String,

    /// Shipping city.
    pub city: String,

    /// Shipping postal code.
    pub postal_code: String,
}

impl From<&CheckoutForm> for Buyer {
    fn from(form: &CheckoutForm) -> Self {
        Self {
            name: form.name().to_string(),
            surname: form.surname().to_string(),
            email: form.email().trim().to_string(),
            street: form.street().to_string(),
            city: form.city().to_string(),
            postal_code: form.postal_code().to_string(),
        }
    }
}

/// Order confirmation for a completed (simulated) purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    reference: String,
    placed_at: Timestamp,
    buyer: Buyer,
    items: Vec<LineItem>,
    total: OrderTotal,
}

impl Ticket {
    /// Issues a ticket for the given buyer, snapshot and totals, stamping
    /// it with the current time and a fresh reference code.
    #[must_use]
    pub fn issue(buyer: Buyer, items: Vec<LineItem>, total: OrderTotal) -> Self {
        Self {
            reference: new_reference(),
            placed_at: Timestamp::now(),
            buyer,
            items,
            total,
        }
    }

    /// The ticket reference code shown to the buyer.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// When the order was placed.
    #[must_use]
    pub fn placed_at(&self) -> Timestamp {
        self.placed_at
    }

    /// The buyer the order ships to.
    #[must_use]
    pub fn buyer(&self) -> &Buyer {
        &self.buyer
    }

    /// The line items exactly as they were at submission time.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The derived order totals.
    #[must_use]
    pub fn total(&self) -> OrderTotal {
        self.total
    }

    /// Writes the ticket as text: header, buyer block, item table and a
    /// totals summary.
    ///
    /// # Errors
    ///
    /// Returns a [`TicketError`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), TicketError> {
        writeln!(out, "Ticket {}", self.reference)?;
        writeln!(out, "Placed {}", self.placed_at.strftime("%Y-%m-%d %H:%M"))?;
        writeln!(out)?;
        writeln!(out, "{} {}", self.buyer.name, self.buyer.surname)?;
        writeln!(out, "{}", self.buyer.email)?;
        writeln!(
            out,
            "{}, {} {}",
            self.buyer.street, self.buyer.city, self.buyer.postal_code
        )?;

        let mut builder = Builder::default();

        builder.push_record(["Item", "Qty", "Unit Price", "Amount"]);

        for item in &self.items {
            builder.push_record([
                item.name.clone(),
                item.quantity.to_string(),
                money(item.unit_price),
                money(item.line_total()),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..), Alignment::right());

        writeln!(out, "\n{table}")?;

        write_summary_line(&mut out, "Subtotal:", self.total.subtotal)?;
        write_summary_line(&mut out, "Tax:", self.total.tax)?;
        write_summary_line(&mut out, "Shipping:", self.total.shipping_fee)?;
        write_summary_line(&mut out, "Total:", self.total.grand_total)?;

        Ok(())
    }
}

/// A fresh uppercase alphanumeric reference code.
fn new_reference() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(REFERENCE_LEN)
        .map(|byte| char::from(byte).to_ascii_uppercase())
        .collect()
}

/// Formats an amount with two decimal places.
fn money(amount: Decimal) -> String {
    format!("${amount:.2}")
}

/// Writes one right-aligned summary line under the item table.
fn write_summary_line(
    out: &mut impl io::Write,
    label: &str,
    amount: Decimal,
) -> Result<(), TicketError> {
    writeln!(out, "{label:>10} {:>12}", money(amount))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        pricing::PricingPolicy,
        products::{Product, ProductId},
    };

    use super::*;

    fn test_items() -> Vec<LineItem> {
        let shirt = Product {
            id: ProductId(1),
            name: "Playera".to_string(),
            description: None,
            price: Decimal::from(199),
            image_url: None,
            stock: None,
            category_id: None,
            color_id: None,
            brand: None,
        };

        let cap = Product {
            id: ProductId(2),
            name: "Gorra".to_string(),
            description: None,
            price: Decimal::from(149),
            image_url: None,
            stock: None,
            category_id: None,
            color_id: None,
            brand: None,
        };

        vec![
            LineItem::from_product(&shirt, 2),
            LineItem::from_product(&cap, 1),
        ]
    }

    fn test_buyer() -> Buyer {
        Buyer {
            name: "María".to_string(),
            surname: "García".to_string(),
            email: "maria@example.com".to_string(),
            street: "Av. Central 123".to_string(),
            city: "Puebla".to_string(),
            postal_code: "72000".to_string(),
        }
    }

    fn test_ticket() -> Ticket {
        let items = test_items();
        let total = OrderTotal::from_items(&items, &PricingPolicy::default());

        Ticket::issue(test_buyer(), items, total)
    }

    #[test]
    fn issue_keeps_the_snapshot_and_totals() {
        let ticket = test_ticket();

        assert_eq!(ticket.items().len(), 2);
        assert_eq!(ticket.total().subtotal, Decimal::from(547));
        assert_eq!(ticket.buyer().city, "Puebla");
    }

    #[test]
    fn reference_is_nine_uppercase_alphanumerics() {
        let ticket = test_ticket();

        assert_eq!(ticket.reference().len(), 9);
        assert!(
            ticket
                .reference()
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
            "reference {:?} has unexpected characters",
            ticket.reference()
        );
    }

    #[test]
    fn references_differ_between_tickets() {
        assert_ne!(test_ticket().reference(), test_ticket().reference());
    }

    #[test]
    fn write_to_renders_buyer_items_and_totals() -> TestResult {
        let ticket = test_ticket();

        let mut out = Vec::new();
        ticket.write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains(ticket.reference()));
        assert!(output.contains("María García"));
        assert!(output.contains("Playera"));
        assert!(output.contains("Gorra"));
        assert!(output.contains("$398.00"));
        assert!(output.contains("Subtotal:"));
        assert!(output.contains("Total:"));
        assert!(output.contains("$685.00"));

        Ok(())
    }

    #[test]
    fn money_pads_to_two_decimal_places() {
        assert_eq!(money(Decimal::from(499)), "$499.00");
        assert_eq!(money(Decimal::new(5950, 2)), "$59.50");
    }

    #[test]
    fn buyer_from_form_trims_the_email() {
        let mut form = CheckoutForm::new();

        form.set_name("María");
        form.set_email("  maria@example.com ");

        let buyer = Buyer::from(&form);

        assert_eq!(buyer.email, "maria@example.com");
        assert_eq!(buyer.name, "María");
    }
}
