//! Checkout
//!
//! Validates buyer-submitted checkout data and computes the final payable
//! amount from a cart snapshot. Payment is simulated: submission is a pure
//! computation plus one suspension point for the processing delay, with no
//! network dependency. There are exactly two terminal states, a rejection
//! carrying a single reason and a confirmation carrying a ticket; a
//! rejection performs no side effect, so the form and cart stay untouched
//! for correction and resubmission.

use std::time::Duration;

use jiff::{Zoned, civil::Date};
use thiserror::Error;

use crate::{
    items::LineItem,
    pricing::{OrderTotal, PricingPolicy},
    ticket::{Buyer, Ticket},
};

pub mod form;
pub mod validate;

pub use form::CheckoutForm;
pub use validate::ValidationError;

/// Simulated payment-processing delay awaited before a ticket is issued.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// Ways a checkout submission can be rejected.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart snapshot was empty; the calculator is never invoked.
    #[error("the cart is empty")]
    EmptyCart,

    /// A form field failed its rule; the display message is the single
    /// reason surfaced to the buyer.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Submits a checkout form against a cart snapshot.
///
/// On success the returned [`Ticket`] owns a copy of the snapshot and the
/// totals derived from it; the caller is expected to clear the cart store.
/// Expiry rules are anchored to the current date; use [`submit_at`] to pin
/// them in tests.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] for an empty snapshot and
/// [`CheckoutError::Validation`] for the first field rule that fails.
pub async fn submit(
    form: &CheckoutForm,
    snapshot: &[LineItem],
    policy: &PricingPolicy,
) -> Result<Ticket, CheckoutError> {
    submit_at(form, snapshot, policy, Zoned::now().date()).await
}

/// [`submit`] with an explicit "today" anchoring the card-expiry rules.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] for an empty snapshot and
/// [`CheckoutError::Validation`] for the first field rule that fails.
pub async fn submit_at(
    form: &CheckoutForm,
    snapshot: &[LineItem],
    policy: &PricingPolicy,
    today: Date,
) -> Result<Ticket, CheckoutError> {
    if snapshot.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    validate::validate(form, today)?;

    // The only suspension point; nothing has been committed before it, so
    // abandoning the future mid-delay leaves no partial state behind.
    tokio::time::sleep(PROCESSING_DELAY).await;

    let total = OrderTotal::from_items(snapshot, policy);

    Ok(Ticket::issue(Buyer::from(form), snapshot.to_vec(), total))
}
