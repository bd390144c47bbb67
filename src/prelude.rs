//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{
        CartStore,
        storage::{CART_KEY, CartStorage, JsonFileStorage, MemoryStorage, StorageError},
    },
    checkout::{CheckoutError, CheckoutForm, ValidationError, submit, submit_at},
    items::LineItem,
    pricing::{OrderTotal, PricingPolicy},
    products::{Product, ProductId},
    ticket::{Buyer, Ticket, TicketError},
};
