//! Cart
//!
//! The cart store owns the authoritative line-item sequence for the active
//! session and keeps a persisted copy in sync with every mutation.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    items::{self, LineItem},
    products::{Product, ProductId},
};

pub mod storage;

use storage::{CartStorage, MemoryStorage};

/// Cart store for a single session.
///
/// Items are kept in insertion order and contain at most one entry per
/// product id. Every mutation writes the full sequence to the backing
/// storage; write failures are logged and the in-memory state is kept.
#[derive(Debug)]
pub struct CartStore<S: CartStorage = MemoryStorage> {
    items: Vec<LineItem>,
    storage: S,
}

impl CartStore {
    /// Creates an empty cart backed by in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            storage: MemoryStorage::new(),
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CartStorage> CartStore<S> {
    /// Creates a cart backed by the given storage, rehydrating any
    /// previously persisted snapshot.
    ///
    /// A missing, unreadable or malformed snapshot yields an empty cart;
    /// the failure is logged and never surfaced to the caller.
    pub fn with_storage(storage: S) -> Self {
        let items = match storage.load() {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(err) => {
                debug!(error = %err, "cart snapshot unreadable, starting empty");
                Vec::new()
            }
        };

        Self { items, storage }
    }

    /// Adds one unit of the given product.
    ///
    /// If the product is already in the cart its quantity is incremented;
    /// otherwise a new line item is appended.
    pub fn add(&mut self, product: &Product) {
        self.add_with_quantity(product, 1);
    }

    /// Adds the given number of units of a product, merging into the
    /// existing line item if one exists.
    ///
    /// A quantity of zero is rejected at this boundary and leaves the cart
    /// untouched.
    pub fn add_with_quantity(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        match self.position(product.id) {
            Some(idx) => {
                if let Some(item) = self.items.get_mut(idx) {
                    item.quantity = item.quantity.saturating_add(quantity);
                }
            }
            None => self.items.push(LineItem::from_product(product, quantity)),
        }

        self.persist();
    }

    /// Replaces the quantity of the line item with the given product id.
    ///
    /// Quantities below 1 are refused and leave the item unchanged; removal
    /// is a separate, explicit operation. An unknown product id is a silent
    /// no-op.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity < 1 {
            return;
        }

        let Some(idx) = self.position(id) else {
            return;
        };

        if let Some(item) = self.items.get_mut(idx) {
            item.quantity = quantity;
        }

        self.persist();
    }

    /// Removes the line item with the given product id, if present.
    pub fn remove(&mut self, id: ProductId) {
        let before = self.items.len();

        self.items.retain(|item| item.product_id != id);

        if self.items.len() != before {
            self.persist();
        }
    }

    /// Empties the cart unconditionally. Used after a successful purchase.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Sum of all quantities, not the number of distinct items. Drives the
    /// cart badge.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Calculates the subtotal of the cart.
    ///
    /// Recomputed from the items on every call, so it cannot drift from the
    /// sequence it is derived from.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        items::subtotal(&self.items)
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Iterate over the items in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    /// An owned copy of the item sequence, handed to checkout as the
    /// authoritative snapshot for total computation.
    #[must_use]
    pub fn snapshot(&self) -> Vec<LineItem> {
        self.items.clone()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The backing storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.product_id == id)
    }

    /// Best-effort snapshot write; the in-memory mutation is never rolled
    /// back on failure.
    fn persist(&mut self) {
        if let Err(err) = self.storage.save(&self.items) {
            warn!(error = %err, "failed to persist cart snapshot");
        }
    }
}
