//! Session cart

use smallvec::{SmallVec, smallvec};
use uuid::Uuid;

use crate::items::CartItem;

/// In-progress itinerary for one trip: ordered items plus a running total.
///
/// Invariant: the running total always equals the sum of the current items'
/// recorded costs. Removal subtracts the cost recorded at add time rather
/// than recomputing it, so a catalog price change after the fact never makes
/// the two drift.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
    total: u64,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Running total in JPY.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item and grows the total by its recorded cost.
    ///
    /// Returns the identifier of the appended item.
    pub fn add(&mut self, item: CartItem) -> Uuid {
        let id = item.id();

        self.total += item.cost();
        self.items.push(item);

        id
    }

    /// Removes exactly one item by identifier, shrinking the total by that
    /// item's recorded cost.
    ///
    /// An unknown identifier leaves the cart and total untouched and returns
    /// `None`.
    pub fn remove(&mut self, id: Uuid) -> Option<CartItem> {
        let position = self.items.iter().position(|item| item.id() == id)?;
        let item = self.items.remove(position);

        self.total -= item.cost();

        Some(item)
    }

    /// Drops every item and resets the total to zero.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = 0;
    }

    /// Items grouped by day, days ascending, preserving insertion order
    /// within a day.
    #[must_use]
    pub fn items_by_day(&self) -> Vec<(u32, SmallVec<[&CartItem; 4]>)> {
        let mut days: Vec<(u32, SmallVec<[&CartItem; 4]>)> = Vec::new();

        for item in &self.items {
            match days.binary_search_by_key(&item.day(), |(day, _)| *day) {
                Ok(found) => {
                    if let Some((_, items)) = days.get_mut(found) {
                        items.push(item);
                    }
                }
                Err(insert_at) => days.insert(insert_at, (item.day(), smallvec![item])),
            }
        }

        days
    }
}
