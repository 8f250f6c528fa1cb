//! Itinerary items

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of a service item.
///
/// Catalog kinds take their per-person price from the rate sheet. Custom
/// kinds carry an operator-entered title instead of a catalog service name
/// and always cost zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    /// Guided tour, priced per person.
    Tour,

    /// Airport or station transfer.
    Transfer,

    /// Activity or entrance ticket. Rate-sheet label: "Activity/Ticket".
    #[serde(rename = "Activity/Ticket")]
    Ticket,

    /// Hotel stay. Free-text title, unpriced.
    Hotel,

    /// Meal voucher. Free-text title, unpriced.
    #[serde(rename = "Meal Voucher")]
    MealVoucher,

    /// Unpriced free spot in the day plan.
    #[serde(rename = "Free Spot")]
    FreeSpot,
}

impl ServiceKind {
    /// Whether items of this kind take their price from the rate catalog.
    #[must_use]
    pub const fn is_catalog_priced(self) -> bool {
        matches!(self, Self::Tour | Self::Transfer | Self::Ticket)
    }

    /// Rate-sheet label for this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tour => "Tour",
            Self::Transfer => "Transfer",
            Self::Ticket => "Activity/Ticket",
            Self::Hotel => "Hotel",
            Self::MealVoucher => "Meal Voucher",
            Self::FreeSpot => "Free Spot",
        }
    }
}

impl Display for ServiceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// One line of an in-progress itinerary.
///
/// The cost is recorded when the item is created and never recomputed, so a
/// later catalog change cannot make a cart's total drift from its items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    id: Uuid,
    day: u32,
    kind: ServiceKind,
    name: String,
    pax: u32,
    details: String,
    cost: u64,
}

impl CartItem {
    /// Creates an item with a freshly generated identifier.
    #[must_use]
    pub fn new(
        day: u32,
        kind: ServiceKind,
        name: impl Into<String>,
        pax: u32,
        details: impl Into<String>,
        cost: u64,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            day,
            kind,
            name: name.into(),
            pax,
            details: details.into(),
            cost,
        }
    }

    /// Unique identifier of the item.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Day of the trip the item falls on, starting at 1.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Category of the item.
    #[must_use]
    pub fn kind(&self) -> ServiceKind {
        self.kind
    }

    /// Catalog service name, or the operator-entered title for custom kinds.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of travellers the cost applies to.
    #[must_use]
    pub fn pax(&self) -> u32 {
        self.pax
    }

    /// Free-text details: confirmation numbers, car type, notes.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Cost in JPY recorded when the item was added.
    #[must_use]
    pub fn cost(&self) -> u64 {
        self.cost
    }
}
