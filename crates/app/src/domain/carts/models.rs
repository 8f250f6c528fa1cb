//! Cart session models

use itinera::items::ServiceKind;

use crate::uuids::TypedUuid;

/// Marker for cart session identifiers.
#[derive(Debug, Clone, Copy)]
pub struct CartSession;

/// Cart session UUID
pub type CartUuid = TypedUuid<CartSession>;

/// Data for opening a new cart session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCart {
    pub uuid: CartUuid,
}

/// Data for one item added through the builder form.
///
/// For catalog-priced kinds `name` selects a rate-sheet row; for custom
/// kinds it is the operator-entered title and the item prices to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub day: u32,
    pub kind: ServiceKind,
    pub name: String,
    pub pax: u32,
    pub details: String,
}
