//! Test and example fixtures

use jiff::civil::{Date, date};

use crate::{
    cart::Cart,
    items::{CartItem, ServiceKind},
    voucher::TripDetails,
};

/// First travel day used by [`sample_trip`].
pub const SAMPLE_DATE_START: Date = date(2026, 9, 10);

/// Last travel day used by [`sample_trip`].
pub const SAMPLE_DATE_END: Date = date(2026, 9, 17);

/// A small cart for two pax covering three days, priced from the bundled
/// sample sheet. Costs are spelled out literally so fixtures cannot fail.
#[must_use]
pub fn sample_cart() -> Cart {
    let mut cart = Cart::new();

    cart.add(CartItem::new(
        1,
        ServiceKind::Transfer,
        "NRT Airport Transfer Private",
        2,
        "Alphard, flight NH110",
        50_000,
    ));
    cart.add(CartItem::new(
        1,
        ServiceKind::Tour,
        "Tokyo Full Day Private Tour",
        2,
        "English-speaking guide",
        100_000,
    ));
    cart.add(CartItem::new(2, ServiceKind::Hotel, "Park Hyatt Tokyo", 2, "Conf# 88123", 0));
    cart.add(CartItem::new(
        3,
        ServiceKind::Ticket,
        "Tokyo Skytree Ticket",
        2,
        "",
        5_000,
    ));

    cart
}

/// Trip details matching [`sample_cart`].
#[must_use]
pub fn sample_trip() -> TripDetails {
    TripDetails {
        guest_name: "Sato Kenji".to_owned(),
        pax_count: 2,
        date_start: SAMPLE_DATE_START,
        date_end: SAMPLE_DATE_END,
        cities: "Tokyo, Kyoto".to_owned(),
    }
}
