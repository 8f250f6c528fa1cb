//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil::date};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use itinera::{
    cart::Cart,
    items::{CartItem, ServiceKind},
    rates::RateCatalog,
    voucher::{DocumentKind, VoucherStatus},
};
use itinera_app::{
    context::AppContext,
    domain::{
        carts::MockCartsService,
        vouchers::{MockVouchersService, models::Voucher},
    },
};

use crate::state::State;

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_create_cart().never();
    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_remove_item().never();
    carts.expect_clear_cart().never();

    carts
}

fn strict_vouchers_mock() -> MockVouchersService {
    let mut vouchers = MockVouchersService::new();

    vouchers.expect_submit_voucher().never();
    vouchers.expect_get_voucher().never();

    vouchers
}

fn make_state(carts: MockCartsService, vouchers: MockVouchersService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        rates: Arc::new(RateCatalog::bundled_sample()),
        carts: Arc::new(carts),
        vouchers: Arc::new(vouchers),
    }))
}

/// State whose mocks reject every service call.
pub(crate) fn strict_state() -> Arc<State> {
    make_state(strict_carts_mock(), strict_vouchers_mock())
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(make_state(carts, strict_vouchers_mock())))
            .push(route),
    )
}

pub(crate) fn vouchers_service(
    carts: MockCartsService,
    vouchers: MockVouchersService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(make_state(carts, vouchers)))
            .push(route),
    )
}

pub(crate) fn vouchers_only_service(vouchers: MockVouchersService, route: Router) -> Service {
    vouchers_service(strict_carts_mock(), vouchers, route)
}

/// A one-item cart priced for two pax.
pub(crate) fn make_cart() -> Cart {
    let mut cart = Cart::new();

    cart.add(CartItem::new(
        1,
        ServiceKind::Tour,
        "Tokyo Full Day Private Tour",
        2,
        "English-speaking guide",
        100_000,
    ));

    cart
}

/// A stored quote record snapshotting the given cart.
pub(crate) fn make_voucher(uuid: Uuid, cart: &Cart) -> Voucher {
    Voucher {
        uuid: uuid.into(),
        guest_name: "Sato Kenji".to_owned(),
        pax_count: 2,
        date_start: date(2026, 9, 10),
        date_end: date(2026, 9, 17),
        cities: "Tokyo, Kyoto".to_owned(),
        kind: DocumentKind::Quote,
        status: VoucherStatus::Quoted,
        total: cart.total(),
        itinerary: cart.items().to_vec(),
        created_by: "sales_agent".to_owned(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}
