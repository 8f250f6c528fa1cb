//! App Router

use salvo::Router;

use crate::{carts, rates, vouchers};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("rates").get(rates::index::handler))
        .push(
            Router::with_path("carts").post(carts::create::handler).push(
                Router::with_path("{cart}")
                    .get(carts::get::handler)
                    .delete(carts::clear::handler)
                    .push(
                        Router::with_path("items")
                            .post(carts::items::create::handler)
                            .push(Router::with_path("{item}").delete(carts::items::delete::handler)),
                    ),
            ),
        )
        .push(
            Router::with_path("vouchers").post(vouchers::create::handler).push(
                Router::with_path("{voucher}")
                    .get(vouchers::get::handler)
                    .push(Router::with_path("document").get(vouchers::document::handler)),
            ),
        )
}
