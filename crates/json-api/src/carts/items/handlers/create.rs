//! Create Cart Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use itinera::items::ServiceKind;
use itinera_app::domain::carts::models::NewCartItem;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Service category selected in the builder form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ServiceKindParam {
    Tour,
    Transfer,
    Ticket,
    Hotel,
    MealVoucher,
    FreeSpot,
}

impl From<ServiceKindParam> for ServiceKind {
    fn from(param: ServiceKindParam) -> Self {
        match param {
            ServiceKindParam::Tour => ServiceKind::Tour,
            ServiceKindParam::Transfer => ServiceKind::Transfer,
            ServiceKindParam::Ticket => ServiceKind::Ticket,
            ServiceKindParam::Hotel => ServiceKind::Hotel,
            ServiceKindParam::MealVoucher => ServiceKind::MealVoucher,
            ServiceKindParam::FreeSpot => ServiceKind::FreeSpot,
        }
    }
}

/// Create Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartItemRequest {
    /// Day of the trip the item falls on, starting at 1
    pub day: u32,

    /// Service category
    pub kind: ServiceKindParam,

    /// Catalog service name, or the title of a custom item
    pub name: String,

    /// Number of travellers the cost applies to
    pub pax: u32,

    /// Free-text details: confirmation numbers, car type, notes
    #[serde(default)]
    pub details: String,
}

impl From<CreateCartItemRequest> for NewCartItem {
    fn from(request: CreateCartItemRequest) -> Self {
        NewCartItem {
            day: request.day,
            kind: request.kind.into(),
            name: request.name,
            pax: request.pax,
            details: request.details,
        }
    }
}

/// Cart Item Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemCreatedResponse {
    /// Created cart item UUID
    pub uuid: Uuid,

    /// Cost recorded for the item in JPY
    pub cost: u64,
}

/// Create Cart Item Handler
///
/// Prices the item from the rate sheet (base price times pax; custom kinds
/// cost zero) and appends it to the cart.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart item created"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<CreateCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = cart.into_inner();

    let item = state
        .app
        .carts
        .add_item(cart.into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/carts/{cart}/items/{}", item.id()), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(CartItemCreatedResponse {
        uuid: item.id(),
        cost: item.cost(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use itinera::items::CartItem;
    use itinera_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::carts_service;

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("carts/{cart}/items").post(handler))
    }

    fn tour_request() -> serde_json::Value {
        json!({
            "day": 1,
            "kind": "tour",
            "name": "Tokyo Full Day Private Tour",
            "pax": 2,
            "details": "English-speaking guide",
        })
    }

    #[tokio::test]
    async fn test_add_item_success() -> TestResult {
        let cart = Uuid::now_v7();
        let item = CartItem::new(
            1,
            ServiceKind::Tour,
            "Tokyo Full Day Private Tour",
            2,
            "English-speaking guide",
            100_000,
        );
        let item_id = item.id();

        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .withf(move |c, new| {
                c.into_uuid() == cart
                    && new.kind == ServiceKind::Tour
                    && new.name == "Tokyo Full Day Private Tour"
                    && new.pax == 2
            })
            .return_once(move |_, _| Ok(item));

        carts.expect_get_cart().never();
        carts.expect_create_cart().never();

        let mut res = TestClient::post(format!("http://example.com/carts/{cart}/items"))
            .json(&tour_request())
            .send(&make_service(carts))
            .await;

        let body: CartItemCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/carts/{cart}/items/{item_id}").as_str()));
        assert_eq!(body.uuid, item_id);
        assert_eq!(body.cost, 100_000);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_to_unknown_cart_returns_404() -> TestResult {
        let cart = Uuid::now_v7();

        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let res = TestClient::post(format!("http://example.com/carts/{cart}/items"))
            .json(&tour_request())
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_unknown_service_returns_400() -> TestResult {
        let cart = Uuid::now_v7();

        let mut carts = MockCartsService::new();

        carts.expect_add_item().once().return_once(|_, _| {
            Err(CartsServiceError::UnknownService("Mount Fuji Day Hike".to_owned()))
        });

        let res = TestClient::post(format!("http://example.com/carts/{cart}/items"))
            .json(&json!({
                "day": 1,
                "kind": "tour",
                "name": "Mount Fuji Day Hike",
                "pax": 2,
            }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_kind_param_maps_to_core_kinds() {
        assert_eq!(ServiceKind::from(ServiceKindParam::Ticket), ServiceKind::Ticket);
        assert_eq!(
            ServiceKind::from(ServiceKindParam::MealVoucher),
            ServiceKind::MealVoucher
        );
    }
}
