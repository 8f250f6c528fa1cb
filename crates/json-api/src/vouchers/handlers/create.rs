//! Create Voucher Handler
//!
//! The submission endpoint: validates the trip details against the session
//! cart, snapshots both, and persists the result as one voucher record. A
//! failed save is surfaced and no document link is offered.

use std::sync::Arc;

use jiff::civil::Date;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use itinera::voucher::{DocumentKind, TripDetails, VoucherDraft};
use itinera_app::domain::vouchers::models::NewVoucher;

use crate::{
    carts::errors::into_status_error as cart_into_status_error,
    extensions::*,
    state::State,
    vouchers::errors::{into_status_error, into_validation_error},
};

/// Kind of document a submission produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum DocumentKindParam {
    Quote,
    Service,
}

impl From<DocumentKindParam> for DocumentKind {
    fn from(param: DocumentKindParam) -> Self {
        match param {
            DocumentKindParam::Quote => DocumentKind::Quote,
            DocumentKindParam::Service => DocumentKind::Service,
        }
    }
}

/// Create Voucher Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateVoucherRequest {
    /// Voucher UUID
    pub uuid: Uuid,

    /// Session cart to snapshot
    pub cart_uuid: Uuid,

    /// Lead guest name(s)
    pub guest_name: String,

    /// Total number of travellers
    pub pax_count: u32,

    /// First day of travel, ISO 8601
    pub date_start: String,

    /// Last day of travel, ISO 8601
    pub date_end: String,

    /// Cities covered, free text
    #[serde(default)]
    pub cities: String,

    /// Quote or confirmed service
    pub kind: DocumentKindParam,

    /// Submitting agent's name
    pub created_by: String,
}

/// Voucher Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VoucherCreatedResponse {
    /// Created voucher UUID
    pub uuid: Uuid,

    /// Package total in JPY at submission time
    pub total: u64,

    /// Stored lifecycle status
    pub status: String,

    /// Where the placeholder voucher document can be downloaded
    pub document: String,
}

/// Create Voucher Handler
#[endpoint(
    tags("vouchers"),
    summary = "Submit Quote or Service Voucher",
    responses(
        (status_code = StatusCode::CREATED, description = "Voucher saved"),
        (status_code = StatusCode::CONFLICT, description = "Voucher already exists"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Save failed"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateVoucherRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<VoucherCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = json.into_inner();

    let date_start: Date = request
        .date_start
        .parse()
        .or_400("could not parse \"date_start\"")?;
    let date_end: Date = request
        .date_end
        .parse()
        .or_400("could not parse \"date_end\"")?;

    let cart = state
        .app
        .carts
        .get_cart(request.cart_uuid.into())
        .await
        .map_err(cart_into_status_error)?;

    let details = TripDetails {
        guest_name: request.guest_name,
        pax_count: request.pax_count,
        date_start,
        date_end,
        cities: request.cities,
    };

    // rejects before any side effect happens
    let draft = VoucherDraft::build(details, request.kind.into(), &cart)
        .map_err(into_validation_error)?;

    let voucher = state
        .app
        .vouchers
        .submit_voucher(NewVoucher {
            uuid: request.uuid.into(),
            draft,
            created_by: request.created_by,
        })
        .await
        .map_err(into_status_error)?;

    let uuid = voucher.uuid.into_uuid();

    res.add_header(LOCATION, format!("/vouchers/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(voucher_uuid = %uuid, status = %voucher.status, "saved voucher");

    Ok(Json(VoucherCreatedResponse {
        uuid,
        total: voucher.total,
        status: voucher.status.to_string(),
        document: format!("/vouchers/{uuid}/document"),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use itinera::cart::Cart;
    use itinera_app::domain::{
        carts::{CartsServiceError, MockCartsService},
        vouchers::{MockVouchersService, VouchersServiceError},
    };

    use crate::test_helpers::{make_cart, make_voucher, vouchers_service};

    use super::*;

    fn make_service(carts: MockCartsService, vouchers: MockVouchersService) -> Service {
        vouchers_service(carts, vouchers, Router::with_path("vouchers").post(handler))
    }

    fn submission(uuid: Uuid, cart_uuid: Uuid, guest_name: &str) -> serde_json::Value {
        json!({
            "uuid": uuid,
            "cart_uuid": cart_uuid,
            "guest_name": guest_name,
            "pax_count": 2,
            "date_start": "2026-09-10",
            "date_end": "2026-09-17",
            "cities": "Tokyo, Kyoto",
            "kind": "quote",
            "created_by": "sales_agent",
        })
    }

    #[tokio::test]
    async fn test_submit_saves_and_links_the_document() -> TestResult {
        let uuid = Uuid::now_v7();
        let cart_uuid = Uuid::now_v7();
        let cart = make_cart();
        let voucher = make_voucher(uuid, &cart);
        let expected_total = voucher.total;

        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .withf(move |u| u.into_uuid() == cart_uuid)
            .return_once(move |_| Ok(cart));

        let mut vouchers = MockVouchersService::new();

        vouchers
            .expect_submit_voucher()
            .once()
            .withf(move |new| {
                new.uuid.into_uuid() == uuid
                    && new.draft.guest_name() == "Sato Kenji"
                    && new.created_by == "sales_agent"
            })
            .return_once(move |_| Ok(voucher));

        let mut res = TestClient::post("http://example.com/vouchers")
            .json(&submission(uuid, cart_uuid, "Sato Kenji"))
            .send(&make_service(carts, vouchers))
            .await;

        let body: VoucherCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/vouchers/{uuid}").as_str()));
        assert_eq!(body.uuid, uuid);
        assert_eq!(body.total, expected_total);
        assert_eq!(body.status, "Quoted");
        assert_eq!(body.document, format!("/vouchers/{uuid}/document"));

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_guest_name_is_rejected_with_no_save() -> TestResult {
        let cart_uuid = Uuid::now_v7();
        let cart = make_cart();

        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(move |_| Ok(cart));

        let mut vouchers = MockVouchersService::new();

        vouchers.expect_submit_voucher().never();

        let res = TestClient::post("http://example.com/vouchers")
            .json(&submission(Uuid::now_v7(), cart_uuid, "   "))
            .send(&make_service(carts, vouchers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_cart_is_rejected_with_no_save() -> TestResult {
        let cart_uuid = Uuid::now_v7();

        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|_| Ok(Cart::new()));

        let mut vouchers = MockVouchersService::new();

        vouchers.expect_submit_voucher().never();

        let res = TestClient::post("http://example.com/vouchers")
            .json(&submission(Uuid::now_v7(), cart_uuid, "Sato Kenji"))
            .send(&make_service(carts, vouchers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        let mut vouchers = MockVouchersService::new();

        vouchers.expect_submit_voucher().never();

        let res = TestClient::post("http://example.com/vouchers")
            .json(&submission(Uuid::now_v7(), Uuid::now_v7(), "Sato Kenji"))
            .send(&make_service(carts, vouchers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failure_returns_500_and_no_document() -> TestResult {
        let cart_uuid = Uuid::now_v7();
        let cart = make_cart();

        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(move |_| Ok(cart));

        let mut vouchers = MockVouchersService::new();

        vouchers
            .expect_submit_voucher()
            .once()
            .return_once(|_| Err(VouchersServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::post("http://example.com/vouchers")
            .json(&submission(Uuid::now_v7(), cart_uuid, "Sato Kenji"))
            .send(&make_service(carts, vouchers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }

    #[tokio::test]
    async fn test_unparseable_dates_are_rejected() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_get_cart().never();

        let mut vouchers = MockVouchersService::new();

        vouchers.expect_submit_voucher().never();

        let mut body = submission(Uuid::now_v7(), Uuid::now_v7(), "Sato Kenji");
        body["date_start"] = json!("next Tuesday");

        let res = TestClient::post("http://example.com/vouchers")
            .json(&body)
            .send(&make_service(carts, vouchers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
