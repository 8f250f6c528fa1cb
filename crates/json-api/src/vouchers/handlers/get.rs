//! Get Voucher Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use itinera_app::domain::vouchers::models::Voucher;

use crate::{
    carts::get::CartItemResponse,
    extensions::*,
    state::State,
    vouchers::errors::into_status_error,
};

/// Voucher Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VoucherResponse {
    /// The unique identifier of the voucher
    pub uuid: Uuid,

    /// Lead guest name(s)
    pub guest_name: String,

    /// Total number of travellers
    pub pax_count: u32,

    /// First day of travel, ISO 8601
    pub date_start: String,

    /// Last day of travel, ISO 8601
    pub date_end: String,

    /// Cities covered
    pub cities: String,

    /// QUOTE or SERVICE
    pub doc_type: String,

    /// Stored lifecycle status
    pub status: String,

    /// Package total in JPY at submission time
    pub total: u64,

    /// Snapshotted itinerary items
    pub itinerary: Vec<CartItemResponse>,

    /// Submitting agent's name
    pub created_by: String,

    /// When the record was written
    pub created_at: String,
}

impl From<Voucher> for VoucherResponse {
    fn from(voucher: Voucher) -> Self {
        Self {
            uuid: voucher.uuid.into_uuid(),
            guest_name: voucher.guest_name,
            pax_count: voucher.pax_count,
            date_start: voucher.date_start.to_string(),
            date_end: voucher.date_end.to_string(),
            cities: voucher.cities,
            doc_type: voucher.kind.to_string(),
            status: voucher.status.to_string(),
            total: voucher.total,
            itinerary: voucher.itinerary.iter().map(CartItemResponse::from).collect(),
            created_by: voucher.created_by,
            created_at: voucher.created_at.to_string(),
        }
    }
}

/// Get Voucher Handler
///
/// Returns a persisted voucher record.
#[endpoint(tags("vouchers"), summary = "Get Voucher")]
pub(crate) async fn handler(
    voucher: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<VoucherResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let voucher = state
        .app
        .vouchers
        .get_voucher(voucher.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(voucher.into()))
}
