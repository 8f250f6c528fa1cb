//! Voucher Document Handler
//!
//! Download endpoint for the placeholder voucher document, rendered from
//! the persisted record on every request.

use std::sync::Arc;

use salvo::{
    http::header::CONTENT_DISPOSITION, oapi::extract::PathParam, prelude::*, writing::Text,
};
use uuid::Uuid;

use itinera::document::{VoucherRenderer, VoucherView};
use itinera_app::domain::vouchers::models::Voucher;

use crate::{extensions::*, state::State, vouchers::errors::into_status_error};

fn view_of<'a>(reference: &'a str, voucher: &'a Voucher) -> VoucherView<'a> {
    VoucherView {
        reference,
        guest_name: &voucher.guest_name,
        pax_count: voucher.pax_count,
        date_start: voucher.date_start,
        date_end: voucher.date_end,
        cities: &voucher.cities,
        kind: voucher.kind,
        items: &voucher.itinerary,
        total: voucher.total,
    }
}

fn download_filename(voucher: &Voucher) -> String {
    format!(
        "Itinera_Voucher_{}_{}.typ",
        voucher.kind,
        voucher.guest_name.replace(' ', "_")
    )
}

/// Voucher Document Handler
///
/// Returns the placeholder Typst document for a saved voucher.
#[endpoint(
    tags("vouchers"),
    summary = "Download Voucher Document",
    responses(
        (status_code = StatusCode::OK, description = "Rendered document"),
        (status_code = StatusCode::NOT_FOUND, description = "Voucher not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    voucher: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let voucher = state
        .app
        .vouchers
        .get_voucher(voucher.into_inner().into())
        .await
        .map_err(into_status_error)?;

    let reference = voucher.uuid.to_string();
    let doc = VoucherRenderer::new().render(&view_of(&reference, &voucher));

    res.add_header(
        CONTENT_DISPOSITION,
        format!("attachment; filename=\"{}\"", download_filename(&voucher)),
        true,
    )
    .or_500("failed to set content disposition header")?
    .render(Text::Plain(doc));

    Ok(StatusCode::OK)
}
