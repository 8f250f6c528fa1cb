//! Errors

use salvo::http::StatusError;
use tracing::error;

use itinera::voucher::VoucherError;
use itinera_app::domain::vouchers::VouchersServiceError;

pub(crate) fn into_status_error(error: VouchersServiceError) -> StatusError {
    match error {
        VouchersServiceError::AlreadyExists => {
            StatusError::conflict().brief("Voucher already exists")
        }
        VouchersServiceError::NotFound => StatusError::not_found().brief("Voucher not found"),
        VouchersServiceError::MissingRequiredData
        | VouchersServiceError::InvalidData
        | VouchersServiceError::AmountRange(_) => {
            StatusError::bad_request().brief("Invalid voucher payload")
        }
        VouchersServiceError::Sql(source) => {
            error!("failed to save voucher: {source}");

            StatusError::internal_server_error()
                .brief("Document generated but FAILED to save to the database")
        }
    }
}

/// Submission validation failures block the save with no side effects.
pub(crate) fn into_validation_error(error: VoucherError) -> StatusError {
    StatusError::bad_request().brief(error.to_string())
}
