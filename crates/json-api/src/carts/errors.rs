//! Errors

use salvo::http::StatusError;
use tracing::error;

use itinera_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::AlreadyExists => StatusError::conflict().brief("Cart already exists"),
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::ItemNotFound => StatusError::not_found().brief("Cart item not found"),
        CartsServiceError::UnknownService(_) => {
            StatusError::bad_request().brief("Please select a valid service category and item name")
        }
        CartsServiceError::MissingTitle => {
            StatusError::bad_request().brief("Custom items need a name or title")
        }
        CartsServiceError::Pricing(source) => {
            error!("failed to price cart item: {source}");

            StatusError::bad_request().brief("Could not price the item")
        }
    }
}
