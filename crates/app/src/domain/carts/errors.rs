//! Carts service errors.

use thiserror::Error;

use itinera::pricing::PricingError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartsServiceError {
    #[error("cart already exists")]
    AlreadyExists,

    #[error("cart not found")]
    NotFound,

    #[error("cart item not found")]
    ItemNotFound,

    /// The named service does not exist in the rate catalog.
    #[error("unknown service {0:?}")]
    UnknownService(String),

    /// Custom items need an operator-entered title.
    #[error("missing title for custom service item")]
    MissingTitle,

    #[error(transparent)]
    Pricing(#[from] PricingError),
}
