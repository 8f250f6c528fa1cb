//! Get Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use itinera::{cart::Cart, items::CartItem};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart session
    pub uuid: Uuid,

    /// The items in the cart, in insertion order
    pub items: Vec<CartItemResponse>,

    /// Running total of the package in JPY
    pub total: u64,
}

impl CartResponse {
    pub(crate) fn from_cart(uuid: Uuid, cart: &Cart) -> Self {
        Self {
            uuid,
            items: cart.items().iter().map(CartItemResponse::from).collect(),
            total: cart.total(),
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The unique identifier of the cart item
    pub uuid: Uuid,

    /// Day of the trip the item falls on
    pub day: u32,

    /// Rate-sheet label of the service category
    pub service_type: String,

    /// Service name or custom title
    pub name: String,

    /// Number of travellers the cost applies to
    pub pax: u32,

    /// Free-text details
    pub details: String,

    /// Cost in JPY recorded when the item was added
    pub cost: u64,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        Self {
            uuid: item.id(),
            day: item.day(),
            service_type: item.kind().label().to_owned(),
            name: item.name().to_owned(),
            pax: item.pax(),
            details: item.details().to_owned(),
            cost: item.cost(),
        }
    }
}

/// Get Cart Handler
///
/// Returns a session cart with its running total.
#[endpoint(tags("carts"), summary = "Get Cart")]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid = cart.into_inner();

    let cart = state
        .app
        .carts
        .get_cart(uuid.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse::from_cart(uuid, &cart)))
}
