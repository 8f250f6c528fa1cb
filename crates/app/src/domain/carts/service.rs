//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use itinera::{
    cart::Cart,
    items::CartItem,
    pricing,
    rates::RateCatalog,
};

use crate::domain::carts::{
    errors::CartsServiceError,
    models::{CartUuid, NewCart, NewCartItem},
    store::SessionStore,
};

/// Session-scoped carts service backed by process memory.
///
/// Cart state lives for one user's session only, so nothing here touches
/// the database; durable state starts at voucher submission.
#[derive(Debug)]
pub struct SessionCartsService {
    rates: Arc<RateCatalog>,
    store: SessionStore,
}

impl SessionCartsService {
    #[must_use]
    pub fn new(rates: Arc<RateCatalog>) -> Self {
        Self {
            rates,
            store: SessionStore::new(),
        }
    }

    fn price_item(&self, item: &NewCartItem) -> Result<u64, CartsServiceError> {
        if !item.kind.is_catalog_priced() {
            // Hotel / meal voucher / free spot entries carry a title only and
            // never price from the sheet.
            if item.name.trim().is_empty() {
                return Err(CartsServiceError::MissingTitle);
            }

            return Ok(0);
        }

        let rate = self
            .rates
            .find_by_name(&item.name)
            .filter(|rate| rate.kind() == item.kind)
            .ok_or_else(|| CartsServiceError::UnknownService(item.name.clone()))?;

        Ok(pricing::item_cost(rate.base_price(), item.pax)?)
    }
}

#[async_trait]
impl CartsService for SessionCartsService {
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError> {
        self.store.insert_new(cart.uuid)
    }

    async fn get_cart(&self, uuid: CartUuid) -> Result<Cart, CartsServiceError> {
        self.store.get(uuid)
    }

    async fn add_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartItem, CartsServiceError> {
        let cost = self.price_item(&item)?;

        let cart_item = CartItem::new(item.day, item.kind, item.name, item.pax, item.details, cost);

        self.store.with_cart(cart, |cart| {
            cart.add(cart_item.clone());

            Ok(cart_item)
        })
    }

    async fn remove_item(&self, cart: CartUuid, item: Uuid) -> Result<(), CartsServiceError> {
        self.store.with_cart(cart, |cart| {
            cart.remove(item).map(|_| ()).ok_or(CartsServiceError::ItemNotFound)
        })
    }

    async fn clear_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError> {
        self.store.with_cart(cart, |cart| {
            cart.clear();

            Ok(())
        })
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Opens a new cart session with the given UUID.
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError>;

    /// Retrieves a snapshot of a session cart.
    async fn get_cart(&self, uuid: CartUuid) -> Result<Cart, CartsServiceError>;

    /// Prices and appends one item, growing the running total by its cost.
    async fn add_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartItem, CartsServiceError>;

    /// Removes exactly one item, shrinking the total by the cost recorded
    /// when the item was added.
    async fn remove_item(&self, cart: CartUuid, item: Uuid) -> Result<(), CartsServiceError>;

    /// Empties the cart and resets its total to zero.
    async fn clear_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError>;
}
