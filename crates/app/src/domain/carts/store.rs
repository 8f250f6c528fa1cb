//! In-memory session store for carts.

use std::sync::{PoisonError, RwLock};

use rustc_hash::FxHashMap;

use itinera::cart::Cart;

use crate::domain::carts::{errors::CartsServiceError, models::CartUuid};

/// Carts keyed by session UUID, held for the process lifetime.
#[derive(Debug, Default)]
pub(crate) struct SessionStore {
    carts: RwLock<FxHashMap<CartUuid, Cart>>,
}

impl SessionStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Opens an empty cart under the given UUID.
    pub(crate) fn insert_new(&self, uuid: CartUuid) -> Result<Cart, CartsServiceError> {
        let mut carts = self.carts.write().unwrap_or_else(PoisonError::into_inner);

        if carts.contains_key(&uuid) {
            return Err(CartsServiceError::AlreadyExists);
        }

        let cart = Cart::new();

        carts.insert(uuid, cart.clone());

        Ok(cart)
    }

    /// Snapshot of a stored cart.
    pub(crate) fn get(&self, uuid: CartUuid) -> Result<Cart, CartsServiceError> {
        self.carts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&uuid)
            .cloned()
            .ok_or(CartsServiceError::NotFound)
    }

    /// Runs a mutation against a stored cart under the write lock.
    pub(crate) fn with_cart<T>(
        &self,
        uuid: CartUuid,
        mutate: impl FnOnce(&mut Cart) -> Result<T, CartsServiceError>,
    ) -> Result<T, CartsServiceError> {
        let mut carts = self.carts.write().unwrap_or_else(PoisonError::into_inner);

        let cart = carts.get_mut(&uuid).ok_or(CartsServiceError::NotFound)?;

        mutate(cart)
    }
}
