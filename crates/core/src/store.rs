//! The cart store.
//!
//! [`CartStore`] owns the current [`Cart`] and is the only place it is
//! mutated. Transitions go through [`CartStore::dispatch`], which applies them
//! one at a time: the next cart is visible to every reader before the next
//! transition is accepted and before subscribers are notified.
//!
//! The store is cheaply cloneable; clones share the same cart. Tests create
//! their own isolated instance with [`CartStore::new`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use crate::cart::{Cart, CartAction};
use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Notification sent to subscribers after each dispatched transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartChange {
    /// Name of the transition, e.g. `"increase"`.
    pub action: &'static str,
    pub product_id: ProductId,
    /// False when the transition was a no-op.
    pub changed: bool,
    /// The cart after the transition.
    pub cart: Cart,
}

type Callback = Arc<dyn Fn(&CartChange) + Send + Sync>;

/// Shared, observable cart state.
#[derive(Clone, Default)]
pub struct CartStore {
    inner: Arc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    cart: RwLock<Cart>,
    /// Held for the whole of a dispatch, including notification.
    writer: Mutex<()>,
    subscribers: Mutex<Vec<(SubscriptionId, Callback)>>,
    next_subscription: AtomicU64,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.snapshot())
            .field("subscribers", &lock(&self.inner.subscribers).len())
            .finish()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl CartStore {
    /// Create a store holding an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a transition and notify subscribers.
    ///
    /// Transitions are serialized: concurrent callers wait for the previous
    /// dispatch, including its notifications, to finish. Subscribers must not
    /// dispatch from inside their callback.
    ///
    /// Returns the cart after the transition.
    pub fn dispatch(&self, action: CartAction) -> Cart {
        let _writer = lock(&self.inner.writer);

        let name = action.name();
        let product_id = action.product_id();

        let (changed, next) = {
            let mut cart = self
                .inner
                .cart
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let changed = cart.apply_in_place(action);
            (changed, cart.clone())
        };

        tracing::debug!(
            action = name,
            product_id = %product_id,
            changed,
            lines = next.len(),
            total_items = next.total_items(),
            "Cart transition applied"
        );

        let subscribers: Vec<Callback> = lock(&self.inner.subscribers)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        if !subscribers.is_empty() {
            let change = CartChange {
                action: name,
                product_id,
                changed,
                cart: next.clone(),
            };
            for callback in subscribers {
                callback(&change);
            }
        }

        next
    }

    pub fn add_to_cart(&self, product: Product) -> Cart {
        self.dispatch(CartAction::AddToCart(product))
    }

    pub fn increase(&self, id: ProductId) -> Cart {
        self.dispatch(CartAction::Increase(id))
    }

    pub fn decrease(&self, id: ProductId) -> Cart {
        self.dispatch(CartAction::Decrease(id))
    }

    pub fn remove(&self, id: ProductId) -> Cart {
        self.dispatch(CartAction::Remove(id))
    }

    /// Discard the cart, as on application reload. Subscribers are kept and
    /// not notified.
    pub fn reset(&self) {
        let _writer = lock(&self.inner.writer);
        *self
            .inner
            .cart
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Cart::new();
        tracing::debug!("Cart reset");
    }

    /// A copy of the current cart.
    #[must_use]
    pub fn snapshot(&self) -> Cart {
        self.read(Cart::clone)
    }

    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.read(Cart::total_items)
    }

    #[must_use]
    pub fn total_price(&self) -> Price {
        self.read(Cart::total_price)
    }

    #[must_use]
    pub fn contains_product(&self, id: ProductId) -> bool {
        self.read(|cart| cart.contains_product(id))
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.read(Cart::len)
    }

    fn read<T>(&self, f: impl FnOnce(&Cart) -> T) -> T {
        let cart = self
            .inner
            .cart
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Register a callback invoked after every dispatched transition.
    ///
    /// The callback runs on the dispatching thread, after the new cart is
    /// visible through [`CartStore::snapshot`].
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&CartChange) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        lock(&self.inner.subscribers).push((id, Arc::new(callback)));
        id
    }

    /// Remove a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = lock(&self.inner.subscribers);
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }
}
