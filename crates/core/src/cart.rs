//! Cart line items and the cart transitions.
//!
//! A [`Cart`] is an ordered sequence of [`CartLineItem`]s, unique by product
//! id. It changes only through four transitions:
//!
//! - `add_to_cart` appends a product with quantity one, or does nothing if it
//!   is already present
//! - `increase` adds one to a line's quantity
//! - `decrease` removes one from a line's quantity, never below one
//! - `remove` drops the line entirely
//!
//! Every transition is total. Ids that are not in the cart are no-ops.

use serde::Serialize;

use crate::catalog::Product;
use crate::types::{Price, ProductId, Quantity};

/// A product plus a quantity.
///
/// The product fields are copied when the line is created, so the line does
/// not track later changes to the catalog entry it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: Quantity,
}

impl CartLineItem {
    /// A fresh line for `product` with quantity one.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: Quantity::ONE,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// `quantity * price`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity.get())
    }
}

/// One of the four cart transitions and its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum CartAction {
    AddToCart(Product),
    Increase(ProductId),
    Decrease(ProductId),
    Remove(ProductId),
}

impl CartAction {
    /// Short name used in logs and change notifications.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddToCart(_) => "add_to_cart",
            Self::Increase(_) => "increase",
            Self::Decrease(_) => "decrease",
            Self::Remove(_) => "remove",
        }
    }

    /// The product id the action targets.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        match self {
            Self::AddToCart(product) => product.id,
            Self::Increase(id) | Self::Decrease(id) | Self::Remove(id) => *id,
        }
    }
}

/// The ordered, id-unique collection of line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Apply a transition, producing the next cart.
    #[must_use]
    pub fn apply(mut self, action: CartAction) -> Self {
        self.apply_in_place(action);
        self
    }

    /// Apply a transition in place. Returns whether the cart changed.
    pub fn apply_in_place(&mut self, action: CartAction) -> bool {
        match action {
            CartAction::AddToCart(product) => self.add_to_cart(product),
            CartAction::Increase(id) => self.increase(id),
            CartAction::Decrease(id) => self.decrease(id),
            CartAction::Remove(id) => self.remove(id),
        }
    }

    /// Append `product` with quantity one unless a line for it already exists.
    pub fn add_to_cart(&mut self, product: Product) -> bool {
        if self.contains_product(product.id) {
            return false;
        }
        self.items.push(CartLineItem::new(product));
        true
    }

    /// Add one to the quantity of the line for `id`.
    pub fn increase(&mut self, id: ProductId) -> bool {
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        let next = item.quantity.increment();
        let changed = next != item.quantity;
        item.quantity = next;
        changed
    }

    /// Remove one from the quantity of the line for `id`.
    ///
    /// A line at quantity one is left alone; use [`Cart::remove`] to drop it.
    pub fn decrease(&mut self, id: ProductId) -> bool {
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        match item.quantity.decrement() {
            Some(next) => {
                item.quantity = next;
                true
            }
            None => false,
        }
    }

    /// Drop the line for `id`.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn get_mut(&mut self, id: ProductId) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Sum of `quantity * price` over all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        Price::sum(self.items.iter().map(CartLineItem::line_total))
    }

    /// Whether a line for `id` exists.
    #[must_use]
    pub fn contains_product(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLineItem;
    type IntoIter = std::slice::Iter<'a, CartLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
