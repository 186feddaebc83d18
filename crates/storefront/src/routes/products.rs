//! Product listing route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use greenthumb_core::{Cart, Catalog, Product};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub thumbnail: String,
    /// Drives the disabled "Add to Cart" button.
    pub in_cart: bool,
}

impl ProductView {
    fn new(product: &Product, cart: &Cart) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price.to_string(),
            thumbnail: product.thumbnail.clone(),
            in_cart: cart.contains_product(product.id),
        }
    }
}

/// A category heading and its products.
#[derive(Clone)]
pub struct CategoryView {
    pub name: String,
    pub products: Vec<ProductView>,
}

/// Build the grouped listing for the current cart.
#[must_use]
pub fn category_views(catalog: &Catalog, cart: &Cart) -> Vec<CategoryView> {
    catalog
        .by_category()
        .into_iter()
        .map(|group| CategoryView {
            name: group.name.to_string(),
            products: group
                .products
                .into_iter()
                .map(|product| ProductView::new(product, cart))
                .collect(),
        })
        .collect()
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub categories: Vec<CategoryView>,
    pub cart_count: usize,
}

/// Display the catalog grouped by category.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let cart = state.cart().snapshot();

    ProductsIndexTemplate {
        categories: category_views(state.catalog(), &cart),
        cart_count: cart.len(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use greenthumb_core::ProductId;

    use super::*;

    #[test]
    fn test_category_views_mark_cart_items() {
        let catalog = Catalog::greenthumb();
        let mut cart = Cart::new();
        cart.add_to_cart(catalog.get(ProductId::new(4)).unwrap().clone());

        let views = category_views(&catalog, &cart);
        let names: Vec<&str> = views.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Tropical", "Succulent", "Vine"]);

        let succulents = &views[1].products;
        assert_eq!(succulents[0].name, "Snake Plant");
        assert!(!succulents[0].in_cart);
        assert_eq!(succulents[1].name, "Aloe Vera");
        assert_eq!(succulents[1].price, "$12.00");
        assert!(succulents[1].in_cart);
    }

    #[test]
    fn test_listing_renders_disabled_button() {
        let catalog = Catalog::greenthumb();
        let mut cart = Cart::new();
        cart.add_to_cart(catalog.get(ProductId::new(1)).unwrap().clone());

        let html = ProductsIndexTemplate {
            categories: category_views(&catalog, &cart),
            cart_count: cart.len(),
        }
        .render()
        .unwrap();

        assert!(html.contains("<h3>Tropical</h3>"));
        assert!(html.contains("Monstera"));
        assert_eq!(html.matches("disabled>Add to Cart").count(), 1);
        assert!(html.contains("Cart 🛒 (1)"));
    }
}
