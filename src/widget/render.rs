//! Display surface abstraction and product card view model

use crate::catalog::Product;

/// Upper bound on star glyphs drawn for one product
pub const MAX_RENDERED_STARS: usize = 100;

/// What the widget needs from a display surface.
pub trait Renderer {
    /// Replace every visible card with `cards`.
    fn render_list(&mut self, cards: &[ProductCard]);
    fn set_loading(&mut self, loading: bool);
    /// `None` clears the result-count text.
    fn set_result_count(&mut self, count: Option<usize>);
    fn set_show_more_visible(&mut self, visible: bool);
}

/// One rendered product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub stars: String,
    pub price: String,
}

impl ProductCard {
    pub fn from_product(product: &Product, api_base: &str) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            image_url: resolve_image_url(api_base, &product.image),
            stars: "⭐".repeat((product.stars as usize).min(MAX_RENDERED_STARS)),
            price: product.price.clone(),
        }
    }
}

pub fn result_count_text(count: usize) -> String {
    format!("{} products found", count)
}

/// Resolve a product image against the API base.
///
/// Scheme-prefixed URLs pass through; anything else is joined to the base
/// with exactly one separating slash.
pub fn resolve_image_url(api_base: &str, image: &str) -> Option<String> {
    let image = image.trim();
    if image.is_empty() {
        return None;
    }
    if url::Url::parse(image).is_ok() {
        return Some(image.to_string());
    }
    if let Some(rest) = image.strip_prefix("//") {
        // Protocol-relative: borrow the base's scheme
        let scheme = url::Url::parse(api_base)
            .map(|base| base.scheme().to_string())
            .unwrap_or_else(|_| "https".to_string());
        return Some(format!("{}://{}", scheme, rest));
    }

    let base = api_base.trim_end_matches('/');
    if image.starts_with('/') {
        Some(format!("{}{}", base, image))
    } else {
        Some(format!("{}/{}", base, image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_with_leading_slash() {
        assert_eq!(
            resolve_image_url("https://h", "/img/x.png").as_deref(),
            Some("https://h/img/x.png")
        );
    }

    #[test]
    fn test_resolve_relative_without_leading_slash() {
        assert_eq!(
            resolve_image_url("https://h", "img/x.png").as_deref(),
            Some("https://h/img/x.png")
        );
        assert_eq!(
            resolve_image_url("https://h/", "img/x.png").as_deref(),
            Some("https://h/img/x.png")
        );
    }

    #[test]
    fn test_resolve_absolute_passes_through() {
        assert_eq!(
            resolve_image_url("https://h", "https://other/x.png").as_deref(),
            Some("https://other/x.png")
        );
    }

    #[test]
    fn test_resolve_protocol_relative_uses_base_scheme() {
        assert_eq!(
            resolve_image_url("https://h", "//cdn.example.com/x.png").as_deref(),
            Some("https://cdn.example.com/x.png")
        );
        assert_eq!(
            resolve_image_url("http://localhost:8080", "//cdn.example.com/x.png").as_deref(),
            Some("http://cdn.example.com/x.png")
        );
    }

    #[test]
    fn test_resolve_empty_image() {
        assert_eq!(resolve_image_url("https://h", ""), None);
        assert_eq!(resolve_image_url("https://h", "   "), None);
    }

    #[test]
    fn test_card_from_product() {
        let product = Product {
            title: "Hammer".to_string(),
            description: "Claw hammer".to_string(),
            image: "img/hammer.png".to_string(),
            stars: 3,
            price: "12.00".to_string(),
        };
        let card = ProductCard::from_product(&product, "https://h");

        assert_eq!(card.stars, "⭐⭐⭐");
        assert_eq!(card.image_url.as_deref(), Some("https://h/img/hammer.png"));
        assert_eq!(card.price, "12.00");
    }

    #[test]
    fn test_card_caps_stars() {
        let product = Product {
            stars: 1_000_000,
            ..Default::default()
        };
        let card = ProductCard::from_product(&product, "https://h");
        assert_eq!(card.stars.chars().count(), MAX_RENDERED_STARS);
    }

    #[test]
    fn test_result_count_text() {
        assert_eq!(result_count_text(12), "12 products found");
        assert_eq!(result_count_text(0), "0 products found");
    }
}
