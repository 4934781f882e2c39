//! Storefront catalog helpers used by the product screens.

use shared::{Category, CategoryRef, Product, ProductPage};

pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder-product.jpg";

/// The storefront pages a product can be listed on
pub const PRODUCT_PAGES: [(&str, &str); 7] = [
    ("Smoothies", "/smoothies.html"),
    ("Milk Shake", "/milkshake.html"),
    ("Frappe", "/frappe.html"),
    ("Vegan Shakes", "/veganshakes.html"),
    ("Frootfraps", "/frootfraps.html"),
    ("Life Juice", "/lifejuice.html"),
    ("Frozen Fruits", "/frozenfruits.html"),
];

pub fn product_pages() -> Vec<ProductPage> {
    PRODUCT_PAGES
        .iter()
        .map(|(name, url)| ProductPage {
            name: name.to_string(),
            url: url.to_string(),
        })
        .collect()
}

/// Display name of a page URL; unknown URLs use their last path segment
pub fn page_name(url: &str) -> String {
    if let Some((name, _)) = PRODUCT_PAGES.iter().find(|(_, page_url)| *page_url == url) {
        return name.to_string();
    }
    let segment = url.rsplit('/').next().unwrap_or(url);
    let name = segment.replacen(".html", "", 1).replace('-', " ");
    if name.is_empty() {
        url.to_string()
    } else {
        name
    }
}

pub fn page_names(urls: &[String]) -> String {
    if urls.is_empty() {
        return "None".to_string();
    }
    urls.iter()
        .map(|url| page_name(url))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve a stored image path against the backend's upload directory
pub fn image_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }
    if path.starts_with("http") || path.starts_with("data:image") {
        return path.to_string();
    }
    format!(
        "{}/uploads/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub fn category_name(product: &Product, categories: &[Category]) -> String {
    if let Some(CategoryRef::Embedded(summary)) = &product.category {
        return summary.name.clone();
    }
    if let Some(name) = product.category_name.as_ref().filter(|n| !n.is_empty()) {
        return name.clone();
    }
    match product.category_key() {
        None => "N/A".to_string(),
        Some(id) => categories
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.name.clone())
            .unwrap_or_else(|| "Uncategorized".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CategorySummary;

    fn product(category: Option<CategoryRef>) -> Product {
        serde_json::from_value::<Product>(serde_json::json!({"_id": "p1", "name": "Green Glow"}))
            .map(|mut product| {
                product.category = category;
                product
            })
            .unwrap()
    }

    fn category(id: &str, name: &str) -> Category {
        serde_json::from_value(serde_json::json!({"_id": id, "name": name})).unwrap()
    }

    #[test]
    fn test_page_names() {
        assert_eq!(page_names(&[]), "None");
        assert_eq!(
            page_names(&["/smoothies.html".to_string(), "/frozenfruits.html".to_string()]),
            "Smoothies, Frozen Fruits"
        );
        assert_eq!(page_names(&["/shop/cold-brew.html".to_string()]), "cold brew");
        assert_eq!(product_pages().len(), 7);
    }

    #[test]
    fn test_image_url() {
        let base = "http://localhost:5000/api";
        assert_eq!(image_url(base, ""), PLACEHOLDER_IMAGE);
        assert_eq!(image_url(base, "https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
        assert_eq!(image_url(base, "data:image/png;base64,AAA"), "data:image/png;base64,AAA");
        assert_eq!(image_url(base, "p1/a.png"), "http://localhost:5000/api/uploads/p1/a.png");
    }

    #[test]
    fn test_category_name() {
        let categories = vec![category("c1", "Smoothies")];

        assert_eq!(category_name(&product(None), &categories), "N/A");
        assert_eq!(
            category_name(&product(Some(CategoryRef::Id("c1".to_string()))), &categories),
            "Smoothies"
        );
        assert_eq!(
            category_name(&product(Some(CategoryRef::Id("zz".to_string()))), &categories),
            "Uncategorized"
        );
        let embedded = CategoryRef::Embedded(CategorySummary {
            id: "c2".to_string(),
            name: "Shakes".to_string(),
        });
        assert_eq!(category_name(&product(Some(embedded)), &categories), "Shakes");
    }
}
