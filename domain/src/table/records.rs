//! `Record` views of the entities the console lists.
//!
//! Field names are the camelCase wire names, so a column can be declared with
//! the same name the backend uses.

use shared::{Banner, Blog, Category, Ingredient, Product, User};

use super::value::{FieldValue, Record};

impl Record for User {
    const FIELDS: &'static [&'static str] = &["id", "name", "email", "role", "status", "createdAt"];

    fn key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::from(&self.id),
            "name" => FieldValue::from(&self.name),
            "email" => FieldValue::from(&self.email),
            "role" => FieldValue::from(self.role.to_string()),
            "status" => FieldValue::from(self.status.to_string()),
            "createdAt" => FieldValue::from(&self.created_at),
            _ => return None,
        };
        Some(value)
    }
}

impl Record for Category {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "description",
        "image",
        "isActive",
        "smoothieCount",
        "productPages",
        "createdAt",
        "updatedAt",
    ];

    fn key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::from(&self.id),
            "name" => FieldValue::from(&self.name),
            "description" => FieldValue::from(self.description.clone()),
            "image" => FieldValue::from(self.image.clone()),
            "isActive" => FieldValue::from(self.is_active),
            "smoothieCount" => FieldValue::from(self.smoothie_count),
            "productPages" => FieldValue::from(
                self.product_pages
                    .iter()
                    .map(|page| page.name.clone())
                    .collect::<Vec<_>>(),
            ),
            "createdAt" => FieldValue::from(self.created_at.clone()),
            "updatedAt" => FieldValue::from(self.updated_at.clone()),
            _ => return None,
        };
        Some(value)
    }
}

impl Record for Banner {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "description",
        "imageUrl",
        "linkUrl",
        "page",
        "displayOrder",
        "isActive",
        "startDate",
        "endDate",
        "ingredients",
    ];

    fn key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::from(&self.id),
            "title" => FieldValue::from(&self.title),
            "description" => FieldValue::from(self.description.clone()),
            "imageUrl" => FieldValue::from(&self.image_url),
            "linkUrl" => FieldValue::from(self.link_url.clone()),
            "page" => FieldValue::from(self.page.clone()),
            "displayOrder" => FieldValue::from(self.display_order),
            "isActive" => FieldValue::from(self.is_active),
            "startDate" => FieldValue::from(&self.start_date),
            "endDate" => FieldValue::from(&self.end_date),
            "ingredients" => FieldValue::from(
                self.ingredients
                    .iter()
                    .map(|ingredient| ingredient.name.clone())
                    .collect::<Vec<_>>(),
            ),
            _ => return None,
        };
        Some(value)
    }
}

impl Record for Blog {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "content",
        "author",
        "imageUrl",
        "tags",
        "publishDate",
        "status",
    ];

    fn key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::from(&self.id),
            "title" => FieldValue::from(&self.title),
            "content" => FieldValue::from(&self.content),
            "author" => FieldValue::from(&self.author),
            "imageUrl" => FieldValue::from(&self.image_url),
            "tags" => FieldValue::from(self.tags.clone()),
            "publishDate" => FieldValue::from(&self.publish_date),
            "status" => FieldValue::from(self.status.to_string()),
            _ => return None,
        };
        Some(value)
    }
}

impl Record for Ingredient {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "category",
        "stock",
        "unit",
        "price",
        "supplier",
        "lastRestock",
    ];

    fn key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::from(&self.id),
            "name" => FieldValue::from(&self.name),
            "category" => FieldValue::from(&self.category),
            "stock" => FieldValue::from(self.stock),
            "unit" => FieldValue::from(&self.unit),
            "price" => FieldValue::from(self.price),
            "supplier" => FieldValue::from(&self.supplier),
            "lastRestock" => FieldValue::from(&self.last_restock),
            _ => return None,
        };
        Some(value)
    }
}

impl Record for Product {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "description",
        "price",
        "costPrice",
        "categoryName",
        "stock",
        "volume",
        "sku",
        "barcode",
        "weight",
        "isActive",
        "tags",
        "selectedPages",
    ];

    fn key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::from(&self.id),
            "name" => FieldValue::from(&self.name),
            "description" => FieldValue::from(self.description.clone()),
            "price" => FieldValue::from(self.price),
            "costPrice" => FieldValue::from(self.cost_price),
            "categoryName" => FieldValue::from(self.category_name.clone()),
            "stock" => FieldValue::from(self.stock),
            "volume" => FieldValue::from(self.volume),
            "sku" => FieldValue::from(self.sku.clone()),
            "barcode" => FieldValue::from(self.barcode.clone()),
            "weight" => FieldValue::from(self.weight),
            "isActive" => FieldValue::from(self.is_active),
            "tags" => FieldValue::from(self.tags.clone()),
            "selectedPages" => FieldValue::from(self.selected_pages.clone()),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{filter, sort, SortDirection};
    use shared::{BlogStatus, UserRole, UserStatus};

    fn user(id: &str, name: &str, role: UserRole) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role,
            status: UserStatus::Active,
            created_at: "2024-01-02T00:00:00Z".to_string(),
        }
    }

    fn ingredient(id: &str, name: &str, stock: f64) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: name.to_string(),
            category: "Fruit".to_string(),
            stock,
            unit: "kg".to_string(),
            price: 2.5,
            supplier: "Green Farms".to_string(),
            last_restock: "2024-03-01".to_string(),
        }
    }

    #[test]
    fn test_every_declared_field_resolves() {
        let user = user("u1", "Ada", UserRole::Admin);
        for name in User::FIELDS {
            assert!(user.field(name).is_some(), "missing {}", name);
        }
        assert!(user.field("password").is_none());

        let ingredient = ingredient("i1", "Mango", 12.0);
        assert_eq!(ingredient.fields().len(), Ingredient::FIELDS.len());
    }

    #[test]
    fn test_users_filter_on_enum_text() {
        let users = vec![
            user("u1", "Ada", UserRole::Admin),
            user("u2", "Grace", UserRole::Staff),
        ];
        let matched = filter(&users, "staff");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Grace");
    }

    #[test]
    fn test_ingredients_sort_by_stock_numerically() {
        let ingredients = vec![
            ingredient("i1", "Mango", 120.0),
            ingredient("i2", "Kale", 8.0),
            ingredient("i3", "Mint", 45.5),
        ];
        let sorted = sort(&ingredients, Some("stock"), SortDirection::Ascending);
        let names: Vec<&str> = sorted.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Kale", "Mint", "Mango"]);
    }

    #[test]
    fn test_blog_tags_search_as_joined_list_case_sensitively() {
        let blog = Blog {
            id: "b1".to_string(),
            title: "Green mornings".to_string(),
            content: "Start with spinach".to_string(),
            author: "Sam".to_string(),
            image_url: String::new(),
            tags: vec!["Detox".to_string(), "greens".to_string()],
            publish_date: "2024-05-01".to_string(),
            status: BlogStatus::Published,
        };
        assert_eq!(blog.field("tags").map(|v| v.to_string()), Some("Detox,greens".to_string()));
        assert_eq!(filter(std::slice::from_ref(&blog), "Detox").len(), 1);
        assert!(filter(std::slice::from_ref(&blog), "detox").is_empty());
        assert_eq!(filter(std::slice::from_ref(&blog), "published").len(), 1);
    }
}
