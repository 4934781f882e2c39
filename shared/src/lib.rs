use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a console user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    Staff,
}

/// Whether a user account may sign in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

/// A console user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub status: UserStatus,
    /// RFC 3339 creation timestamp
    #[serde(default)]
    pub created_at: String,
}

/// A storefront page that products can be listed on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub name: String,
    pub url: String,
}

/// A product category (e.g. "Green Smoothies")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Number of smoothies filed under this category
    #[serde(default)]
    pub smoothie_count: u32,
    #[serde(default)]
    pub product_pages: Vec<ProductPage>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Where a banner is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerType {
    #[default]
    HomeSlider,
    InnerPage,
}

impl BannerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerType::HomeSlider => "home_slider",
            BannerType::InnerPage => "inner_page",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BannerType::HomeSlider => "Home Slider",
            BannerType::InnerPage => "Inner Page",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "home_slider" => Some(BannerType::HomeSlider),
            "inner_page" => Some(BannerType::InnerPage),
            _ => None,
        }
    }
}

/// Placement of an additional banner image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BannerImageKind {
    #[default]
    HomeSlider,
    InnerPage,
}

impl BannerImageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerImageKind::HomeSlider => "home-slider",
            BannerImageKind::InnerPage => "inner-page",
        }
    }

    /// Human-readable label ("Home Slider", "Inner Page")
    pub fn label(&self) -> &'static str {
        match self {
            BannerImageKind::HomeSlider => "Home Slider",
            BannerImageKind::InnerPage => "Inner Page",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "home-slider" => Some(BannerImageKind::HomeSlider),
            "inner-page" => Some(BannerImageKind::InnerPage),
            _ => None,
        }
    }
}

/// An additional image attached to a banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerImage {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: BannerImageKind,
}

/// An ingredient highlighted on a banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerIngredient {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
}

/// A promotional banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Main banner image
    #[serde(default, alias = "image")]
    pub image_url: String,
    #[serde(default)]
    pub mobile_image: Option<String>,
    #[serde(default)]
    pub fruit_image: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub banner_type: BannerType,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub is_active: bool,
    /// RFC 3339 or YYYY-MM-DD
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub banner_images: Vec<BannerImage>,
    #[serde(default)]
    pub ingredients: Vec<BannerIngredient>,
}

/// Publication state of a blog post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
}

impl BlogStatus {
    pub fn toggled(self) -> Self {
        match self {
            BlogStatus::Draft => BlogStatus::Published,
            BlogStatus::Published => BlogStatus::Draft,
        }
    }
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub publish_date: String,
    #[serde(default)]
    pub status: BlogStatus,
}

/// A stocked ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub last_restock: String,
}

/// A recipe attached to a product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
}

impl Recipe {
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.ingredients.trim().is_empty()
            && self.instructions.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

/// Minimal category reference as embedded in a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
}

/// A product's category, either populated by the backend or left as an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(String),
    Embedded(CategorySummary),
}

impl CategoryRef {
    pub fn id(&self) -> &str {
        match self {
            CategoryRef::Id(id) => id,
            CategoryRef::Embedded(summary) => &summary.id,
        }
    }
}

/// A sellable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub cost_price: Option<f64>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    /// Stored image paths or absolute URLs
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// URLs of the storefront pages this product appears on
    #[serde(default)]
    pub selected_pages: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Product {
    /// Category id regardless of how the backend shaped the reference
    pub fn category_key(&self) -> Option<&str> {
        self.category_id
            .as_deref()
            .or_else(|| self.category.as_ref().map(CategoryRef::id))
    }
}

/// JSON body for creating or updating a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
}

/// JSON body for creating or updating a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoothie_count: Option<u32>,
}

/// JSON body for creating or updating a blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPayload {
    pub title: String,
    pub content: String,
    pub author: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub publish_date: String,
    pub status: BlogStatus,
}

/// JSON body for creating or updating an ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientPayload {
    pub name: String,
    pub category: String,
    pub stock: f64,
    pub unit: String,
    pub price: f64,
    pub supplier: String,
    pub last_restock: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Returned by both login and register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminExistsResponse {
    pub exists: bool,
}

/// Error body the backend attaches to non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Extract the `message` of a JSON error body, if there is one
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|message| !message.trim().is_empty())
    }
}

/// Collection responses come back either as a bare array or wrapped in an
/// object keyed by the entity name or `data`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Products { products: Vec<T> },
    Categories { categories: Vec<T> },
    Data { data: Vec<T> },
    Items { items: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items)
            | ListEnvelope::Products { products: items }
            | ListEnvelope::Categories { categories: items }
            | ListEnvelope::Data { data: items }
            | ListEnvelope::Items { items } => items,
        }
    }
}

/// Single-entity responses may be wrapped the same way
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ItemEnvelope<T> {
    Product { product: T },
    Data { data: T },
    Bare(T),
}

impl<T> ItemEnvelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            ItemEnvelope::Product { product: item }
            | ItemEnvelope::Data { data: item }
            | ItemEnvelope::Bare(item) => item,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Staff => "staff",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for BlogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BlogStatus::Draft => "draft",
            BlogStatus::Published => "published",
        };
        write!(f, "{}", s)
    }
}

impl UserRole {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(UserRole::Admin),
            "manager" => Some(UserRole::Manager),
            "staff" => Some(UserRole::Staff),
            _ => None,
        }
    }
}

impl UserStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(UserStatus::Active),
            "inactive" => Some(UserStatus::Inactive),
            _ => None,
        }
    }
}

impl BlogStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(BlogStatus::Draft),
            "published" => Some(BlogStatus::Published),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accepts_mongo_id() {
        let json = r#"{"_id":"u1","name":"Ada","email":"ada@example.com","role":"admin","status":"inactive","createdAt":"2025-01-02T00:00:00Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.status, UserStatus::Inactive);
        assert_eq!(user.created_at, "2025-01-02T00:00:00Z");
    }

    #[test]
    fn test_banner_image_kind_wire_names() {
        let json = r#"{"id":"b1","title":"Summer","image":"summer.jpg","isActive":true,
            "bannerImages":[{"id":"i1","url":"a.jpg","type":"inner-page"}],
            "ingredients":[{"id":"g1","name":"Mango"}]}"#;
        let banner: Banner = serde_json::from_str(json).unwrap();

        assert_eq!(banner.image_url, "summer.jpg");
        assert_eq!(banner.banner_images[0].kind, BannerImageKind::InnerPage);
        assert_eq!(banner.ingredients[0].name, "Mango");
        assert_eq!(banner.banner_type, BannerType::HomeSlider);
    }

    #[test]
    fn test_product_category_reference_shapes() {
        let by_id: Product =
            serde_json::from_str(r#"{"_id":"p1","name":"Berry Blast","category":"c9"}"#).unwrap();
        assert_eq!(by_id.category_key(), Some("c9"));

        let embedded: Product = serde_json::from_str(
            r#"{"_id":"p2","name":"Green Machine","category":{"_id":"c3","name":"Greens"}}"#,
        )
        .unwrap();
        assert_eq!(embedded.category_key(), Some("c3"));

        let explicit: Product = serde_json::from_str(
            r#"{"_id":"p3","name":"Mango","categoryId":"c1","category":"c2"}"#,
        )
        .unwrap();
        assert_eq!(explicit.category_key(), Some("c1"));
    }

    #[test]
    fn test_list_envelope_shapes() {
        let bare: ListEnvelope<Recipe> = serde_json::from_str(r#"[{"name":"a"}]"#).unwrap();
        assert_eq!(bare.into_vec().len(), 1);

        let wrapped: ListEnvelope<Recipe> =
            serde_json::from_str(r#"{"products":[{"name":"a"},{"name":"b"}]}"#).unwrap();
        assert_eq!(wrapped.into_vec().len(), 2);

        let data: ListEnvelope<Recipe> = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(data.into_vec().is_empty());
    }

    #[test]
    fn test_item_envelope_shapes() {
        let wrapped: ItemEnvelope<CategorySummary> =
            serde_json::from_str(r#"{"product":{"_id":"p1","name":"A"}}"#).unwrap();
        assert_eq!(wrapped.into_inner().id, "p1");

        let bare: ItemEnvelope<CategorySummary> =
            serde_json::from_str(r#"{"_id":"p2","name":"B"}"#).unwrap();
        assert_eq!(bare.into_inner().id, "p2");
    }

    #[test]
    fn test_error_body_message() {
        assert_eq!(
            ApiErrorBody::message_from(r#"{"message":"Email already taken"}"#),
            Some("Email already taken".to_string())
        );
        assert_eq!(ApiErrorBody::message_from(r#"{"message":"  "}"#), None);
        assert_eq!(ApiErrorBody::message_from("<html>"), None);
    }

    #[test]
    fn test_recipe_is_blank() {
        assert!(Recipe::default().is_blank());
        let recipe = Recipe {
            name: "Classic".to_string(),
            ..Recipe::default()
        };
        assert!(!recipe.is_blank());
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!(UserRole::parse("manager"), Some(UserRole::Manager));
        assert_eq!(UserRole::parse("root"), None);
        assert_eq!(UserStatus::parse("inactive"), Some(UserStatus::Inactive));
        assert_eq!(BlogStatus::parse("published"), Some(BlogStatus::Published));
        assert_eq!(BlogStatus::Draft.toggled(), BlogStatus::Published);
        assert_eq!(BannerImageKind::parse("home-slider"), Some(BannerImageKind::HomeSlider));
        assert_eq!(UserRole::Admin.to_string(), "admin");
        assert_eq!(BannerType::parse("inner_page"), Some(BannerType::InnerPage));
        assert_eq!(BannerType::parse("inner-page"), None);
    }
}
