//! Product create/edit form: scalar fields, a recipes sub-list, storefront
//! page selection and an image gallery mixing stored paths with files
//! picked in the browser.
//!
//! The form is generic over the file handle `F` so it can be exercised
//! without a browser.

use shared::{Product, Recipe};

use super::multipart::MultipartPayload;
use super::required;
use crate::config::{DEFAULT_MAX_IMAGE_BYTES, DEFAULT_MAX_PRODUCT_IMAGES};
use crate::error::FormError;

/// One entry of the image gallery
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSlot<F> {
    /// Already stored on the server
    Existing(String),
    /// Picked locally, uploaded on submit
    Pending { file: F, preview: String },
}

impl<F> ImageSlot<F> {
    /// What an `<img>` should show for this slot, before URL resolution
    pub fn source(&self) -> &str {
        match self {
            ImageSlot::Existing(path) => path,
            ImageSlot::Pending { preview, .. } => preview,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ImageSlot::Pending { .. })
    }
}

/// A file the user picked, with the metadata needed to vet it
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCandidate<F> {
    pub file: F,
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    pub preview: String,
}

/// Outcome of [`ProductForm::attach_images`]
#[derive(Debug, Clone, PartialEq)]
pub struct AttachReport {
    pub accepted: usize,
    /// First reason a file was turned away, if any
    pub rejection: Option<FormError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeField {
    Name,
    Ingredients,
    Instructions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm<F> {
    pub name: String,
    pub description: String,
    pub price: String,
    pub cost_price: String,
    pub category: String,
    pub stock: String,
    pub volume: String,
    pub sku: String,
    pub barcode: String,
    pub weight: String,
    /// JSON object text, e.g. `{"length": 10}`
    pub dimensions: String,
    pub is_active: bool,
    pub tags: String,
    pub selected_pages: Vec<String>,
    recipes: Vec<Recipe>,
    images: Vec<ImageSlot<F>>,
    max_images: usize,
    max_image_bytes: u64,
}

impl<F> Default for ProductForm<F> {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            cost_price: String::new(),
            category: String::new(),
            stock: String::new(),
            volume: String::new(),
            sku: String::new(),
            barcode: String::new(),
            weight: String::new(),
            dimensions: String::new(),
            is_active: true,
            tags: String::new(),
            selected_pages: Vec::new(),
            recipes: vec![Recipe::default()],
            images: Vec::new(),
            max_images: DEFAULT_MAX_PRODUCT_IMAGES,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

fn optional_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl<F> ProductForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, max_images: usize, max_image_bytes: u64) -> Self {
        self.max_images = max_images;
        self.max_image_bytes = max_image_bytes;
        self
    }

    pub fn from_product(product: &Product) -> Self {
        let dimensions = product
            .dimensions
            .as_ref()
            .and_then(|d| serde_json::to_string(d).ok())
            .unwrap_or_default();
        let recipes = if product.recipes.is_empty() {
            vec![Recipe::default()]
        } else {
            product.recipes.clone()
        };

        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            cost_price: optional_number(product.cost_price),
            category: product.category_key().unwrap_or_default().to_string(),
            stock: product.stock.to_string(),
            volume: optional_number(product.volume),
            sku: product.sku.clone().unwrap_or_default(),
            barcode: product.barcode.clone().unwrap_or_default(),
            weight: optional_number(product.weight),
            dimensions,
            is_active: product.is_active,
            tags: product.tags.join(", "),
            selected_pages: product.selected_pages.clone(),
            recipes,
            images: product
                .images
                .iter()
                .cloned()
                .map(ImageSlot::Existing)
                .collect(),
            ..Self::default()
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn add_recipe(&mut self) {
        self.recipes.push(Recipe::default());
    }

    pub fn update_recipe(&mut self, index: usize, field: RecipeField, value: impl Into<String>) {
        if let Some(recipe) = self.recipes.get_mut(index) {
            let target = match field {
                RecipeField::Name => &mut recipe.name,
                RecipeField::Ingredients => &mut recipe.ingredients,
                RecipeField::Instructions => &mut recipe.instructions,
            };
            *target = value.into();
        }
    }

    /// The last remaining recipe cannot be removed
    pub fn remove_recipe(&mut self, index: usize) {
        if self.recipes.len() > 1 && index < self.recipes.len() {
            self.recipes.remove(index);
        }
    }

    pub fn toggle_page(&mut self, url: &str) {
        if let Some(position) = self.selected_pages.iter().position(|page| page == url) {
            self.selected_pages.remove(position);
        } else {
            self.selected_pages.push(url.to_string());
        }
    }

    pub fn images(&self) -> &[ImageSlot<F>] {
        &self.images
    }

    pub fn remaining_image_slots(&self) -> usize {
        self.max_images.saturating_sub(self.images.len())
    }

    /// Add picked files until the gallery is full. Non-images and oversized
    /// files are skipped; the first problem is reported.
    pub fn attach_images(&mut self, candidates: Vec<ImageCandidate<F>>) -> AttachReport {
        if candidates.is_empty() {
            return AttachReport {
                accepted: 0,
                rejection: None,
            };
        }
        if self.remaining_image_slots() == 0 {
            return AttachReport {
                accepted: 0,
                rejection: Some(FormError::TooManyImages(self.max_images)),
            };
        }

        let mut accepted = 0;
        let mut rejection = None;
        let slots = self.remaining_image_slots();

        for candidate in candidates.into_iter().take(slots) {
            let problem = if !candidate.mime_type.starts_with("image/") {
                Some(FormError::NotAnImage(candidate.name.clone()))
            } else if candidate.size > self.max_image_bytes {
                Some(FormError::ImageTooLarge {
                    name: candidate.name.clone(),
                    limit_mb: (self.max_image_bytes / (1024 * 1024)) as usize,
                })
            } else {
                None
            };

            match problem {
                Some(error) => {
                    rejection.get_or_insert(error);
                }
                None => {
                    self.images.push(ImageSlot::Pending {
                        file: candidate.file,
                        preview: candidate.preview,
                    });
                    accepted += 1;
                }
            }
        }

        AttachReport {
            accepted,
            rejection,
        }
    }

    /// Drop exactly the slot at `index`, returning it so the caller can
    /// release its preview
    pub fn remove_image(&mut self, index: usize) -> Option<ImageSlot<F>> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    fn existing_images(&self) -> Vec<&str> {
        self.images
            .iter()
            .filter_map(|slot| match slot {
                ImageSlot::Existing(path) => Some(path.as_str()),
                ImageSlot::Pending { .. } => None,
            })
            .collect()
    }
}

impl<F: Clone> ProductForm<F> {
    pub fn validate(&self) -> Result<MultipartPayload<F>, FormError> {
        let name = required(&self.name, "Product name")?;

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidNumber("Price"))?;
        if price.is_nan() || price < 0.0 {
            return Err(FormError::Negative("Price"));
        }

        let stock: i64 = self
            .stock
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidNumber("Stock"))?;
        if stock < 0 {
            return Err(FormError::Negative("Stock"));
        }

        let category = required(&self.category, "Category")?;
        if self.selected_pages.is_empty() {
            return Err(FormError::NoProductPages);
        }

        let dimensions = self.dimensions.trim();
        let dimensions = if dimensions.is_empty() {
            "{}".to_string()
        } else {
            match serde_json::from_str::<serde_json::Value>(dimensions) {
                Ok(value) if value.is_object() => dimensions.to_string(),
                _ => return Err(FormError::InvalidDimensions),
            }
        };

        let recipes: Vec<&Recipe> = self.recipes.iter().filter(|r| !r.is_blank()).collect();

        let mut payload = MultipartPayload::new();
        payload
            .text("name", name)
            .text("description", self.description.trim())
            .text("price", self.price.trim())
            .text("costPrice", self.cost_price.trim())
            .text("category", category)
            .text("stock", stock.to_string())
            .text("volume", self.volume.trim())
            .text("sku", self.sku.trim())
            .text("barcode", self.barcode.trim())
            .text("weight", self.weight.trim())
            .text("isActive", self.is_active.to_string())
            .text("tags", self.tags.trim());
        payload.json("recipes", &recipes)?;
        payload.json("selectedPages", &self.selected_pages)?;
        payload.text("dimensions", dimensions);

        for slot in &self.images {
            if let ImageSlot::Pending { file, .. } = slot {
                payload.file("images", file.clone());
            }
        }
        payload.json("existingImages", &self.existing_images())?;

        Ok(payload)
    }
}
