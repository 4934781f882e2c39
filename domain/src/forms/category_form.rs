use shared::{Category, CategoryPayload};

use super::required;
use crate::error::FormError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
    pub image: String,
    /// Only present while editing an existing category
    pub smoothie_count: Option<String>,
}

impl CategoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            image: category.image.clone().unwrap_or_default(),
            smoothie_count: Some(category.smoothie_count.to_string()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.smoothie_count.is_some()
    }

    pub fn validate(&self) -> Result<CategoryPayload, FormError> {
        let name = required(&self.name, "Category name")?;
        Ok(CategoryPayload {
            name,
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            smoothie_count: self
                .smoothie_count
                .as_deref()
                .map(|count| count.trim().parse().unwrap_or(0)),
        })
    }
}

/// Extra line for the delete confirmation when smoothies would be orphaned
pub fn delete_warning(category: &Category) -> Option<String> {
    (category.smoothie_count > 0).then(|| {
        format!(
            "Warning: This category contains {} smoothies that will be uncategorized.",
            category.smoothie_count
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(count: u32) -> Category {
        serde_json::from_value(serde_json::json!({
            "_id": "c1",
            "name": "Green",
            "description": "Leafy blends",
            "smoothieCount": count
        }))
        .unwrap()
    }

    #[test]
    fn test_new_form_has_no_count() {
        let mut form = CategoryForm::new();
        assert!(!form.is_editing());
        assert_eq!(form.validate(), Err(FormError::Required("Category name")));

        form.name = "Tropical".to_string();
        assert_eq!(form.validate().unwrap().smoothie_count, None);
    }

    #[test]
    fn test_edit_form_sends_count() {
        let mut form = CategoryForm::from_category(&category(4));
        assert!(form.is_editing());
        assert_eq!(form.validate().unwrap().smoothie_count, Some(4));

        form.smoothie_count = Some("lots".to_string());
        assert_eq!(form.validate().unwrap().smoothie_count, Some(0));
    }

    #[test]
    fn test_delete_warning() {
        assert_eq!(delete_warning(&category(0)), None);
        assert!(delete_warning(&category(3)).unwrap().contains("3 smoothies"));
    }
}
