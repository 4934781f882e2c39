//! Form builders behind the create/edit overlays.
//!
//! Each form holds the raw text the inputs are bound to and turns it into a
//! request payload in `validate`. The first failing rule wins.

pub mod auth_form;
pub mod banner_form;
pub mod blog_form;
pub mod category_form;
pub mod ingredient_form;
pub mod multipart;
pub mod product_form;
pub mod user_form;

pub use auth_form::{LoginForm, RegisterForm, MIN_PASSWORD_LEN};
pub use banner_form::BannerForm;
pub use blog_form::BlogForm;
pub use category_form::{delete_warning, CategoryForm};
pub use ingredient_form::{is_low_stock, IngredientForm};
pub use multipart::{MultipartPayload, Part};
pub use product_form::{AttachReport, ImageCandidate, ImageSlot, ProductForm, RecipeField};
pub use user_form::UserForm;

use chrono::NaiveDate;

use crate::error::FormError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn required(value: &str, label: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(label));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn parse_date(value: &str, label: &'static str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| FormError::InvalidDate(label))
}

/// The `YYYY-MM-DD` part of a stored date or timestamp
pub fn date_input_value(stored: &str) -> String {
    stored.get(..10).unwrap_or(stored).to_string()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Comma-separated text to a clean list
pub fn split_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags(" detox, greens ,,  "), vec!["detox", "greens"]);
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value("2024-06-01T00:00:00.000Z"), "2024-06-01");
        assert_eq!(date_input_value("2024-06"), "2024-06");
    }

    #[test]
    fn test_required_trims() {
        assert_eq!(required("  Mango ", "Name"), Ok("Mango".to_string()));
        assert_eq!(required("   ", "Name"), Err(FormError::Required("Name")));
    }
}
