use chrono::{Months, NaiveDate};
use shared::{Banner, BannerImage, BannerImageKind, BannerIngredient, BannerType};
use uuid::Uuid;

use super::multipart::MultipartPayload;
use super::{date_input_value, parse_date, required, today, DATE_FORMAT};
use crate::error::FormError;

/// Create/edit state of a banner, including its nested image and
/// ingredient lists and the pending inputs used to grow them.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerForm {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link_url: String,
    pub banner_type: BannerType,
    pub display_order: String,
    pub is_active: bool,
    pub start_date: String,
    pub end_date: String,
    pub banner_images: Vec<BannerImage>,
    pub ingredients: Vec<BannerIngredient>,

    pub new_image_url: String,
    pub new_image_kind: BannerImageKind,
    pub new_ingredient_name: String,
}

impl BannerForm {
    pub fn new() -> Self {
        Self::starting_on(today())
    }

    /// Empty form running from `start` for one month
    pub fn starting_on(start: NaiveDate) -> Self {
        let end = start.checked_add_months(Months::new(1)).unwrap_or(start);
        Self {
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            link_url: String::new(),
            banner_type: BannerType::default(),
            display_order: "0".to_string(),
            is_active: true,
            start_date: start.format(DATE_FORMAT).to_string(),
            end_date: end.format(DATE_FORMAT).to_string(),
            banner_images: Vec::new(),
            ingredients: Vec::new(),
            new_image_url: String::new(),
            new_image_kind: BannerImageKind::default(),
            new_ingredient_name: String::new(),
        }
    }

    pub fn from_banner(banner: &Banner) -> Self {
        Self {
            title: banner.title.clone(),
            description: banner.description.clone().unwrap_or_default(),
            image_url: banner.image_url.clone(),
            link_url: banner.link_url.clone().unwrap_or_default(),
            banner_type: banner.banner_type,
            display_order: banner.display_order.to_string(),
            is_active: banner.is_active,
            start_date: date_input_value(&banner.start_date),
            end_date: date_input_value(&banner.end_date),
            banner_images: banner.banner_images.clone(),
            ingredients: banner.ingredients.clone(),
            new_image_url: String::new(),
            new_image_kind: BannerImageKind::default(),
            new_ingredient_name: String::new(),
        }
    }

    /// Move the pending image input into the list. Blank input is ignored.
    pub fn add_image(&mut self) -> bool {
        let url = self.new_image_url.trim();
        if url.is_empty() {
            return false;
        }
        self.banner_images.push(BannerImage {
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            kind: self.new_image_kind,
        });
        self.new_image_url.clear();
        true
    }

    pub fn remove_image(&mut self, id: &str) {
        self.banner_images.retain(|image| image.id != id);
    }

    pub fn add_ingredient(&mut self) -> bool {
        let name = self.new_ingredient_name.trim();
        if name.is_empty() {
            return false;
        }
        self.ingredients.push(BannerIngredient {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        });
        self.new_ingredient_name.clear();
        true
    }

    pub fn remove_ingredient(&mut self, id: &str) {
        self.ingredients.retain(|ingredient| ingredient.id != id);
    }

    pub fn validate<F>(&self) -> Result<MultipartPayload<F>, FormError> {
        let title = required(&self.title, "Title")?;
        let image_url = required(&self.image_url, "Banner image")?;
        let start = parse_date(&self.start_date, "Start date")?;
        let end = parse_date(&self.end_date, "End date")?;
        if end < start {
            return Err(FormError::EndBeforeStart);
        }
        let display_order: i32 = match self.display_order.trim() {
            "" => 0,
            text => text
                .parse()
                .map_err(|_| FormError::InvalidNumber("Display order"))?,
        };

        let mut payload = MultipartPayload::new();
        payload
            .text("title", title)
            .text("description", self.description.trim())
            .text("imageUrl", image_url)
            .text("linkUrl", self.link_url.trim())
            .text("bannerType", self.banner_type.as_str())
            .text("displayOrder", display_order.to_string())
            .text("isActive", self.is_active.to_string())
            .text("startDate", start.format(DATE_FORMAT).to_string())
            .text("endDate", end.format(DATE_FORMAT).to_string());
        payload.json("bannerImages", &self.banner_images)?;
        payload.json("ingredients", &self.ingredients)?;
        Ok(payload)
    }
}

impl Default for BannerForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn filled() -> BannerForm {
        let mut form = BannerForm::starting_on(june_first());
        form.title = "Summer sale".to_string();
        form.image_url = "https://cdn.example.com/summer.jpg".to_string();
        form
    }

    #[test]
    fn test_new_form_runs_one_month() {
        let form = BannerForm::starting_on(june_first());
        assert_eq!(form.start_date, "2024-06-01");
        assert_eq!(form.end_date, "2024-07-01");
        assert!(form.is_active);
    }

    #[test]
    fn test_sub_lists() {
        let mut form = filled();

        form.new_image_url = "   ".to_string();
        assert!(!form.add_image());
        assert!(form.banner_images.is_empty());

        form.new_image_url = "https://cdn.example.com/a.jpg".to_string();
        form.new_image_kind = BannerImageKind::InnerPage;
        assert!(form.add_image());
        assert!(form.new_image_url.is_empty());
        form.new_image_url = "https://cdn.example.com/b.jpg".to_string();
        form.add_image();
        assert_eq!(form.banner_images.len(), 2);
        assert_ne!(form.banner_images[0].id, form.banner_images[1].id);

        let first = form.banner_images[0].id.clone();
        form.remove_image(&first);
        assert_eq!(form.banner_images.len(), 1);
        assert_eq!(form.banner_images[0].url, "https://cdn.example.com/b.jpg");

        form.new_ingredient_name = "Mango".to_string();
        assert!(form.add_ingredient());
        form.new_ingredient_name = "".to_string();
        assert!(!form.add_ingredient());
        let id = form.ingredients[0].id.clone();
        form.remove_ingredient(&id);
        assert!(form.ingredients.is_empty());
    }

    #[test]
    fn test_validation() {
        let mut form = BannerForm::starting_on(june_first());
        assert_eq!(form.validate::<()>(), Err(FormError::Required("Title")));

        form.title = "Summer".to_string();
        assert_eq!(form.validate::<()>(), Err(FormError::Required("Banner image")));

        let mut form = filled();
        form.end_date = "2024-05-31".to_string();
        assert_eq!(form.validate::<()>(), Err(FormError::EndBeforeStart));

        form.end_date = "2024-06-01".to_string();
        assert!(form.validate::<()>().is_ok());

        form.display_order = "first".to_string();
        assert_eq!(
            form.validate::<()>(),
            Err(FormError::InvalidNumber("Display order"))
        );
    }

    #[test]
    fn test_payload_carries_sub_lists_as_json() {
        let mut form = filled();
        form.new_image_url = "https://cdn.example.com/a.jpg".to_string();
        form.add_image();
        form.new_ingredient_name = "Kale".to_string();
        form.add_ingredient();

        let payload = form.validate::<()>().unwrap();
        assert_eq!(payload.text_value("title"), Some("Summer sale"));
        assert_eq!(payload.text_value("isActive"), Some("true"));

        let images: Vec<BannerImage> =
            serde_json::from_str(payload.text_value("bannerImages").unwrap()).unwrap();
        assert_eq!(images, form.banner_images);
        assert!(payload.text_value("bannerImages").unwrap().contains("\"type\":\"home-slider\""));

        let ingredients: Vec<BannerIngredient> =
            serde_json::from_str(payload.text_value("ingredients").unwrap()).unwrap();
        assert_eq!(ingredients[0].name, "Kale");
    }
}
