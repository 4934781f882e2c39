use shared::{Blog, BlogPayload, BlogStatus};

use super::{date_input_value, parse_date, required, split_tags, today, DATE_FORMAT};
use crate::error::FormError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogForm {
    pub title: String,
    pub content: String,
    pub author: String,
    pub image_url: String,
    /// Comma-separated
    pub tags: String,
    pub publish_date: String,
    pub status: BlogStatus,
}

impl BlogForm {
    pub fn new() -> Self {
        Self {
            publish_date: today().format(DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }

    pub fn from_blog(blog: &Blog) -> Self {
        Self {
            title: blog.title.clone(),
            content: blog.content.clone(),
            author: blog.author.clone(),
            image_url: blog.image_url.clone(),
            tags: blog.tags.join(", "),
            publish_date: date_input_value(&blog.publish_date),
            status: blog.status,
        }
    }

    pub fn validate(&self) -> Result<BlogPayload, FormError> {
        let title = required(&self.title, "Title")?;
        let publish_date = parse_date(&self.publish_date, "Publish date")?;
        Ok(BlogPayload {
            title,
            content: self.content.clone(),
            author: self.author.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            tags: split_tags(&self.tags),
            publish_date: publish_date.format(DATE_FORMAT).to_string(),
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_defaults_to_today_and_draft() {
        let form = BlogForm::new();
        assert_eq!(form.status, BlogStatus::Draft);
        assert!(parse_date(&form.publish_date, "Publish date").is_ok());
    }

    #[test]
    fn test_validate() {
        let mut form = BlogForm::new();
        assert_eq!(form.validate(), Err(FormError::Required("Title")));

        form.title = "Summer greens".to_string();
        form.tags = "detox, , Greens ".to_string();
        form.publish_date = "2024-13-01".to_string();
        assert_eq!(form.validate(), Err(FormError::InvalidDate("Publish date")));

        form.publish_date = "2024-06-01".to_string();
        let payload = form.validate().unwrap();
        assert_eq!(payload.tags, vec!["detox", "Greens"]);
        assert_eq!(payload.publish_date, "2024-06-01");
    }

    #[test]
    fn test_from_blog() {
        let blog = Blog {
            id: "b1".to_string(),
            title: "Hello".to_string(),
            content: "Body".to_string(),
            author: "Sam".to_string(),
            image_url: String::new(),
            tags: vec!["a".to_string(), "b".to_string()],
            publish_date: "2024-02-03T10:00:00Z".to_string(),
            status: BlogStatus::Published,
        };
        let form = BlogForm::from_blog(&blog);
        assert_eq!(form.tags, "a, b");
        assert_eq!(form.publish_date, "2024-02-03");
        assert_eq!(form.validate().unwrap().tags, blog.tags);
    }
}
