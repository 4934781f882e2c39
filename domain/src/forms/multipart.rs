use serde::Serialize;

use crate::error::FormError;

/// One field of a multipart request body
#[derive(Debug, Clone, PartialEq)]
pub enum Part<F> {
    Text { name: String, value: String },
    File { name: String, file: F },
}

impl<F> Part<F> {
    pub fn name(&self) -> &str {
        match self {
            Part::Text { name, .. } | Part::File { name, .. } => name,
        }
    }
}

/// Ordered multipart body, generic over the platform's file handle
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPayload<F> {
    parts: Vec<Part<F>>,
}

impl<F> Default for MultipartPayload<F> {
    fn default() -> Self {
        Self { parts: Vec::new() }
    }
}

impl<F> MultipartPayload<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.parts.push(Part::Text {
            name: name.to_string(),
            value: value.into(),
        });
        self
    }

    /// Append `value` encoded as JSON text
    pub fn json<T: Serialize + ?Sized>(
        &mut self,
        name: &'static str,
        value: &T,
    ) -> Result<&mut Self, FormError> {
        let encoded = serde_json::to_string(value).map_err(|e| FormError::Encode {
            field: name,
            message: e.to_string(),
        })?;
        Ok(self.text(name, encoded))
    }

    pub fn file(&mut self, name: &str, file: F) -> &mut Self {
        self.parts.push(Part::File {
            name: name.to_string(),
            file,
        });
        self
    }

    pub fn parts(&self) -> &[Part<F>] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part<F>> {
        self.parts
    }

    /// Value of the first text part called `name`
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            Part::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn files<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a F> + 'a {
        self.parts.iter().filter_map(move |part| match part {
            Part::File { name: n, file } if n == name => Some(file),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_keep_order() {
        let mut payload: MultipartPayload<&str> = MultipartPayload::new();
        payload
            .text("name", "Green Glow")
            .file("images", "a.png")
            .file("images", "b.png");
        payload.json("tags", &["kale", "mint"]).unwrap();

        let names: Vec<&str> = payload.parts().iter().map(Part::name).collect();
        assert_eq!(names, vec!["name", "images", "images", "tags"]);
        assert_eq!(payload.text_value("tags"), Some(r#"["kale","mint"]"#));
        assert_eq!(payload.files("images").copied().collect::<Vec<_>>(), vec!["a.png", "b.png"]);
        assert_eq!(payload.text_value("missing"), None);
    }
}
