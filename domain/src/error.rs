/// Why a form refused to produce a payload
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("{0} must be a valid number")]
    InvalidNumber(&'static str),
    #[error("{0} cannot be negative")]
    Negative(&'static str),
    #[error("{0} must be a date in YYYY-MM-DD format")]
    InvalidDate(&'static str),
    #[error("End date cannot be before start date")]
    EndBeforeStart,
    #[error("Select at least one product page")]
    NoProductPages,
    #[error("Dimensions must be a JSON object")]
    InvalidDimensions,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Admin user already exists. Please use the login page.")]
    AdminExists,
    #[error("You can upload at most {0} images")]
    TooManyImages(usize),
    #[error("{0} is not an image file")]
    NotAnImage(String),
    #[error("{name} is larger than {limit_mb} MB")]
    ImageTooLarge { name: String, limit_mb: usize },
    #[error("Could not encode {field}: {message}")]
    Encode { field: &'static str, message: String },
}

/// Failure of a call against the REST backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Session expired. Please login again.")]
    Unauthorized,
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Could not encode request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Map a non-success status and its body to an error.
    ///
    /// The backend's JSON `message` is preferred; otherwise the status is
    /// reported.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        let message = shared::ApiErrorBody::message_from(body)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        ApiError::Server { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Whether a response status counts as success for the given method
pub fn is_success(method: &str, status: u16) -> bool {
    (200..300).contains(&status) || (method.eq_ignore_ascii_case("DELETE") && status == 204)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_prefers_backend_message() {
        let error = ApiError::from_status(400, r#"{"message":"Name already taken"}"#);
        assert_eq!(
            error,
            ApiError::Server {
                status: 400,
                message: "Name already taken".to_string()
            }
        );
        assert_eq!(error.to_string(), "Name already taken");
    }

    #[test]
    fn test_from_status_fallback() {
        let error = ApiError::from_status(500, "<html>oops</html>");
        assert_eq!(error.to_string(), "Request failed with status 500");
    }

    #[test]
    fn test_unauthorized() {
        let error = ApiError::from_status(401, r#"{"message":"jwt expired"}"#);
        assert!(error.is_unauthorized());
        assert_eq!(error.to_string(), "Session expired. Please login again.");
    }

    #[test]
    fn test_success_statuses() {
        assert!(is_success("GET", 200));
        assert!(is_success("POST", 201));
        assert!(is_success("DELETE", 204));
        assert!(!is_success("GET", 404));
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(FormError::Required("Name").to_string(), "Name is required");
        assert_eq!(
            FormError::PasswordTooShort(6).to_string(),
            "Password must be at least 6 characters"
        );
    }
}
