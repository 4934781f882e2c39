use shared::{User, UserPayload, UserRole, UserStatus};

use super::required;
use crate::error::FormError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
}

impl UserForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            status: user.status,
        }
    }

    pub fn validate(&self) -> Result<UserPayload, FormError> {
        let name = required(&self.name, "Name")?;
        let email = required(&self.email, "Email")?;
        if !email.contains('@') {
            return Err(FormError::InvalidEmail);
        }
        Ok(UserPayload {
            name,
            email,
            role: self.role,
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = UserForm::new();
        assert_eq!(form.role, UserRole::Staff);
        assert_eq!(form.status, UserStatus::Active);
    }

    #[test]
    fn test_validation_rules_in_order() {
        let mut form = UserForm::new();
        assert_eq!(form.validate(), Err(FormError::Required("Name")));

        form.name = "Ada".to_string();
        assert_eq!(form.validate(), Err(FormError::Required("Email")));

        form.email = "ada.example.com".to_string();
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));

        form.email = " ada@example.com ".to_string();
        form.role = UserRole::Manager;
        let payload = form.validate().unwrap();
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.role, UserRole::Manager);
    }

    #[test]
    fn test_from_user() {
        let user = User {
            id: "u1".to_string(),
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            role: UserRole::Admin,
            status: UserStatus::Inactive,
            created_at: String::new(),
        };
        let form = UserForm::from_user(&user);
        assert_eq!(form.status, UserStatus::Inactive);
        assert_eq!(form.validate().unwrap().name, "Grace");
    }
}
