use shared::{LoginRequest, RegisterRequest, UserRole};

use super::required;
use crate::error::FormError;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        let email = required(&self.email, "Email")?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        Ok(LoginRequest {
            email,
            password: self.password.clone(),
        })
    }
}

/// First-run registration of the single admin account
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self, admin_exists: bool) -> Result<RegisterRequest, FormError> {
        if admin_exists {
            return Err(FormError::AdminExists);
        }
        let name = required(&self.name, "Name")?;
        let email = required(&self.email, "Email")?;
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        Ok(RegisterRequest {
            name,
            email,
            password: self.password.clone(),
            role: UserRole::Admin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let mut form = LoginForm::default();
        assert_eq!(form.validate(), Err(FormError::Required("Email")));
        form.email = "admin@example.com".to_string();
        assert_eq!(form.validate(), Err(FormError::Required("Password")));
        form.password = "secret".to_string();
        assert_eq!(form.validate().unwrap().email, "admin@example.com");
    }

    fn register_form() -> RegisterForm {
        RegisterForm {
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_register_refused_when_admin_exists() {
        assert_eq!(register_form().validate(true), Err(FormError::AdminExists));
    }

    #[test]
    fn test_register_password_rules() {
        let mut form = register_form();
        form.confirm_password = "secret2".to_string();
        assert_eq!(form.validate(false), Err(FormError::PasswordMismatch));

        form.password = "abc".to_string();
        form.confirm_password = "abc".to_string();
        assert_eq!(form.validate(false), Err(FormError::PasswordTooShort(6)));

        let request = register_form().validate(false).unwrap();
        assert_eq!(request.role, UserRole::Admin);
    }
}
