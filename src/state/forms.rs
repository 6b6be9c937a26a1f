//! Credential form buffers.
//!
//! Each form owns its own buffer, mutated field-by-field from controlled
//! inputs. `validate` mirrors the `required` markup on the inputs and is the
//! single place a buffer turns into a typed request, so a submit can never
//! dispatch half-empty credentials.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::AuthRequest;

/// Login form buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Build the login request from the buffer.
    ///
    /// # Errors
    ///
    /// Returns the notification text when the email (after trimming) or the
    /// password is empty.
    pub fn validate(&self) -> Result<AuthRequest, &'static str> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err("Введите email и пароль");
        }
        Ok(AuthRequest::Login {
            email: email.to_owned(),
            password: self.password.clone(),
        })
    }

    /// Reset both fields to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Register form buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl RegisterForm {
    /// Build the register request from the buffer.
    ///
    /// # Errors
    ///
    /// Returns the notification text when any field (email and username
    /// after trimming) is empty.
    pub fn validate(&self) -> Result<AuthRequest, &'static str> {
        let email = self.email.trim();
        let username = self.username.trim();
        if email.is_empty() || username.is_empty() || self.password.is_empty() {
            return Err("Заполните все поля");
        }
        Ok(AuthRequest::Register {
            email: email.to_owned(),
            username: username.to_owned(),
            password: self.password.clone(),
        })
    }

    /// Reset all three fields to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
