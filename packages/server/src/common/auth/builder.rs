use super::AuthError;

/// The verified identity behind a call
#[derive(Debug, Clone)]
pub struct Actor {
    email: String,
}

impl Actor {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Require that the actor is the owner identified by `owner_email`.
    ///
    /// Emails compare case-insensitively and ignore surrounding whitespace.
    pub fn must_own(&self, owner_email: &str) -> Result<(), AuthError> {
        if same_email(&self.email, owner_email) {
            Ok(())
        } else {
            Err(AuthError::PermissionDenied(format!(
                "{} may not access records of {}",
                self.email,
                owner_email.trim()
            )))
        }
    }
}

pub(crate) fn same_email(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
