//! Demo accounts accepted by the login form.
//!
//! There is no authentication backend; access is gated by this fixed table.

use crate::system::session::Plan;
use contracts::shared::validation::Pattern;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub user_name: &'static str,
    pub plan: Plan,
}

pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        email: "estandar@drfachero.com",
        password: "estandar123",
        user_name: "Dra. Laura Gómez",
        plan: Plan::Estandar,
    },
    DemoAccount {
        email: "pro@drfachero.com",
        password: "pro123",
        user_name: "Dr. Martín Fachero",
        plan: Plan::Pro,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    MissingEmail,
    InvalidEmail,
    MissingPassword,
    BadCredentials,
}

impl LoginError {
    pub fn message(&self) -> &'static str {
        match self {
            LoginError::MissingEmail => "Ingresá tu correo electrónico",
            LoginError::InvalidEmail => "El correo electrónico no es válido",
            LoginError::MissingPassword => "Ingresá tu contraseña",
            LoginError::BadCredentials => "Correo o contraseña incorrectos",
        }
    }
}

/// Check the form input against the demo accounts.
/// Email is matched case-insensitively, password exactly.
pub fn authenticate(email: &str, password: &str) -> Result<&'static DemoAccount, LoginError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(LoginError::MissingEmail);
    }
    if !Pattern::Email.matches(email) {
        return Err(LoginError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(LoginError::MissingPassword);
    }
    DEMO_ACCOUNTS
        .iter()
        .find(|a| a.email.eq_ignore_ascii_case(email) && a.password == password)
        .ok_or(LoginError::BadCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_accounts() {
        let pro = authenticate(" PRO@drfachero.com ", "pro123").unwrap();
        assert_eq!(pro.plan, Plan::Pro);
        let std = authenticate("estandar@drfachero.com", "estandar123").unwrap();
        assert_eq!(std.plan, Plan::Estandar);
        assert_eq!(std.user_name, "Dra. Laura Gómez");
    }

    #[test]
    fn test_rejections() {
        assert_eq!(authenticate("", "x"), Err(LoginError::MissingEmail));
        assert_eq!(authenticate("pro@", "x"), Err(LoginError::InvalidEmail));
        assert_eq!(authenticate("pro@drfachero.com", ""), Err(LoginError::MissingPassword));
        assert_eq!(
            authenticate("pro@drfachero.com", "PRO123"),
            Err(LoginError::BadCredentials)
        );
    }
}
