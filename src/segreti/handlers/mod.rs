pub mod health;
pub use self::health::health;

pub mod home;
pub use self::home::{home, logout};

pub mod user_login;
pub use self::user_login::{login, login_form};

pub mod user_register;
pub use self::user_register::{register, register_form};


// common functions for the handlers
use regex::Regex;

// bcrypt only consumes the first 72 bytes of input
pub const MAX_PASSWORD_LENGTH: usize = 72;

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

pub fn valid_password(password: &str) -> bool {
    !password.is_empty() && password.len() <= MAX_PASSWORD_LENGTH
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(valid_email("alice@example.com"));
        assert!(valid_email("a.b+c@tld.example.org"));

        assert!(!valid_email(""));
        assert!(!valid_email("alice"));
        assert!(!valid_email("alice@example"));
        assert!(!valid_email("alice @example.com"));
        assert!(!valid_email("@example.com"));
    }

    #[test]
    fn test_valid_password() {
        assert!(valid_password("Secr3t!"));
        assert!(valid_password(&"a".repeat(MAX_PASSWORD_LENGTH)));

        assert!(!valid_password(""));
        assert!(!valid_password(&"a".repeat(MAX_PASSWORD_LENGTH + 1)));
    }
}
