//! Field validation predicates for account data.
//!
//! All predicates are pure and total: they inspect the supplied value
//! and either pass or fail with the specific rejection kind. Password
//! values are never logged here or anywhere else.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Inclusive password length bounds.
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 20;

/// Symbols accepted by the password policy.
const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.?~";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Rejection kinds raised by account field validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error(
        "Password must be {PASSWORD_MIN_LEN}-{PASSWORD_MAX_LEN} characters and contain a letter, a digit and a symbol"
    )]
    InvalidPassword,

    #[error("Email address is not valid")]
    EmailFormat,

    #[error("Name may only contain Latin letters or Hangul syllables")]
    InvalidName,

    #[error("Email does not match this account")]
    InvalidEmail,
}

/// Password policy: non-empty, bounded length, at least one ASCII
/// letter, one digit and one symbol from the allowed set.
pub fn validate_password(password: &str) -> Result<(), AccountError> {
    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Err(AccountError::InvalidPassword);
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    let only_allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c));

    if has_letter && has_digit && has_symbol && only_allowed {
        Ok(())
    } else {
        Err(AccountError::InvalidPassword)
    }
}

/// Email must match a standard `local@domain` shape.
pub fn validate_email(email: &str) -> Result<(), AccountError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(AccountError::EmailFormat)
    }
}

const fn is_hangul_syllable(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7A3}')
}

/// Name must be non-empty and contain only ASCII letters or Hangul
/// syllables. CJK ideographs and digits are rejected.
pub fn validate_name(name: &str) -> Result<(), AccountError> {
    if name.is_empty() {
        return Err(AccountError::InvalidName);
    }

    if name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || is_hangul_syllable(c))
    {
        Ok(())
    } else {
        Err(AccountError::InvalidName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_password() {
        assert!(validate_password("1234abc!@").is_ok());
        assert!(validate_password("123!@jjsjs4").is_ok());
    }

    #[test]
    fn rejects_bad_passwords() {
        // empty / no symbol / no digit / no letter / too short / too long
        for pw in [
            "",
            "123test12",
            "test@@@@@",
            "123123123!",
            "1a@",
            "1a@12312!@#!@!#!@#@!#@!2!@!!zda",
        ] {
            assert_eq!(validate_password(pw), Err(AccountError::InvalidPassword), "{pw}");
        }
    }

    #[test]
    fn validates_email_shape() {
        assert!(validate_email("test@test.com").is_ok());
        assert!(validate_email("a.b+c@mail.example.org").is_ok());

        for email in ["testtest.com", "tes#R%estcom", "testtes*tcom", "a@b", ""] {
            assert_eq!(validate_email(email), Err(AccountError::EmailFormat), "{email}");
        }
    }

    #[test]
    fn validates_name_charset() {
        assert!(validate_name("jinping").is_ok());
        assert!(validate_name("시진핑").is_ok());
        assert!(validate_name("john시진핑").is_ok());

        // CJK ideographs, digits, punctuation and empty all fail
        for name in ["習近平", "john2", "john doe", ""] {
            assert_eq!(validate_name(name), Err(AccountError::InvalidName), "{name}");
        }
    }
}
