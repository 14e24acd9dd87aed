//! Input validation helpers.
//!
//! Validation happens once, here, at the core boundary; neither protocol
//! adapter re-implements any of these rules.

use crate::error::{DomainError, FieldError};

/// Minimum length for passwords, post titles and post content.
pub const MIN_TEXT_LEN: usize = 5;

/// Collects field errors and converts into a [`DomainError::Validation`].
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a well-formed email address.
    pub fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        if !is_email(value) {
            self.errors
                .push(FieldError::new(field, "must be a valid email address"));
        }
        self
    }

    /// Require a trimmed minimum length.
    pub fn min_len(&mut self, field: &'static str, value: &str, min: usize) -> &mut Self {
        if value.trim().chars().count() < min {
            self.errors.push(FieldError::new(
                field,
                format!("must be at least {min} characters"),
            ));
        }
        self
    }

    /// Require the value to be present at all.
    pub fn required<T>(&mut self, field: &'static str, value: Option<&T>) -> &mut Self {
        if value.is_none() {
            self.errors.push(FieldError::new(field, "is required"));
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), DomainError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(std::mem::take(&mut self.errors)))
        }
    }
}

/// Minimal well-formedness check: one `@` with a dotted, non-empty domain.
fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || value.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_email("alice@example.com"));
        assert!(is_email("a.b+c@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "alice", "@example.com", "alice@", "alice@nodot", "a b@x.com"] {
            assert!(!is_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn collects_every_violated_field() {
        let err = Validator::new()
            .email("email", "nope")
            .min_len("password", "abc", MIN_TEXT_LEN)
            .finish()
            .unwrap_err();

        match err {
            DomainError::Validation(fields) => {
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[0].field, "email");
                assert_eq!(fields[1].field, "password");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn min_len_trims_before_counting() {
        assert!(
            Validator::new()
                .min_len("title", "  ab  ", MIN_TEXT_LEN)
                .finish()
                .is_err()
        );
        assert!(
            Validator::new()
                .min_len("title", "hello", MIN_TEXT_LEN)
                .finish()
                .is_ok()
        );
    }
}
