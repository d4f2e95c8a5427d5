/// Trim + lowercase, applied before storage and before every lookup so the
/// same address always resolves to the same profile.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Same loose shape check the clients use. Not RFC-complete on purpose.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !local.contains(char::is_whitespace)
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains(char::is_whitespace)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_is_idempotent() {
        assert_eq!(normalize_email(" Foo@Bar.com "), "foo@bar.com");
        assert_eq!(normalize_email("foo@bar.com"), "foo@bar.com");
        assert_eq!(
            normalize_email(&normalize_email(" Foo@Bar.com ")),
            "foo@bar.com"
        );
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("caregiver@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("spa ce@example.com"));
    }
}
