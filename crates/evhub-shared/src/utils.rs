//! Utility functions

/// Normalize an email address for storage.
///
/// The domain part is lower-cased while the local part is kept as typed,
/// since mailbox names may be case sensitive. Input without an `@` is only
/// trimmed.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Mask an email for logs. Works on characters, so any UTF-8 input is safe.
pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let keep = if local.chars().count() <= 2 { 1 } else { 2 };
        let prefix: String = local.chars().take(keep).collect();
        let prefix = if prefix.is_empty() { "*".to_string() } else { prefix };
        format!("{}***{}", prefix, domain)
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_lowercases_domain_only() {
        let samples = [
            ("test1@EXAMPLE.com", "test1@example.com"),
            ("Test2@Example.com", "Test2@example.com"),
            ("TEST3@EXAMPLE.COM", "TEST3@example.com"),
            ("test4@example.COM", "test4@example.com"),
        ];

        for (email, expected) in samples {
            assert_eq!(normalize_email(email), expected);
        }
    }

    #[test]
    fn test_normalize_email_trims_and_keeps_garbage() {
        assert_eq!(normalize_email("  user@Host.IO "), "user@host.io");
        assert_eq!(normalize_email("not-an-email"), "not-an-email");
        assert_eq!(normalize_email(""), "");
    }

    #[test]
    fn test_normalize_email_splits_on_last_at() {
        assert_eq!(normalize_email("\"a@b\"@EXAMPLE.org"), "\"a@b\"@example.org");
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "al***@example.com");
        assert_eq!(mask_email("a@example.com"), "a***@example.com");
        assert_eq!(mask_email("@example.com"), "****@example.com");
        assert_eq!(mask_email("nope"), "***");
    }

    #[test]
    fn test_mask_email_multibyte_local_part() {
        assert_eq!(mask_email("aé@example.com"), "a***@example.com");
        assert_eq!(mask_email("éüß@example.com"), "éü***@example.com");
        assert_eq!(mask_email("日本語@example.jp"), "日本***@example.jp");
    }
}
