//! RFC 6749 character-class predicates.
//!
//! Appendix A of RFC 6749 defines the character sets allowed in the
//! protocol's string parameters. The grant handlers run these checks before
//! any storage lookup, so a malformed credential never reaches the backend.

/// VSCHAR: any printable US-ASCII character, `%x20-7E`.
///
/// This is the character set for `code` and `refresh_token` values.
/// An empty string does not qualify.
#[must_use]
pub fn is_vschar(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| (0x20..=0x7e).contains(&b))
}

/// NCHAR: `A-Z / a-z / 0-9 / "-" / "." / "_"`.
///
/// Used for client identifiers in the registration profile.
#[must_use]
pub fn is_nchar(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'.' || b == b'_')
}

/// NQCHAR: `%x21 / %x23-5B / %x5D-7E` (no space, `"` or `\`).
///
/// The character set for a single scope token.
#[must_use]
pub fn is_nqchar(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b == 0x21 || (0x23..=0x5b).contains(&b) || (0x5d..=0x7e).contains(&b))
}

/// NQSCHAR: `%x20-21 / %x23-5B / %x5D-7E` (no `"` or `\`).
///
/// Like NQCHAR but allowing spaces, matching a space-delimited scope list.
#[must_use]
pub fn is_nqschar(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| {
            (0x20..=0x21).contains(&b)
                || (0x23..=0x5b).contains(&b)
                || (0x5d..=0x7e).contains(&b)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vschar() {
        assert!(is_vschar("abc123"));
        assert!(is_vschar("SplxlOBeZQQYbYS6WxSbIA"));
        // Space (0x20) is within VSCHAR
        assert!(is_vschar("with space"));
        assert!(is_vschar("~!@#$%^&*()"));

        assert!(!is_vschar(""));
        assert!(!is_vschar("line\nbreak"));
        assert!(!is_vschar("tab\there"));
        assert!(!is_vschar("\u{7f}"));
        assert!(!is_vschar("café"));
    }

    #[test]
    fn test_nchar() {
        assert!(is_nchar("my-client.v2_test"));
        assert!(!is_nchar(""));
        assert!(!is_nchar("no spaces"));
        assert!(!is_nchar("slash/"));
    }

    #[test]
    fn test_nqchar() {
        assert!(is_nqchar("read"));
        assert!(is_nqchar("patient/*.read"));
        assert!(!is_nqchar(""));
        assert!(!is_nqchar("two scopes"));
        assert!(!is_nqchar("quo\"te"));
        assert!(!is_nqchar("back\\slash"));
    }

    #[test]
    fn test_nqschar() {
        assert!(is_nqschar("read write"));
        assert!(is_nqschar("openid offline_access"));
        assert!(!is_nqschar(""));
        assert!(!is_nqschar("quo\"te"));
        assert!(!is_nqschar("back\\slash"));
        assert!(!is_nqschar("line\nbreak"));
    }
}
