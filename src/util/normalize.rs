//! Normalization applied to usernames and emails before they are stored.

use unicode_normalization::UnicodeNormalization;

/// Apply Unicode NFKC normalization so visually identical usernames compare equal.
pub fn normalize_username(username: &str) -> String {
    username.nfkc().collect()
}

/// Lowercase the domain part of an email address.
///
/// The local part is left as given since mail servers may treat it case-sensitively.
/// Values without an `@` are returned unchanged.
pub fn normalize_email(email: &str) -> String {
    match email.trim().rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.trim().to_string(),
    }
}
