//! Password hashing and verification.
//!
//! Passwords are stored as Argon2 PHC strings. A stored value starting with
//! [`UNUSABLE_PASSWORD_PREFIX`] marks an account that cannot log in with a password;
//! it never parses as a PHC string and never verifies.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use rand::{distr::Alphanumeric, Rng};

use crate::error::Error;

/// Prefix marking a stored password as unusable.
pub static UNUSABLE_PASSWORD_PREFIX: &str = "!";

/// Number of random characters appended to [`UNUSABLE_PASSWORD_PREFIX`].
pub const UNUSABLE_PASSWORD_SUFFIX_LENGTH: usize = 40;

/// Hash a raw password with Argon2 and a random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash
/// - `Err(Error::PasswordHashError)` - Hashing failed
pub fn hash_password(raw_password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    Ok(Argon2::default()
        .hash_password(raw_password.as_bytes(), &salt)
        .map_err(|e| Error::PasswordHashError(e.to_string()))?
        .to_string())
}

/// Check a raw password against a stored hash.
///
/// # Returns
/// - `Ok(true)` - The password matches
/// - `Ok(false)` - The password does not match, or the stored password is unusable
/// - `Err(Error::PasswordHashError)` - The stored hash is malformed
pub fn verify_password(raw_password: &str, stored_password: &str) -> Result<bool, Error> {
    if !is_password_usable(stored_password) {
        return Ok(false);
    }

    let parsed_hash =
        PasswordHash::new(stored_password).map_err(|e| Error::PasswordHashError(e.to_string()))?;

    match Argon2::default().verify_password(raw_password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::PasswordHashError(e.to_string())),
    }
}

/// Generate a stored password value that no raw password verifies against.
pub fn make_unusable_password() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(UNUSABLE_PASSWORD_SUFFIX_LENGTH)
        .map(char::from)
        .collect();

    format!("{}{}", UNUSABLE_PASSWORD_PREFIX, suffix)
}

/// Whether a stored password value can ever verify.
pub fn is_password_usable(stored_password: &str) -> bool {
    !stored_password.starts_with(UNUSABLE_PASSWORD_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_not_raw_password() -> Result<(), Error> {
        let hash = hash_password("password123")?;

        assert_ne!(hash, "password123");
        assert!(hash.starts_with("$argon2"));

        Ok(())
    }

    #[test]
    fn hashes_are_salted() -> Result<(), Error> {
        assert_ne!(hash_password("password123")?, hash_password("password123")?);

        Ok(())
    }

    #[test]
    fn verifies_matching_password() -> Result<(), Error> {
        let hash = hash_password("password123")?;

        assert!(verify_password("password123", &hash)?);
        assert!(!verify_password("password124", &hash)?);

        Ok(())
    }

    #[test]
    fn unusable_password_never_verifies() -> Result<(), Error> {
        let unusable = make_unusable_password();

        assert!(!is_password_usable(&unusable));
        assert_eq!(
            unusable.len(),
            UNUSABLE_PASSWORD_PREFIX.len() + UNUSABLE_PASSWORD_SUFFIX_LENGTH
        );
        assert!(!verify_password("", &unusable)?);
        assert!(!verify_password(&unusable, &unusable)?);

        Ok(())
    }

    #[test]
    fn fails_for_malformed_hash() {
        let result = verify_password("password123", "not-a-phc-string");

        assert!(matches!(result, Err(Error::PasswordHashError(_))));
    }
}
