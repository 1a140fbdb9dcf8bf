//! Unique test data so tests sharing a database never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("couple");
/// let b = unique_str("couple");
/// assert_ne!(a, b);
/// assert!(a.starts_with("couple-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A unique, already-normalized (lower-case) email address.
///
/// Signup lower-cases emails before storing them, so returning the
/// normalized form lets tests compare response bodies directly.
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("bride");
/// assert!(email.starts_with("bride-"));
/// assert!(email.ends_with("@example.test"));
/// assert_eq!(email, email.to_lowercase());
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!(
        "{}-{}@example.test",
        prefix.to_lowercase(),
        Ulid::new().to_string().to_lowercase()
    )
}
