//! PII masking for log output.
//!
//! Emails keep their first character and domain. Bearer tokens, Argon2 PHC
//! strings and long opaque base64/hex runs are replaced wholesale.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

// Vetted literals; a failure here is a programming error caught by the tests below.
#[allow(clippy::unwrap_used)]
static JWT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"eyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+").unwrap());

#[allow(clippy::unwrap_used)]
static PHC_HASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$argon2[a-z]*\$\S+").unwrap());

#[allow(clippy::unwrap_used)]
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
});

#[allow(clippy::unwrap_used)]
static OPAQUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9+/]{32,}={0,2}").unwrap());

const TOKEN_MASK: &str = "[REDACTED_TOKEN]";

fn mask_email(caps: &Captures) -> String {
    let full = &caps[0];
    match full.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{first}***@{domain}"),
            None => format!("@{domain}"),
        },
        None => full.to_string(),
    }
}

/// Masked copy of `input`. Tokens and hashes go first so their
/// fragments are never mistaken for emails.
pub fn redact(input: &str) -> String {
    let out = JWT.replace_all(input, TOKEN_MASK);
    let out = PHC_HASH.replace_all(&out, "[REDACTED_HASH]");
    let out = EMAIL.replace_all(&out, mask_email);
    OPAQUE.replace_all(&out, TOKEN_MASK).into_owned()
}

/// Display/Debug wrapper that applies [`redact`], for use in `tracing` fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
