use core::fmt;

use thiserror::Error;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// The configured shared secret.
///
/// An empty key never authorizes anything, since an empty header is always
/// rejected.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing API key")]
    Missing,

    #[error("invalid API key")]
    Invalid,
}

/// Decide whether a presented header value matches the configured secret.
///
/// Exact, case-sensitive equality. Absent or empty values are rejected.
///
/// The comparison is not constant-time.
pub fn authorize(presented: Option<&str>, expected: &ApiKey) -> bool {
    check(presented, expected).is_ok()
}

/// Same decision as [`authorize`], but says why a request was rejected.
pub fn check(presented: Option<&str>, expected: &ApiKey) -> Result<(), AuthError> {
    let presented = match presented {
        Some(v) if !v.is_empty() => v,
        _ => return Err(AuthError::Missing),
    };

    if presented == expected.as_str() {
        Ok(())
    } else {
        Err(AuthError::Invalid)
    }
}
