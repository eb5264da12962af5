//! Bearer-token wrapper that prevents accidental exposure.
//!
//! [`SecretString`] wraps the workspace token so that it never appears
//! in `Debug` output, tracing fields, or serialized config dumps.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A string value that must not leak into logs or serialized output.
///
/// - `Debug` and `Display` print `[REDACTED]` (empty when the value is empty)
/// - `Serialize` always emits an empty string
/// - `Deserialize` accepts a plain string from config files
/// - [`expose()`](SecretString::expose) returns the inner value for the
///   one place that needs it: the `Authorization` header
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Wrap a secret value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The actual secret. Use only when building the outbound request.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True when no value has been configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "\"\"")
        } else {
            write!(f, "\"[REDACTED]\"")
        }
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            Ok(())
        } else {
            write!(f, "[REDACTED]")
        }
    }
}

impl Serialize for SecretString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Config round-trips must never write the token back out.
        serializer.serialize_str("")
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(SecretString(String::deserialize(deserializer)?))
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        SecretString(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        SecretString(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts() {
        let s = SecretString::new("xoxb-secret");
        assert_eq!(format!("{s:?}"), "\"[REDACTED]\"");
        assert_eq!(format!("{:?}", SecretString::default()), "\"\"");
    }

    #[test]
    fn display_redacts() {
        assert_eq!(SecretString::new("xoxb-secret").to_string(), "[REDACTED]");
        assert_eq!(SecretString::default().to_string(), "");
    }

    #[test]
    fn expose_returns_value() {
        assert_eq!(SecretString::new("xoxb-123").expose(), "xoxb-123");
    }

    #[test]
    fn serialize_never_emits_value() {
        let json = serde_json::to_string(&SecretString::new("xoxb-123")).unwrap();
        assert_eq!(json, "\"\"");
    }

    #[test]
    fn deserialize_plain_string() {
        let s: SecretString = serde_json::from_str("\"xoxb-123\"").unwrap();
        assert_eq!(s.expose(), "xoxb-123");
    }
}
