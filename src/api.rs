//! The top-level `jsonapi` member
//! (<https://jsonapi.org/format/#document-jsonapi-object>).

use serde_json::Value;

use crate::members::{assemble, assembled_object, non_blank, Meta, Object};

/// Describes the server's implementation: an optional `version` and `meta`.
///
/// A blank version is treated as absent, so the descriptor may legally be
/// the empty object `{}`.
///
/// ```
/// use jsonapi_doc::ApiDescriptor;
///
/// assert_eq!(ApiDescriptor::version("1.1").to_string(), r#"{"version":"1.1"}"#);
/// assert_eq!(ApiDescriptor::build(Some("  "), None).to_string(), "{}");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDescriptor(Object);

assembled_object!(ApiDescriptor);

impl ApiDescriptor {
    pub fn build(version: Option<&str>, meta: Option<Meta>) -> Self {
        Self(assemble([
            ("version", non_blank(version).map(|v| Value::String(v.to_string()))),
            ("meta", meta.map(Value::Object)),
        ]))
    }

    /// A descriptor carrying only a version.
    pub fn version(version: &str) -> Self {
        Self::build(Some(version), None)
    }

    /// The emitted version, if any.
    pub fn version_str(&self) -> Option<&str> {
        self.0.get("version").and_then(Value::as_str)
    }
}

impl Default for ApiDescriptor {
    fn default() -> Self {
        Self::build(None, None)
    }
}
