//! Resource identifier objects
//! (<https://jsonapi.org/format/#document-resource-identifier-objects>).

use serde_json::Value;

use crate::members::{assemble, assembled_object, Meta, Object};

/// A `{type, id, meta?}` object identifying a single resource.
///
/// `type` and `id` are always emitted; an `id` of `null` is written out as
/// an explicit `null` and marks a resource that has not been assigned an
/// identifier yet. `meta` is emitted only when supplied.
///
/// ```
/// use jsonapi_doc::ResourceIdentifier;
///
/// let dwarf = ResourceIdentifier::new("dwarf", "gimly");
/// assert_eq!(dwarf.to_string(), r#"{"type":"dwarf","id":"gimly"}"#);
///
/// let fresh = ResourceIdentifier::unidentified("dwarf");
/// assert_eq!(fresh.to_string(), r#"{"type":"dwarf","id":null}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceIdentifier(Object);

assembled_object!(ResourceIdentifier);

impl ResourceIdentifier {
    /// Identify a resource by type and id. The id may be any JSON value,
    /// most commonly a string.
    pub fn new(kind: impl Into<String>, id: impl Into<Value>) -> Self {
        Self::build(kind, id, None)
    }

    /// A resource of `kind` whose id is `null`.
    pub fn unidentified(kind: impl Into<String>) -> Self {
        Self::build(kind, Value::Null, None)
    }

    /// Identify a resource with attached meta-information.
    pub fn with_meta(kind: impl Into<String>, id: impl Into<Value>, meta: Meta) -> Self {
        Self::build(kind, id, Some(meta))
    }

    /// Assemble from all inputs; `meta` is attached only if present.
    pub fn build(kind: impl Into<String>, id: impl Into<Value>, meta: Option<Meta>) -> Self {
        Self(assemble([
            ("type", Some(Value::String(kind.into()))),
            ("id", Some(id.into())),
            ("meta", meta.map(Value::Object)),
        ]))
    }

    /// The resource type.
    pub fn kind(&self) -> &str {
        self.0.get("type").and_then(Value::as_str).unwrap_or_default()
    }

    /// The resource id, `Value::Null` when unidentified.
    pub fn id(&self) -> &Value {
        self.0.get("id").unwrap_or(&Value::Null)
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.0.get("meta").and_then(Value::as_object)
    }
}
