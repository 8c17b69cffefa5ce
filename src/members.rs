//! Ordered optional-member emission.
//!
//! Every assembler describes its output as a fixed list of `(name, value)`
//! pairs in emission order. A `None` value means the member is omitted; a
//! `Some(Value::Null)` value is emitted as an explicit `null`.

use serde_json::{Map, Value};

/// A single candidate member of an assembled object.
pub(crate) type Member = (&'static str, Option<Value>);

/// The ordered object type every assembled entity wraps.
pub type Object = Map<String, Value>;

/// Caller-owned meta-information object.
pub type Meta = Map<String, Value>;

/// Assemble an object from candidate members, keeping only those present.
///
/// Insertion order is preserved, so the order of `members` is the
/// serialization order.
pub(crate) fn assemble<I>(members: I) -> Object
where
    I: IntoIterator<Item = Member>,
{
    members
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
        .collect()
}

/// Treats `None`, empty and whitespace-only strings as absent.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Generates the shared surface of a type that wraps an assembled [`Object`].
macro_rules! assembled_object {
    ($ty:ident) => {
        impl $ty {
            /// The assembled members, in emission order.
            pub fn as_object(&self) -> &$crate::members::Object {
                &self.0
            }

            /// Consumes the entity and returns it as a JSON value.
            pub fn into_value(self) -> serde_json::Value {
                serde_json::Value::Object(self.0)
            }

            /// Serializes with indentation.
            pub fn to_string_pretty(&self) -> String {
                // Serializing a map of string keys cannot fail.
                serde_json::to_string_pretty(&self.0).unwrap_or_default()
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.0.serialize(serializer)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let json = serde_json::to_string(&self.0).map_err(|_| std::fmt::Error)?;
                f.write_str(&json)
            }
        }

        impl From<$ty> for serde_json::Value {
            fn from(value: $ty) -> Self {
                value.into_value()
            }
        }
    };
}

pub(crate) use assembled_object;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn assemble_drops_absent_members() {
        let obj = assemble([
            ("id", Some(json!("1"))),
            ("title", None),
            ("detail", Some(json!("boom"))),
        ]);
        assert_eq!(Value::Object(obj), json!({"id": "1", "detail": "boom"}));
    }

    #[test]
    fn assemble_keeps_explicit_null() {
        let obj = assemble([("type", Some(json!("dwarf"))), ("id", Some(Value::Null))]);
        assert_eq!(serde_json::to_string(&obj).unwrap(), r#"{"type":"dwarf","id":null}"#);
    }

    #[test]
    fn assemble_preserves_member_order() {
        let obj = assemble([
            ("z", Some(json!(1))),
            ("a", Some(json!(2))),
            ("m", Some(json!(3))),
        ]);
        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn non_blank_filters_whitespace() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some(" \t")), None);
        assert_eq!(non_blank(Some("1.0")), Some("1.0"));
    }
}
