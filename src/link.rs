//! Single named links (<https://jsonapi.org/format/#document-links>).
//!
//! A link is a member of a links object: the key is the relation name and
//! the value is either the bare target URL or, when meta-information is
//! attached, an object with `href` and `meta` members.

use serde_json::{json, Value};

use crate::error::BuildError;
use crate::members::Meta;

/// A relation name bound to a target URL, optionally with meta-information.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    relation: String,
    target: String,
    meta: Option<Meta>,
}

impl Link {
    /// Create a link without meta-information.
    pub fn new(relation: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            target: target.into(),
            meta: None,
        }
    }

    /// Attach meta-information, switching the value to the `{href, meta}` form.
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Build a link from nullable inputs.
    ///
    /// Returns `Ok(None)` when there is neither a target nor meta, which the
    /// caller sees as "no link".
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `relation` is missing or empty.
    /// - `InvalidArgument` if `meta` is supplied without a `target`.
    pub fn build(
        relation: Option<&str>,
        target: Option<&str>,
        meta: Option<Meta>,
    ) -> Result<Option<Self>, BuildError> {
        let relation = match relation {
            None => return Err(BuildError::invalid("relation", "must not be null")),
            Some("") => return Err(BuildError::invalid("relation", "must not be empty")),
            Some(r) => r,
        };

        match (target, meta) {
            (None, None) => Ok(None),
            (None, Some(_)) => Err(BuildError::invalid(
                "target",
                format!("link \"{}\" has meta but no href", relation),
            )),
            (Some(target), meta) => Ok(Some(Self {
                relation: relation.to_string(),
                target: target.to_string(),
                meta,
            })),
        }
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    /// The JSON value of this link inside a links object.
    pub fn value(&self) -> Value {
        link_value(&self.target, self.meta.as_ref())
    }

    /// The `(relation, value)` pair as it appears in a links object.
    pub fn into_member(self) -> (String, Value) {
        let value = link_value(&self.target, self.meta.as_ref());
        (self.relation, value)
    }
}

/// The link value for an optional target: `None` when there is no target.
///
/// Meta without a target yields `None` here; this is the lenient form used
/// where the link itself is optional (an error's `about` link).
pub fn value_or_default(target: Option<&str>, meta: Option<&Meta>) -> Option<Value> {
    target.map(|t| link_value(t, meta))
}

fn link_value(target: &str, meta: Option<&Meta>) -> Value {
    match meta {
        None => Value::String(target.to_string()),
        Some(meta) => json!({ "href": target, "meta": meta }),
    }
}
