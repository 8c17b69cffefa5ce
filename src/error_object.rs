//! Error objects (<https://jsonapi.org/format/#error-objects>).
//!
//! Every member of an error object is optional and absent members are
//! omitted rather than written as `null`. Members are emitted in a fixed
//! order: `id`, `links`, `status`, `code`, `title`, `detail`, `source`,
//! `meta`.

use serde_json::Value;

use crate::link;
use crate::members::{assemble, assembled_object, Meta, Object};

/// An assembled error object.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorObject(Object);

assembled_object!(ErrorObject);

impl ErrorObject {
    /// Start building an error object; every field is optional.
    pub fn builder() -> ErrorObjectBuilder {
        ErrorObjectBuilder::default()
    }

    /// An error entry is valid for an `errors` array if it is present.
    ///
    /// No per-member validation is applied.
    pub fn is_valid(error: Option<&ErrorObject>) -> bool {
        error.is_some()
    }
}

/// References to the source of an error inside the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSource {
    /// A JSON Pointer (RFC 6901) into the request document, e.g. `/data`.
    pub pointer: Option<String>,
    /// The URI query parameter that caused the error.
    pub parameter: Option<String>,
}

impl ErrorSource {
    /// The `source` object, or `None` when neither member is present.
    pub fn to_value(&self) -> Option<Value> {
        let object = assemble([
            ("pointer", self.pointer.clone().map(Value::String)),
            ("parameter", self.parameter.clone().map(Value::String)),
        ]);
        if object.is_empty() {
            None
        } else {
            Some(Value::Object(object))
        }
    }
}

/// Builder for [`ErrorObject`].
///
/// ```
/// use jsonapi_doc::ErrorObject;
///
/// let error = ErrorObject::builder()
///     .status_code(422)
///     .title("Invalid Attribute")
///     .source_pointer("/data/attributes/firstName")
///     .build();
///
/// assert_eq!(
///     error.to_string(),
///     r#"{"status":"422","title":"Invalid Attribute","source":{"pointer":"/data/attributes/firstName"}}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorObjectBuilder {
    /// Unique identifier for this occurrence of the problem.
    pub id: Option<String>,
    /// Target of the `about` link.
    pub about_href: Option<String>,
    /// Meta-information for the `about` link; ignored without `about_href`.
    pub about_meta: Option<Meta>,
    /// HTTP status code, as a string.
    pub status: Option<String>,
    /// Application-specific error code.
    pub code: Option<String>,
    /// Short summary that does not change between occurrences.
    pub title: Option<String>,
    /// Explanation specific to this occurrence.
    pub detail: Option<String>,
    pub source: ErrorSource,
    pub meta: Option<Meta>,
}

impl ErrorObjectBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn about(mut self, href: impl Into<String>) -> Self {
        self.about_href = Some(href.into());
        self
    }

    pub fn about_meta(mut self, meta: Meta) -> Self {
        self.about_meta = Some(meta);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set `status` from a numeric HTTP status code.
    pub fn status_code(self, status: u16) -> Self {
        self.status(status.to_string())
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn source_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.source.pointer = Some(pointer.into());
        self
    }

    pub fn source_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.source.parameter = Some(parameter.into());
        self
    }

    pub fn meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Assemble the error object. Never fails; an error with no members
    /// at all is a legal `{}`.
    pub fn build(self) -> ErrorObject {
        let links = link::value_or_default(self.about_href.as_deref(), self.about_meta.as_ref())
            .map(|about| {
                let mut links = Object::new();
                links.insert("about".to_string(), about);
                Value::Object(links)
            });

        ErrorObject(assemble([
            ("id", self.id.map(Value::String)),
            ("links", links),
            ("status", self.status.map(Value::String)),
            ("code", self.code.map(Value::String)),
            ("title", self.title.map(Value::String)),
            ("detail", self.detail.map(Value::String)),
            ("source", self.source.to_value()),
            ("meta", self.meta.map(Value::Object)),
        ]))
    }
}
