//! Top-level documents (<https://jsonapi.org/format/#document-top-level>).
//!
//! A document carries its primary data in exactly one of three shapes,
//! modelled by [`PrimaryData`]:
//!
//! | Variant | Emitted as |
//! |---------|------------|
//! | `Resource(Some(r))` | `"data": {...}` |
//! | `Resource(None)` | `"data": null` |
//! | `Collection(vec)` | `"data": [...]`, `[]` when empty |
//! | `Errors(vec)` | `"errors": [...]`, never empty |
//!
//! After the primary data the optional members follow in a fixed order:
//! `meta`, `jsonapi`, `links` (only if at least one link survives), and
//! `included` (whenever supplied, even if empty).

use serde_json::Value;
use tracing::debug;

use crate::api::ApiDescriptor;
use crate::error::BuildError;
use crate::error_object::ErrorObject;
use crate::links::LinkSet;
use crate::members::{assemble, assembled_object, Member, Meta, Object};
use crate::resource::ResourceIdentifier;

/// The primary data of a document.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimaryData {
    /// A single resource, or `None` for an explicit `"data": null`.
    Resource(Option<ResourceIdentifier>),
    /// A resource collection; may be empty.
    Collection(Vec<ResourceIdentifier>),
    /// Error entries; `None` entries are dropped during assembly.
    Errors(Vec<Option<ErrorObject>>),
}

impl PrimaryData {
    /// Errors primary data from entries that are all present.
    pub fn errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = ErrorObject>,
    {
        PrimaryData::Errors(errors.into_iter().map(Some).collect())
    }

    fn is_errors(&self) -> bool {
        matches!(self, PrimaryData::Errors(_))
    }

    /// The `data` or `errors` member.
    ///
    /// # Errors
    ///
    /// `ArgumentRequired` if no valid error entries remain.
    fn into_member(self) -> Result<Member, BuildError> {
        match self {
            PrimaryData::Resource(resource) => Ok((
                "data",
                Some(resource.map(Value::from).unwrap_or(Value::Null)),
            )),
            PrimaryData::Collection(resources) => Ok((
                "data",
                Some(Value::Array(resources.into_iter().map(Value::from).collect())),
            )),
            PrimaryData::Errors(entries) => {
                let supplied = entries.len();
                let errors: Vec<Value> = entries
                    .into_iter()
                    .filter(|e| ErrorObject::is_valid(e.as_ref()))
                    .flatten()
                    .map(Value::from)
                    .collect();

                if errors.len() < supplied {
                    debug!(
                        supplied,
                        kept = errors.len(),
                        "dropped null entries from errors"
                    );
                }
                if errors.is_empty() {
                    return Err(BuildError::required("errors"));
                }
                Ok(("errors", Some(Value::Array(errors))))
            }
        }
    }
}

/// An assembled top-level document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document(Object);

assembled_object!(Document);

impl Document {
    /// Start a document with no primary data set yet.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// Start a document whose primary data is a single resource or `null`.
    pub fn for_resource(resource: Option<ResourceIdentifier>) -> DocumentBuilder {
        Self::builder().primary(PrimaryData::Resource(resource))
    }

    /// Start a document whose primary data is a resource collection.
    pub fn for_collection<I>(resources: I) -> DocumentBuilder
    where
        I: IntoIterator<Item = ResourceIdentifier>,
    {
        Self::builder().primary(PrimaryData::Collection(resources.into_iter().collect()))
    }

    /// Start an error document. `None` entries are skipped at build time.
    pub fn for_errors<I>(errors: I) -> DocumentBuilder
    where
        I: IntoIterator<Item = Option<ErrorObject>>,
    {
        Self::builder().primary(PrimaryData::Errors(errors.into_iter().collect()))
    }

    /// True if this document carries `errors` rather than `data`.
    pub fn is_error_document(&self) -> bool {
        self.0.contains_key("errors")
    }
}

/// Builder for [`Document`].
///
/// ```
/// use jsonapi_doc::{ApiDescriptor, Document, LinkSet, ResourceIdentifier};
///
/// let doc = Document::for_collection([
///     ResourceIdentifier::new("dwarf", "gimly"),
///     ResourceIdentifier::new("dwarf", "thorin"),
/// ])
/// .jsonapi(ApiDescriptor::version("1.0"))
/// .links(LinkSet::new().self_link("/dwarves"))
/// .build()
/// .unwrap();
///
/// assert_eq!(
///     doc.to_string(),
///     r#"{"data":[{"type":"dwarf","id":"gimly"},{"type":"dwarf","id":"thorin"}],"jsonapi":{"version":"1.0"},"links":{"self":"/dwarves"}}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentBuilder {
    pub data: Option<PrimaryData>,
    pub meta: Option<Meta>,
    pub jsonapi: Option<ApiDescriptor>,
    pub links: LinkSet,
    pub included: Option<Vec<ResourceIdentifier>>,
}

impl DocumentBuilder {
    /// Set the primary data, replacing any earlier choice.
    pub fn primary(mut self, data: PrimaryData) -> Self {
        self.data = Some(data);
        self
    }

    pub fn meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn jsonapi(mut self, jsonapi: ApiDescriptor) -> Self {
        self.jsonapi = Some(jsonapi);
        self
    }

    pub fn links(mut self, links: LinkSet) -> Self {
        self.links = links;
        self
    }

    /// Resources related to the primary data. Emitted even when empty.
    pub fn included<I>(mut self, included: I) -> Self
    where
        I: IntoIterator<Item = ResourceIdentifier>,
    {
        self.included = Some(included.into_iter().collect());
        self
    }

    /// Assemble the document.
    ///
    /// # Errors
    ///
    /// - `ArgumentRequired("data")` if no primary data was supplied.
    /// - `ArgumentRequired("errors")` if an error document has no valid entries.
    /// - `InvalidArgument("included")` if `included` is set on an error document.
    /// - `InvalidArgument("relation")` if a link has an empty relation name.
    pub fn build(self) -> Result<Document, BuildError> {
        let data = self.data.ok_or_else(|| BuildError::required("data"))?;

        if data.is_errors() && self.included.is_some() {
            return Err(BuildError::invalid(
                "included",
                "an error document has no primary data to include resources for",
            ));
        }

        let primary = data.into_member()?;
        let links = self.links.assemble()?;
        let included = self
            .included
            .map(|resources| Value::Array(resources.into_iter().map(Value::from).collect()));

        Ok(Document(assemble([
            primary,
            ("meta", self.meta.map(Value::Object)),
            ("jsonapi", self.jsonapi.map(Value::from)),
            ("links", links.map(Value::from)),
            ("included", included),
        ])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::Link;
    use serde_json::json;

    fn dwarf(id: &str) -> ResourceIdentifier {
        ResourceIdentifier::new("dwarf", id)
    }

    #[test]
    fn single_null_resource() {
        let doc = Document::for_resource(None).build().unwrap();
        assert_eq!(doc.to_string(), r#"{"data":null}"#);
    }

    #[test]
    fn single_resource() {
        let doc = Document::for_resource(Some(dwarf("gimly"))).build().unwrap();
        assert_eq!(doc.to_string(), r#"{"data":{"type":"dwarf","id":"gimly"}}"#);
        assert!(!doc.is_error_document());
    }

    #[test]
    fn empty_collection() {
        let doc = Document::for_collection(Vec::new()).build().unwrap();
        assert_eq!(doc.to_string(), r#"{"data":[]}"#);
    }

    #[test]
    fn missing_primary_data_is_required() {
        let err = Document::builder().build().unwrap_err();
        assert_eq!(err, BuildError::ArgumentRequired { argument: "data" });
    }

    #[test]
    fn error_document_filters_null_entries() {
        let not_found = ErrorObject::builder().status("404").build();
        let doc = Document::for_errors([None, Some(not_found), None])
            .build()
            .unwrap();
        assert_eq!(doc.to_string(), r#"{"errors":[{"status":"404"}]}"#);
        assert!(doc.is_error_document());
    }

    #[test]
    fn error_document_of_only_nulls_is_required() {
        let err = Document::for_errors([None, None]).build().unwrap_err();
        assert_eq!(err, BuildError::ArgumentRequired { argument: "errors" });

        let err = Document::for_errors(std::iter::empty()).build().unwrap_err();
        assert_eq!(err, BuildError::ArgumentRequired { argument: "errors" });
    }

    #[test]
    fn error_document_rejects_included() {
        let err = Document::builder()
            .primary(PrimaryData::errors([ErrorObject::builder().build()]))
            .included([dwarf("gimly")])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidArgument {
                argument: "included",
                ..
            }
        ));
    }

    #[test]
    fn optional_members_in_fixed_order() {
        let mut meta = Meta::new();
        meta.insert("total".into(), json!(2));
        let doc = Document::builder()
            .included(Vec::new())
            .links(LinkSet::new().self_link("/dwarves"))
            .jsonapi(ApiDescriptor::default())
            .meta(meta)
            .primary(PrimaryData::Collection(vec![dwarf("gimly")]))
            .build()
            .unwrap();

        let keys: Vec<&str> = doc.as_object().keys().map(String::as_str).collect();
        assert_eq!(keys, ["data", "meta", "jsonapi", "links", "included"]);
        assert_eq!(doc.as_object()["included"], json!([]));
        assert_eq!(doc.as_object()["jsonapi"], json!({}));
    }

    #[test]
    fn blank_links_are_omitted() {
        let doc = Document::for_resource(None)
            .links(LinkSet::new().self_link(" ").next(""))
            .build()
            .unwrap();
        assert_eq!(doc.to_string(), r#"{"data":null}"#);
    }

    #[test]
    fn last_primary_wins() {
        let doc = Document::for_resource(None)
            .primary(PrimaryData::Collection(vec![]))
            .build()
            .unwrap();
        assert_eq!(doc.into_value(), json!({"data": []}));
    }

    #[test]
    fn empty_link_relation_fails_the_document() {
        let err = Document::for_resource(None)
            .links(LinkSet::new().link(Link::new("", "/x")))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidArgument {
                argument: "relation",
                ..
            }
        ));
    }
}
