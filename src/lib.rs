//! JSON:API Documents
//!
//! Assembly and validation of documents that follow the
//! [JSON:API](https://jsonapi.org/format/) conventions, plus the smaller JSON
//! home documents used for API discovery.
//!
//! Every entity is built once from caller-supplied values and is immutable
//! afterwards. Optional members are omitted rather than written as `null`,
//! and members are always emitted in the same order, so the serialized form
//! is fully determined by the inputs.
//!
//! # Example
//!
//! ```
//! use jsonapi_doc::{Document, ErrorObject, LinkSet, ResourceIdentifier};
//!
//! let doc = Document::for_resource(Some(ResourceIdentifier::new("dwarf", "gimly")))
//!     .links(LinkSet::new().self_link("/dwarves/gimly"))
//!     .build()
//!     .unwrap();
//! assert_eq!(
//!     doc.to_string(),
//!     r#"{"data":{"type":"dwarf","id":"gimly"},"links":{"self":"/dwarves/gimly"}}"#
//! );
//!
//! let errors = Document::for_errors([Some(
//!     ErrorObject::builder().status("404").title("Not Found").build(),
//! )])
//! .build()
//! .unwrap();
//! assert_eq!(errors.to_string(), r#"{"errors":[{"status":"404","title":"Not Found"}]}"#);
//! ```
//!
//! # Omission Rules
//!
//! | Member | Omitted when |
//! |--------|--------------|
//! | `data` | never; `null` for a missing single resource, `[]` for an empty collection |
//! | `errors` | never; building fails if no error entries remain |
//! | `links` | no navigation target is non-blank and no extra link is supplied |
//! | `included` | not supplied (an empty list is emitted as `[]`) |
//! | `jsonapi.version` | null, empty or whitespace-only |
//! | error `source` | neither `pointer` nor `parameter` is supplied |
//! | resource `id` | never; `null` is emitted explicitly |

mod api;
mod document;
mod error;
mod error_object;
mod home;
mod link;
mod links;
mod linter;
mod loader;
pub mod member_name;
mod members;
pub mod relation;
mod resource;

pub use api::ApiDescriptor;
pub use document::{Document, DocumentBuilder, PrimaryData};
pub use error::{BuildError, LoadError};
pub use error_object::{ErrorObject, ErrorObjectBuilder, ErrorSource};
pub use home::{HomeApi, HomeDocument, HomeDocumentBuilder, ResourceDescriptor};
pub use link::Link;
pub use links::{LinkSet, Links};
pub use linter::{
    lint, lint_file, lint_value, Diagnostic, FileResult, FileStatus, LintOptions, LintResult,
    Severity,
};
pub use loader::{load_document, load_document_str};
pub use members::{Meta, Object};
pub use resource::ResourceIdentifier;
