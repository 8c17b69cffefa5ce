//! Home documents for API discovery.
//!
//! A home document lists an API's entry points under `resources`, keyed by
//! link relation type, and may describe the API itself under `api`:
//!
//! ```json
//! {
//!   "resources": {
//!     "author": { "href": "/authors" },
//!     "widget": {
//!       "hrefTemplate": "/widgets/{widget_id}",
//!       "hrefVars": { "widget_id": "https://example.org/param/widget" }
//!     }
//!   },
//!   "api": { "title": "Widget API", "links": { "license": "/license" } }
//! }
//! ```

use serde_json::Value;

use crate::error::BuildError;
use crate::link::Link;
use crate::links::Links;
use crate::members::{assemble, assembled_object, non_blank, Object};

/// How to reach one resource: a direct `href`, or a URI template plus the
/// variables it expands.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceDescriptor(Object);

assembled_object!(ResourceDescriptor);

impl ResourceDescriptor {
    /// A resource reached at a fixed URI.
    pub fn direct(href: impl Into<String>) -> Self {
        Self(assemble([("href", Some(Value::String(href.into())))]))
    }

    /// A resource reached by expanding `href_template` with `href_vars`,
    /// each variable mapped to a URI describing it.
    ///
    /// # Errors
    ///
    /// `ArgumentRequired` if `href_vars` is empty.
    pub fn template<I, K, V>(
        href_template: impl Into<String>,
        href_vars: I,
    ) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: Object = href_vars
            .into_iter()
            .map(|(name, uri)| (name.into(), Value::String(uri.into())))
            .collect();
        if vars.is_empty() {
            return Err(BuildError::required("hrefVars"));
        }

        Ok(Self(assemble([
            ("hrefTemplate", Some(Value::String(href_template.into()))),
            ("hrefVars", Some(Value::Object(vars))),
        ])))
    }

    /// True for templated descriptors.
    pub fn is_template(&self) -> bool {
        self.0.contains_key("hrefTemplate")
    }
}

/// The `api` member of a home document: an optional title and links.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeApi(Object);

assembled_object!(HomeApi);

impl HomeApi {
    /// Blank titles are omitted, as is an empty set of links.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if a link has an empty relation name.
    pub fn build<I>(title: Option<&str>, links: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = Link>,
    {
        let links = Links::from_links(links)?;
        Ok(Self(assemble([
            ("title", title_value(title)),
            ("links", links.map(Value::from)),
        ])))
    }

    pub fn title(title: &str) -> Self {
        Self(assemble([("title", title_value(Some(title)))]))
    }
}

fn title_value(title: Option<&str>) -> Option<Value> {
    non_blank(title).map(|t| Value::String(t.to_string()))
}

/// An assembled home document.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeDocument(Object);

assembled_object!(HomeDocument);

impl HomeDocument {
    pub fn builder() -> HomeDocumentBuilder {
        HomeDocumentBuilder::default()
    }
}

/// Builder for [`HomeDocument`].
///
/// ```
/// use jsonapi_doc::{relation, HomeDocument, ResourceDescriptor};
///
/// let home = HomeDocument::builder()
///     .resource(relation::INDEX, ResourceDescriptor::direct("/widgets"))
///     .build()
///     .unwrap();
///
/// assert_eq!(home.to_string(), r#"{"resources":{"index":{"href":"/widgets"}}}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeDocumentBuilder {
    pub resources: Vec<(String, ResourceDescriptor)>,
    pub api: Option<HomeApi>,
}

impl HomeDocumentBuilder {
    /// Add an entry point under `relation`. A repeated relation replaces
    /// the earlier descriptor in place.
    pub fn resource(mut self, relation: impl Into<String>, descriptor: ResourceDescriptor) -> Self {
        self.resources.push((relation.into(), descriptor));
        self
    }

    pub fn api(mut self, api: HomeApi) -> Self {
        self.api = Some(api);
        self
    }

    /// Assemble the home document.
    ///
    /// # Errors
    ///
    /// - `ArgumentRequired` if no resources were added.
    /// - `InvalidArgument` if a resource was added under an empty relation.
    pub fn build(self) -> Result<HomeDocument, BuildError> {
        if self.resources.is_empty() {
            return Err(BuildError::required("resources"));
        }
        if let Some((_, descriptor)) = self.resources.iter().find(|(rel, _)| rel.is_empty()) {
            return Err(BuildError::invalid(
                "relation",
                format!("resource {} has an empty relation", descriptor),
            ));
        }

        let resources: Object = self
            .resources
            .into_iter()
            .map(|(relation, descriptor)| (relation, Value::from(descriptor)))
            .collect();

        Ok(HomeDocument(assemble([
            ("resources", Some(Value::Object(resources))),
            ("api", self.api.map(Value::from)),
        ])))
    }
}
