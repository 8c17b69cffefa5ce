//! Links objects.
//!
//! [`LinkSet`] collects the six navigation relations JSON:API gives special
//! meaning to (`self`, `related`, `first`, `last`, `prev`, `next`) plus any
//! number of additional links, and assembles them into a [`Links`] object.
//! An empty set assembles to nothing at all, so the parent omits its `links`
//! member instead of emitting `{}`.

use tracing::trace;

use crate::error::BuildError;
use crate::link::Link;
use crate::members::{assembled_object, non_blank, Object};
use crate::relation;

/// An assembled, non-empty links object.
#[derive(Debug, Clone, PartialEq)]
pub struct Links(Object);

assembled_object!(Links);

impl Links {
    /// Assemble a links object from links in the given order.
    ///
    /// Returns `Ok(None)` if `links` is empty. When two links share a
    /// relation the later value replaces the earlier one, keeping the first
    /// position.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if any link has an empty relation name.
    pub fn from_links<I>(links: I) -> Result<Option<Self>, BuildError>
    where
        I: IntoIterator<Item = Link>,
    {
        let mut object = Object::new();
        for link in links {
            if link.relation().is_empty() {
                return Err(BuildError::invalid(
                    "relation",
                    format!("link to \"{}\" has an empty relation", link.target()),
                ));
            }
            let (relation, value) = link.into_member();
            object.insert(relation, value);
        }

        Ok(if object.is_empty() {
            None
        } else {
            Some(Self(object))
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The link value stored for `relation`, if any.
    pub fn get(&self, relation: &str) -> Option<&serde_json::Value> {
        self.0.get(relation)
    }
}

/// Inputs for a links object: the navigation relations plus extras.
///
/// Blank navigation targets are ignored. Additional links keep the order in
/// which they were added and follow the navigation relations.
///
/// ```
/// use jsonapi_doc::{Link, LinkSet};
///
/// let links = LinkSet::new()
///     .self_link("/articles?page=2")
///     .next("/articles?page=3")
///     .link(Link::new("describedby", "/schema"))
///     .assemble()?
///     .expect("non-empty link set");
///
/// assert_eq!(
///     links.to_string(),
///     r#"{"self":"/articles?page=2","next":"/articles?page=3","describedby":"/schema"}"#
/// );
/// # Ok::<(), jsonapi_doc::BuildError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkSet {
    pub self_link: Option<String>,
    pub related: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    /// Extra links; `None` entries are skipped.
    pub additional: Vec<Option<Link>>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn self_link(mut self, target: impl Into<String>) -> Self {
        self.self_link = Some(target.into());
        self
    }

    pub fn related(mut self, target: impl Into<String>) -> Self {
        self.related = Some(target.into());
        self
    }

    pub fn first(mut self, target: impl Into<String>) -> Self {
        self.first = Some(target.into());
        self
    }

    pub fn last(mut self, target: impl Into<String>) -> Self {
        self.last = Some(target.into());
        self
    }

    pub fn prev(mut self, target: impl Into<String>) -> Self {
        self.prev = Some(target.into());
        self
    }

    pub fn next(mut self, target: impl Into<String>) -> Self {
        self.next = Some(target.into());
        self
    }

    /// Append an additional link after the navigation relations.
    pub fn link(mut self, link: Link) -> Self {
        self.additional.push(Some(link));
        self
    }

    /// Append additional links, skipping `None` entries.
    pub fn links<I>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = Option<Link>>,
    {
        self.additional.extend(links);
        self
    }

    /// True if assembling would produce no links.
    pub fn is_empty(&self) -> bool {
        self.navigation().all(|(_, target)| target.is_none())
            && self.additional.iter().all(Option::is_none)
    }

    /// The navigation relations in emission order with blank targets removed.
    fn navigation(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        [
            (relation::SELF, self.self_link.as_deref()),
            (relation::RELATED, self.related.as_deref()),
            (relation::FIRST, self.first.as_deref()),
            (relation::LAST, self.last.as_deref()),
            (relation::PREV, self.prev.as_deref()),
            (relation::NEXT, self.next.as_deref()),
        ]
        .into_iter()
        .map(|(name, target)| (name, non_blank(target)))
    }

    /// Assemble the links object, or `Ok(None)` if nothing would be emitted.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if an additional link has an empty relation name.
    pub fn assemble(&self) -> Result<Option<Links>, BuildError> {
        let navigation = self.navigation().filter_map(|(name, target)| {
            if target.is_none() {
                trace!(relation = name, "navigation link absent or blank");
            }
            target.map(|t| Link::new(name, t))
        });
        let additional = self.additional.iter().flatten().cloned();

        let links = Links::from_links(navigation.chain(additional))?;
        if links.is_none() {
            trace!("empty link set, links member omitted");
        }
        Ok(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_set_assembles_to_none() {
        assert_eq!(LinkSet::new().assemble(), Ok(None));
        assert!(LinkSet::new().is_empty());
    }

    #[test]
    fn blank_targets_and_null_extras_are_absent() {
        let set = LinkSet::new()
            .self_link("")
            .related("   ")
            .next("\t")
            .links([None, None]);
        assert!(set.is_empty());
        assert_eq!(set.assemble(), Ok(None));
    }

    #[test]
    fn navigation_order_is_fixed() {
        let links = LinkSet::new()
            .next("/n")
            .prev("/p")
            .last("/l")
            .first("/f")
            .related("/r")
            .self_link("/s")
            .assemble()
            .unwrap()
            .unwrap();
        let keys: Vec<&str> = links.as_object().keys().map(String::as_str).collect();
        assert_eq!(keys, ["self", "related", "first", "last", "prev", "next"]);
    }

    #[test]
    fn additional_links_follow_in_supplied_order() {
        let links = LinkSet::new()
            .link(Link::new("zeta", "/z"))
            .self_link("/s")
            .links([None, Some(Link::new("alpha", "/a"))])
            .assemble()
            .unwrap()
            .unwrap();
        let keys: Vec<&str> = links.as_object().keys().map(String::as_str).collect();
        assert_eq!(keys, ["self", "zeta", "alpha"]);
    }

    #[test]
    fn additional_link_with_meta_keeps_object_form() {
        let mut meta = crate::members::Meta::new();
        meta.insert("count".into(), json!(10));
        let links = LinkSet::new()
            .link(Link::new("describedby", "/schema").with_meta(meta))
            .assemble()
            .unwrap()
            .unwrap();
        assert_eq!(
            links.into_value(),
            json!({"describedby": {"href": "/schema", "meta": {"count": 10}}})
        );
    }

    #[test]
    fn duplicate_relation_keeps_last_value() {
        let links = LinkSet::new()
            .self_link("/first")
            .link(Link::new("self", "/second"))
            .assemble()
            .unwrap()
            .unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links.get("self"), Some(&json!("/second")));
    }

    #[test]
    fn empty_relation_is_rejected() {
        let err = LinkSet::new()
            .self_link("/s")
            .link(Link::new("", "/x"))
            .assemble()
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidArgument {
                argument: "relation",
                ..
            }
        ));
    }

    #[test]
    fn from_links_of_nothing_is_none() {
        assert_eq!(Links::from_links(Vec::new()), Ok(None));
    }
}
