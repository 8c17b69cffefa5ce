//! Registered link relation types.
//!
//! The IANA registry seeded by RFC 5988 section 6.2.2. These are plain names;
//! any string is accepted wherever a relation is expected.

/// Designates a substitute for the link's context.
///
/// Reference: W3C.REC-html401-19991224.
pub const ALTERNATE: &str = "alternate";

/// Refers to an appendix.
///
/// Reference: W3C.REC-html401-19991224.
pub const APPENDIX: &str = "appendix";

/// Refers to a bookmark or entry point.
///
/// Reference: W3C.REC-html401-19991224.
pub const BOOKMARK: &str = "bookmark";

/// Refers to a chapter in a collection of resources.
///
/// Reference: W3C.REC-html401-19991224.
pub const CHAPTER: &str = "chapter";

/// Refers to a table of contents.
///
/// Reference: W3C.REC-html401-19991224.
pub const CONTENTS: &str = "contents";

/// Refers to a copyright statement that applies to the link's context.
///
/// Reference: W3C.REC-html401-19991224.
pub const COPYRIGHT: &str = "copyright";

/// Refers to a resource containing the most recent item(s) in a collection of resources.
///
/// Reference: RFC5005.
pub const CURRENT: &str = "current";

/// Refers to a resource providing information about the link's context.
pub const DESCRIBEDBY: &str = "describedby";

/// Refers to a resource that can be used to edit the link's context.
///
/// Reference: RFC5023.
pub const EDIT: &str = "edit";

/// Refers to a resource that can be used to edit media associated with the link's context.
///
/// Reference: RFC5023.
pub const EDIT_MEDIA: &str = "edit-media";

/// Identifies a related resource that is potentially large and might require special handling.
///
/// Reference: RFC4287.
pub const ENCLOSURE: &str = "enclosure";

/// An IRI that refers to the furthest preceding resource in a series of resources.
///
/// Reference: RFC5988.
pub const FIRST: &str = "first";

/// Refers to a glossary of terms.
///
/// Reference: W3C.REC-html401-19991224.
pub const GLOSSARY: &str = "glossary";

/// Refers to a resource offering help (more information, links to other sources information, etc.).
///
/// Reference: W3C.REC-html401-19991224.
pub const HELP: &str = "help";

/// Refers to a hub that enables registration for notification of updates to the context.
pub const HUB: &str = "hub";

/// Refers to an index.
///
/// Reference: W3C.REC-html401-19991224.
pub const INDEX: &str = "index";

/// An IRI that refers to the furthest following resource in a series of resources.
///
/// Reference: RFC5988.
pub const LAST: &str = "last";

/// Points to a resource containing the latest (e.g., current) version of the context.
///
/// Reference: RFC5829.
pub const LATEST_VERSION: &str = "latest-version";

/// Refers to a license associated with the link's context.
///
/// Reference: RFC4946.
pub const LICENSE: &str = "license";

/// Refers to the next resource in an ordered series of resources.
///
/// Reference: W3C.REC-html401-19991224.
pub const NEXT: &str = "next";

/// Refers to the immediately following archive resource.
///
/// Reference: RFC5005.
pub const NEXT_ARCHIVE: &str = "next-archive";

/// Indicates a resource where payment is accepted.
///
/// Reference: RFC5988.
pub const PAYMENT: &str = "payment";

/// Refers to the previous resource in an ordered series of resources. Synonym for "previous".
///
/// Reference: W3C.REC-html401-19991224.
pub const PREV: &str = "prev";

/// Points to a resource containing the predecessor version in the version history.
///
/// Reference: RFC5829.
pub const PREDECESSOR_VERSION: &str = "predecessor-version";

/// Refers to the previous resource in an ordered series of resources. Synonym for "prev".
///
/// Reference: W3C.REC-html401-19991224.
pub const PREVIOUS: &str = "previous";

/// Refers to the immediately preceding archive resource.
///
/// Reference: RFC5005.
pub const PREV_ARCHIVE: &str = "prev-archive";

/// Identifies a related resource.
///
/// Reference: RFC4287.
pub const RELATED: &str = "related";

/// Identifies a resource that is a reply to the context of the link.
///
/// Reference: RFC4685.
pub const REPLIES: &str = "replies";

/// Refers to a section in a collection of resources.
///
/// Reference: W3C.REC-html401-19991224.
pub const SECTION: &str = "section";

/// Conveys an identifier for the link's context.
///
/// Reference: RFC4287.
pub const SELF: &str = "self";

/// Indicates a URI that can be used to retrieve a service document.
///
/// Reference: RFC5023.
pub const SERVICE: &str = "service";

/// Refers to the first resource in a collection of resources.
///
/// Reference: W3C.REC-html401-19991224.
pub const START: &str = "start";

/// Refers to an external style sheet.
///
/// Reference: W3C.REC-html401-19991224.
pub const STYLESHEET: &str = "stylesheet";

/// Refers to a resource serving as a subsection in a collection of resources.
///
/// Reference: W3C.REC-html401-19991224.
pub const SUBSECTION: &str = "subsection";

/// Points to a resource containing the successor version in the version history.
///
/// Reference: RFC5829.
pub const SUCCESSOR_VERSION: &str = "successor-version";

/// Refers to a parent document in a hierarchy of documents.
///
/// Reference: RFC5988.
pub const UP: &str = "up";

/// Points to a resource containing the version history for the context.
///
/// Reference: RFC5829.
pub const VERSION_HISTORY: &str = "version-history";

/// Identifies a resource that is the source of the information in the link's context.
///
/// Reference: RFC4287.
pub const VIA: &str = "via";

/// Points to a working copy for this resource.
///
/// Reference: RFC5829.
pub const WORKING_COPY: &str = "working-copy";

/// Points to the versioned resource from which this working copy was obtained.
///
/// Reference: RFC5829.
pub const WORKING_COPY_OF: &str = "working-copy-of";

/// Every registered relation name, in registry order.
pub const ALL: &[&str] = &[
    ALTERNATE,
    APPENDIX,
    BOOKMARK,
    CHAPTER,
    CONTENTS,
    COPYRIGHT,
    CURRENT,
    DESCRIBEDBY,
    EDIT,
    EDIT_MEDIA,
    ENCLOSURE,
    FIRST,
    GLOSSARY,
    HELP,
    HUB,
    INDEX,
    LAST,
    LATEST_VERSION,
    LICENSE,
    NEXT,
    NEXT_ARCHIVE,
    PAYMENT,
    PREV,
    PREDECESSOR_VERSION,
    PREVIOUS,
    PREV_ARCHIVE,
    RELATED,
    REPLIES,
    SECTION,
    SELF,
    SERVICE,
    START,
    STYLESHEET,
    SUBSECTION,
    SUCCESSOR_VERSION,
    UP,
    VERSION_HISTORY,
    VIA,
    WORKING_COPY,
    WORKING_COPY_OF,
];

/// Returns true if `name` is a registered relation type.
///
/// Registered names are lowercase; comparison is ASCII case-insensitive.
pub fn is_registered(name: &str) -> bool {
    ALL.iter().any(|r| r.eq_ignore_ascii_case(name))
}
