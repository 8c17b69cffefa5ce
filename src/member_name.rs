//! Member name legality (<https://jsonapi.org/format/#document-member-names>).
//!
//! Nothing in the assemblers calls this on their own keys. It is exposed for
//! callers that want to police custom `meta` or attribute keys before
//! inserting them, and it drives the `E002` lint rule.

/// Returns true if `name` is a legal JSON:API member name.
///
/// Accepts `&str` or `Option<&str>`; `None` is never valid.
///
/// - empty names are invalid
/// - names of one or two characters may only contain globally allowed characters
/// - longer names must start and end with a globally allowed character, and
///   may additionally contain `-`, `_` or space in between
///
/// ```
/// use jsonapi_doc::member_name;
///
/// assert!(member_name::is_valid("first-name"));
/// assert!(!member_name::is_valid("-name"));
/// assert!(!member_name::is_valid(None));
/// ```
pub fn is_valid<'a>(name: impl Into<Option<&'a str>>) -> bool {
    let Some(name) = name.into() else {
        return false;
    };

    let chars: Vec<char> = name.chars().collect();
    match chars.as_slice() {
        [] => false,
        [only] => is_globally_allowed(*only),
        [first, second] => is_globally_allowed(*first) && is_globally_allowed(*second),
        [first, interior @ .., last] => {
            is_globally_allowed(*first)
                && is_globally_allowed(*last)
                && interior.iter().copied().all(is_allowed)
        }
    }
}

/// Characters permitted anywhere in a member name: ASCII letters and digits,
/// plus any code point above U+0080.
pub fn is_globally_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c > '\u{80}'
}

/// Characters permitted between the first and last character.
pub fn is_allowed(c: char) -> bool {
    matches!(c, '-' | '_' | ' ') || is_globally_allowed(c)
}
