//! Qualified-name splitting and the reserved JSON field names.

/// Field-name prefix marking an attribute or namespace declaration.
pub(crate) const ATTRIBUTE_SIGIL: char = '@';

/// Field name holding an element's character data.
pub(crate) const TEXT_SIGIL: &str = "$";

/// The reserved `xmlns` attribute name.
pub(crate) const XMLNS: &str = "xmlns";

/// Target of the processing instruction emitted at array starts when
/// multiple-element signaling is enabled, as in `<?xml-multiple item?>`.
pub const MULTIPLE_PI_TARGET: &str = "xml-multiple";

/// Splits a qualified field name into `(prefix, local_name)` at the first
/// occurrence of `separator`.
///
/// A name without the separator belongs to the default namespace: the prefix
/// is empty and the local name is the input, unchanged.
///
/// # Examples
///
/// ```
/// use xmlmodem::split_qualified;
///
/// assert_eq!(split_qualified("ns:alice", ':'), ("ns", "alice"));
/// assert_eq!(split_qualified("alice", ':'), ("", "alice"));
/// ```
#[must_use]
pub fn split_qualified(name: &str, separator: char) -> (&str, &str) {
    match name.split_once(separator) {
        Some((prefix, local)) => (prefix, local),
        None => ("", name),
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::split_qualified;

    #[test]
    fn splits_at_first_separator() {
        assert_eq!(split_qualified("a:b:c", ':'), ("a", "b:c"));
    }

    #[test]
    fn custom_separator() {
        assert_eq!(split_qualified("ns.alice", '.'), ("ns", "alice"));
        assert_eq!(split_qualified("ns:alice", '.'), ("", "ns:alice"));
    }

    #[test]
    fn empty_name() {
        assert_eq!(split_qualified("", ':'), ("", ""));
    }

    #[test]
    fn leading_separator_yields_empty_prefix() {
        assert_eq!(split_qualified(":alice", ':'), ("", "alice"));
    }

    #[quickcheck]
    fn no_separator_returns_default_prefix(name: String) -> TestResult {
        if name.contains(':') {
            return TestResult::discard();
        }
        let (prefix, local) = split_qualified(&name, ':');
        TestResult::from_bool(prefix.is_empty() && local == name)
    }
}
