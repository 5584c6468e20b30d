use thiserror::Error;

use crate::source::SourceError;

/// Errors produced while transcoding a JSON token stream into XML events.
///
/// Every error is fatal to the transcoding operation: the underlying token
/// stream has already been partially consumed and cannot be rewound, so the
/// reader yields the error once and then ends.
///
/// There is no "unexpected token kind" variant — [`TokenKind`] is a closed
/// enum and the state machine matches it exhaustively, so an unsupported kind
/// cannot reach the transcoder.
///
/// [`TokenKind`]: crate::TokenKind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscodeError {
    /// An array was opened while the enclosing scope is already an array.
    /// Arrays may not nest directly without an intervening object.
    #[error("array start inside array")]
    NestedArray,

    /// An array was closed with no matching array start.
    #[error("array end without matching start")]
    UnmatchedArrayEnd,

    /// An object was closed with no matching object start.
    #[error("object end without matching start")]
    UnmatchedObjectEnd,

    /// An array or object was opened in a scope with no pending field name to
    /// derive an element name from.
    #[error("element name missing")]
    MissingName,

    /// An attribute-sigil field (`@...`) was followed by something other than
    /// a scalar value or an `@xmlns` namespace-declaration object.
    #[error("expected attribute value")]
    InvalidAttributeValue,

    /// An attribute or namespace declaration appeared with no element start
    /// to attach it to.
    #[error("attribute outside element")]
    AttributeOutsideElement,

    /// The underlying token source failed, either while producing tokens or
    /// while releasing its resources on close.
    #[error("token source error: {0}")]
    Source(#[from] SourceError),
}
