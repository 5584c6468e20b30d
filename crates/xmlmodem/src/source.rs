//! The JSON token stream consumed by the transcoder.
//!
//! A [`TokenSource`] yields typed tokens (object/array boundaries, field
//! names, scalar values) with exactly one token of lookahead via
//! [`TokenSource::peek`]. Producing the tokens — i.e. tokenizing JSON text —
//! is a separate concern; this crate only defines the contract plus
//! [`TokenBuffer`], an in-memory source over a pre-built token sequence.

use alloc::{
    collections::VecDeque,
    format,
    string::String,
};

use thiserror::Error;

/// The kind of the next token in a source, as reported by
/// [`TokenSource::peek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// An object field name.
    Name,
    /// Start of a JSON object (`{`).
    StartObject,
    /// End of a JSON object (`}`).
    EndObject,
    /// Start of a JSON array (`[`).
    StartArray,
    /// End of a JSON array (`]`).
    EndArray,
    /// A scalar value (string, number, boolean or null).
    Value,
    /// End of input.
    Eof,
}

/// One owned token from a JSON-shaped stream.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// An object field name.
    Name(String),
    /// A scalar value; `None` is an explicit JSON null.
    Value(Option<String>),
    /// Start of a JSON object.
    StartObject,
    /// End of a JSON object.
    EndObject,
    /// Start of a JSON array.
    StartArray,
    /// End of a JSON array.
    EndArray,
}

impl Token {
    /// The [`TokenKind`] this token peeks as.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Name(_) => TokenKind::Name,
            Token::Value(_) => TokenKind::Value,
            Token::StartObject => TokenKind::StartObject,
            Token::EndObject => TokenKind::EndObject,
            Token::StartArray => TokenKind::StartArray,
            Token::EndArray => TokenKind::EndArray,
        }
    }
}

/// An error from a [`TokenSource`].
///
/// Carries the failure of whatever sits underneath the source (I/O, a
/// misbehaving tokenizer, a consuming call that did not match the next
/// token). Close-time failures surface through the same type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{msg}")]
pub struct SourceError {
    msg: String,
}

impl SourceError {
    /// Creates a source error with the given message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// A lazily-advancing stream of JSON tokens.
///
/// The consuming calls (`name`, `value`, `start_object`, ...) each consume
/// exactly one token and fail if the next token is not of the requested
/// kind; callers are expected to [`peek`](TokenSource::peek) first.
pub trait TokenSource {
    /// Non-consuming lookahead of exactly one token kind.
    fn peek(&mut self) -> Result<TokenKind, SourceError>;

    /// Consumes a [`TokenKind::Name`] token, returning the field name.
    fn name(&mut self) -> Result<String, SourceError>;

    /// Consumes a [`TokenKind::Value`] token. `None` is an explicit null.
    fn value(&mut self) -> Result<Option<String>, SourceError>;

    /// Consumes a [`TokenKind::StartObject`] token.
    fn start_object(&mut self) -> Result<(), SourceError>;

    /// Consumes a [`TokenKind::EndObject`] token.
    fn end_object(&mut self) -> Result<(), SourceError>;

    /// Consumes a [`TokenKind::StartArray`] token.
    fn start_array(&mut self) -> Result<(), SourceError>;

    /// Consumes a [`TokenKind::EndArray`] token.
    fn end_array(&mut self) -> Result<(), SourceError>;

    /// Releases underlying resources. Errors are reported, not swallowed.
    fn close(&mut self) -> Result<(), SourceError>;
}

/// An in-memory [`TokenSource`] over a pre-built token sequence.
///
/// # Examples
///
/// ```
/// use xmlmodem::{Token, TokenBuffer, TokenKind, TokenSource};
///
/// let mut source = TokenBuffer::new([Token::StartObject, Token::EndObject]);
/// assert_eq!(source.peek().unwrap(), TokenKind::StartObject);
/// source.start_object().unwrap();
/// source.end_object().unwrap();
/// assert_eq!(source.peek().unwrap(), TokenKind::Eof);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenBuffer {
    tokens: VecDeque<Token>,
}

impl TokenBuffer {
    /// Creates a buffer over the given tokens.
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Appends one token to the back of the buffer.
    pub fn push(&mut self, token: Token) {
        self.tokens.push_back(token);
    }

    fn take(&mut self, kind: TokenKind) -> Result<Token, SourceError> {
        match self.tokens.pop_front() {
            Some(token) if token.kind() == kind => Ok(token),
            Some(token) => Err(SourceError::new(format!(
                "expected {kind:?} token, found {:?}",
                token.kind()
            ))),
            None => Err(SourceError::new(format!(
                "expected {kind:?} token, found end of input"
            ))),
        }
    }
}

impl FromIterator<Token> for TokenBuffer {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl TokenSource for TokenBuffer {
    fn peek(&mut self) -> Result<TokenKind, SourceError> {
        Ok(self.tokens.front().map_or(TokenKind::Eof, Token::kind))
    }

    fn name(&mut self) -> Result<String, SourceError> {
        match self.take(TokenKind::Name)? {
            Token::Name(name) => Ok(name),
            _ => unreachable!("take checked the kind"),
        }
    }

    fn value(&mut self) -> Result<Option<String>, SourceError> {
        match self.take(TokenKind::Value)? {
            Token::Value(value) => Ok(value),
            _ => unreachable!("take checked the kind"),
        }
    }

    fn start_object(&mut self) -> Result<(), SourceError> {
        self.take(TokenKind::StartObject).map(|_| ())
    }

    fn end_object(&mut self) -> Result<(), SourceError> {
        self.take(TokenKind::EndObject).map(|_| ())
    }

    fn start_array(&mut self) -> Result<(), SourceError> {
        self.take(TokenKind::StartArray).map(|_| ())
    }

    fn end_array(&mut self) -> Result<(), SourceError> {
        self.take(TokenKind::EndArray).map(|_| ())
    }

    fn close(&mut self) -> Result<(), SourceError> {
        self.tokens.clear();
        Ok(())
    }
}
