//! The JSON-to-XML transcoding state machine.
//!
//! [`JsonXmlReader`] pulls tokens from a [`TokenSource`] one at a time and
//! maps them onto XML-shaped events: objects become elements, `@`-prefixed
//! fields become attributes or namespace declarations, `$` fields become
//! character data, and arrays become repeated same-named elements.
//!
//! Mixed content (text interleaved with sibling elements) is not supported,
//! and element/attribute names are passed through without XML name
//! validation.
//!
//! # Examples
//!
//! ```
//! use xmlmodem::{JsonXmlReader, ReaderOptions, Token, TokenBuffer, XmlEvent};
//!
//! let source = TokenBuffer::new([
//!     Token::StartObject,
//!     Token::Name("item".into()),
//!     Token::StartArray,
//!     Token::Value(Some("1".into())),
//!     Token::Value(Some("2".into())),
//!     Token::EndArray,
//!     Token::EndObject,
//! ]);
//! let options = ReaderOptions {
//!     multiple_pi: true,
//!     ..ReaderOptions::default()
//! };
//! let events = JsonXmlReader::new(source, options)
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert!(matches!(
//!     events[1],
//!     XmlEvent::ProcessingInstruction { ref target, .. } if target == "xml-multiple"
//! ));
//! ```

use alloc::string::String;

use crate::{
    error::TranscodeError,
    event::{QName, XmlEvent},
    name::{self, ATTRIBUTE_SIGIL, MULTIPLE_PI_TARGET, TEXT_SIGIL, XMLNS},
    scope::ScopeStack,
    sink::EventSink,
    source::{TokenKind, TokenSource},
};

/// Configuration for a [`JsonXmlReader`], supplied at construction.
#[derive(Debug, Clone, Copy)]
pub struct ReaderOptions {
    /// Whether to emit an `<?xml-multiple element-name?>` processing
    /// instruction at each array start, so consumers can distinguish "one
    /// element" from "the start of a repeatable group" without lookahead.
    ///
    /// Default: `false`.
    pub multiple_pi: bool,

    /// The character separating a namespace prefix from the local name in
    /// qualified JSON field names.
    ///
    /// Default: `':'`.
    pub namespace_separator: char,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            multiple_pi: false,
            namespace_separator: ':',
        }
    }
}

/// A pull reader presenting a JSON token stream as XML events.
///
/// The reader is single-pass and resumable: each [`Iterator::next`] call
/// consumes just enough tokens to produce the next event. The whole document
/// is never buffered. The first error is terminal — it is yielded once and
/// the iterator then ends.
pub struct JsonXmlReader<S: TokenSource> {
    source: S,
    multiple_pi: bool,
    namespace_separator: char,
    scopes: ScopeStack,
    sink: EventSink,
    /// Set when the whole document is a bare top-level array; the matching
    /// root array end then signals end of stream instead of an object end.
    document_array: bool,
    finished: bool,
}

impl<S: TokenSource> JsonXmlReader<S> {
    /// Creates a reader over the given token source.
    pub fn new(source: S, options: ReaderOptions) -> Self {
        Self {
            source,
            multiple_pi: options.multiple_pi,
            namespace_separator: options.namespace_separator,
            scopes: ScopeStack::new(),
            sink: EventSink::new(),
            document_array: false,
            finished: false,
        }
    }

    /// Releases the token source. A release failure surfaces as
    /// [`TranscodeError::Source`], never silently discarded.
    pub fn close(mut self) -> Result<(), TranscodeError> {
        self.source.close()?;
        Ok(())
    }

    /// Advances the transcoder until it has either queued new events or
    /// reached end of stream, consuming as many tokens as that takes.
    ///
    /// Returns `false` once the stream is exhausted. A `true` return does not
    /// guarantee an event was queued: array ends perform only scope
    /// bookkeeping. The [`Iterator`] implementation drives this and is the
    /// intended way to consume the reader.
    pub fn produce_next_event(&mut self) -> Result<bool, TranscodeError> {
        loop {
            match self.source.peek()? {
                TokenKind::Name => self.consume_name()?,
                TokenKind::StartArray => {
                    self.source.start_array()?;
                    if self.scopes.current().is_array() {
                        return Err(TranscodeError::NestedArray);
                    }
                    if self.scopes.at_root()
                        && !self.sink.start_document_read()
                        && !self.document_array
                    {
                        // The whole document is a bare top-level array.
                        self.document_array = true;
                        if self.multiple_pi {
                            self.sink.read_pi(MULTIPLE_PI_TARGET, None);
                        }
                    } else {
                        let element_name = self
                            .scopes
                            .current_mut()
                            .pending_tag_name
                            .take()
                            .ok_or(TranscodeError::MissingName)?;
                        if self.multiple_pi {
                            self.sink
                                .read_pi(MULTIPLE_PI_TARGET, Some(element_name.clone()));
                        }
                        self.scopes.current_mut().start_array(element_name);
                    }
                }
                TokenKind::StartObject => {
                    self.source.start_object()?;
                    if self.scopes.at_root() && !self.sink.start_document_read() {
                        self.sink.read_start_document();
                    } else {
                        let element_name = {
                            let scope = self.scopes.current_mut();
                            if let Some(array) = scope.array.as_mut() {
                                array.size += 1;
                            }
                            scope
                                .pending_tag_name
                                .take()
                                .or_else(|| scope.array.as_ref().map(|a| a.element_name.clone()))
                        };
                        let Some(element_name) = element_name else {
                            return Err(TranscodeError::MissingName);
                        };
                        self.read_start_element_tag(&element_name);
                        self.scopes.push();
                    }
                }
                TokenKind::EndObject => {
                    self.source.end_object()?;
                    if self.scopes.at_root() {
                        if !self.sink.start_document_read() {
                            return Err(TranscodeError::UnmatchedObjectEnd);
                        }
                        self.sink.read_end_document();
                        // In a document array the matching root array end is
                        // still outstanding.
                        return Ok(self.document_array);
                    }
                    self.sink.read_end_element_tag();
                    self.scopes.pop();
                    return Ok(true);
                }
                TokenKind::Value => {
                    let text = self.source.value()?;
                    if self.scopes.at_root() && !self.sink.start_document_read() {
                        // A document that is a single JSON primitive: bare
                        // character data, no wrapping element.
                        if let Some(text) = text {
                            self.sink.read_data(text);
                        }
                        return Ok(true);
                    }
                    let element_name = {
                        let scope = self.scopes.current_mut();
                        // While an array is open its element name wins over
                        // any leftover field name.
                        if let Some(array) = scope.array.as_mut() {
                            array.size += 1;
                            Some(array.element_name.clone())
                        } else {
                            scope.pending_tag_name.take()
                        }
                    };
                    let Some(element_name) = element_name else {
                        return Err(TranscodeError::MissingName);
                    };
                    self.read_start_element_tag(&element_name);
                    if let Some(text) = text {
                        self.sink.read_data(text);
                    }
                    self.sink.read_end_element_tag();
                    return Ok(true);
                }
                TokenKind::EndArray => {
                    self.source.end_array()?;
                    // An open element array always closes first; only a
                    // bracket with no array scope active can be the one
                    // closing a document array.
                    if self.scopes.current().is_array() {
                        self.scopes.current_mut().end_array();
                        return Ok(true);
                    }
                    if self.scopes.at_root() && self.document_array {
                        return Ok(false);
                    }
                    return Err(TranscodeError::UnmatchedArrayEnd);
                }
                TokenKind::Eof => return Ok(false),
            }
        }
    }

    /// Handles one field name. Never produces an externally visible event by
    /// itself, so the caller loops to the next token afterwards.
    fn consume_name(&mut self) -> Result<(), TranscodeError> {
        let field = self.source.name()?;
        if let Some(rest) = field.strip_prefix(ATTRIBUTE_SIGIL) {
            let next = self.source.peek()?;
            if next == TokenKind::Value {
                let value = self.source.value()?.unwrap_or_default();
                self.read_attr_ns_decl(rest, value)?;
            } else if rest == XMLNS && next == TokenKind::StartObject {
                self.read_ns_decl_object()?;
            } else {
                return Err(TranscodeError::InvalidAttributeValue);
            }
        } else if field == TEXT_SIGIL {
            if let Some(text) = self.source.value()? {
                self.sink.read_data(text);
            }
        } else {
            self.scopes.current_mut().pending_tag_name = Some(field);
        }
        Ok(())
    }

    /// Classifies an attribute-sigil field as an attribute or a namespace
    /// declaration and emits it.
    ///
    /// Precedence is deliberate: a separator-free name must be exactly
    /// `xmlns` to declare the default namespace, while a separated name must
    /// carry the literal `xmlns` prefix to declare a named one. Everything
    /// else is a plain attribute.
    fn read_attr_ns_decl(&mut self, field: &str, value: String) -> Result<(), TranscodeError> {
        let separator = self.namespace_separator;
        match field.find(separator) {
            None if field == XMLNS => self.sink.read_ns_decl("", value),
            None => self.sink.read_attr(QName::new("", field), value),
            Some(at) if &field[..at] == XMLNS => {
                self.sink.read_ns_decl(&field[at + separator.len_utf8()..], value)
            }
            Some(at) => self.sink.read_attr(
                QName::new(&field[..at], &field[at + separator.len_utf8()..]),
                value,
            ),
        }
    }

    /// Reads a badgerfish-style `@xmlns` object, emitting one namespace
    /// declaration per name/value pair. A name of `$` declares the default
    /// namespace.
    fn read_ns_decl_object(&mut self) -> Result<(), TranscodeError> {
        self.source.start_object()?;
        while self.source.peek()? == TokenKind::Name {
            let prefix = self.source.name()?;
            let uri = self.source.value()?.unwrap_or_default();
            if prefix == TEXT_SIGIL {
                self.sink.read_ns_decl("", uri)?;
            } else {
                self.sink.read_ns_decl(&prefix, uri)?;
            }
        }
        self.source.end_object()?;
        Ok(())
    }

    fn read_start_element_tag(&mut self, field: &str) {
        let (prefix, local) = name::split_qualified(field, self.namespace_separator);
        self.sink.read_start_element_tag(QName::new(prefix, local));
    }
}

impl<S: TokenSource> Iterator for JsonXmlReader<S> {
    type Item = Result<XmlEvent, TranscodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.sink.pop_event() {
                return Some(Ok(event));
            }
            if self.finished {
                return None;
            }
            match self.produce_next_event() {
                Ok(true) => {}
                Ok(false) => self.finished = true,
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
