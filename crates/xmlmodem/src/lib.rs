//! A streaming JSON to XML event transcoder.
//!
//! `xmlmodem` presents a JSON document as a sequence of XML-shaped events —
//! start/end element, attribute, namespace declaration, character data,
//! processing instruction — without ever buffering the whole document. It is
//! meant for callers that want to point XML-oriented tooling at JSON input.
//!
//! Input arrives as typed JSON tokens through the [`TokenSource`] trait
//! (tokenizing JSON text is a separate concern); output is pulled from
//! [`JsonXmlReader`], which implements [`Iterator`] over [`XmlEvent`]s.
//!
//! Field names map onto the XML model by convention: `@name` is an
//! attribute, `@xmlns` / `@xmlns:prefix` are namespace declarations (also
//! accepted badgerfish-style, grouped under an `@xmlns` object), `$` is
//! character data, and everything else is an element. Arrays become repeated
//! elements sharing the array's field name, optionally announced by an
//! `<?xml-multiple?>` processing instruction.
//!
//! # Examples
//!
//! ```
//! use xmlmodem::{JsonXmlReader, ReaderOptions, Token, TokenBuffer, XmlEvent};
//!
//! // {"alice": {"@id": "1", "$": "bob"}}
//! let source = TokenBuffer::new([
//!     Token::StartObject,
//!     Token::Name("alice".into()),
//!     Token::StartObject,
//!     Token::Name("@id".into()),
//!     Token::Value(Some("1".into())),
//!     Token::Name("$".into()),
//!     Token::Value(Some("bob".into())),
//!     Token::EndObject,
//!     Token::EndObject,
//! ]);
//!
//! let events = JsonXmlReader::new(source, ReaderOptions::default())
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! // <alice id="1">bob</alice>
//! assert_eq!(events.len(), 5);
//! assert!(matches!(
//!     events[1],
//!     XmlEvent::StartElement { ref name, ref attributes, .. }
//!         if name.local == "alice" && attributes.len() == 1
//! ));
//! assert!(matches!(
//!     events[2],
//!     XmlEvent::Characters { ref text } if text == "bob"
//! ));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod event;
mod name;
mod reader;
mod scope;
mod sink;
mod source;

pub use error::TranscodeError;
pub use event::{Attribute, NsDecl, QName, XmlEvent};
pub use name::{MULTIPLE_PI_TARGET, split_qualified};
pub use reader::{JsonXmlReader, ReaderOptions};
pub use source::{SourceError, Token, TokenBuffer, TokenKind, TokenSource};
