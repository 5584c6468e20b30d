//! XML-shaped events produced by the transcoder.
//!
//! [`XmlEvent`] enumerates the reader outputs: document boundaries, element
//! start/end tags (with their attributes and namespace declarations already
//! merged in), character data, and processing instructions.
//!
//! # Examples
//!
//! ```
//! use xmlmodem::{JsonXmlReader, QName, ReaderOptions, Token, TokenBuffer, XmlEvent};
//!
//! let source = TokenBuffer::new([
//!     Token::StartObject,
//!     Token::Name("alice".into()),
//!     Token::Value(Some("bob".into())),
//!     Token::EndObject,
//! ]);
//! let events = JsonXmlReader::new(source, ReaderOptions::default())
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(
//!     events,
//!     vec![
//!         XmlEvent::StartDocument,
//!         XmlEvent::StartElement {
//!             name: QName::new("", "alice"),
//!             attributes: vec![],
//!             namespaces: vec![],
//!         },
//!         XmlEvent::Characters {
//!             text: "bob".to_string(),
//!         },
//!         XmlEvent::EndElement {
//!             name: QName::new("", "alice"),
//!         },
//!         XmlEvent::EndDocument,
//!     ]
//! );
//! ```

use alloc::{string::String, vec::Vec};
use core::fmt;

/// A qualified XML name: a namespace prefix and a local name.
///
/// An empty prefix denotes the default namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QName {
    /// Namespace prefix; empty for the default namespace.
    pub prefix: String,
    /// Local part of the name.
    pub local: String,
}

impl QName {
    /// Creates a qualified name from a prefix and a local name.
    pub fn new(prefix: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            local: local.into(),
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix.is_empty() {
            f.write_str(&self.local)
        } else {
            write!(f, "{}:{}", self.prefix, self.local)
        }
    }
}

/// One attribute attached to a start-element event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    /// Attribute name.
    pub name: QName,
    /// Attribute value.
    pub value: String,
}

/// A namespace declaration attached to a start-element event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NsDecl {
    /// Declared prefix; empty for the default namespace.
    pub prefix: String,
    /// Namespace URI.
    pub uri: String,
}

/// One XML-shaped event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum XmlEvent {
    /// Start of a document.
    StartDocument,
    /// End of a document.
    EndDocument,
    /// An element start tag, with all attributes and namespace declarations
    /// that belong to it.
    StartElement {
        /// Element name.
        name: QName,
        /// Attributes, in source order.
        attributes: Vec<Attribute>,
        /// Namespace declarations, in source order.
        namespaces: Vec<NsDecl>,
    },
    /// An element end tag.
    EndElement {
        /// Element name, matching the corresponding start tag.
        name: QName,
    },
    /// Character data.
    Characters {
        /// The text content.
        text: String,
    },
    /// A processing instruction, e.g. the `xml-multiple` array-start signal.
    ProcessingInstruction {
        /// PI target.
        target: String,
        /// PI data, if any.
        data: Option<String>,
    },
}
