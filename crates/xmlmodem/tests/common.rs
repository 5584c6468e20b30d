#![allow(dead_code)]
#![allow(missing_docs)]

use xmlmodem::{
    JsonXmlReader, QName, ReaderOptions, Token, TokenBuffer, TranscodeError, XmlEvent,
};

pub fn name(s: &str) -> Token {
    Token::Name(s.into())
}

pub fn value(s: &str) -> Token {
    Token::Value(Some(s.into()))
}

pub fn null() -> Token {
    Token::Value(None)
}

pub fn transcode(
    tokens: impl IntoIterator<Item = Token>,
) -> Result<Vec<XmlEvent>, TranscodeError> {
    transcode_with(tokens, ReaderOptions::default())
}

pub fn transcode_with(
    tokens: impl IntoIterator<Item = Token>,
    options: ReaderOptions,
) -> Result<Vec<XmlEvent>, TranscodeError> {
    JsonXmlReader::new(TokenBuffer::new(tokens), options).collect()
}

pub fn start_element(local: &str) -> XmlEvent {
    XmlEvent::StartElement {
        name: QName::new("", local),
        attributes: vec![],
        namespaces: vec![],
    }
}

pub fn end_element(local: &str) -> XmlEvent {
    XmlEvent::EndElement {
        name: QName::new("", local),
    }
}

pub fn characters(text: &str) -> XmlEvent {
    XmlEvent::Characters { text: text.into() }
}
