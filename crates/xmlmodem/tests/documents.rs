#![expect(missing_docs)]

// Document-level shapes: bare scalars, bare arrays, and document arrays.

use xmlmodem::{
    JsonXmlReader, ReaderOptions, SourceError, Token, TokenBuffer, TokenKind, TokenSource,
    TranscodeError, XmlEvent,
};

mod common;
use common::{characters, end_element, name, null, start_element, transcode, transcode_with, value};

#[test]
fn empty_object_document() {
    let events = transcode([Token::StartObject, Token::EndObject]).unwrap();
    assert_eq!(events, vec![XmlEvent::StartDocument, XmlEvent::EndDocument]);
}

#[test]
fn bare_scalar_document_is_bare_character_data() {
    // "hello" as the entire document: no element, no document events.
    let events = transcode([value("hello")]).unwrap();
    assert_eq!(events, vec![characters("hello")]);
}

#[test]
fn bare_null_document_emits_nothing() {
    let events = transcode([null()]).unwrap();
    assert_eq!(events, vec![]);
}

#[test]
fn bare_array_document_emits_bare_values() {
    // [1, 2, 3] as the entire document: no object ever opens, so the
    // root-scalar escape hatch applies to every item.
    let events = transcode([
        Token::StartArray,
        value("1"),
        value("2"),
        value("3"),
        Token::EndArray,
    ])
    .unwrap();
    assert_eq!(
        events,
        vec![characters("1"), characters("2"), characters("3")]
    );
}

#[test]
fn bare_array_document_announces_itself_when_pi_enabled() {
    let events = transcode_with(
        [Token::StartArray, value("1"), Token::EndArray],
        ReaderOptions {
            multiple_pi: true,
            ..ReaderOptions::default()
        },
    )
    .unwrap();
    // No field name exists at the root, so the PI carries no data.
    assert_eq!(
        events,
        vec![
            XmlEvent::ProcessingInstruction {
                target: xmlmodem::MULTIPLE_PI_TARGET.to_string(),
                data: None,
            },
            characters("1"),
        ]
    );
}

#[test]
fn document_array_yields_one_document_per_object() {
    // [{"a": "1"}, {"b": "2"}]
    let events = transcode([
        Token::StartArray,
        Token::StartObject,
        name("a"),
        value("1"),
        Token::EndObject,
        Token::StartObject,
        name("b"),
        value("2"),
        Token::EndObject,
        Token::EndArray,
    ])
    .unwrap();
    assert_eq!(
        events,
        vec![
            XmlEvent::StartDocument,
            start_element("a"),
            characters("1"),
            end_element("a"),
            XmlEvent::EndDocument,
            XmlEvent::StartDocument,
            start_element("b"),
            characters("2"),
            end_element("b"),
            XmlEvent::EndDocument,
        ]
    );
}

#[test]
fn document_array_member_may_hold_an_array_field() {
    // [{"a": ["1", "2"]}]: the inner bracket closes the element array, not
    // the document array.
    let events = transcode([
        Token::StartArray,
        Token::StartObject,
        name("a"),
        Token::StartArray,
        value("1"),
        value("2"),
        Token::EndArray,
        Token::EndObject,
        Token::EndArray,
    ])
    .unwrap();
    assert_eq!(
        events,
        vec![
            XmlEvent::StartDocument,
            start_element("a"),
            characters("1"),
            end_element("a"),
            start_element("a"),
            characters("2"),
            end_element("a"),
            XmlEvent::EndDocument,
        ]
    );
}

#[test]
fn tokens_after_a_closed_document_are_ignored() {
    // Without the document-array flag the root object end is the end of the
    // stream; anything after it is never read.
    let events = transcode([
        Token::StartObject,
        name("a"),
        value("1"),
        Token::EndObject,
        value("stray"),
    ])
    .unwrap();
    assert_eq!(
        events,
        vec![
            XmlEvent::StartDocument,
            start_element("a"),
            characters("1"),
            end_element("a"),
            XmlEvent::EndDocument,
        ]
    );
}

#[test]
fn empty_input_ends_immediately() {
    let events = transcode(vec![]).unwrap();
    assert_eq!(events, vec![]);
}

#[test]
fn close_releases_the_source() {
    let reader = JsonXmlReader::new(
        TokenBuffer::new([Token::StartObject, Token::EndObject]),
        ReaderOptions::default(),
    );
    reader.close().unwrap();
}

/// A source whose close always fails, to check the error is wrapped rather
/// than swallowed.
struct UncloseableSource;

impl TokenSource for UncloseableSource {
    fn peek(&mut self) -> Result<TokenKind, SourceError> {
        Ok(TokenKind::Eof)
    }

    fn name(&mut self) -> Result<String, SourceError> {
        Err(SourceError::new("no tokens"))
    }

    fn value(&mut self) -> Result<Option<String>, SourceError> {
        Err(SourceError::new("no tokens"))
    }

    fn start_object(&mut self) -> Result<(), SourceError> {
        Err(SourceError::new("no tokens"))
    }

    fn end_object(&mut self) -> Result<(), SourceError> {
        Err(SourceError::new("no tokens"))
    }

    fn start_array(&mut self) -> Result<(), SourceError> {
        Err(SourceError::new("no tokens"))
    }

    fn end_array(&mut self) -> Result<(), SourceError> {
        Err(SourceError::new("no tokens"))
    }

    fn close(&mut self) -> Result<(), SourceError> {
        Err(SourceError::new("release failed"))
    }
}

#[test]
fn close_failures_surface_as_source_errors() {
    let reader = JsonXmlReader::new(UncloseableSource, ReaderOptions::default());
    let err = reader.close().unwrap_err();
    assert_eq!(
        err,
        TranscodeError::Source(SourceError::new("release failed"))
    );
}
