//! Pull-reader mechanics: the event queue the state machine reports into.
//!
//! Attributes and namespace declarations arrive *after* the start tag they
//! belong to, so the sink keeps the most recent start-element pending and
//! attaches them to it. The pending element is flushed into the queue by the
//! next non-attachment event. End-element names come from a stack of open
//! elements, so the state machine never has to carry them.

use alloc::{collections::VecDeque, string::String, vec::Vec};

use crate::{
    error::TranscodeError,
    event::{Attribute, NsDecl, QName, XmlEvent},
};

#[derive(Debug)]
struct PendingElement {
    name: QName,
    attributes: Vec<Attribute>,
    namespaces: Vec<NsDecl>,
}

#[derive(Debug, Default)]
pub(crate) struct EventSink {
    queue: VecDeque<XmlEvent>,
    pending: Option<PendingElement>,
    open: Vec<QName>,
    start_document_read: bool,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a start-of-document has been emitted for the current document.
    /// Cleared again by [`read_end_document`](Self::read_end_document), so a
    /// document array yields one start/end pair per member document.
    pub fn start_document_read(&self) -> bool {
        self.start_document_read
    }

    pub fn pop_event(&mut self) -> Option<XmlEvent> {
        self.queue.pop_front()
    }

    fn flush_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.open.push(pending.name.clone());
            self.queue.push_back(XmlEvent::StartElement {
                name: pending.name,
                attributes: pending.attributes,
                namespaces: pending.namespaces,
            });
        }
    }

    pub fn read_start_document(&mut self) {
        self.flush_pending();
        self.queue.push_back(XmlEvent::StartDocument);
        self.start_document_read = true;
    }

    pub fn read_end_document(&mut self) {
        self.flush_pending();
        self.queue.push_back(XmlEvent::EndDocument);
        self.start_document_read = false;
    }

    pub fn read_start_element_tag(&mut self, name: QName) {
        self.flush_pending();
        self.pending = Some(PendingElement {
            name,
            attributes: Vec::new(),
            namespaces: Vec::new(),
        });
    }

    pub fn read_end_element_tag(&mut self) {
        self.flush_pending();
        debug_assert!(!self.open.is_empty(), "end element without open element");
        if let Some(name) = self.open.pop() {
            self.queue.push_back(XmlEvent::EndElement { name });
        }
    }

    pub fn read_attr(&mut self, name: QName, value: String) -> Result<(), TranscodeError> {
        match self.pending.as_mut() {
            Some(pending) => {
                pending.attributes.push(Attribute { name, value });
                Ok(())
            }
            None => Err(TranscodeError::AttributeOutsideElement),
        }
    }

    pub fn read_ns_decl(&mut self, prefix: &str, uri: String) -> Result<(), TranscodeError> {
        match self.pending.as_mut() {
            Some(pending) => {
                pending.namespaces.push(NsDecl {
                    prefix: prefix.into(),
                    uri,
                });
                Ok(())
            }
            None => Err(TranscodeError::AttributeOutsideElement),
        }
    }

    pub fn read_data(&mut self, text: String) {
        self.flush_pending();
        self.queue.push_back(XmlEvent::Characters { text });
    }

    pub fn read_pi(&mut self, target: &str, data: Option<String>) {
        self.flush_pending();
        self.queue.push_back(XmlEvent::ProcessingInstruction {
            target: target.into(),
            data,
        });
    }
}
