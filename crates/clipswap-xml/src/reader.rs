//! Build a [`Document`] from XML text.
//!
//! The XML declaration, DOCTYPE and anything outside the root element are
//! dropped; writers supply their own preamble.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::document::{Document, Element, Node};
use crate::error::XmlError;

/// Parse XML text into an owned document tree.
///
/// Whitespace between elements is kept as text so that output mirrors the
/// input layout.
pub fn parse_document(xml: &str) -> Result<Document, XmlError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let position = reader.buffer_position() as u64;
        match reader.read_event() {
            Ok(Event::Start(e)) => stack.push(element_from_start(&e, position)?),
            Ok(Event::Empty(e)) => {
                let element = element_from_start(&e, position)?;
                attach(&mut stack, &mut root, element, position)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| XmlError::malformed(position, "unexpected closing tag"))?;
                attach(&mut stack, &mut root, element, position)?;
            }
            Ok(Event::Text(e)) => {
                if let Some(parent) = stack.last_mut() {
                    let text = e
                        .unescape()
                        .map_err(|err| XmlError::malformed(position, err.to_string()))?;
                    parent.push_text(text.into_owned());
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(parent) = stack.last_mut() {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    parent.push_node(Node::CData(text));
                }
            }
            Ok(Event::Comment(e)) => {
                if let Some(parent) = stack.last_mut() {
                    parent.push_node(Node::Comment(String::from_utf8_lossy(&e).into_owned()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(XmlError::malformed(position, e.to_string())),
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::malformed(
            reader.buffer_position() as u64,
            format!("element <{}> is never closed", open.name()),
        ));
    }

    root.map(Document::new).ok_or(XmlError::NoRoot)
}

fn element_from_start(start: &BytesStart<'_>, position: u64) -> Result<Element, XmlError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|err| XmlError::malformed(position, err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| XmlError::malformed(position, err.to_string()))?;
        element.push_attribute(key, value.into_owned());
    }

    Ok(element)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
    position: u64,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(XmlError::malformed(position, "more than one root element"));
    }
    *root = Some(element);
    Ok(())
}
