//! Serialize a [`Document`] back to XML text.

use std::io::Write;

use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::document::{Document, Element, Node};
use crate::error::XmlError;

/// Write `preamble` followed by the document's root element.
///
/// The preamble is emitted verbatim; pass the declaration (and DOCTYPE, if
/// the format needs one) including its trailing newline. Elements without
/// children are written self-closing.
pub fn write_document<W: Write>(
    doc: &Document,
    preamble: &str,
    mut out: W,
) -> Result<(), XmlError> {
    out.write_all(preamble.as_bytes())?;

    let mut writer = Writer::new(&mut out);
    write_element(&mut writer, doc.root())?;

    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), XmlError> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children().is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in element.children() {
        match child {
            Node::Element(el) => write_element(writer, el)?,
            Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            Node::CData(text) => writer.write_event(Event::CData(BytesCData::new(text.as_str())))?,
            Node::Comment(text) => {
                writer.write_event(Event::Comment(BytesText::from_escaped(text.as_str())))?
            }
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}
