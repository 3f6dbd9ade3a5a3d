//! Markup writer
//!
//! Serializes a document arena with quick-xml. Attribute values and text are
//! escaped by the writer; elements without children are self-closed.

use super::{DocumentError, NodeId, NodeKind, SvgDocument};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Serialize the whole document
pub fn write_document(document: &SvgDocument) -> Result<String, DocumentError> {
    let mut writer = Writer::new(Vec::new());
    for &node in document.top_level() {
        write_node(document, node, &mut writer)?;
    }
    String::from_utf8(writer.into_inner()).map_err(|e| DocumentError::Write(e.to_string()))
}

fn write_node(
    document: &SvgDocument,
    node: NodeId,
    writer: &mut Writer<Vec<u8>>,
) -> Result<(), DocumentError> {
    let event = match document.kind(node) {
        NodeKind::Element(element) => {
            let mut start = BytesStart::new(element.name.as_str());
            for (key, value) in &element.attributes {
                start.push_attribute((key.as_str(), value.as_str()));
            }

            let children = document.children(node);
            if children.is_empty() {
                return emit(writer, Event::Empty(start));
            }

            emit(writer, Event::Start(start))?;
            for &child in children {
                write_node(document, child, writer)?;
            }
            Event::End(BytesEnd::new(element.name.as_str()))
        }
        NodeKind::Text(text) => Event::Text(BytesText::new(text)),
        NodeKind::Comment(text) => Event::Comment(BytesText::from_escaped(text.as_str())),
        NodeKind::ProcessingInstruction(text) => Event::PI(BytesText::from_escaped(text.as_str())),
        NodeKind::DocType(text) => Event::DocType(BytesText::from_escaped(text.as_str())),
    };
    emit(writer, event)
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), DocumentError> {
    writer
        .write_event(event)
        .map_err(|e| DocumentError::Write(e.to_string()))
}
