//! Markup reader
//!
//! Streams markup through quick-xml and builds the document arena. Text is
//! kept verbatim (no trimming) so that indentation survives a round trip.
//!
//! General entities declared in the doctype's internal subset
//! (`<!ENTITY ns_svg "http://www.w3.org/2000/svg">`, common in Illustrator
//! exports) are expanded in text and attribute values. Attribute values get
//! XML whitespace normalization: literal tabs and line breaks become spaces.

use super::{DocumentError, Element, NodeId, NodeKind, SvgDocument};
use once_cell::sync::Lazy;
use quick_xml::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::Regex;
use std::collections::HashMap;

static ENTITY_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<!ENTITY\s+([^\s%"'>]+)\s+(?:"([^"]*)"|'([^']*)')\s*>"#).expect("valid entity pattern")
});

/// Internal-subset general entities, by name
type Entities = HashMap<String, String>;

/// Read markup into an arena document
pub fn read_document(markup: &str) -> Result<SvgDocument, DocumentError> {
    let mut reader = Reader::from_str(markup);
    reader.trim_text(false);

    let mut document = SvgDocument::new();
    let mut open: Vec<NodeId> = Vec::new();
    let mut entities = Entities::new();

    loop {
        let position = reader.buffer_position();
        let read_error = |message: String| DocumentError::Read { position, message };

        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let element = read_element(e, &entities).map_err(read_error)?;
                let node = document.append(open.last().copied(), NodeKind::Element(element));
                open.push(node);
            }
            Ok(Event::Empty(ref e)) => {
                let element = read_element(e, &entities).map_err(read_error)?;
                document.append(open.last().copied(), NodeKind::Element(element));
            }
            Ok(Event::End(_)) => {
                open.pop();
            }
            Ok(Event::Text(e)) => {
                let text = unescape(&utf8(&e).map_err(read_error)?, &entities).map_err(read_error)?;
                document.append(open.last().copied(), NodeKind::Text(text));
            }
            Ok(Event::CData(e)) => {
                let text = utf8(&e).map_err(read_error)?;
                document.append(open.last().copied(), NodeKind::Text(text));
            }
            Ok(Event::Comment(e)) => {
                let text = utf8(&e).map_err(read_error)?;
                document.append(open.last().copied(), NodeKind::Comment(text));
            }
            Ok(Event::Decl(e)) => {
                let text = utf8(&e).map_err(read_error)?;
                document.append(open.last().copied(), NodeKind::ProcessingInstruction(text));
            }
            Ok(Event::PI(e)) => {
                let text = utf8(&e).map_err(read_error)?;
                document.append(open.last().copied(), NodeKind::ProcessingInstruction(text));
            }
            Ok(Event::DocType(e)) => {
                let text = utf8(&e).map_err(read_error)?;
                declare_entities(&text, &mut entities);
                document.append(None, NodeKind::DocType(text.trim_start().to_string()));
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(DocumentError::Read {
                    position: reader.buffer_position(),
                    message: err.to_string(),
                })
            }
        }
    }

    Ok(document)
}

/// Tag name and attributes, keys verbatim and values normalized then unescaped
fn read_element(start: &BytesStart, entities: &Entities) -> Result<Element, String> {
    let mut element = Element::new(utf8(start.name().as_ref())?);

    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| e.to_string())?;
        let key = utf8(attribute.key.as_ref())?;
        let raw = normalize_whitespace(&utf8(&attribute.value)?);
        element.attributes.push((key, unescape(&raw, entities)?));
    }

    Ok(element)
}

/// Literal tab, CR and LF become spaces; a CRLF pair counts as one break
fn normalize_whitespace(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .chars()
        .map(|c| if matches!(c, '\t' | '\n' | '\r') { ' ' } else { c })
        .collect()
}

/// Resolve character references, predefined entities and declared entities
fn unescape(raw: &str, entities: &Entities) -> Result<String, String> {
    escape::unescape_with(raw, |name| match name {
        "lt" => Some("<"),
        "gt" => Some(">"),
        "amp" => Some("&"),
        "apos" => Some("'"),
        "quot" => Some("\""),
        _ => entities.get(name).map(String::as_str),
    })
    .map(|text| text.into_owned())
    .map_err(|e| e.to_string())
}

/// Record general entities declared in a doctype's internal subset
///
/// Replacement text has its own references resolved once, against the
/// predefined entities and earlier declarations.
fn declare_entities(doctype: &str, entities: &mut Entities) {
    for captures in ENTITY_DECLARATION.captures_iter(doctype) {
        let Some(raw) = captures.get(2).or_else(|| captures.get(3)) else {
            continue;
        };
        let value = unescape(raw.as_str(), entities).unwrap_or_else(|_| raw.as_str().to_string());
        entities.entry(captures[1].to_string()).or_insert(value);
    }
}

fn utf8(bytes: &[u8]) -> Result<String, String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| format!("invalid UTF-8: {}", e))
}
