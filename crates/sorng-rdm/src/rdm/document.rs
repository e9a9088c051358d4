//! XML loader for Remote Desktop Manager exports.
//!
//! Reads the whole document into an owned [`XmlElement`] tree so the import
//! passes can look fields up by name, in any order, as often as they need.
//! Attributes are ignored: RDM writes every field as a child element.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::str;

use super::error::{RdmError, RdmResult};

/// One element with its text and child elements, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// First direct child with the given tag name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given tag name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of this element and all of its descendants, concatenated.
    pub fn inner_text(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.inner_text());
        }
        out
    }

    /// `inner_text` of the first child with the given name.
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).map(XmlElement::inner_text)
    }
}

/// Parse source text into its root element.
///
/// Fails with [`RdmError::MalformedInput`] unless the text is a single
/// well-formed element tree.
pub fn parse_document(content: &str) -> RdmResult<XmlElement> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let position = reader.buffer_position() as u64;
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                ensure_single_root(&root, position)?;
                stack.push(XmlElement::new(tag_name(e, position)?));
            }
            Ok(Event::Empty(ref e)) => {
                ensure_single_root(&root, position)?;
                let element = XmlElement::new(tag_name(e, position)?);
                close_element(element, &mut stack, &mut root);
            }
            Ok(Event::End(_)) => {
                // quick-xml already rejects mismatched end tags.
                match stack.pop() {
                    Some(element) => close_element(element, &mut stack, &mut root),
                    None => return Err(RdmError::malformed(position, "Unexpected closing tag")),
                }
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| RdmError::malformed(position, err.to_string()))?;
                append_text(&mut stack, &text, position)?;
            }
            Ok(Event::CData(e)) => {
                let raw = e.into_inner();
                let text = str::from_utf8(&raw)
                    .map_err(|_| RdmError::malformed(position, "Invalid UTF-8 in CDATA section"))?;
                append_text(&mut stack, text, position)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(RdmError::malformed(
                    reader.buffer_position() as u64,
                    e.to_string(),
                ))
            }
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(RdmError::malformed(
            reader.buffer_position() as u64,
            format!("Unclosed element <{}>", open.name),
        ));
    }

    root.ok_or_else(|| RdmError::malformed(0, "Document has no root element"))
}

// ─── Helpers ────────────────────────────────────────────────────────

fn tag_name(e: &BytesStart, position: u64) -> RdmResult<String> {
    let name_bytes = e.name();
    str::from_utf8(name_bytes.as_ref())
        .map(str::to_string)
        .map_err(|_| RdmError::malformed(position, "Invalid UTF-8 in tag name"))
}

fn ensure_single_root(root: &Option<XmlElement>, position: u64) -> RdmResult<()> {
    if root.is_some() {
        return Err(RdmError::malformed(position, "Content after the root element"));
    }
    Ok(())
}

fn close_element(element: XmlElement, stack: &mut [XmlElement], root: &mut Option<XmlElement>) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else {
        *root = Some(element);
    }
}

fn append_text(stack: &mut [XmlElement], text: &str, position: u64) -> RdmResult<()> {
    match stack.last_mut() {
        Some(current) => {
            current.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(RdmError::malformed(position, "Text outside the root element")),
    }
}
