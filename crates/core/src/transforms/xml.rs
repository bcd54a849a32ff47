//! XML to JSON conversion.
//!
//! The parser is a small recursive-descent reader that understands
//! elements, attributes, character data, CDATA sections, processing
//! instructions and a DOCTYPE line. It does not validate against a DTD and
//! does not expand custom entities; predefined and numeric character
//! references are decoded.

use super::json::to_pretty;
use super::yes_no;
use crate::error::TransformError;
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt::Write;
use std::sync::LazyLock;

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<\?xml[^>]*\?>").unwrap());
static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<!--[\s\S]*?-->").unwrap());

/// Deepest element nesting the reader accepts. Parsing and conversion both
/// recurse once per level.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

fn syntax_error() -> TransformError {
    TransformError::InvalidDocument("XML parsing error. Please check your XML syntax.".to_string())
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0, depth: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.src.len() - trimmed.len();
    }

    fn expect(&mut self, token: &str) -> Result<(), TransformError> {
        if self.starts_with(token) {
            self.pos += token.len();
            Ok(())
        } else {
            Err(syntax_error())
        }
    }

    /// Consume everything up to and including `terminator`, returning the
    /// skipped text without the terminator.
    fn take_until(&mut self, terminator: &str) -> Result<&'a str, TransformError> {
        let rest = self.rest();
        let end = rest.find(terminator).ok_or_else(syntax_error)?;
        self.pos += end + terminator.len();
        Ok(&rest[..end])
    }

    fn name(&mut self) -> Result<&'a str, TransformError> {
        let rest = self.rest();
        let end = rest
            .find(|c: char| c.is_whitespace() || matches!(c, '/' | '>' | '=' | '<' | '"' | '\''))
            .unwrap_or(rest.len());
        let name = &rest[..end];
        match name.chars().next() {
            Some(first) if first.is_alphabetic() || first == '_' || first == ':' => {
                self.pos += end;
                Ok(name)
            }
            _ => Err(syntax_error()),
        }
    }

    /// Whitespace, processing instructions and a DOCTYPE around the root element.
    fn skip_misc(&mut self) -> Result<(), TransformError> {
        loop {
            self.skip_whitespace();
            if self.starts_with("<?") {
                self.take_until("?>")?;
            } else if self.starts_with("<!DOCTYPE") {
                self.skip_doctype()?;
            } else {
                return Ok(());
            }
        }
    }

    fn skip_doctype(&mut self) -> Result<(), TransformError> {
        let mut depth = 0usize;
        for (offset, c) in self.rest().char_indices() {
            match c {
                '[' => depth += 1,
                ']' => depth = depth.saturating_sub(1),
                '>' if depth == 0 => {
                    self.pos += offset + 1;
                    return Ok(());
                }
                _ => {}
            }
        }
        Err(syntax_error())
    }

    fn attribute_value(&mut self) -> Result<String, TransformError> {
        let quote = match self.rest().chars().next() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(syntax_error()),
        };
        self.pos += 1;
        let raw = self.take_until(&quote.to_string())?;
        if raw.contains('<') {
            return Err(syntax_error());
        }
        Ok(html_escape::decode_html_entities(raw).into_owned())
    }

    fn element(&mut self) -> Result<XmlElement, TransformError> {
        if self.depth >= MAX_DEPTH {
            return Err(TransformError::InvalidDocument(format!(
                "XML nesting is deeper than {MAX_DEPTH} levels."
            )));
        }
        self.expect("<")?;
        let name = self.name()?.to_string();
        let mut attributes: Vec<(String, String)> = Vec::new();

        loop {
            self.skip_whitespace();
            if self.starts_with("/>") {
                self.pos += 2;
                return Ok(XmlElement {
                    name,
                    attributes,
                    children: Vec::new(),
                });
            }
            if self.starts_with(">") {
                self.pos += 1;
                break;
            }

            let key = self.name()?.to_string();
            self.skip_whitespace();
            self.expect("=")?;
            self.skip_whitespace();
            let value = self.attribute_value()?;
            if attributes.iter().any(|(k, _)| *k == key) {
                return Err(syntax_error());
            }
            attributes.push((key, value));
        }

        self.depth += 1;
        let children = self.content(&name)?;
        self.depth -= 1;
        Ok(XmlElement {
            name,
            attributes,
            children,
        })
    }

    fn content(&mut self, parent: &str) -> Result<Vec<XmlNode>, TransformError> {
        let mut children = Vec::new();

        loop {
            if self.at_end() {
                return Err(syntax_error());
            }

            if self.starts_with("</") {
                self.pos += 2;
                let closing = self.name()?;
                if closing != parent {
                    return Err(syntax_error());
                }
                self.skip_whitespace();
                self.expect(">")?;
                return Ok(children);
            } else if self.starts_with("<!--") {
                self.pos += 4;
                self.take_until("-->")?;
            } else if self.starts_with("<![CDATA[") {
                self.pos += 9;
                let data = self.take_until("]]>")?;
                children.push(XmlNode::Text(data.to_string()));
            } else if self.starts_with("<?") {
                self.take_until("?>")?;
            } else if self.starts_with("<") {
                children.push(XmlNode::Element(self.element()?));
            } else {
                let rest = self.rest();
                let end = rest.find('<').unwrap_or(rest.len());
                let raw = &rest[..end];
                self.pos += end;
                children.push(XmlNode::Text(html_escape::decode_html_entities(raw).into_owned()));
            }
        }
    }
}

/// Parse a document with exactly one root element.
pub fn parse_document(text: &str) -> Result<XmlElement, TransformError> {
    let mut parser = Parser::new(text);
    parser.skip_misc()?;
    let root = parser.element()?;
    parser.skip_misc()?;
    if !parser.at_end() {
        return Err(syntax_error());
    }
    Ok(root)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlOptions {
    pub pretty_print: bool,
    pub preserve_attributes: bool,
    pub array_notation: bool,
}

/// Convert one element to JSON.
///
/// Attributes go under `@attributes`. The first non-blank text node of an
/// element without attributes becomes the element's whole value; otherwise
/// text is stored under `#text`. Repeated child names collect into arrays.
pub fn element_to_json(element: &XmlElement, options: XmlOptions) -> Value {
    let mut obj = Map::new();

    if options.preserve_attributes && !element.attributes.is_empty() {
        let attributes = element
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        obj.insert("@attributes".to_string(), Value::Object(attributes));
    }

    for child in &element.children {
        match child {
            XmlNode::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                if obj.is_empty() {
                    return Value::String(text.to_string());
                }
                obj.insert("#text".to_string(), Value::String(text.to_string()));
            }
            XmlNode::Element(child) => {
                let value = element_to_json(child, options);
                match obj.get_mut(&child.name) {
                    Some(Value::Array(items)) => items.push(value),
                    Some(existing) => {
                        let first = existing.take();
                        *existing = Value::Array(vec![first, value]);
                    }
                    None => {
                        let value = if options.array_notation {
                            Value::Array(vec![value])
                        } else {
                            value
                        };
                        obj.insert(child.name.clone(), value);
                    }
                }
            }
        }
    }

    Value::Object(obj)
}

pub fn xml_to_json(text: &str, options: XmlOptions) -> Result<String, TransformError> {
    if text.trim().is_empty() {
        return Ok("Please enter XML content to convert.".to_string());
    }

    let without_declaration = DECLARATION.replace_all(text, "");
    let cleaned = COMMENT.replace_all(&without_declaration, "");
    let cleaned = cleaned.trim();
    if !cleaned.starts_with('<') || !cleaned.contains('>') {
        return Err(TransformError::InvalidDocument(
            "Invalid XML format. Please enter valid XML content.".to_string(),
        ));
    }

    let root = parse_document(cleaned)?;
    let mut document = Map::new();
    document.insert(root.name.clone(), element_to_json(&root, options));
    let document = Value::Object(document);

    let json = if options.pretty_print {
        to_pretty(&document, 2)?
    } else {
        document.to_string()
    };

    let mut out = String::from("XML to JSON Conversion\n=====================\n\n");
    let _ = writeln!(out, "Converted JSON:\n{json}\n");
    out.push_str("Conversion Options:\n");
    let _ = writeln!(out, "• Pretty Print: {}", yes_no(options.pretty_print));
    let _ = writeln!(out, "• Preserve Attributes: {}", yes_no(options.preserve_attributes));
    let _ = writeln!(out, "• Array Notation: {}", yes_no(options.array_notation));
    Ok(out)
}
