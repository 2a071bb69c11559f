//! Conversion of raw `| display xml` responses into a JSON-shaped tree.
//!
//! Junos wraps structured command output in an `<rpc-reply>` envelope; the
//! raw channel output may carry prompt or banner noise around it. The
//! envelope is located, parsed, and converted into a `serde_json::Value`
//! with the conventional XML-to-dict shape: child elements become object
//! keys, repeated siblings collapse into arrays, text-only elements become
//! strings and empty elements become null. The envelope element itself is
//! stripped; the returned object is keyed by the command-specific top-level
//! tags (e.g. `ospf-neighbor-information-all`, `route-information`).

use crate::error::{Error, Result};
use roxmltree::{Document, Node};
use serde_json::{Map, Value};

const ENVELOPE_OPEN: &str = "<rpc-reply";
const ENVELOPE_CLOSE: &str = "</rpc-reply>";

/// Extract and convert the reply envelope from a raw command response.
pub fn parse_reply(raw: &str) -> Result<Value> {
    let start = raw
        .find(ENVELOPE_OPEN)
        .ok_or_else(|| Error::MalformedReply("no <rpc-reply> envelope in response".to_string()))?;
    let end = raw
        .rfind(ENVELOPE_CLOSE)
        .ok_or_else(|| Error::MalformedReply("unterminated <rpc-reply> envelope".to_string()))?
        + ENVELOPE_CLOSE.len();
    if end <= start {
        return Err(Error::MalformedReply(
            "unterminated <rpc-reply> envelope".to_string(),
        ));
    }

    let doc = Document::parse(&raw[start..end])
        .map_err(|err| Error::MalformedReply(err.to_string()))?;

    Ok(children_to_value(doc.root_element()))
}

/// Convert one element: text-only elements become strings, empty elements
/// become null, anything with child elements becomes an object.
fn element_to_value(node: Node<'_, '_>) -> Value {
    if node.children().any(|child| child.is_element()) {
        return children_to_value(node);
    }

    match node.text().map(str::trim).filter(|text| !text.is_empty()) {
        Some(text) => Value::String(text.to_string()),
        None => Value::Null,
    }
}

/// Convert an element's children into an object, folding repeated sibling
/// tags into arrays in document order.
fn children_to_value(node: Node<'_, '_>) -> Value {
    let mut map = Map::new();
    for child in node.children().filter(Node::is_element) {
        let key = child.tag_name().name().to_string();
        let value = element_to_value(child);
        match map.get_mut(&key) {
            None => {
                map.insert(key, value);
            }
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
        }
    }
    Value::Object(map)
}
