//! Tree-format reader for the dynamics element

use super::XmlReadError;
use crate::models::dynamics::{Dynamic, DynamicRange, DynamicSpeed};

/// Result of reading one element: the tags neither the element nor its
/// text base consumed, in document order, for the outer reader.
#[derive(Debug, Default)]
pub struct ReadOutcome {
    pub unknown: Vec<String>,
}

/// Populate `dynamic` from a `<Dynamic>` element node.
///
/// Unrecognized enumerated tokens normalize to their defaults here, at the
/// parsing boundary; malformed numbers propagate upward as errors.
pub fn read_dynamic(
    dynamic: &mut Dynamic,
    node: &roxmltree::Node,
) -> Result<ReadOutcome, XmlReadError> {
    let mut outcome = ReadOutcome::default();
    for child in node.children().filter(|n| n.is_element()) {
        let tag = child.tag_name().name();
        let text = child.text().unwrap_or("");
        match tag {
            "subtype" => dynamic.set_dynamic_text(text),
            "velocity" => {
                let v = parse_int(tag, text)?;
                dynamic.set_velocity((0..=127).contains(&v).then_some(v as u8));
            }
            "dynType" => dynamic
                .set_dynamic_range(DynamicRange::from_tag(text).unwrap_or(DynamicRange::Staff)),
            "veloChange" => {
                let v = parse_int(tag, text)?;
                dynamic.set_change_in_velocity(v);
            }
            "veloChangeSpeed" => {
                dynamic.set_speed(DynamicSpeed::from_tag(text).unwrap_or_default())
            }
            _ => {
                if !dynamic.text.read_property(&child)? {
                    outcome.unknown.push(tag.to_string());
                }
            }
        }
    }
    Ok(outcome)
}

/// Parse a complete `<Dynamic>` document, for callers holding raw XML.
pub fn read_dynamic_str(xml: &str) -> Result<(Dynamic, ReadOutcome), ReadStrError> {
    let doc = roxmltree::Document::parse(xml)?;
    let mut dynamic = Dynamic::new();
    let outcome = read_dynamic(&mut dynamic, &doc.root_element())?;
    Ok((dynamic, outcome))
}

/// Errors from `read_dynamic_str`: XML that does not parse at all, or
/// malformed content inside an otherwise well-formed tree.
#[derive(Debug, thiserror::Error)]
pub enum ReadStrError {
    #[error(transparent)]
    Xml(#[from] roxmltree::Error),
    #[error(transparent)]
    Content(#[from] XmlReadError),
}

fn parse_int(tag: &str, text: &str) -> Result<i32, XmlReadError> {
    text.trim().parse().map_err(|source| XmlReadError::BadInt {
        tag: tag.to_string(),
        source,
    })
}
