//! Composed text-element base for engraved text items
//!
//! The generic rich-text machinery (editing, undo, styling) lives outside
//! this module. A dynamic marking only needs content, placement, alignment
//! and layout bookkeeping, so it holds this base by composition; both the
//! property dispatch and the persistence codec chain to it explicitly on
//! anything they do not recognize themselves.

use crate::io::XmlReadError;
use crate::layout::geometry::{PointF, RectF};
use crate::properties::{PropertyId, PropertyValue};
use serde::{Deserialize, Serialize};

/// Reference design size for dynamics text, in points.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

/// Vertical placement relative to the staff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Above,
    #[default]
    Below,
}

impl Placement {
    pub fn as_tag(self) -> &'static str {
        match self {
            Placement::Above => "above",
            Placement::Below => "below",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "above" => Some(Placement::Above),
            "below" => Some(Placement::Below),
            _ => None,
        }
    }
}

/// Horizontal alignment of the text box against its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

impl Align {
    pub fn as_tag(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "left" => Some(Align::Left),
            "center" => Some(Align::Center),
            "right" => Some(Align::Right),
            _ => None,
        }
    }
}

/// Text content plus the placement state the layout passes operate on.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextElement {
    text: String,
    pub placement: Placement,
    pub align: Align,
    /// Font size in points.
    pub size: f64,
    /// Manual offset applied on top of the computed position.
    pub offset: PointF,
    /// Position relative to the segment, produced by the layout pass.
    /// Starts each pass at `offset`; the anchoring and autoplacement
    /// shifts accumulate on top.
    pub pos: PointF,
    /// Intrinsic box from the external text layout, local coordinates.
    pub bbox: RectF,
    pub autoplace: bool,
    /// Set when a mutation requires the next layout pass to run.
    pub layout_invalid: bool,
}

impl TextElement {
    pub fn new() -> Self {
        TextElement {
            text: String::new(),
            placement: Placement::Below,
            align: Align::Center,
            size: DEFAULT_FONT_SIZE,
            offset: PointF::default(),
            pos: PointF::default(),
            bbox: RectF::default(),
            autoplace: true,
            layout_invalid: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.layout_invalid = true;
    }

    /// Begin a layout pass: the computed position restarts from the manual
    /// offset so re-running layout from the same inputs is idempotent.
    pub fn reset_layout(&mut self) {
        self.pos = self.offset;
        self.layout_invalid = false;
    }

    /// Typed read of a text-base attribute; `Absent` when unrecognized.
    pub fn get(&self, id: PropertyId) -> PropertyValue {
        match id {
            PropertyId::Text => PropertyValue::Text(self.text.clone()),
            PropertyId::Placement => PropertyValue::Placement(self.placement),
            PropertyId::Align => PropertyValue::Align(self.align),
            PropertyId::FontSize => PropertyValue::Float(self.size),
            PropertyId::Offset => PropertyValue::Point(self.offset),
            PropertyId::Autoplace => PropertyValue::Bool(self.autoplace),
            _ => PropertyValue::Absent,
        }
    }

    /// Typed write; `false` when the attribute is not a text-base one.
    pub fn set(&mut self, id: PropertyId, value: PropertyValue) -> bool {
        match (id, value) {
            (PropertyId::Text, PropertyValue::Text(text)) => self.set_text(text),
            (PropertyId::Placement, PropertyValue::Placement(placement)) => {
                self.placement = placement;
            }
            (PropertyId::Align, PropertyValue::Align(align)) => self.align = align,
            (PropertyId::FontSize, PropertyValue::Float(size)) => self.size = size,
            (PropertyId::Offset, PropertyValue::Point(offset)) => self.offset = offset,
            (PropertyId::Autoplace, PropertyValue::Bool(autoplace)) => {
                self.autoplace = autoplace;
            }
            _ => return false,
        }
        true
    }

    /// Default value of a text-base attribute.
    pub fn default_for(&self, id: PropertyId) -> PropertyValue {
        match id {
            PropertyId::Text => PropertyValue::Text(String::new()),
            PropertyId::Placement => PropertyValue::Placement(Placement::default()),
            PropertyId::Align => PropertyValue::Align(Align::default()),
            PropertyId::FontSize => PropertyValue::Float(DEFAULT_FONT_SIZE),
            PropertyId::Offset => PropertyValue::Point(PointF::default()),
            PropertyId::Autoplace => PropertyValue::Bool(true),
            _ => PropertyValue::Absent,
        }
    }

    /// Read one persisted tag; `Ok(false)` when the tag is not ours.
    pub fn read_property(&mut self, node: &roxmltree::Node) -> Result<bool, XmlReadError> {
        let tag = node.tag_name().name();
        let text = node.text().unwrap_or("");
        match tag {
            "text" => self.set_text(text),
            "placement" => self.placement = Placement::from_tag(text).unwrap_or_default(),
            "align" => self.align = Align::from_tag(text).unwrap_or_default(),
            "size" => self.size = parse_float(tag, text)?,
            "offset" => {
                self.offset.x = parse_float("offset", node.attribute("x").unwrap_or("0"))?;
                self.offset.y = parse_float("offset", node.attribute("y").unwrap_or("0"))?;
            }
            "autoplace" => self.autoplace = text.trim() != "0",
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Write the text-base tags. `write_text` forces the plain content out
    /// even though it is usually reproducible from the element's subtype.
    pub fn write_properties<W: std::io::Write>(
        &self,
        writer: &mut quick_xml::Writer<W>,
        write_text: bool,
    ) -> Result<(), quick_xml::Error> {
        use quick_xml::events::BytesText;

        if self.placement != Placement::default() {
            writer
                .create_element("placement")
                .write_text_content(BytesText::new(self.placement.as_tag()))?;
        }
        if self.align != Align::default() {
            writer
                .create_element("align")
                .write_text_content(BytesText::new(self.align.as_tag()))?;
        }
        if self.size != DEFAULT_FONT_SIZE {
            writer
                .create_element("size")
                .write_text_content(BytesText::new(&self.size.to_string()))?;
        }
        if self.offset != PointF::default() {
            let x = self.offset.x.to_string();
            let y = self.offset.y.to_string();
            writer
                .create_element("offset")
                .with_attribute(("x", x.as_str()))
                .with_attribute(("y", y.as_str()))
                .write_empty()?;
        }
        if !self.autoplace {
            writer
                .create_element("autoplace")
                .write_text_content(BytesText::new("0"))?;
        }
        if write_text {
            writer
                .create_element("text")
                .write_text_content(BytesText::new(&self.text))?;
        }
        Ok(())
    }
}

impl Default for TextElement {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_float(tag: &str, text: &str) -> Result<f64, XmlReadError> {
    text.trim().parse().map_err(|source| XmlReadError::BadFloat {
        tag: tag.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_invalidates_layout() {
        let mut t = TextElement::new();
        t.reset_layout();
        assert!(!t.layout_invalid);
        t.set_text("mf");
        assert!(t.layout_invalid);
    }

    #[test]
    fn test_reset_layout_starts_from_offset() {
        let mut t = TextElement::new();
        t.offset = PointF::new(1.5, -2.0);
        t.pos = PointF::new(99.0, 99.0);
        t.reset_layout();
        assert_eq!(t.pos, t.offset);
    }

    #[test]
    fn test_property_round_trip() {
        let mut t = TextElement::new();
        assert!(t.set(PropertyId::Placement, PropertyValue::Placement(Placement::Above)));
        assert_eq!(t.get(PropertyId::Placement), PropertyValue::Placement(Placement::Above));
        assert!(!t.set(PropertyId::Velocity, PropertyValue::Int(64)));
    }
}
