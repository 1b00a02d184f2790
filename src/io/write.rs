//! XML writer for the dynamics element

use crate::models::dynamics::{Dynamic, DynamicKind};
use quick_xml::events::BytesText;
use quick_xml::Writer;
use std::io::Cursor;

/// Serialize `dynamic` as a `<Dynamic>` element.
///
/// Kind, velocity and range are always written; the velocity change and
/// its speed only when the kind supports a time-bounded change. The plain
/// text is force-written exactly for OTHER, where it cannot be reproduced
/// from the subtype alone.
pub fn write_dynamic(dynamic: &Dynamic) -> Result<String, quick_xml::Error> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer
        .create_element("Dynamic")
        .write_inner_content(|w| -> Result<(), quick_xml::Error> {
            w.create_element("subtype")
                .write_text_content(BytesText::new(dynamic.kind().as_tag()))?;
            if let Some(v) = dynamic.velocity() {
                w.create_element("velocity")
                    .write_text_content(BytesText::new(&v.to_string()))?;
            }
            w.create_element("dynType")
                .write_text_content(BytesText::new(dynamic.dynamic_range().as_tag()))?;

            if dynamic.is_velocity_change_available() {
                w.create_element("veloChange")
                    .write_text_content(BytesText::new(&dynamic.change_in_velocity().to_string()))?;
                w.create_element("veloChangeSpeed")
                    .write_text_content(BytesText::new(dynamic.speed().as_tag()))?;
            }

            dynamic
                .text
                .write_properties(w, dynamic.kind() == DynamicKind::Other)?;
            Ok(())
        })?;

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes).expect("quick-xml emits UTF-8"))
}
