//! JavaScript-facing API for the dynamics engraving module
//!
//! Payloads cross the boundary as serde-serialized values; positions come
//! back in absolute engraving units for the host renderer to apply.

use crate::layout::skyline::Skyline;
use crate::layout::{self, SegmentView, StaffContext};
use crate::models::catalog;
use crate::models::dynamics::{Dynamic, DynamicKind};
use crate::models::style::Style;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct ResolvedDynamic {
    kind: DynamicKind,
    tag: &'static str,
    text: String,
    velocity: Option<u8>,
    #[serde(rename = "accentStyle")]
    accent_style: bool,
}

/// Resolve a subtype tag or free text to its catalog classification.
#[wasm_bindgen(js_name = resolveDynamic)]
pub fn resolve_dynamic(tag: &str) -> Result<JsValue, JsValue> {
    let mut dynamic = Dynamic::new();
    dynamic.set_dynamic_text(tag);
    let resolved = ResolvedDynamic {
        kind: dynamic.kind(),
        tag: dynamic.subtype_name(),
        text: dynamic.text.text().to_string(),
        velocity: dynamic.velocity(),
        accent_style: dynamic.is_velocity_change_available(),
    };
    to_js(&resolved)
}

#[derive(Serialize)]
struct CatalogRow {
    kind: DynamicKind,
    tag: &'static str,
    name: &'static str,
    text: &'static str,
    velocity: Option<u8>,
    #[serde(rename = "changeInVelocity")]
    change_in_velocity: i32,
    #[serde(rename = "accentStyle")]
    accent_style: bool,
}

/// The complete dynamics catalog, for palettes and inspectors.
#[wasm_bindgen(js_name = dynamicsCatalog)]
pub fn dynamics_catalog() -> Result<JsValue, JsValue> {
    let rows: Vec<CatalogRow> = DynamicKind::ALL
        .iter()
        .map(|&kind| {
            let entry = catalog::lookup(kind);
            CatalogRow {
                kind,
                tag: kind.as_tag(),
                name: kind.user_name(),
                text: entry.glyph_text,
                velocity: entry.velocity,
                change_in_velocity: entry.change_in_velocity,
                accent_style: entry.accent_style,
            }
        })
        .collect();
    to_js(&rows)
}

#[derive(Deserialize)]
struct LayoutRequest {
    dynamic: Dynamic,
    segment: Option<SegmentView>,
    staff: StaffContext,
    skyline: Skyline,
    #[serde(default = "Style::default")]
    style: Style,
}

#[derive(Serialize)]
struct LayoutResponse {
    x: f64,
    y: f64,
}

/// Lay out one dynamic marking against its segment and staff skyline,
/// returning the computed position.
#[wasm_bindgen(js_name = layoutDynamic)]
pub fn layout_dynamic(request: JsValue) -> Result<JsValue, JsValue> {
    let mut req: LayoutRequest =
        serde_wasm_bindgen::from_value(request).map_err(|e| JsValue::from_str(&e.to_string()))?;
    layout::layout_dynamic(
        &mut req.dynamic,
        req.segment.as_ref(),
        &req.staff,
        &req.skyline,
        &req.style,
    );
    to_js(&LayoutResponse {
        x: req.dynamic.text.pos.x,
        y: req.dynamic.text.pos.y,
    })
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}
