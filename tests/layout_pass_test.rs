// Full layout pass tests: horizontal anchoring plus autoplacement,
// including the ordered skyline contribution discipline

use dynamics_engraving::fonts::metrics::glyph_metrics;
use dynamics_engraving::layout::geometry::RectF;
use dynamics_engraving::layout::skyline::Skyline;
use dynamics_engraving::layout::{
    layout_dynamic, SegmentElement, SegmentView, StaffContext,
};
use dynamics_engraving::models::catalog;
use dynamics_engraving::models::style::Style;
use dynamics_engraving::{Dynamic, Placement};

/// Helper to create a centered marking over a chord segment
fn make_marking(tag: &str) -> Dynamic {
    let mut d = Dynamic::new();
    d.set_dynamic_text(tag);
    d.text.placement = Placement::Below;
    d.text.bbox = RectF::new(-6.0, -2.5, 12.0, 5.0);
    d
}

fn make_chord_segment() -> SegmentView {
    let mut segment = SegmentView::new(0);
    segment.elements[0] = Some(SegmentElement {
        is_chord: true,
        width: 6.5,
    });
    segment
}

#[test]
fn test_pass_applies_both_axes() {
    let mut d = make_marking("mf");
    let segment = make_chord_segment();
    let staff = StaffContext::default();
    let style = Style::default();

    let mut skyline = Skyline::new();
    skyline.add(&RectF::new(-10.0, 0.0, 40.0, 10.0));

    layout_dynamic(&mut d, Some(&segment), &staff, &skyline, &style);

    // horizontal: half notehead minus the optical-center correction
    let metrics = glyph_metrics();
    let sym = catalog::lookup(d.kind()).sym;
    let anchor = metrics.optical_center_x(sym).unwrap();
    let left = metrics.bbox(sym).unwrap().bottom_left().x;
    let expected_x = style.notehead_width * 0.5 - (anchor - left - 6.0);
    assert!((d.text.pos.x - expected_x).abs() < 1e-9);

    // vertical: clear of the staff content by the minimum distance
    let top = d.text.pos.y + d.text.bbox.top();
    let clearance = style.dynamics_min_distance * staff.spatium;
    assert!((top - (10.0 + clearance)).abs() < 1e-9);
}

#[test]
fn test_later_element_sees_earlier_contribution() {
    let segment = make_chord_segment();
    let staff = StaffContext::default();
    let style = Style::default();
    let clearance = style.dynamics_min_distance * staff.spatium;

    let mut skyline = Skyline::new();
    skyline.add(&RectF::new(-20.0, 0.0, 60.0, 10.0));

    // first marking is placed, then contributes its rectangle
    let mut first = make_marking("p");
    layout_dynamic(&mut first, Some(&segment), &staff, &skyline, &style);
    let first_rect = first
        .text
        .bbox
        .translated(first.text.pos + segment.pos + segment.measure_pos);
    skyline.add(&first_rect);

    // the second marking at the same position must stack below the first
    let mut second = make_marking("f");
    layout_dynamic(&mut second, Some(&segment), &staff, &skyline, &style);

    let second_top = second.text.pos.y + second.text.bbox.top();
    assert!((second_top - (first_rect.bottom() + clearance)).abs() < 1e-9);
}

#[test]
fn test_relayout_after_contribution_is_stable() {
    let segment = make_chord_segment();
    let staff = StaffContext::default();
    let style = Style::default();

    let mut skyline = Skyline::new();
    skyline.add(&RectF::new(-20.0, 0.0, 60.0, 10.0));

    let mut d = make_marking("p");
    layout_dynamic(&mut d, Some(&segment), &staff, &skyline, &style);
    let placed = d.text.pos;

    // a fresh pass from the same skyline state reproduces the placement
    layout_dynamic(&mut d, Some(&segment), &staff, &skyline, &style);
    assert_eq!(d.text.pos, placed);
}
