//! Typed attribute dispatch for the dynamics element
//!
//! The element answers for its own attributes and chains everything else
//! to the composed text base; a set that neither recognizes fails. Every
//! successful set invalidates layout rather than recomputing it inline.

use crate::layout::geometry::PointF;
use crate::models::catalog;
use crate::models::dynamics::{Dynamic, DynamicKind, DynamicRange, DynamicSpeed};
use crate::models::text_base::{Align, Placement};
use serde::{Deserialize, Serialize};

/// Attribute identifiers recognized by the dynamics element and its text
/// base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyId {
    DynamicType,
    Velocity,
    DynamicRange,
    VeloChange,
    VeloChangeSpeed,
    /// Generic alias for the kind, used by subtype-driven tooling.
    Subtype,
    // text base attributes
    Text,
    Placement,
    Align,
    FontSize,
    Offset,
    Autoplace,
}

/// Value carried across the property boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// The attribute is not available on this element in its current state.
    Absent,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Point(PointF),
    Kind(DynamicKind),
    Range(DynamicRange),
    Speed(DynamicSpeed),
    Placement(Placement),
    Align(Align),
}

impl Dynamic {
    /// Typed read of one attribute.
    pub fn get(&self, id: PropertyId) -> PropertyValue {
        match id {
            PropertyId::DynamicType => PropertyValue::Kind(self.kind()),
            PropertyId::DynamicRange => PropertyValue::Range(self.dynamic_range()),
            PropertyId::Velocity => match self.velocity() {
                Some(v) => PropertyValue::Int(v as i64),
                None => PropertyValue::Absent,
            },
            PropertyId::Subtype => PropertyValue::Int(self.kind() as i64),
            PropertyId::VeloChange => {
                if self.is_velocity_change_available() {
                    PropertyValue::Int(self.change_in_velocity() as i64)
                } else {
                    PropertyValue::Absent
                }
            }
            PropertyId::VeloChangeSpeed => PropertyValue::Speed(self.speed()),
            _ => self.text.get(id),
        }
    }

    /// Typed write. Returns `false` when neither this element nor the text
    /// base recognizes the attribute; any successful write requests a
    /// re-layout.
    pub fn set(&mut self, id: PropertyId, value: PropertyValue) -> bool {
        match (id, value) {
            (PropertyId::DynamicType, PropertyValue::Kind(kind))
            | (PropertyId::Subtype, PropertyValue::Kind(kind)) => self.set_kind(kind),
            (PropertyId::DynamicRange, PropertyValue::Range(range)) => {
                self.set_dynamic_range(range)
            }
            (PropertyId::Velocity, PropertyValue::Int(v)) => {
                self.set_velocity((0..=127).contains(&v).then_some(v as u8))
            }
            (PropertyId::Velocity, PropertyValue::Absent) => self.set_velocity(None),
            (PropertyId::VeloChange, PropertyValue::Int(v)) => {
                // a no-op for kinds without a time-bounded change
                if self.is_velocity_change_available() {
                    self.set_change_in_velocity(v as i32);
                }
            }
            (PropertyId::VeloChangeSpeed, PropertyValue::Speed(speed)) => self.set_speed(speed),
            (id, value) => {
                if !self.text.set(id, value) {
                    return false;
                }
            }
        }
        self.text.layout_invalid = true;
        true
    }

    /// Default value for one attribute.
    pub fn default_for(&self, id: PropertyId) -> PropertyValue {
        match id {
            PropertyId::DynamicType | PropertyId::Subtype => {
                PropertyValue::Kind(DynamicKind::Other)
            }
            PropertyId::DynamicRange => PropertyValue::Range(DynamicRange::Part),
            PropertyId::Velocity => PropertyValue::Absent,
            PropertyId::VeloChange => {
                if self.is_velocity_change_available() {
                    PropertyValue::Int(catalog::lookup(self.kind()).change_in_velocity as i64)
                } else {
                    PropertyValue::Absent
                }
            }
            PropertyId::VeloChangeSpeed => PropertyValue::Speed(DynamicSpeed::Normal),
            _ => self.text.default_for(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_velocity() {
        let mut d = Dynamic::new();
        d.set_kind(DynamicKind::P);
        assert_eq!(d.get(PropertyId::Velocity), PropertyValue::Int(49));
        d.set_kind(DynamicKind::Other);
        assert_eq!(d.get(PropertyId::Velocity), PropertyValue::Absent);
    }

    #[test]
    fn test_velo_change_absent_without_accent_style() {
        let mut d = Dynamic::new();
        d.set_kind(DynamicKind::P);
        assert_eq!(d.get(PropertyId::VeloChange), PropertyValue::Absent);
        assert_eq!(d.default_for(PropertyId::VeloChange), PropertyValue::Absent);

        d.set_kind(DynamicKind::Sfz);
        assert_eq!(d.get(PropertyId::VeloChange), PropertyValue::Int(-18));
        assert_eq!(d.default_for(PropertyId::VeloChange), PropertyValue::Int(-18));
    }

    #[test]
    fn test_set_velo_change_is_noop_without_accent_style() {
        let mut d = Dynamic::new();
        d.set_kind(DynamicKind::P);
        assert!(d.set(PropertyId::VeloChange, PropertyValue::Int(-30)));
        assert_eq!(d.get(PropertyId::VeloChange), PropertyValue::Absent);
        assert_eq!(d.change_in_velocity(), 0);
    }

    #[test]
    fn test_subtype_alias_reads_kind_index() {
        let mut d = Dynamic::new();
        d.set_kind(DynamicKind::Sfz);
        assert_eq!(d.get(PropertyId::Subtype), PropertyValue::Int(DynamicKind::Sfz as i64));
        assert!(d.set(PropertyId::Subtype, PropertyValue::Kind(DynamicKind::Ff)));
        assert_eq!(d.kind(), DynamicKind::Ff);
    }

    #[test]
    fn test_delegation_to_text_base() {
        let mut d = Dynamic::new();
        assert!(d.set(
            PropertyId::Placement,
            PropertyValue::Placement(Placement::Above)
        ));
        assert_eq!(
            d.get(PropertyId::Placement),
            PropertyValue::Placement(Placement::Above)
        );
    }

    #[test]
    fn test_set_unrecognized_fails() {
        let mut d = Dynamic::new();
        // a type mismatch is not a recognized write
        assert!(!d.set(PropertyId::Velocity, PropertyValue::Text("loud".into())));
    }

    #[test]
    fn test_successful_set_invalidates_layout() {
        let mut d = Dynamic::new();
        d.text.reset_layout();
        assert!(!d.text.layout_invalid);
        assert!(d.set(PropertyId::Velocity, PropertyValue::Int(80)));
        assert!(d.text.layout_invalid);
    }

    #[test]
    fn test_out_of_range_velocity_clears_override() {
        let mut d = Dynamic::new();
        d.set_kind(DynamicKind::P);
        assert!(d.set(PropertyId::Velocity, PropertyValue::Int(-1)));
        assert_eq!(d.velocity(), Some(49));
    }

    #[test]
    fn test_defaults() {
        let d = Dynamic::new();
        assert_eq!(
            d.default_for(PropertyId::DynamicRange),
            PropertyValue::Range(DynamicRange::Part)
        );
        assert_eq!(
            d.default_for(PropertyId::VeloChangeSpeed),
            PropertyValue::Speed(DynamicSpeed::Normal)
        );
        assert_eq!(d.default_for(PropertyId::Velocity), PropertyValue::Absent);
        assert_eq!(
            d.default_for(PropertyId::Align),
            PropertyValue::Align(Align::Center)
        );
    }
}
