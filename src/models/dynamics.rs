//! The dynamic marking entity and its velocity model
//!
//! A `Dynamic` classifies itself by `DynamicKind` and resolves playback
//! values against the catalog, with explicit overrides layered on top. An
//! override equal to the catalog default collapses back to "unset" so a
//! later kind change is never shadowed by a stale stored value.

use super::catalog;
use super::duration::{Fraction, Ticks, DIVISION};
use super::text_base::TextElement;
use crate::playback::defaults::DEFAULT_TEMPO_BPS;
use crate::playback::tempo::TempoMap;
use serde::{Deserialize, Serialize};

/// Closed set of dynamic marking kinds, in catalog order.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicKind {
    Other,
    Pppppp,
    Ppppp,
    Pppp,
    Ppp,
    Pp,
    P,
    Mp,
    Mf,
    F,
    Ff,
    Fff,
    Ffff,
    Fffff,
    Ffffff,
    Fp,
    Pf,
    Sf,
    Sfz,
    Sff,
    Sffz,
    Sfp,
    Sfpp,
    Rfz,
    Rf,
    Fz,
    M,
    R,
    S,
    Z,
    N,
}

impl DynamicKind {
    /// Every kind, in catalog order.
    pub const ALL: [DynamicKind; 31] = [
        DynamicKind::Other,
        DynamicKind::Pppppp,
        DynamicKind::Ppppp,
        DynamicKind::Pppp,
        DynamicKind::Ppp,
        DynamicKind::Pp,
        DynamicKind::P,
        DynamicKind::Mp,
        DynamicKind::Mf,
        DynamicKind::F,
        DynamicKind::Ff,
        DynamicKind::Fff,
        DynamicKind::Ffff,
        DynamicKind::Fffff,
        DynamicKind::Ffffff,
        DynamicKind::Fp,
        DynamicKind::Pf,
        DynamicKind::Sf,
        DynamicKind::Sfz,
        DynamicKind::Sff,
        DynamicKind::Sffz,
        DynamicKind::Sfp,
        DynamicKind::Sfpp,
        DynamicKind::Rfz,
        DynamicKind::Rf,
        DynamicKind::Fz,
        DynamicKind::M,
        DynamicKind::R,
        DynamicKind::S,
        DynamicKind::Z,
        DynamicKind::N,
    ];

    /// Canonical short tag used in persisted files and palettes.
    pub fn as_tag(self) -> &'static str {
        match self {
            DynamicKind::Other => "other",
            DynamicKind::Pppppp => "pppppp",
            DynamicKind::Ppppp => "ppppp",
            DynamicKind::Pppp => "pppp",
            DynamicKind::Ppp => "ppp",
            DynamicKind::Pp => "pp",
            DynamicKind::P => "p",
            DynamicKind::Mp => "mp",
            DynamicKind::Mf => "mf",
            DynamicKind::F => "f",
            DynamicKind::Ff => "ff",
            DynamicKind::Fff => "fff",
            DynamicKind::Ffff => "ffff",
            DynamicKind::Fffff => "fffff",
            DynamicKind::Ffffff => "ffffff",
            DynamicKind::Fp => "fp",
            DynamicKind::Pf => "pf",
            DynamicKind::Sf => "sf",
            DynamicKind::Sfz => "sfz",
            DynamicKind::Sff => "sff",
            DynamicKind::Sffz => "sffz",
            DynamicKind::Sfp => "sfp",
            DynamicKind::Sfpp => "sfpp",
            DynamicKind::Rfz => "rfz",
            DynamicKind::Rf => "rf",
            DynamicKind::Fz => "fz",
            DynamicKind::M => "m",
            DynamicKind::R => "r",
            DynamicKind::S => "s",
            DynamicKind::Z => "z",
            DynamicKind::N => "n",
        }
    }

    /// User-facing long name, for palettes and screen readers.
    pub fn user_name(self) -> &'static str {
        match self {
            DynamicKind::Other => "Other dynamic",
            DynamicKind::Pppppp => "Pianissississississimo",
            DynamicKind::Ppppp => "Pianississississimo",
            DynamicKind::Pppp => "Pianissississimo",
            DynamicKind::Ppp => "Pianississimo",
            DynamicKind::Pp => "Pianissimo",
            DynamicKind::P => "Piano",
            DynamicKind::Mp => "Mezzo-piano",
            DynamicKind::Mf => "Mezzo-forte",
            DynamicKind::F => "Forte",
            DynamicKind::Ff => "Fortissimo",
            DynamicKind::Fff => "Fortississimo",
            DynamicKind::Ffff => "Fortissississimo",
            DynamicKind::Fffff => "Fortississississimo",
            DynamicKind::Ffffff => "Fortissississississimo",
            DynamicKind::Fp => "Fortepiano",
            DynamicKind::Pf => "Pianoforte",
            DynamicKind::Sf => "Sforzando",
            DynamicKind::Sfz => "Sforzato",
            DynamicKind::Sff => "Sforzando fortissimo",
            DynamicKind::Sffz => "Sforzato fortissimo",
            DynamicKind::Sfp => "Sforzando piano",
            DynamicKind::Sfpp => "Sforzando pianissimo",
            DynamicKind::Rfz => "Rinforzato",
            DynamicKind::Rf => "Rinforzando",
            DynamicKind::Fz => "Forzando",
            DynamicKind::M => "Mezzo",
            DynamicKind::R => "Rinforzando",
            DynamicKind::S => "Sforzando",
            DynamicKind::Z => "Z",
            DynamicKind::N => "Niente",
        }
    }
}

/// Scope over which a marking's velocity propagates; consumed by the
/// playback mapper, stored and serialized here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicRange {
    Staff,
    #[default]
    Part,
    System,
}

impl DynamicRange {
    pub fn as_tag(self) -> &'static str {
        match self {
            DynamicRange::Staff => "staff",
            DynamicRange::Part => "part",
            DynamicRange::System => "system",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "staff" => Some(DynamicRange::Staff),
            "part" => Some(DynamicRange::Part),
            "system" => Some(DynamicRange::System),
            _ => None,
        }
    }
}

/// How quickly an accent-style velocity change decays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl DynamicSpeed {
    pub fn as_tag(self) -> &'static str {
        match self {
            DynamicSpeed::Slow => "slow",
            DynamicSpeed::Normal => "normal",
            DynamicSpeed::Fast => "fast",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "slow" => Some(DynamicSpeed::Slow),
            "normal" => Some(DynamicSpeed::Normal),
            "fast" => Some(DynamicSpeed::Fast),
            _ => None,
        }
    }

    /// Duration multiplier for the velocity ramp.
    pub fn multiplier(self) -> f64 {
        match self {
            DynamicSpeed::Slow => 1.3,
            DynamicSpeed::Normal => 0.8,
            DynamicSpeed::Fast => 0.5,
        }
    }
}

/// A dynamic marking attached to a time position in the score.
///
/// The time position itself is owned by the score segment; layout passes
/// receive it through a `SegmentView`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dynamic {
    kind: DynamicKind,
    /// Explicit velocity override; `None` means use the catalog value.
    velocity: Option<u8>,
    range: DynamicRange,
    /// Explicit velocity-change override; `None` means use the catalog delta.
    change_in_velocity: Option<i32>,
    speed: DynamicSpeed,
    /// Composed text-element base: content, placement, alignment, offsets.
    pub text: TextElement,
}

impl Dynamic {
    pub fn new() -> Self {
        Dynamic {
            kind: DynamicKind::Other,
            velocity: None,
            range: DynamicRange::Part,
            change_in_velocity: None,
            speed: DynamicSpeed::Normal,
            text: TextElement::new(),
        }
    }

    pub fn kind(&self) -> DynamicKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: DynamicKind) {
        self.kind = kind;
    }

    pub fn dynamic_range(&self) -> DynamicRange {
        self.range
    }

    pub fn set_dynamic_range(&mut self, range: DynamicRange) {
        self.range = range;
    }

    pub fn speed(&self) -> DynamicSpeed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: DynamicSpeed) {
        self.speed = speed;
    }

    /// Effective MIDI velocity: the explicit override when present, else
    /// the catalog value. `None` only for OTHER with no override.
    pub fn velocity(&self) -> Option<u8> {
        self.velocity.or(catalog::lookup(self.kind).velocity)
    }

    pub fn set_velocity(&mut self, velocity: Option<u8>) {
        self.velocity = velocity;
    }

    /// Effective change in velocity: the explicit override when present,
    /// else the catalog delta.
    pub fn change_in_velocity(&self) -> i32 {
        self.change_in_velocity
            .unwrap_or(catalog::lookup(self.kind).change_in_velocity)
    }

    /// Store an explicit velocity change. A value equal to the catalog
    /// delta clears the override instead, so a later kind change is not
    /// shadowed by a stored value that merely matched the old default.
    pub fn set_change_in_velocity(&mut self, value: i32) {
        if catalog::lookup(self.kind).change_in_velocity == value {
            self.change_in_velocity = None;
        } else {
            self.change_in_velocity = Some(value);
        }
    }

    /// Whether this kind carries a time-bounded velocity change at all.
    pub fn is_velocity_change_available(&self) -> bool {
        catalog::lookup(self.kind).accent_style
    }

    /// The musical time over which the velocity change occurs.
    ///
    /// The ramp spans a perceptually constant number of beats rather than
    /// constant wall-clock time, so it scales with the local tempo.
    pub fn velocity_change_length(&self, tempo: &TempoMap, tick: Ticks) -> Fraction {
        if self.change_in_velocity() == 0 {
            return Fraction::zero();
        }

        let ratio = tempo.tempo_at(tick) / DEFAULT_TEMPO_BPS;
        Fraction::from_ticks((ratio * (self.speed.multiplier() * DIVISION as f64)) as Ticks)
    }

    /// Resolve a subtype tag or glyph run to a catalog kind.
    ///
    /// Free text that matches no catalog row stays verbatim with kind
    /// OTHER; that is the normal path for markings like "poco f".
    pub fn set_dynamic_text(&mut self, tag: &str) {
        for kind in DynamicKind::ALL {
            let entry = catalog::lookup(kind);
            if kind.as_tag() == tag || entry.glyph_text == tag {
                self.kind = kind;
                self.text.set_text(entry.glyph_text);
                return;
            }
        }
        log::debug!("set_dynamic_text: other <{tag}>");
        self.kind = DynamicKind::Other;
        self.text.set_text(tag);
    }

    /// Collapse to OTHER when an external text edit left content that no
    /// longer matches the glyph run of the current kind.
    pub fn update_kind_from_text(&mut self) {
        if self.text.text() != catalog::glyph_text(self.kind) {
            self.kind = DynamicKind::Other;
        }
    }

    pub fn subtype_name(&self) -> &'static str {
        self.kind.as_tag()
    }

    /// Short description for accessibility surfaces: the kind's long name,
    /// or the free text itself (condensed, capped at 20 chars) for OTHER.
    pub fn accessible_text(&self) -> String {
        match self.kind {
            DynamicKind::Other => {
                let mut s = self
                    .text
                    .text()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ");
                if s.chars().count() > 20 {
                    s = s.chars().take(20).collect();
                    s.push('…');
                }
                s
            }
            kind => kind.user_name().to_string(),
        }
    }
}

impl Default for Dynamic {
    fn default() -> Self {
        Self::new()
    }
}
