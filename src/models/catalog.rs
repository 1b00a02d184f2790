//! Immutable dynamics catalog
//!
//! One row per `DynamicKind`: the associated MIDI velocity, the velocity
//! change implied by an accent-style marking, and the SMuFL glyph run that
//! renders it. See: http://en.wikipedia.org/wiki/File:Dynamic's_Note_Velocity.svg

use super::dynamics::DynamicKind;
use crate::fonts::glyphs::SymId;

/// Catalog row for a single dynamic kind.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Associated MIDI velocity (0-127); `None` for free-text dynamics.
    pub velocity: Option<u8>,
    /// Change in velocity implied by an accent-style attack.
    pub change_in_velocity: i32,
    /// Whether the kind carries a time-bounded velocity change.
    pub accent_style: bool,
    /// Component glyph run; empty for OTHER (free text supplies the glyphs).
    pub glyph_text: &'static str,
    /// Precomposed symbol carrying the optical-center metrics.
    pub sym: SymId,
}

static DYN_TABLE: [CatalogEntry; 31] = [
    // OTHER
    CatalogEntry { velocity: None, change_in_velocity: 0, accent_style: false, glyph_text: "", sym: SymId::NoSym },
    // pppppp .. p
    CatalogEntry { velocity: Some(1), change_in_velocity: 0, accent_style: false, glyph_text: "\u{E520}\u{E520}\u{E520}\u{E520}\u{E520}\u{E520}", sym: SymId::DynamicPPPPPP },
    CatalogEntry { velocity: Some(5), change_in_velocity: 0, accent_style: false, glyph_text: "\u{E520}\u{E520}\u{E520}\u{E520}\u{E520}", sym: SymId::DynamicPPPPP },
    CatalogEntry { velocity: Some(10), change_in_velocity: 0, accent_style: false, glyph_text: "\u{E520}\u{E520}\u{E520}\u{E520}", sym: SymId::DynamicPPPP },
    CatalogEntry { velocity: Some(16), change_in_velocity: 0, accent_style: false, glyph_text: "\u{E520}\u{E520}\u{E520}", sym: SymId::DynamicPPP },
    CatalogEntry { velocity: Some(33), change_in_velocity: 0, accent_style: false, glyph_text: "\u{E520}\u{E520}", sym: SymId::DynamicPP },
    CatalogEntry { velocity: Some(49), change_in_velocity: 0, accent_style: false, glyph_text: "\u{E520}", sym: SymId::DynamicPiano },
    // mp, mf
    CatalogEntry { velocity: Some(64), change_in_velocity: 0, accent_style: false, glyph_text: "\u{E521}\u{E520}", sym: SymId::DynamicMP },
    CatalogEntry { velocity: Some(80), change_in_velocity: 0, accent_style: false, glyph_text: "\u{E521}\u{E522}", sym: SymId::DynamicMF },
    // f .. ffffff
    CatalogEntry { velocity: Some(96), change_in_velocity: 0, accent_style: false, glyph_text: "\u{E522}", sym: SymId::DynamicForte },
    CatalogEntry { velocity: Some(112), change_in_velocity: 0, accent_style: false, glyph_text: "\u{E522}\u{E522}", sym: SymId::DynamicFF },
    CatalogEntry { velocity: Some(126), change_in_velocity: 0, accent_style: false, glyph_text: "\u{E522}\u{E522}\u{E522}", sym: SymId::DynamicFFF },
    CatalogEntry { velocity: Some(127), change_in_velocity: 0, accent_style: false, glyph_text: "\u{E522}\u{E522}\u{E522}\u{E522}", sym: SymId::DynamicFFFF },
    CatalogEntry { velocity: Some(127), change_in_velocity: 0, accent_style: false, glyph_text: "\u{E522}\u{E522}\u{E522}\u{E522}\u{E522}", sym: SymId::DynamicFFFFF },
    CatalogEntry { velocity: Some(127), change_in_velocity: 0, accent_style: false, glyph_text: "\u{E522}\u{E522}\u{E522}\u{E522}\u{E522}\u{E522}", sym: SymId::DynamicFFFFFF },
    // fp, pf
    CatalogEntry { velocity: Some(96), change_in_velocity: -47, accent_style: true, glyph_text: "\u{E522}\u{E520}", sym: SymId::DynamicFortePiano },
    CatalogEntry { velocity: Some(49), change_in_velocity: 47, accent_style: false, glyph_text: "\u{E520}\u{E522}", sym: SymId::DynamicPF },
    // sforzando family
    CatalogEntry { velocity: Some(112), change_in_velocity: -18, accent_style: true, glyph_text: "\u{E524}\u{E522}", sym: SymId::DynamicSforzando1 },
    CatalogEntry { velocity: Some(112), change_in_velocity: -18, accent_style: true, glyph_text: "\u{E524}\u{E522}\u{E525}", sym: SymId::DynamicSforzato },
    CatalogEntry { velocity: Some(126), change_in_velocity: -18, accent_style: true, glyph_text: "\u{E524}\u{E522}\u{E522}", sym: SymId::DynamicSforzatoFF },
    CatalogEntry { velocity: Some(126), change_in_velocity: -18, accent_style: true, glyph_text: "\u{E524}\u{E522}\u{E522}\u{E525}", sym: SymId::DynamicSforzatoFF },
    CatalogEntry { velocity: Some(112), change_in_velocity: -47, accent_style: true, glyph_text: "\u{E524}\u{E522}\u{E520}", sym: SymId::DynamicSforzandoPiano },
    CatalogEntry { velocity: Some(112), change_in_velocity: -79, accent_style: true, glyph_text: "\u{E524}\u{E522}\u{E520}\u{E520}", sym: SymId::DynamicSforzandoPianissimo },
    // rinforzando family, fz
    CatalogEntry { velocity: Some(112), change_in_velocity: -18, accent_style: true, glyph_text: "\u{E523}\u{E522}\u{E525}", sym: SymId::DynamicRinforzando2 },
    CatalogEntry { velocity: Some(112), change_in_velocity: -18, accent_style: true, glyph_text: "\u{E523}\u{E522}", sym: SymId::DynamicRinforzando1 },
    CatalogEntry { velocity: Some(112), change_in_velocity: -18, accent_style: true, glyph_text: "\u{E522}\u{E525}", sym: SymId::DynamicForzando },
    // single-letter kinds
    CatalogEntry { velocity: Some(96), change_in_velocity: -16, accent_style: true, glyph_text: "\u{E521}", sym: SymId::DynamicMezzo },
    CatalogEntry { velocity: Some(112), change_in_velocity: -18, accent_style: true, glyph_text: "\u{E523}", sym: SymId::DynamicRinforzando },
    CatalogEntry { velocity: Some(112), change_in_velocity: -18, accent_style: true, glyph_text: "\u{E524}", sym: SymId::DynamicSforzando },
    CatalogEntry { velocity: Some(80), change_in_velocity: 0, accent_style: false, glyph_text: "\u{E525}", sym: SymId::DynamicZ },
    CatalogEntry { velocity: Some(49), change_in_velocity: -48, accent_style: false, glyph_text: "\u{E526}", sym: SymId::DynamicNiente },
];

/// Catalog row for `kind`. Total over the closed enumeration, O(1).
pub fn lookup(kind: DynamicKind) -> &'static CatalogEntry {
    &DYN_TABLE[kind as usize]
}

/// Glyph run rendered for a catalog kind; empty for OTHER.
pub fn glyph_text(kind: DynamicKind) -> &'static str {
    lookup(kind).glyph_text
}

/// Reverse lookup by canonical short tag ("sfz"). First match wins.
pub fn kind_from_tag(tag: &str) -> Option<DynamicKind> {
    DynamicKind::ALL.iter().copied().find(|k| k.as_tag() == tag)
}

/// Reverse lookup by a previously emitted glyph run, matched verbatim.
pub fn kind_from_glyph_text(text: &str) -> Option<DynamicKind> {
    DynamicKind::ALL
        .iter()
        .copied()
        .find(|&k| lookup(k).glyph_text == text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_kind() {
        assert_eq!(DYN_TABLE.len(), DynamicKind::ALL.len());
        for kind in DynamicKind::ALL {
            // indexing must agree with declaration order
            let _ = lookup(kind);
        }
    }

    #[test]
    fn test_base_velocities() {
        assert_eq!(lookup(DynamicKind::P).velocity, Some(49));
        assert_eq!(lookup(DynamicKind::Mf).velocity, Some(80));
        assert_eq!(lookup(DynamicKind::Fff).velocity, Some(126));
        assert_eq!(lookup(DynamicKind::Other).velocity, None);
    }

    #[test]
    fn test_accent_style_rows() {
        assert!(lookup(DynamicKind::Sfz).accent_style);
        assert_eq!(lookup(DynamicKind::Sfz).change_in_velocity, -18);
        assert!(lookup(DynamicKind::Fp).accent_style);
        assert!(lookup(DynamicKind::M).accent_style);
        // pf, z and n carry a delta but no time-bounded change
        assert!(!lookup(DynamicKind::Pf).accent_style);
        assert!(!lookup(DynamicKind::Z).accent_style);
        assert!(!lookup(DynamicKind::N).accent_style);
    }

    #[test]
    fn test_reverse_lookup_by_tag() {
        assert_eq!(kind_from_tag("sfz"), Some(DynamicKind::Sfz));
        assert_eq!(kind_from_tag("pppppp"), Some(DynamicKind::Pppppp));
        assert_eq!(kind_from_tag("poco f"), None);
    }

    #[test]
    fn test_reverse_lookup_by_glyph_text() {
        let mf = glyph_text(DynamicKind::Mf);
        assert_eq!(kind_from_glyph_text(mf), Some(DynamicKind::Mf));
        assert_eq!(kind_from_glyph_text("poco f"), None);
        // the empty run belongs to OTHER, and OTHER is scanned first
        assert_eq!(kind_from_glyph_text(""), Some(DynamicKind::Other));
    }
}
