//! SMuFL dynamics glyphs
//!
//! The component glyphs (U+E520..U+E526) are concatenated into the text
//! run a marking displays; the precomposed symbols carry the per-glyph
//! metrics (bounding box, optical-center anchor) used for horizontal
//! alignment.

use serde::{Deserialize, Serialize};

// ============================================================================
// Component glyph constants (SMuFL dynamics range)
// ============================================================================

/// Dynamic piano component: 𝆏 (U+E520)
pub const DYNAMIC_PIANO: char = '\u{E520}';

/// Dynamic mezzo component: 𝆐 (U+E521)
pub const DYNAMIC_MEZZO: char = '\u{E521}';

/// Dynamic forte component: 𝆑 (U+E522)
pub const DYNAMIC_FORTE: char = '\u{E522}';

/// Dynamic rinforzando component (U+E523)
pub const DYNAMIC_RINFORZANDO: char = '\u{E523}';

/// Dynamic sforzando component (U+E524)
pub const DYNAMIC_SFORZANDO: char = '\u{E524}';

/// Dynamic z component (U+E525)
pub const DYNAMIC_Z: char = '\u{E525}';

/// Dynamic niente (U+E526)
pub const DYNAMIC_NIENTE: char = '\u{E526}';

/// Precomposed SMuFL symbols referenced by the dynamics catalog.
///
/// `NoSym` stands for "no symbol": free-text dynamics have no precomposed
/// glyph and therefore no optical-center metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymId {
    NoSym,
    DynamicPiano,
    DynamicMezzo,
    DynamicForte,
    DynamicRinforzando,
    DynamicSforzando,
    DynamicZ,
    DynamicNiente,
    DynamicPPPPPP,
    DynamicPPPPP,
    DynamicPPPP,
    DynamicPPP,
    DynamicPP,
    DynamicMP,
    DynamicMF,
    DynamicPF,
    DynamicFF,
    DynamicFFF,
    DynamicFFFF,
    DynamicFFFFF,
    DynamicFFFFFF,
    DynamicFortePiano,
    DynamicForzando,
    DynamicSforzando1,
    DynamicSforzandoPiano,
    DynamicSforzandoPianissimo,
    DynamicSforzato,
    DynamicSforzatoPiano,
    DynamicSforzatoFF,
    DynamicRinforzando1,
    DynamicRinforzando2,
}

impl SymId {
    /// Canonical SMuFL glyph name; the key into the font metadata tables.
    pub fn smufl_name(self) -> &'static str {
        match self {
            SymId::NoSym => "noSym",
            SymId::DynamicPiano => "dynamicPiano",
            SymId::DynamicMezzo => "dynamicMezzo",
            SymId::DynamicForte => "dynamicForte",
            SymId::DynamicRinforzando => "dynamicRinforzando",
            SymId::DynamicSforzando => "dynamicSforzando",
            SymId::DynamicZ => "dynamicZ",
            SymId::DynamicNiente => "dynamicNiente",
            SymId::DynamicPPPPPP => "dynamicPPPPPP",
            SymId::DynamicPPPPP => "dynamicPPPPP",
            SymId::DynamicPPPP => "dynamicPPPP",
            SymId::DynamicPPP => "dynamicPPP",
            SymId::DynamicPP => "dynamicPP",
            SymId::DynamicMP => "dynamicMP",
            SymId::DynamicMF => "dynamicMF",
            SymId::DynamicPF => "dynamicPF",
            SymId::DynamicFF => "dynamicFF",
            SymId::DynamicFFF => "dynamicFFF",
            SymId::DynamicFFFF => "dynamicFFFF",
            SymId::DynamicFFFFF => "dynamicFFFFF",
            SymId::DynamicFFFFFF => "dynamicFFFFFF",
            SymId::DynamicFortePiano => "dynamicFortePiano",
            SymId::DynamicForzando => "dynamicForzando",
            SymId::DynamicSforzando1 => "dynamicSforzando1",
            SymId::DynamicSforzandoPiano => "dynamicSforzandoPiano",
            SymId::DynamicSforzandoPianissimo => "dynamicSforzandoPianissimo",
            SymId::DynamicSforzato => "dynamicSforzato",
            SymId::DynamicSforzatoPiano => "dynamicSforzatoPiano",
            SymId::DynamicSforzatoFF => "dynamicSforzatoFF",
            SymId::DynamicRinforzando1 => "dynamicRinforzando1",
            SymId::DynamicRinforzando2 => "dynamicRinforzando2",
        }
    }

    /// Unicode codepoint of the glyph, `None` for `NoSym`.
    pub fn codepoint(self) -> Option<char> {
        match self {
            SymId::NoSym => None,
            SymId::DynamicPiano => Some('\u{E520}'),
            SymId::DynamicMezzo => Some('\u{E521}'),
            SymId::DynamicForte => Some('\u{E522}'),
            SymId::DynamicRinforzando => Some('\u{E523}'),
            SymId::DynamicSforzando => Some('\u{E524}'),
            SymId::DynamicZ => Some('\u{E525}'),
            SymId::DynamicNiente => Some('\u{E526}'),
            SymId::DynamicPPPPPP => Some('\u{E527}'),
            SymId::DynamicPPPPP => Some('\u{E528}'),
            SymId::DynamicPPPP => Some('\u{E529}'),
            SymId::DynamicPPP => Some('\u{E52A}'),
            SymId::DynamicPP => Some('\u{E52B}'),
            SymId::DynamicMP => Some('\u{E52C}'),
            SymId::DynamicMF => Some('\u{E52D}'),
            SymId::DynamicPF => Some('\u{E52E}'),
            SymId::DynamicFF => Some('\u{E52F}'),
            SymId::DynamicFFF => Some('\u{E530}'),
            SymId::DynamicFFFF => Some('\u{E531}'),
            SymId::DynamicFFFFF => Some('\u{E532}'),
            SymId::DynamicFFFFFF => Some('\u{E533}'),
            SymId::DynamicFortePiano => Some('\u{E534}'),
            SymId::DynamicForzando => Some('\u{E535}'),
            SymId::DynamicSforzando1 => Some('\u{E536}'),
            SymId::DynamicSforzandoPiano => Some('\u{E537}'),
            SymId::DynamicSforzandoPianissimo => Some('\u{E538}'),
            SymId::DynamicSforzato => Some('\u{E539}'),
            SymId::DynamicSforzatoPiano => Some('\u{E53A}'),
            SymId::DynamicSforzatoFF => Some('\u{E53B}'),
            SymId::DynamicRinforzando1 => Some('\u{E53C}'),
            SymId::DynamicRinforzando2 => Some('\u{E53D}'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_sym_has_no_codepoint() {
        assert_eq!(SymId::NoSym.codepoint(), None);
    }

    #[test]
    fn test_component_constants_match_sym_ids() {
        assert_eq!(SymId::DynamicPiano.codepoint(), Some(DYNAMIC_PIANO));
        assert_eq!(SymId::DynamicForte.codepoint(), Some(DYNAMIC_FORTE));
        assert_eq!(SymId::DynamicZ.codepoint(), Some(DYNAMIC_Z));
        assert_eq!(SymId::DynamicNiente.codepoint(), Some(DYNAMIC_NIENTE));
    }
}
