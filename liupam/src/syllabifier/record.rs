//! The derived pronunciation record.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::types::SyllableOrdinal;

/// A derived pronunciation: the written word re-segmented with `-` at the
/// syllable boundaries, plus the stressed syllable where one could be
/// determined.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronunciationRecord {
    /// The written word with `-` between syllables, letters and the
    /// glottal-stop apostrophe preserved.
    pub syllables: SmolStr,

    /// 1-based ordinal of the stressed syllable. `None` when the
    /// transcription carried no stress mark; never 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stressed: Option<SyllableOrdinal>,

    /// Number of syllables, always at least 1.
    pub syllable_count: SyllableOrdinal,
}

impl PronunciationRecord {
    /// Creates a pronunciation record.
    pub fn new(
        syllables: SmolStr,
        stressed: Option<SyllableOrdinal>,
        syllable_count: SyllableOrdinal,
    ) -> PronunciationRecord {
        PronunciationRecord {
            syllables,
            stressed,
            syllable_count,
        }
    }

    /// The written word with the syllable separators removed.
    pub fn surface_form(&self) -> SmolStr {
        SmolStr::from(self.syllables.replace('-', ""))
    }

    /// Whether removing the separators reproduces `surface` exactly.
    pub fn matches_surface(&self, surface: &str) -> bool {
        self.surface_form() == surface
    }
}
