//! Dictionary snapshot records as ingested by the batch passes.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::types::SyllableOrdinal;

/// A whole dictionary snapshot, keyed by the snapshot's record key.
///
/// Batch passes take a snapshot as an explicit argument and return a new
/// one; there is no process-wide dictionary state.
pub type Snapshot = HashMap<SmolStr, SourceEntry>;

/// One dictionary record as ingested. Never mutated by the algorithms.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceEntry {
    /// The orthographic word. May contain the glottal-stop apostrophe and
    /// mixed case.
    pub word: SmolStr,

    /// IPA-like phonetic string over the constrained Na'vi symbol set.
    #[serde(default)]
    pub transcription: SmolStr,

    /// Already-syllabified forms, present in later-schema snapshots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<Vec<SyllabifiedForm>>,

    /// Category tag. Opaque to the algorithms, passed through unused.
    #[serde(rename = "type")]
    pub word_type: SmolStr,
}

/// A stored pronunciation from later-schema snapshots: hyphenated
/// syllables, with the stressed one historically uppercased.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabifiedForm {
    /// Syllables joined with `-`.
    pub syllables: SmolStr,

    /// 1-based ordinal of the stressed syllable; 0 means undetermined.
    #[serde(default)]
    pub stressed: SyllableOrdinal,

    /// Pointer to a recorded pronunciation, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<SmolStr>,
}

impl SyllabifiedForm {
    /// The stressed syllable ordinal, with the stored 0 mapped to `None`.
    pub fn stressed_ordinal(&self) -> Option<SyllableOrdinal> {
        if self.stressed == 0 {
            None
        } else {
            Some(self.stressed)
        }
    }
}
