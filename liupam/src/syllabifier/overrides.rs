//! Hand-verified pronunciations for entries whose transcriptions the
//! general walk cannot align.

use hashbrown::HashMap;
use smol_str::SmolStr;

use super::record::PronunciationRecord;
use crate::types::SyllableOrdinal;

/// What the table says about a surface form.
pub(crate) enum Override {
    /// Use this hand-checked record instead of walking the transcription.
    Record(PronunciationRecord),
    /// The transcription is beyond repair; reject the entry outright.
    Unusable,
}

/// `(surface form, hyphenated syllables, stressed ordinal, syllable count)`.
///
/// Monosyllabic entries are stored too; the caller's monosyllabic filter
/// still rejects them.
const ENTRIES: [(&str, &str, SyllableOrdinal, SyllableOrdinal); 23] = [
    // transcription has a parenthesised optional final vowel
    ("fìtseng", "fì-tseng", 2, 2),
    ("fìtsenge", "fì-tse-nge", 2, 3),
    ("srak", "srak", 1, 1),
    ("srake", "sra-ke", 1, 2),
    ("talun", "ta-lun", 2, 2),
    ("taluna", "ta-lun-a", 2, 3),
    ("taweyk", "ta-weyk", 2, 2),
    ("taweyka", "ta-wey-ka", 2, 3),
    ("tseng", "tseng", 1, 1),
    ("tsenge", "tse-nge", 1, 2),
    // comma used as the syllable separator
    ("stxenutìng", "stxe-nu-tìng", 1, 3),
    ("tompakel", "tom-pa-kel", 1, 3),
    ("swaynivi", "sway-ni-vi", 1, 3),
    ("ningyen", "ning-yen", 1, 2),
    // stray `+` in front of the transcription
    ("tìreyn", "tì-reyn", 2, 2),
    // spurious apostrophe in the transcription
    ("lì'uvi", "lì-'u-vi", 1, 3),
    // ejective written with a one-off substitute character
    ("fkxara", "fkxa-ra", 1, 2),
    ("fkxaranga'", "fkxa-ra-nga'", 1, 3),
    ("txeptun", "txep-tun", 1, 2),
    // no stress mark at all
    ("tsyänel", "tsyä-nel", 1, 2),
    // transcription does not match the word
    ("tìtxantslusam", "tì-txan-tslu-sam", 2, 4),
    ("kintrram", "kin-trr-am", 1, 3),
    ("kintrray", "kin-trr-ay", 1, 3),
];

/// Surface forms whose transcription is unusable even by hand.
const UNUSABLE: [&str; 1] = ["Jakesully"];

/// Static exact-match table, consulted before the general walk and fully
/// independent of it.
pub(crate) struct OverrideTable {
    map: HashMap<&'static str, Override>,
}

impl OverrideTable {
    pub(crate) fn new() -> OverrideTable {
        let mut map = HashMap::with_capacity(ENTRIES.len() + UNUSABLE.len());
        for (word, syllables, stressed, syllable_count) in ENTRIES {
            map.insert(
                word,
                Override::Record(PronunciationRecord::new(
                    SmolStr::new(syllables),
                    Some(stressed),
                    syllable_count,
                )),
            );
        }
        for word in UNUSABLE {
            map.insert(word, Override::Unusable);
        }
        OverrideTable { map }
    }

    /// Case-sensitive exact-match lookup.
    pub(crate) fn lookup(&self, word: &str) -> Option<&Override> {
        self.map.get(word)
    }
}
