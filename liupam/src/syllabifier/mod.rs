//! Syllabification and stress derivation from phonetic transcriptions.
//!
//! The transcription and the written word are two independent symbol
//! streams that advance at different, symbol-dependent rates: prosodic
//! marks consume no letters, most phoneme symbols consume exactly one, and
//! the velar nasal may consume two. The walk keeps one cursor in each
//! stream and builds the hyphenated form as it goes.
//!
//! Irregular transcriptions (missing stress marks, stray punctuation,
//! alternate patterns) are not special-cased in the walk; they live in a
//! hand-verified override table, which replaces the walk entirely for the
//! words it lists.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use self::overrides::{Override, OverrideTable};
use self::record::PronunciationRecord;
use crate::dictionary::SourceEntry;
use crate::types::SyllableOrdinal;

mod overrides;
pub mod record;

/// Transcription symbol marking primary stress on the current syllable.
const PRIMARY_STRESS: char = 'ˈ';

/// Transcription symbol starting a new syllable.
const SYLLABLE_BREAK: char = '.';

/// Diacritics and separators with no corresponding letter in the written
/// word: digraph break, tie bar, unreleased mark, broken bar, secondary
/// stress.
const NOISE_SYMBOLS: [char; 5] = ['·', '\u{0361}', '\u{031A}', '¦', '\u{02CC}'];

/// The velar nasal, which surfaces as the `ng` digraph or as a bare `n`.
const VELAR_NASAL: char = 'ŋ';

/// Separator between alternate stress patterns within one transcription.
const ALTERNATE_PATTERN: &str = "] or [";

/// Why an entry yields no pronunciation record.
///
/// Rejection is normal control flow, not failure: the batch driver simply
/// omits rejected entries from the output artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rejection {
    /// The word contains a space; only single lexical words are handled.
    MultiWord,
    /// The transcription carries more than one stress pattern.
    AmbiguousTranscription,
    /// One syllable only, which carries no useful stress or hyphenation.
    Monosyllabic,
    /// The transcription cannot be aligned against the written word.
    MalformedTranscription,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let tag = match self {
            Rejection::MultiWord => "multi-word",
            Rejection::AmbiguousTranscription => "ambiguous-transcription",
            Rejection::Monosyllabic => "monosyllabic",
            Rejection::MalformedTranscription => "malformed-transcription",
        };
        f.write_str(tag)
    }
}

/// Derives pronunciation records from dictionary entries.
///
/// Owns the static override table, built once; lookups are O(1) and
/// entirely independent of the general walk.
pub struct Syllabifier {
    overrides: OverrideTable,
}

impl Default for Syllabifier {
    fn default() -> Syllabifier {
        Syllabifier::new()
    }
}

impl Syllabifier {
    /// Creates a syllabifier with the built-in override table.
    pub fn new() -> Syllabifier {
        Syllabifier {
            overrides: OverrideTable::new(),
        }
    }

    /// Derives the hyphenated, stress-marked record for one entry.
    pub fn syllabify(&self, entry: &SourceEntry) -> Result<PronunciationRecord, Rejection> {
        if entry.word.contains(' ') {
            return Err(Rejection::MultiWord);
        }
        if entry.transcription.contains(ALTERNATE_PATTERN) {
            return Err(Rejection::AmbiguousTranscription);
        }

        let record = match self.overrides.lookup(&entry.word) {
            Some(Override::Record(record)) => record.clone(),
            Some(Override::Unusable) => {
                log::warn!("transcription for {:?} is beyond repair, skipping", entry.word);
                return Err(Rejection::MalformedTranscription);
            }
            None => self.walk(&entry.word, &entry.transcription)?,
        };

        // The monosyllabic filter runs after the override table: the table
        // stores one-syllable entries (`tseng`, `srak`) and they are still
        // rejected here.
        if record.syllable_count == 1 {
            return Err(Rejection::Monosyllabic);
        }

        Ok(record)
    }

    /// The general dual-cursor walk over `transcription`, aligned against
    /// the letters of `word`.
    fn walk(&self, word: &str, transcription: &str) -> Result<PronunciationRecord, Rejection> {
        let letters: Vec<char> = word.chars().collect();
        let mut cursor = 0usize;
        let mut syllables = String::with_capacity(word.len() + 4);
        let mut syllable: SyllableOrdinal = 1;
        let mut stressed: Option<SyllableOrdinal> = None;

        for symbol in transcription.chars() {
            match symbol {
                PRIMARY_STRESS => stressed = Some(syllable),
                SYLLABLE_BREAK => {
                    syllable += 1;
                    syllables.push('-');
                }
                symbol if NOISE_SYMBOLS.contains(&symbol) => {}
                symbol => {
                    let letter = match letters.get(cursor) {
                        Some(letter) => *letter,
                        None => {
                            log::warn!(
                                "transcription {:?} for {:?} runs past the end of the word (at {:?})",
                                transcription,
                                word,
                                symbol
                            );
                            return Err(Rejection::MalformedTranscription);
                        }
                    };
                    syllables.push(letter);
                    cursor += 1;

                    // ŋ surfaces as the `ng` digraph, except where the
                    // spelling has a bare `n` (as in `zenke`).
                    if symbol == VELAR_NASAL && letters.get(cursor) == Some(&'g') {
                        syllables.push('g');
                        cursor += 1;
                    }
                }
            }
        }

        if cursor != letters.len() {
            log::warn!(
                "transcription {:?} for {:?} leaves {} letter(s) unconsumed",
                transcription,
                word,
                letters.len() - cursor
            );
            return Err(Rejection::MalformedTranscription);
        }

        if stressed.is_some() && syllable == 1 {
            // Overlaps with the monosyllabic filter; flag rather than trust.
            log::warn!("explicit stress mark on the one-syllable word {:?}", word);
        }

        Ok(PronunciationRecord::new(
            SmolStr::from(syllables),
            stressed,
            syllable,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, transcription: &str) -> SourceEntry {
        SourceEntry {
            word: SmolStr::new(word),
            transcription: SmolStr::new(transcription),
            pronunciation: None,
            word_type: SmolStr::new("n"),
        }
    }

    #[test]
    fn derives_stress_and_boundaries() {
        let record = Syllabifier::new()
            .syllabify(&entry("srane", "sra.ˈnɛ"))
            .unwrap();
        assert_eq!(record.syllables, "sra-ne");
        assert_eq!(record.stressed, Some(2));
        assert_eq!(record.syllable_count, 2);
        assert!(record.matches_surface("srane"));
    }

    #[test]
    fn copies_the_apostrophe() {
        let record = Syllabifier::new()
            .syllabify(&entry("lì'u", "ˈlɪ.ʔu"))
            .unwrap();
        assert_eq!(record.syllables, "lì-'u");
        assert_eq!(record.stressed, Some(1));
    }

    #[test]
    fn ignores_noise_symbols() {
        let record = Syllabifier::new()
            .syllabify(&entry("tsampay", "t\u{0361}sam.ˈpa¦j"))
            .unwrap();
        assert_eq!(record.syllables, "tsam-pay");
        assert_eq!(record.stressed, Some(2));
    }

    #[test]
    fn velar_nasal_consumes_the_digraph() {
        let record = Syllabifier::new()
            .syllabify(&entry("tanga", "ˈta.ŋa"))
            .unwrap();
        assert_eq!(record.syllables, "ta-nga");
        assert_eq!(record.syllable_count, 2);
    }

    #[test]
    fn velar_nasal_leaves_a_bare_n_alone() {
        let record = Syllabifier::new()
            .syllabify(&entry("zenke", "ˈzɛŋ.kɛ"))
            .unwrap();
        assert_eq!(record.syllables, "zen-ke");
        assert_eq!(record.stressed, Some(1));
    }

    #[test]
    fn missing_stress_mark_is_undetermined_not_first() {
        let record = Syllabifier::new()
            .syllabify(&entry("srane", "sra.nɛ"))
            .unwrap();
        assert_eq!(record.stressed, None);
        assert_eq!(record.syllable_count, 2);
    }

    #[test]
    fn rejects_multi_word_expressions() {
        assert_eq!(
            Syllabifier::new().syllabify(&entry("new moon", "mɛ.ˈsrr")),
            Err(Rejection::MultiWord)
        );
    }

    #[test]
    fn rejects_alternate_stress_patterns() {
        assert_eq!(
            Syllabifier::new().syllabify(&entry("tìng", "[tɪŋ] or [ˈtɪŋ]")),
            Err(Rejection::AmbiguousTranscription)
        );
    }

    #[test]
    fn rejects_monosyllables_from_the_walk() {
        assert_eq!(
            Syllabifier::new().syllabify(&entry("tsun", "ˈt\u{0361}sun")),
            Err(Rejection::Monosyllabic)
        );
    }

    #[test]
    fn rejects_monosyllabic_override_entries() {
        // `tseng` is in the override table with one syllable; the filter
        // still applies to it.
        assert_eq!(
            Syllabifier::new().syllabify(&entry("tseng", "t͡sɛŋ")),
            Err(Rejection::Monosyllabic)
        );
    }

    #[test]
    fn override_table_bypasses_the_walk() {
        // The transcription has a parenthesised variant no walk could
        // align; the stored record wins.
        let record = Syllabifier::new()
            .syllabify(&entry("fìtseng", "fɪ.ˈt͡sɛŋ(ɛ)"))
            .unwrap();
        assert_eq!(record.syllables, "fì-tseng");
        assert_eq!(record.stressed, Some(2));
        assert_eq!(record.syllable_count, 2);
    }

    #[test]
    fn unusable_override_entries_are_malformed() {
        assert_eq!(
            Syllabifier::new().syllabify(&entry("Jakesully", "ˈd͡ʒejk.ˈsu.li")),
            Err(Rejection::MalformedTranscription)
        );
    }

    #[test]
    fn overrun_transcription_is_malformed() {
        assert_eq!(
            Syllabifier::new().syllabify(&entry("ta", "ta.ra")),
            Err(Rejection::MalformedTranscription)
        );
    }

    #[test]
    fn leftover_letters_are_malformed() {
        assert_eq!(
            Syllabifier::new().syllabify(&entry("tarap", "ta.ra")),
            Err(Rejection::MalformedTranscription)
        );
    }

    #[test]
    fn rejection_tags_serialize_in_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Rejection::MultiWord).unwrap(),
            "\"multi-word\""
        );
        assert_eq!(
            serde_json::to_string(&Rejection::AmbiguousTranscription).unwrap(),
            "\"ambiguous-transcription\""
        );
        assert_eq!(Rejection::MalformedTranscription.to_string(), "malformed-transcription");
    }
}
