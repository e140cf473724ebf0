//! Batch passes over a dictionary snapshot.
//!
//! Each pass is a pure, single-threaded function: the snapshot goes in as
//! an explicit mapping and a new artifact comes out, together with a
//! [`BatchReport`]. Entries are transformed independently, so processing
//! order never matters.

use hashbrown::HashMap;
use itertools::Itertools;
use serde::Serialize;
use smol_str::SmolStr;

use crate::annotate::annotate;
use crate::dictionary::Snapshot;
use crate::syllabifier::record::PronunciationRecord;
use crate::syllabifier::{Rejection, Syllabifier};

/// Outcome statistics of one batch pass.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BatchReport {
    /// Entries that produced an output record.
    pub accepted: usize,
    /// Multi-word expressions, skipped by policy.
    pub multi_word: usize,
    /// Entries with more than one stress pattern, skipped by policy.
    pub ambiguous_transcription: usize,
    /// One-syllable entries, skipped by policy.
    pub monosyllabic: usize,
    /// Entries whose data could not be aligned; these are defects.
    pub malformed_transcription: usize,
    /// Words excluded for operator review, sorted.
    pub flagged: Vec<SmolStr>,
}

impl BatchReport {
    fn count(&mut self, rejection: Rejection, word: &SmolStr) {
        match rejection {
            Rejection::MultiWord => self.multi_word += 1,
            Rejection::AmbiguousTranscription => self.ambiguous_transcription += 1,
            Rejection::Monosyllabic => self.monosyllabic += 1,
            Rejection::MalformedTranscription => {
                self.malformed_transcription += 1;
                self.flagged.push(word.clone());
            }
        }
    }

    fn sort_flagged(&mut self) {
        self.flagged = self.flagged.drain(..).sorted().collect();
    }
}

/// Derives a pronunciation record for every applicable entry.
///
/// Rejected entries are simply omitted from the result; rejection encodes
/// "not applicable", not failure. Only malformed entries end up in the
/// report's flagged list.
pub fn derive_pronunciations(
    snapshot: &Snapshot,
    syllabifier: &Syllabifier,
) -> (HashMap<SmolStr, PronunciationRecord>, BatchReport) {
    let mut records = HashMap::with_capacity(snapshot.len());
    let mut report = BatchReport::default();

    for (key, entry) in snapshot {
        match syllabifier.syllabify(entry) {
            Ok(record) => {
                report.accepted += 1;
                records.insert(key.clone(), record);
            }
            Err(rejection) => report.count(rejection, &entry.word),
        }
    }

    report.sort_flagged();
    (records, report)
}

/// Rewrites each entry's lemma to the bracketed annotated form.
///
/// Entries without exactly one stored pronunciation are left as they are.
/// Entries whose stored syllables do not spell out the lemma are flagged
/// and left untouched.
pub fn annotate_snapshot(mut snapshot: Snapshot) -> (Snapshot, BatchReport) {
    let mut report = BatchReport::default();

    for entry in snapshot.values_mut() {
        let form = match entry.pronunciation.as_deref() {
            Some([form]) => form,
            _ => continue,
        };
        match annotate(&entry.word, form) {
            Ok(annotated) => {
                report.accepted += 1;
                entry.word = annotated;
            }
            Err(error) => {
                log::warn!("{}", error);
                report.flagged.push(entry.word.clone());
            }
        }
    }

    report.sort_flagged();
    (snapshot, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{SourceEntry, SyllabifiedForm};

    fn entry(word: &str, transcription: &str) -> SourceEntry {
        SourceEntry {
            word: SmolStr::new(word),
            transcription: SmolStr::new(transcription),
            pronunciation: None,
            word_type: SmolStr::new("n"),
        }
    }

    fn keyed(entries: Vec<SourceEntry>) -> Snapshot {
        entries
            .into_iter()
            .map(|e| (SmolStr::from(format!("{}:{}", e.word, e.word_type)), e))
            .collect()
    }

    #[test]
    fn derive_pass_partitions_the_snapshot() {
        let snapshot = keyed(vec![
            entry("srane", "sra.ˈnɛ"),
            entry("kehe", "ˈkɛ.hɛ"),
            entry("new moon", "mɛ.srr"),
            entry("tsun", "t͡sun"),
            entry("tìng", "[tɪŋ] or [ˈtɪŋ]"),
            entry("Jakesully", "ˈd͡ʒejk.su.li"),
        ]);

        let (records, report) = derive_pronunciations(&snapshot, &Syllabifier::new());

        assert_eq!(report.accepted, 2);
        assert_eq!(report.multi_word, 1);
        assert_eq!(report.ambiguous_transcription, 1);
        assert_eq!(report.monosyllabic, 1);
        assert_eq!(report.malformed_transcription, 1);
        assert_eq!(report.flagged, vec![SmolStr::new("Jakesully")]);

        assert_eq!(records.len(), 2);
        assert_eq!(records["srane:n"].syllables, "sra-ne");
        assert_eq!(records["kehe:n"].stressed, Some(1));
    }

    #[test]
    fn annotate_pass_rewrites_lemmas() {
        let mut with_form = entry("srane", "");
        with_form.pronunciation = Some(vec![SyllabifiedForm {
            syllables: SmolStr::new("sra-ne"),
            stressed: 2,
            audio: None,
        }]);

        let mut mismatched = entry("kaltxì", "");
        mismatched.pronunciation = Some(vec![SyllabifiedForm {
            syllables: SmolStr::new("kal-txo"),
            stressed: 2,
            audio: None,
        }]);

        let mut multi_form = entry("tute", "");
        multi_form.pronunciation = Some(vec![
            SyllabifiedForm {
                syllables: SmolStr::new("tu-te"),
                stressed: 1,
                audio: None,
            },
            SyllabifiedForm {
                syllables: SmolStr::new("tu-te"),
                stressed: 2,
                audio: None,
            },
        ]);

        let bare = entry("lun", "");

        let snapshot = keyed(vec![with_form, mismatched, multi_form, bare]);
        let (updated, report) = annotate_snapshot(snapshot);

        assert_eq!(report.accepted, 1);
        assert_eq!(report.flagged, vec![SmolStr::new("kaltxì")]);
        assert_eq!(updated["srane:n"].word, "sra/[ne]");
        assert_eq!(updated["kaltxì:n"].word, "kaltxì");
        assert_eq!(updated["tute:n"].word, "tute");
        assert_eq!(updated["lun:n"].word, "lun");
    }
}
