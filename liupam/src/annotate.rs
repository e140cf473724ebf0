//! Re-derivation of the bracketed pronunciation form from stored
//! hyphenated pronunciations.
//!
//! Later-schema snapshots carry a coarse hyphenated pronunciation with the
//! stressed syllable uppercased. [`annotate`] turns that into the
//! canonical bracket/slash form (`fì/[tse]/nge`), verifies it against the
//! lemma letter by letter, and restores the lemma's capitalisation.

use smol_str::SmolStr;

use crate::case_handling::{apply_case_pattern, lower_case};
use crate::dictionary::SyllabifiedForm;
use crate::phonology::Word;

/// Failure to re-derive; the entry must be flagged for manual review
/// rather than silently given a possibly-wrong annotation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AnnotateError {
    /// The stored syllables do not add back up to the lemma.
    #[error("syllables {syllables:?} do not spell out the lemma {word:?}")]
    SurfaceMismatch {
        /// The lemma as stored in the snapshot.
        word: SmolStr,
        /// The hyphenated syllables that failed to match it.
        syllables: SmolStr,
    },
}

/// Structural markers of the annotated form. They carry no case and are
/// skipped by the capitalisation transfer.
fn is_marker(ch: char) -> bool {
    matches!(ch, '[' | ']' | '/')
}

/// Lemmas write the reef vowel `ù` as plain `u`; pronunciations keep it.
fn transliterate(s: &str) -> String {
    s.replace('ù', "u")
}

/// Derives the bracket/slash annotated form of `word` from its stored
/// pronunciation, preserving the lemma's capitalisation pattern.
pub fn annotate(word: &str, form: &SyllabifiedForm) -> Result<SmolStr, AnnotateError> {
    let annotated =
        Word::from_hyphenated(&lower_case(&form.syllables), form.stressed_ordinal()).to_string();

    let raw: String = annotated.chars().filter(|ch| !is_marker(*ch)).collect();
    if transliterate(&raw) != lower_case(word).as_str() {
        return Err(AnnotateError::SurfaceMismatch {
            word: word.into(),
            syllables: form.syllables.clone(),
        });
    }

    Ok(apply_case_pattern(&annotated, word, is_marker))
}
