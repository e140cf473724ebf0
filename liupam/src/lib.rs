/*! Syllabification and stress derivation for Na'vi dictionary records.

Turns raw dictionary entries into hyphenated, stress-marked pronunciation
records: either by walking an IPA-like transcription against the written
word (the [`syllabifier`] module, with its hand-verified override table for
irregular transcriptions), or by re-deriving the bracketed annotated form
from a previously stored hyphenated pronunciation (the [`annotate`]
module).

Supporting modules cover the syllable-structured word model with lenition
([`phonology`]), the lossless compressed spelling used for per-letter
processing ([`convert`]), bracketed IPA output per dialect ([`ipa`]), and
whole-snapshot batch passes ([`batch`]).

Everything here is a pure function of its inputs plus the static override
table: entries are transformed independently, in memory, with no shared
mutable state.
*/

#![warn(missing_docs)]

pub mod annotate;
pub mod batch;
pub mod case_handling;
pub mod convert;
pub mod dictionary;
pub mod ipa;
pub mod phonology;
pub mod syllabifier;

pub(crate) mod types;
