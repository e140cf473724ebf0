//! Derives bracketed IPA strings from stored pronunciations.

use smol_str::SmolStr;

use crate::case_handling::lower_case;
use crate::convert;
use crate::dictionary::SyllabifiedForm;
use crate::phonology::is_vowel;
use crate::types::SyllableOrdinal;

/// The two spoken dialects, which differ in a handful of realisations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    /// The forest dialect.
    Forest,
    /// The reef dialect.
    Reef,
}

/// Context for mapping one compressed letter to IPA.
struct LetterContext {
    dialect: Dialect,
    /// First letter of its syllable.
    first: bool,
    /// Last letter of its syllable.
    last: bool,
    /// Last letter of the previous syllable, if any.
    previous: Option<char>,
    /// Next compressed letter within the syllable, if any.
    next: Option<char>,
    stressed: bool,
    next_starts_with_ejective: bool,
}

/// Derives the IPA rendering of a stored pronunciation.
///
/// `si`-verb types (`n:si`, `nv:si`) get their particle appended inside
/// the brackets.
pub fn generate(form: &SyllabifiedForm, word_type: &str, dialect: Dialect) -> String {
    let syllables: Vec<&str> = form.syllables.split('-').collect();
    let mut ipa = String::new();
    let mut last_of_previous: Option<char> = None;

    for (j, syllable) in syllables.iter().enumerate() {
        if j > 0 {
            ipa.push('.');
        }
        let stressed = j as SyllableOrdinal + 1 == form.stressed;
        if stressed && syllables.len() > 1 {
            ipa.push('ˈ');
        }

        let next = syllables.get(j + 1);
        let next_starts_with_ejective = next.map_or(false, |s| s.chars().nth(1) == Some('x'));
        let next_starts_with_vowel =
            next.map_or(false, |s| s.chars().next().map_or(false, is_vowel));

        ipa.push_str(&syllable_ipa(
            syllable,
            dialect,
            last_of_previous,
            next_starts_with_ejective,
            stressed,
        ));

        last_of_previous = syllable.chars().last();
        // Syllable-final p/t/k not followed by a vowel is unreleased.
        if matches!(last_of_previous, Some('p' | 't' | 'k')) && !next_starts_with_vowel {
            ipa.push('\u{031A}');
        }
    }

    if word_type == "n:si" || word_type == "nv:si" {
        ipa.push_str(" si");
    }

    format!("[{}]", ipa)
}

fn syllable_ipa(
    text: &str,
    dialect: Dialect,
    previous: Option<char>,
    next_starts_with_ejective: bool,
    stressed: bool,
) -> String {
    let compressed: SmolStr = convert::compress(&lower_case(text));
    let letters: Vec<char> = compressed.chars().collect();
    let mut ipa = String::new();
    let mut i = 0;

    while i < letters.len() {
        // Palatalised clusters span two compressed letters.
        if letters.get(i + 1) == Some(&'y') && matches!(letters[i], 'c' | 's') {
            ipa.push_str(match (letters[i], dialect) {
                ('c', Dialect::Reef) => "t͡ʃ",
                ('c', Dialect::Forest) => "t͡sj",
                (_, Dialect::Reef) => "ʃ",
                (_, Dialect::Forest) => "sj",
            });
            i += 2;
            continue;
        }

        let context = LetterContext {
            dialect,
            first: i == 0,
            last: i == letters.len() - 1,
            previous,
            next: letters.get(i + 1).copied(),
            stressed,
            next_starts_with_ejective,
        };
        ipa.push_str(&letter_ipa(letters[i], &context));
        i += 1;
    }

    ipa
}

fn letter_ipa(letter: char, context: &LetterContext) -> String {
    let reef = context.dialect == Dialect::Reef;
    let mapped: &str = match letter {
        '\'' => {
            let between_vowels = context.first
                && context.previous.map_or(false, is_vowel)
                && context.next.map_or(false, is_vowel);
            if !reef || !between_vowels {
                "ʔ"
            } else if context.previous == context.next {
                // Reef optionally drops the glottal stop between two equal
                // vowels, and always drops it between unequal ones.
                "(ʔ)"
            } else {
                ""
            }
        }
        'c' => "t͡s",
        'G' => "ŋ",
        'r' => "ɾ",
        'y' => "j",
        'ì' => "ɪ",
        'e' => "ɛ",
        'ä' => {
            if reef && !context.stressed {
                "(æ~ɛ)"
            } else {
                "æ"
            }
        }
        'u' => {
            if !reef && !context.last {
                "(u~ʊ)"
            } else {
                "u"
            }
        }
        'ù' => {
            if reef {
                "ʊ"
            } else if context.last {
                "u"
            } else {
                "(u~ʊ)"
            }
        }
        'R' => "r̩ː",
        'L' => "l̩ː",
        'P' | 'T' | 'K' => {
            let voiced = reef
                && (context.first || (context.last && context.next_starts_with_ejective));
            match (letter, voiced) {
                ('P', true) => "b",
                ('P', false) => "p’",
                ('T', true) => "d",
                ('T', false) => "t’",
                (_, true) => "ɡ",
                (_, false) => "k’",
            }
        }
        '1' => "aw",
        '2' => "aj",
        '3' => "ɛw",
        '4' => "ɛj",
        other => return other.to_string(),
    };
    mapped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(syllables: &str, stressed: SyllableOrdinal) -> SyllabifiedForm {
        SyllabifiedForm {
            syllables: SmolStr::new(syllables),
            stressed,
            audio: None,
        }
    }

    #[test]
    fn marks_stress_and_boundaries() {
        assert_eq!(generate(&form("sra-ne", 2), "intj", Dialect::Forest), "[sɾa.ˈnɛ]");
    }

    #[test]
    fn single_syllable_words_get_no_stress_mark() {
        assert_eq!(
            generate(&form("tsun", 1), "vim", Dialect::Forest),
            "[t͡s(u~ʊ)n]"
        );
    }

    #[test]
    fn renders_digraphs_as_single_phonemes() {
        assert_eq!(
            generate(&form("tse-nge", 1), "n", Dialect::Forest),
            "[ˈt͡sɛ.ŋɛ]"
        );
    }

    #[test]
    fn marks_unreleased_stops() {
        assert_eq!(
            generate(&form("txep-tun", 1), "n", Dialect::Forest),
            "[ˈt’ɛp\u{031A}.t(u~ʊ)n]"
        );
    }

    #[test]
    fn voices_reef_onset_ejectives() {
        assert_eq!(generate(&form("txe-le", 1), "n", Dialect::Reef), "[ˈdɛ.lɛ]");
        assert_eq!(
            generate(&form("txe-le", 1), "n", Dialect::Forest),
            "[ˈt’ɛ.lɛ]"
        );
    }

    #[test]
    fn palatalised_clusters_differ_per_dialect() {
        assert_eq!(
            generate(&form("tsyä-nel", 1), "n", Dialect::Forest),
            "[ˈt͡sjæ.nɛl]"
        );
        assert_eq!(
            generate(&form("tsyä-nel", 1), "n", Dialect::Reef),
            "[ˈt͡ʃæ.nɛl]"
        );
    }

    #[test]
    fn reef_relaxes_the_glottal_stop_between_equal_vowels() {
        assert_eq!(generate(&form("tu-'u", 1), "n", Dialect::Reef), "[ˈtu.(ʔ)u]");
        assert_eq!(generate(&form("tu-'u", 1), "n", Dialect::Forest), "[ˈtu.ʔu]");
        assert_eq!(generate(&form("ta-'u", 1), "n", Dialect::Reef), "[ˈta.u]");
    }

    #[test]
    fn appends_the_si_particle() {
        assert_eq!(
            generate(&form("win-säpey", 0), "n:si", Dialect::Forest),
            "[win.sæpɛj si]"
        );
    }
}
