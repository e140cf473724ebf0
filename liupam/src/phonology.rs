//! Na'vi phonology: the syllable-structured word model, vowel and
//! diphthong classification, and lenition.
//!
//! Syllable splits are written with slashes and the stressed syllable is
//! enclosed in brackets, as in `[ta]/ron/yu` or `so/le/i/[a]`.
//! Single-syllable words don't get stressed syllable brackets.

use std::fmt;

use itertools::Itertools;
use smol_str::SmolStr;

use crate::case_handling::{lower_case, upper_first};
use crate::types::SyllableOrdinal;

const VOWELS: [char; 9] = ['a', 'ä', 'e', 'é', 'i', 'ì', 'o', 'u', 'ù'];
const DIPHTHONGS: [&str; 4] = ["aw", "ay", "ew", "ey"];

/// Initial-consonant lenition pairs, longest spellings first.
const LENITIONS: [(&str, &str); 11] = [
    ("ts", "s"),
    ("tx", "t"),
    ("px", "p"),
    ("kx", "k"),
    ("t", "s"),
    ("p", "f"),
    ("k", "h"),
    ("d", "t"),
    ("b", "p"),
    ("g", "k"),
    ("'", ""),
];

/// Whether `ch` is a Na'vi vowel (case-insensitive).
pub fn is_vowel(ch: char) -> bool {
    ch.to_lowercase().all(|c| VOWELS.contains(&c))
}

/// Whether `s` is one of the four diphthongs (case-insensitive).
pub fn is_diphthong(s: &str) -> bool {
    DIPHTHONGS.contains(&lower_case(s).as_str())
}

/// One syllable of a word, with its stress flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Syllable {
    text: SmolStr,
    stressed: bool,
}

impl Syllable {
    /// Creates a syllable from its spelling.
    pub fn new(text: &str, stressed: bool) -> Syllable {
        Syllable {
            text: SmolStr::new(text),
            stressed,
        }
    }

    /// The syllable's spelling.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this syllable carries primary stress.
    pub fn is_stressed(&self) -> bool {
        self.stressed
    }

    /// Whether the initial consonant can lenite.
    ///
    /// `'ll` and `'rr` never lenite: `rr` and `ll` cannot start a syllable.
    pub fn is_lenitable(&self) -> bool {
        let lower = lower_case(&self.text);
        if lower.starts_with("'ll") || lower.starts_with("'rr") {
            return false;
        }
        LENITIONS.iter().any(|(from, _)| lower.starts_with(from))
    }

    /// This syllable with its initial consonant lenited, preserving an
    /// initial uppercase letter.
    pub fn lenited(&self) -> Syllable {
        if !self.is_lenitable() {
            return self.clone();
        }

        let lower = lower_case(&self.text);
        let mut result = self.clone();
        for (from, to) in LENITIONS {
            if lower.starts_with(from) {
                result.text = SmolStr::from(format!("{}{}", to, &self.text[from.len()..]));
                break;
            }
        }

        let first_is_upper = self.text.chars().next().map_or(false, char::is_uppercase);
        if first_is_upper {
            result.text = upper_first(&result.text);
        }
        result
    }
}

/// A word split into syllables.
///
/// Always holds at least one syllable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    syllables: Vec<Syllable>,
}

impl Word {
    /// Parses the bracket/slash form, e.g. `so/le/i/[a]`.
    ///
    /// A single-syllable word is implicitly stressed.
    pub fn parse(word: &str) -> Word {
        let mut syllables: Vec<Syllable> = word
            .split('/')
            .map(|s| {
                match s.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
                    Some(inner) => Syllable::new(inner, true),
                    None => Syllable::new(s, false),
                }
            })
            .collect();
        if syllables.len() == 1 {
            syllables[0].stressed = true;
        }
        Word { syllables }
    }

    /// Builds a word from a hyphenated syllable string and a 1-based
    /// stressed syllable ordinal.
    pub fn from_hyphenated(syllables: &str, stressed: Option<SyllableOrdinal>) -> Word {
        let stressed = stressed.map(|s| s as usize);
        let syllables = syllables
            .split('-')
            .enumerate()
            .map(|(i, text)| Syllable::new(text, stressed == Some(i + 1)))
            .collect();
        Word { syllables }
    }

    /// The word's letters with all syllable structure removed.
    pub fn raw(&self) -> SmolStr {
        SmolStr::from(self.syllables.iter().map(Syllable::text).collect::<String>())
    }

    /// Number of syllables.
    pub fn syllable_count(&self) -> SyllableOrdinal {
        self.syllables.len() as SyllableOrdinal
    }

    /// 1-based ordinal of the stressed syllable, if any is marked.
    pub fn stressed_ordinal(&self) -> Option<SyllableOrdinal> {
        self.syllables
            .iter()
            .position(Syllable::is_stressed)
            .map(|i| i as SyllableOrdinal + 1)
    }

    /// The first syllable.
    pub fn first_syllable(&self) -> &Syllable {
        &self.syllables[0]
    }

    /// The last syllable.
    pub fn last_syllable(&self) -> &Syllable {
        &self.syllables[self.syllables.len() - 1]
    }

    /// Whether the word starts with a plain vowel (not a diphthong).
    pub fn starts_with_vowel(&self) -> bool {
        let first = self.first_syllable().text();
        first.chars().next().map_or(false, is_vowel) && !self.starts_with_diphthong()
    }

    /// Whether the word starts with a diphthong.
    pub fn starts_with_diphthong(&self) -> bool {
        let first = self.first_syllable().text();
        let prefix: String = first.chars().take(2).collect();
        prefix.chars().count() == 2 && is_diphthong(&prefix)
    }

    /// Whether the word starts with a consonant.
    pub fn starts_with_consonant(&self) -> bool {
        let first = self.first_syllable().text();
        !first.chars().next().map_or(false, is_vowel)
    }

    /// Whether the word ends with a plain vowel.
    pub fn ends_with_vowel(&self) -> bool {
        let last = self.last_syllable().text();
        last.chars().last().map_or(false, is_vowel)
    }

    /// Whether the word ends with a diphthong.
    pub fn ends_with_diphthong(&self) -> bool {
        let last = self.last_syllable().text();
        let chars: Vec<char> = last.chars().collect();
        if chars.len() < 2 {
            return false;
        }
        let suffix: String = chars[chars.len() - 2..].iter().collect();
        is_diphthong(&suffix)
    }

    /// Whether the word ends with a consonant.
    pub fn ends_with_consonant(&self) -> bool {
        !self.ends_with_vowel() && !self.ends_with_diphthong()
    }

    /// Whether the first syllable's initial consonant can lenite.
    pub fn is_lenitable(&self) -> bool {
        self.first_syllable().is_lenitable()
    }

    /// This word with its first syllable lenited.
    pub fn lenite(&self) -> Word {
        let mut result = self.clone();
        result.syllables[0] = self.first_syllable().lenited();
        result
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let multi = self.syllables.len() > 1;
        let rendered = self
            .syllables
            .iter()
            .map(|s| {
                if s.stressed && multi {
                    format!("[{}]", s.text)
                } else {
                    s.text.to_string()
                }
            })
            .join("/");
        f.write_str(&rendered)
    }
}
