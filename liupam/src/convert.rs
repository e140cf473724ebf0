//! Conversion between the conventional spelling and a compressed spelling
//! that uses one character per Na'vi letter, so that things like "find the
//! last letter of a word" become a single indexing step.
//!
//! All one-character letters map to themselves; digraphs get single-char
//! codes (`ts`→`c`, `ng`→`G`, `tx`→`T`, `px`→`P`, `kx`→`K`, `ll`→`L`,
//! `rr`→`R`, `aw`→`1`, `ay`→`2`, `ew`→`3`, `ey`→`4`). The conversion is
//! lossless for valid Na'vi words, but does not conserve capitalisation:
//! a literal `n`+`g` letter sequence decompresses to `n·g` to keep it
//! distinct from the `ng` digraph.

use smol_str::SmolStr;

const COMPRESSIONS: [(&str, &str); 11] = [
    ("ts", "c"),
    ("ng", "G"),
    ("tx", "T"),
    ("px", "P"),
    ("kx", "K"),
    ("ll", "L"),
    ("rr", "R"),
    ("aw", "1"),
    ("ay", "2"),
    ("ew", "3"),
    ("ey", "4"),
];

/// Compresses a conventionally spelled word, dropping any `·` digraph
/// breaks.
pub fn compress(word: &str) -> SmolStr {
    let mut result = word.to_string();
    for (from, to) in COMPRESSIONS {
        result = result.replace(from, to);
    }
    SmolStr::from(result.replace('·', ""))
}

/// Expands a compressed word back to the conventional spelling.
pub fn decompress(word: &str) -> SmolStr {
    let mut result = word.to_string();
    for (to, from) in [
        ("1", "aw"),
        ("2", "ay"),
        ("3", "ew"),
        ("4", "ey"),
        ("L", "ll"),
        ("R", "rr"),
        ("T", "tx"),
        ("P", "px"),
        ("K", "kx"),
        ("c", "ts"),
    ] {
        result = result.replace(to, from);
    }
    SmolStr::from(result.replace("ng", "n·g").replace('G', "ng"))
}
