//! Case utilities for lemma handling.

use smol_str::SmolStr;

#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

#[inline(always)]
pub fn upper_first(s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => SmolStr::from(f.to_uppercase().collect::<String>() + c.as_str()),
    }
}

/// Maps the capitalisation of `pattern` onto `target`, position by
/// position. Characters of `target` for which `is_marker` returns true are
/// caseless markers: they are emitted unchanged and do not consume a
/// pattern position.
pub fn apply_case_pattern<F>(target: &str, pattern: &str, is_marker: F) -> SmolStr
where
    F: Fn(char) -> bool,
{
    let mut pattern = pattern.chars();
    let mut out = String::with_capacity(target.len());

    for ch in target.chars() {
        if is_marker(ch) {
            out.push(ch);
            continue;
        }
        match pattern.next() {
            Some(p) if p.is_uppercase() => out.extend(ch.to_uppercase()),
            _ => out.push(ch),
        }
    }

    SmolStr::from(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower() {
        assert_eq!(lower_case("Sawtute"), "sawtute");
        assert_eq!(lower_case("LÌ'U"), "lì'u");
    }

    #[test]
    fn first() {
        assert_eq!(upper_first("tute"), "Tute");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn case_pattern_skips_markers() {
        let marker = |ch: char| matches!(ch, '[' | ']' | '/');
        assert_eq!(
            apply_case_pattern("[saw]/tu/te", "Sawtute", marker),
            "[Saw]/tu/te"
        );
        assert_eq!(
            apply_case_pattern("[ja]/ke/sul/ly", "Jakesully", marker),
            "[Ja]/ke/sul/ly"
        );
        assert_eq!(apply_case_pattern("ta/ron", "taron", marker), "ta/ron");
    }

    #[test]
    fn case_pattern_tolerates_short_patterns() {
        let marker = |ch: char| ch == '/';
        assert_eq!(apply_case_pattern("ta/ron", "TA", marker), "TA/ron");
    }
}
