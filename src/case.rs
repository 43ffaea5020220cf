/// Uppercases the first character of `word` and lowercases the rest.
///
/// An empty word maps to the empty string; callers decide whether that is
/// acceptable.
pub fn pascalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_word() {
        assert_eq!(pascalize("alice"), "Alice");
    }

    #[test]
    fn test_uppercase_word() {
        assert_eq!(pascalize("BOB"), "Bob");
    }

    #[test]
    fn test_mixed_case_word() {
        assert_eq!(pascalize("cArL"), "Carl");
    }

    #[test]
    fn test_single_char() {
        assert_eq!(pascalize("z"), "Z");
        assert_eq!(pascalize("Z"), "Z");
    }

    #[test]
    fn test_empty() {
        assert_eq!(pascalize(""), "");
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(pascalize("9LIVES"), "9lives");
        assert_eq!(pascalize("o'NEIL-SMITH"), "O'neil-smith");
    }

    #[test]
    fn test_non_ascii_letters() {
        assert_eq!(pascalize("éLAN"), "Élan");
    }

    #[test]
    fn test_multi_char_mappings() {
        assert_eq!(pascalize("ßEN"), "SSen");
        assert_eq!(pascalize("xİ"), "Xi\u{307}");
    }

    #[test]
    fn test_matches_ascii_definition() {
        for w in ["a", "ab", "AB", "aB", "Ab", "hELLOwORLD", "QwErTy", "x"] {
            let expected = format!(
                "{}{}",
                w[..1].to_ascii_uppercase(),
                w[1..].to_ascii_lowercase()
            );
            assert_eq!(pascalize(w), expected, "word {w:?}");
        }
    }

    #[test]
    fn test_idempotent() {
        for w in ["alice", "BOB", "cArL", "Zoe", "mCdONALD"] {
            let once = pascalize(w);
            assert_eq!(pascalize(&once), once);
        }
    }
}
