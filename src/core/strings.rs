//! String operations.

/// Reverse by Unicode scalar value, so multi-byte characters survive intact.
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

pub fn uppercase(input: &str) -> String {
    input.to_uppercase()
}

/// Separators between words: space, tab, newline, vertical tab, form feed, carriage return.
fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Count words separated by runs of ASCII whitespace.
///
/// Leading and trailing control characters and spaces (anything up to
/// U+0020) are trimmed first; input that trims to nothing has zero words.
pub fn word_count(input: &str) -> usize {
    let trimmed = input.trim_matches(|c: char| c <= ' ');
    if trimmed.is_empty() {
        return 0;
    }
    trimmed
        .split(is_word_separator)
        .filter(|word| !word.is_empty())
        .count()
}

/// Lowercase and keep only ASCII letters and digits.
pub fn normalize_palindrome(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

pub fn is_palindrome(input: &str) -> bool {
    let normalized = normalize_palindrome(input);
    normalized.chars().eq(normalized.chars().rev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_hello_world() {
        assert_eq!(reverse("Hello World"), "dlroW olleH");
    }

    #[test]
    fn reverse_is_an_involution() {
        for s in ["", "a", "ab", "racecar", "héllo wörld", "日本語テキスト"] {
            assert_eq!(reverse(&reverse(s)), s);
        }
    }

    #[test]
    fn reverse_keeps_multibyte_chars_whole() {
        assert_eq!(reverse("añb"), "bña");
    }

    #[test]
    fn uppercase_ascii_and_unicode() {
        assert_eq!(uppercase("hello"), "HELLO");
        assert_eq!(uppercase("straße"), "STRASSE");
    }

    #[test]
    fn word_count_collapses_whitespace_runs() {
        assert_eq!(word_count("  a  b   c "), 3);
        assert_eq!(word_count("one\ttwo\nthree"), 3);
    }

    #[test]
    fn word_count_does_not_split_on_unicode_spaces() {
        assert_eq!(word_count("a\u{00A0}b"), 1);
        assert_eq!(word_count("a\u{2003}b c"), 2);
    }

    #[test]
    fn word_count_trims_control_characters() {
        assert_eq!(word_count("\u{1}"), 0);
        assert_eq!(word_count("\u{1}a b\u{1F}"), 2);
        assert_eq!(word_count("a\u{1}b"), 1);
    }

    #[test]
    fn word_count_blank_is_zero() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \t "), 0);
    }

    #[test]
    fn palindrome_ignores_case_and_punctuation() {
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
        assert!(is_palindrome("No 'x' in Nixon"));
        assert!(!is_palindrome("hello"));
    }

    #[test]
    fn palindrome_of_nothing_alphanumeric_is_true() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("!!! ..."));
    }

    #[test]
    fn normalize_strips_non_alphanumerics() {
        assert_eq!(
            normalize_palindrome("A man, a plan, a canal: Panama"),
            "amanaplanacanalpanama"
        );
        assert_eq!(normalize_palindrome("R2-D2"), "r2d2");
    }
}
