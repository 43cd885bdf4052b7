//! Word-count kernel.
//!
//! A word starts at index `i > 0` when byte `i - 1` is whitespace and byte `i` is not;
//! a non-whitespace first byte also starts a word. Each adjacent pair is classified
//! independently and the results are summed, so the count can be computed as a
//! parallel reduce with a result identical to the sequential scan.
//!
//! Whitespace is the C-locale `isspace` set: space, `\t`, `\n`, `\v`, `\f` and `\r`.
//! Classification is byte-wise, so multi-byte UTF-8 characters (including Unicode
//! spaces such as U+00A0) are always word characters. [`crate::counter`] uses the same
//! kernel, so file counts and string counts agree.

use crate::data::ExecutionMode;
use rayon::prelude::*;

/// Minimum number of byte pairs per rayon job.
const PAR_MIN_LEN: usize = 4096;

/// C-locale `isspace`.
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t'..=b'\r')
}

/// Returns true when `right` begins a word that follows whitespace.
#[inline]
pub fn is_word_beginning(left: u8, right: u8) -> bool {
    is_space(left) && !is_space(right)
}

/// Counts the words of `s` in the given execution mode.
///
/// # Examples
/// ```rust
/// use wordscan::data::ExecutionMode;
/// use wordscan::words::word_count;
///
/// assert_eq!(word_count("  hello   world  ", ExecutionMode::Parallel), 2);
/// ```
pub fn word_count(s: &str, mode: ExecutionMode) -> u64 {
    word_count_bytes(s.as_bytes(), mode)
}

/// Counts the words of a raw byte buffer. Bytes need not be valid UTF-8.
pub fn word_count_bytes(bytes: &[u8], mode: ExecutionMode) -> u64 {
    let Some(&first) = bytes.first() else {
        return 0;
    };

    let leading = u64::from(!is_space(first));
    let boundaries = match mode {
        ExecutionMode::Sequential => bytes
            .windows(2)
            .filter(|pair| is_word_beginning(pair[0], pair[1]))
            .count(),
        ExecutionMode::Parallel => bytes
            .par_windows(2)
            .with_min_len(PAR_MIN_LEN)
            .filter(|pair| is_word_beginning(pair[0], pair[1]))
            .count(),
    };

    leading + boundaries as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn both(s: &str) -> (u64, u64) {
        (
            word_count(s, ExecutionMode::Sequential),
            word_count(s, ExecutionMode::Parallel),
        )
    }

    fn c_locale_split(s: &str) -> u64 {
        s.split(|c: char| matches!(c, ' ' | '\t'..='\r'))
            .filter(|w| !w.is_empty())
            .count() as u64
    }

    #[test]
    fn test_known_counts() {
        assert_eq!(both(""), (0, 0));
        assert_eq!(both("hello"), (1, 1));
        assert_eq!(both("  hello   world  "), (2, 2));
        assert_eq!(both("a b c"), (3, 3));
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(both(" \t\n\x0b\x0c\r "), (0, 0));
        assert_eq!(both(" "), (0, 0));
    }

    #[test]
    fn test_c_locale_separators() {
        assert_eq!(both("one\ttwo\nthree\r\nfour\x0bfive\x0csix"), (6, 6));
    }

    #[test]
    fn test_unicode_spaces_do_not_split_words() {
        assert_eq!(both("caf\u{a0}au\u{2003}lait"), (1, 1));
        assert_eq!(both("grüße\u{3000}世界 ok"), (2, 2));
    }

    #[test]
    fn test_invalid_utf8_bytes() {
        assert_eq!(word_count_bytes(b"caf\xe9 au lait", ExecutionMode::Parallel), 3);
        assert_eq!(word_count_bytes(b"\xff\xfe", ExecutionMode::Sequential), 1);
    }

    #[test]
    fn test_large_input_uses_parallel_path() {
        let text = "lorem ipsum dolor ".repeat(10_000);
        assert_eq!(both(&text), (30_000, 30_000));
    }

    #[test]
    fn test_is_word_beginning() {
        assert!(is_word_beginning(b' ', b'a'));
        assert!(is_word_beginning(b'\x0b', b'a'));
        assert!(!is_word_beginning(b'a', b'b'));
        assert!(!is_word_beginning(b' ', b' '));
        assert!(!is_word_beginning(b'a', b' '));
    }

    proptest! {
        #[test]
        fn prop_matches_c_locale_split(s in "[a-z\u{a0}\u{2003} \t\n\x0b\x0c\r]{0,200}") {
            let expected = c_locale_split(&s);
            prop_assert_eq!(word_count(&s, ExecutionMode::Sequential), expected);
            prop_assert_eq!(word_count(&s, ExecutionMode::Parallel), expected);
        }

        #[test]
        fn prop_modes_agree_on_sparse_text(words in prop::collection::vec("[a-z]{1,8}", 0..50), sep in "[ \t\n]{1,3}") {
            let s = words.join(sep.as_str());
            prop_assert_eq!(
                word_count(&s, ExecutionMode::Sequential),
                word_count(&s, ExecutionMode::Parallel)
            );
            prop_assert_eq!(word_count(&s, ExecutionMode::Sequential), words.len() as u64);
        }
    }
}
