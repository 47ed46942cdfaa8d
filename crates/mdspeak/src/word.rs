const DELIMITERS: [u8; 4] = [b',', b'.', b' ', b'\n'];

fn is_delimiter(byte: &u8) -> bool {
    DELIMITERS.contains(byte)
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'\'' | b'"' | b'-')
}

/// Splits `line` into maximal runs of non-delimiter bytes.
pub fn tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(is_delimiter).filter(|token| !token.is_empty())
}

/// A token is a word when every byte is an ASCII alphanumeric, `'`, `"` or `-`.
pub fn is_word(token: &[u8]) -> bool {
    token.iter().all(|&byte| is_word_byte(byte))
}

pub fn count_words(line: &[u8]) -> u64 {
    tokens(line).filter(|token| is_word(token)).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_delimiters_without_empty_tokens() {
        let found: Vec<&[u8]> = tokens(b"Hello,  world. again\n").collect();
        assert_eq!(found, vec![&b"Hello"[..], &b"world"[..], &b"again"[..]]);
    }

    #[test]
    fn delimiter_only_line_has_no_tokens() {
        assert_eq!(tokens(b" ,. ..\n").count(), 0);
    }

    #[test]
    fn accepts_quotes_hyphens_and_digits() {
        assert!(is_word(b"don't"));
        assert!(is_word(b"\"quoted\""));
        assert!(is_word(b"well-known"));
        assert!(is_word(b"2024"));
        assert!(is_word(b"-"));
    }

    #[test]
    fn rejects_other_symbols() {
        assert!(!is_word(b"**bold**"));
        assert!(!is_word(b"[link](url)"));
        assert!(!is_word(b"a;b"));
        assert!(!is_word(b"tab\there"));
        assert!(!is_word("caf\u{e9}".as_bytes()));
    }

    #[test]
    fn carriage_return_is_not_a_delimiter() {
        assert_eq!(count_words(b"two words\r\n"), 1);
    }

    #[test]
    fn counts_only_valid_tokens() {
        assert_eq!(count_words(b"The quick, brown fox!\n"), 3);
        assert_eq!(count_words(b"- list item\n"), 3);
        assert_eq!(count_words(b"`code` and *emphasis*\n"), 1);
        assert_eq!(count_words(b""), 0);
    }
}
