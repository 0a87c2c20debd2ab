/// `tchar` from RFC 9110: `!#$%&'*+-.^_`|~` plus ALPHA and DIGIT.
#[inline]
pub fn is_token_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}

/// Optional whitespace: space or horizontal tab.
#[inline]
pub fn is_ows(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Whitespace accepted between ranges. Wider than OWS on purpose: CR and LF
/// show up in folded header values forwarded by lenient proxies.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    b == b' ' || (0x09..=0x0d).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_chars() {
        for b in b'a'..=b'z' {
            assert!(is_token_char(b));
        }
        for b in b'A'..=b'Z' {
            assert!(is_token_char(b));
        }
        for b in b'0'..=b'9' {
            assert!(is_token_char(b));
        }
        for b in *b"!#$%&'*+-.^_`|~" {
            assert!(is_token_char(b));
        }
        for b in *b"\"(),/:;<=>?@[\\]{} \t" {
            assert!(!is_token_char(b));
        }
        assert!(!is_token_char(0x7f));
        assert!(!is_token_char(0x80));
    }

    #[test]
    fn test_whitespace() {
        assert!(is_ows(b' '));
        assert!(is_ows(b'\t'));
        assert!(!is_ows(b'\n'));

        assert!(is_whitespace(b' '));
        assert!(is_whitespace(b'\t'));
        assert!(is_whitespace(b'\n'));
        assert!(is_whitespace(b'\r'));
        assert!(is_whitespace(0x0b));
        assert!(is_whitespace(0x0c));
        assert!(!is_whitespace(b'a'));
        assert!(!is_whitespace(0x0e));
    }
}
