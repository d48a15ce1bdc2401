/*!
    Small shared helpers: const-compatible ASCII handling for the
    `from_name` lookups, and the hex plumbing every engine boundary uses.
*/

use crate::error::HexError;

/// Const-compatible ASCII whitespace trimming (both ends).
pub const fn trim_ascii(s: &[u8]) -> &[u8] {
    let mut start = 0;
    while start < s.len() && s[start].is_ascii_whitespace() {
        start += 1;
    }
    let mut end = s.len();
    while end > start && s[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    // SAFETY: start <= end <= s.len(); &s[start..end] isn't const-stable,
    // so we slice via from_raw_parts.
    unsafe { std::slice::from_raw_parts(s.as_ptr().add(start), end - start) }
}

/// Const-compatible case-insensitive ASCII byte comparison.
pub const fn eq_ignore_ascii_case(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        let ca = if a[i].is_ascii_uppercase() {
            a[i] + 32
        } else {
            a[i]
        };
        let cb = if b[i].is_ascii_uppercase() {
            b[i] + 32
        } else {
            b[i]
        };
        if ca != cb {
            return false;
        }
        i += 1;
    }
    true
}

/**
    Parse a hex string into bytes.
*/
pub fn parse_hex(s: &str) -> Result<Vec<u8>, HexError> {
    hex::decode(s).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            HexError::InvalidChar { ch: c, index }
        }
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            HexError::OddLength(s.len())
        }
    })
}

/**
    Parse a hex string that must decode to exactly `len` bytes.
*/
pub fn parse_hex_exact(s: &str, len: usize) -> Result<Vec<u8>, HexError> {
    if s.len() != len * 2 {
        return Err(HexError::Length {
            expected: len * 2,
            found: s.len(),
        });
    }
    parse_hex(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_ignore_case_matching() {
        assert!(eq_ignore_ascii_case(b"iso-0", b"ISO-0"));
        assert!(eq_ignore_ascii_case(b"Cmac", b"cMAC"));
        assert!(eq_ignore_ascii_case(b"", b""));
    }

    #[test]
    fn eq_ignore_case_mismatch() {
        assert!(!eq_ignore_ascii_case(b"a", b"b"));
        assert!(!eq_ignore_ascii_case(b"ab", b"a"));
        assert!(!eq_ignore_ascii_case(b"a", b"ab"));
    }

    #[test]
    fn trim_both_ends() {
        assert_eq!(trim_ascii(b"  iso-0  "), b"iso-0");
        assert_eq!(trim_ascii(b"\tiso-0\n"), b"iso-0");
        assert_eq!(trim_ascii(b"iso-0"), b"iso-0");
        assert_eq!(trim_ascii(b"   "), b"");
        assert_eq!(trim_ascii(b""), b"");
    }

    #[test]
    fn parse_hex_ok() {
        assert_eq!(parse_hex("0123abCD").unwrap(), vec![0x01, 0x23, 0xAB, 0xCD]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn parse_hex_bad_char() {
        let err = parse_hex("01G3").unwrap_err();
        assert_eq!(err, HexError::InvalidChar { ch: 'G', index: 2 });
    }

    #[test]
    fn parse_hex_odd_length() {
        let err = parse_hex("012").unwrap_err();
        assert_eq!(err, HexError::OddLength(3));
    }

    #[test]
    fn parse_hex_exact_enforces_width() {
        assert_eq!(parse_hex_exact("00112233", 4).unwrap(), vec![0, 0x11, 0x22, 0x33]);
        let err = parse_hex_exact("0011", 4).unwrap_err();
        assert_eq!(
            err,
            HexError::Length {
                expected: 8,
                found: 4
            }
        );
    }
}
