//! The 26-letter machine alphabet.
//!
//! Every substitution stage operates on letter indices 0..26; characters
//! appear only at the edges of the signal path. Characters without an index
//! (digits, punctuation, whitespace) bypass the machine entirely.

/// Number of letters in the machine alphabet.
pub(crate) const LEN: usize = 26;

/// Returns the index (0..26) of an alphabet letter, case-insensitively.
///
/// # Returns
/// `Some(index)` for ASCII letters, `None` for every other character.
pub(crate) fn index_of(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Returns the uppercase letter for an index in 0..26.
///
/// Callers guarantee the index is in range; every substitution stage only
/// produces values reduced mod 26.
pub(crate) fn char_at(index: usize) -> char {
    debug_assert!(index < LEN);
    (b'A' + index as u8) as char
}

/// Adds two indices modulo 26.
pub(crate) fn add(a: usize, b: usize) -> usize {
    (a + b) % LEN
}

/// Subtracts `b` from `a` modulo 26, staying in 0..26.
pub(crate) fn sub(a: usize, b: usize) -> usize {
    (a + LEN - b) % LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_uppercase() {
        assert_eq!(index_of('A'), Some(0));
        assert_eq!(index_of('Z'), Some(25));
    }

    #[test]
    fn test_index_of_lowercase() {
        assert_eq!(index_of('a'), Some(0));
        assert_eq!(index_of('m'), Some(12));
    }

    #[test]
    fn test_index_of_non_letters() {
        for c in [' ', '!', '7', 'ß', 'É', '\n'] {
            assert_eq!(index_of(c), None, "{:?} should have no index", c);
        }
    }

    #[test]
    fn test_char_at_roundtrip() {
        for i in 0..LEN {
            assert_eq!(index_of(char_at(i)), Some(i));
        }
    }

    #[test]
    fn test_mod_arithmetic() {
        assert_eq!(add(25, 1), 0);
        assert_eq!(add(13, 13), 0);
        assert_eq!(sub(0, 1), 25);
        assert_eq!(sub(5, 5), 0);
        for a in 0..LEN {
            for b in 0..LEN {
                assert_eq!(sub(add(a, b), b), a);
            }
        }
    }
}
