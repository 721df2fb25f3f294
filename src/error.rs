//! Error types for the Enigma library.
//!
//! All validation happens eagerly while the machine is assembled; a machine
//! that constructs successfully cannot fail during encoding.

use thiserror::Error;

/// Configuration errors raised while constructing an Enigma machine or one
/// of its components. No partial machine is produced on error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Rotor name is not in the fixed historical wiring table.
    #[error("unknown rotor type `{0}`")]
    UnknownRotor(String),
    /// Reflector name is not in the fixed historical wiring table.
    #[error("unknown reflector type `{0}`")]
    UnknownReflector(String),
    /// A ring-setting or starting-position character is not a letter.
    #[error("`{0}` is not a letter of the machine alphabet")]
    InvalidLetter(char),
    /// A plugboard token is not exactly two alphabet letters.
    #[error("malformed plugboard pair `{0}`")]
    MalformedPlugPair(String),
    /// A letter appears in more than one plugboard pair.
    #[error("letter `{0}` is wired into more than one plugboard pair")]
    PlugConflict(char),
    /// A plugboard pair names the same letter twice.
    #[error("letter `{0}` cannot be plugged to itself")]
    SelfPairedPlug(char),
    /// Fewer than three rotor slots were configured.
    #[error("at least 3 rotors are required, got {0}")]
    TooFewRotors(usize),
    /// Rotor names, starting positions, and ring settings disagree in length.
    #[error("expected {expected} {what}, got {got}")]
    SettingsLengthMismatch {
        /// Which setting sequence has the wrong length.
        what: &'static str,
        /// Number of configured rotor slots.
        expected: usize,
        /// Number of entries actually supplied.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_rotor() {
        let err = EnigmaError::UnknownRotor("XYZ".to_string());
        assert_eq!(format!("{}", err), "unknown rotor type `XYZ`");
    }

    #[test]
    fn test_display_unknown_reflector() {
        let err = EnigmaError::UnknownReflector("Q".to_string());
        assert_eq!(format!("{}", err), "unknown reflector type `Q`");
    }

    #[test]
    fn test_display_plug_conflict() {
        let err = EnigmaError::PlugConflict('A');
        assert_eq!(
            format!("{}", err),
            "letter `A` is wired into more than one plugboard pair"
        );
    }

    #[test]
    fn test_display_length_mismatch() {
        let err = EnigmaError::SettingsLengthMismatch {
            what: "ring settings",
            expected: 3,
            got: 2,
        };
        assert_eq!(format!("{}", err), "expected 3 ring settings, got 2");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            EnigmaError::InvalidLetter('?'),
            EnigmaError::InvalidLetter('?')
        );
        assert_ne!(
            EnigmaError::InvalidLetter('?'),
            EnigmaError::SelfPairedPlug('A')
        );
    }

    #[test]
    fn test_error_clone() {
        let err = EnigmaError::MalformedPlugPair("ABC".to_string());
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
