//! Plugboard: involutive letter-pair substitution.
//!
//! The plugboard (Steckerbrett) swaps configured letter pairs at the entry
//! and exit of the signal path. Any letter not named in a pair maps to
//! itself. The mapping is fixed after construction.

use crate::alphabet;
use crate::error::EnigmaError;

/// Static letter-pair substitution applied at both ends of the signal path.
///
/// The internal table is its own inverse: applying [`substitute`]
/// (Self::substitute) twice is the identity.
#[derive(Debug, Clone)]
pub struct Plugboard {
    mapping: [usize; alphabet::LEN],
}

impl Plugboard {
    /// Builds a plugboard from whitespace-separated pair tokens.
    ///
    /// Each token names two distinct letters to swap, e.g. `"AZ BS"` wires
    /// A↔Z and B↔S. The empty string yields an identity plugboard. Letters
    /// are case-insensitive.
    ///
    /// # Parameters
    /// - `settings`: Pair tokens separated by whitespace; may be empty.
    ///
    /// # Errors
    /// - [`EnigmaError::MalformedPlugPair`] if a token is not exactly two
    ///   alphabet letters.
    /// - [`EnigmaError::SelfPairedPlug`] if a token names the same letter
    ///   twice.
    /// - [`EnigmaError::PlugConflict`] if a letter appears in more than one
    ///   pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Plugboard;
    ///
    /// let plugboard = Plugboard::new("AZ BS").unwrap();
    /// assert!(Plugboard::new("AZ AB").is_err());
    /// ```
    pub fn new(settings: &str) -> Result<Self, EnigmaError> {
        let mut mapping: [usize; alphabet::LEN] = core::array::from_fn(|i| i);

        for pair in settings.split_whitespace() {
            let mut chars = pair.chars();
            let (a, b) = match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => (a, b),
                _ => return Err(EnigmaError::MalformedPlugPair(pair.to_string())),
            };
            let first = alphabet::index_of(a)
                .ok_or_else(|| EnigmaError::MalformedPlugPair(pair.to_string()))?;
            let second = alphabet::index_of(b)
                .ok_or_else(|| EnigmaError::MalformedPlugPair(pair.to_string()))?;
            if first == second {
                return Err(EnigmaError::SelfPairedPlug(alphabet::char_at(first)));
            }
            if mapping[first] != first {
                return Err(EnigmaError::PlugConflict(alphabet::char_at(first)));
            }
            if mapping[second] != second {
                return Err(EnigmaError::PlugConflict(alphabet::char_at(second)));
            }
            mapping[first] = second;
            mapping[second] = first;
        }

        Ok(Plugboard { mapping })
    }

    /// Substitutes a letter index through the plugboard.
    ///
    /// # Parameters
    /// - `index`: Letter index in 0..26.
    ///
    /// # Returns
    /// The paired index if the letter is wired, else the index unchanged.
    pub fn substitute(&self, index: usize) -> usize {
        self.mapping[index]
    }
}
