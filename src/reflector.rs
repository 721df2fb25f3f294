//! Reflector: fixed involutive substitution.
//!
//! The reflector (Umkehrwalze) sits at the midpoint of the signal path and
//! sends the current back through the rotors. It has no position, no ring
//! setting, and never mutates. Its involutive wiring is what makes the
//! whole machine reciprocal.

use crate::alphabet;
use crate::error::EnigmaError;
use crate::wiring;

/// Fixed involutive substitution applied once per character.
#[derive(Debug, Clone)]
pub struct Reflector {
    mapping: [usize; alphabet::LEN],
}

impl Reflector {
    /// Creates a reflector of the named historical type.
    ///
    /// # Parameters
    /// - `name`: Reflector type from the fixed wiring table (`"A"`, `"B"`,
    ///   `"C"`).
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownReflector`] if `name` is not in the
    /// table.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Reflector;
    ///
    /// let reflector = Reflector::new("B").unwrap();
    /// assert!(Reflector::new("Q").is_err());
    /// ```
    pub fn new(name: &str) -> Result<Self, EnigmaError> {
        let perm = wiring::reflector(name)
            .ok_or_else(|| EnigmaError::UnknownReflector(name.to_string()))?;

        let mut mapping = [0usize; alphabet::LEN];
        for (i, b) in perm.bytes().enumerate() {
            mapping[i] = (b - b'A') as usize;
        }
        Ok(Reflector { mapping })
    }

    /// Reflects a letter index back into the rotor chain.
    ///
    /// # Parameters
    /// - `index`: Letter index in 0..26.
    ///
    /// # Returns
    /// The reflected index; `reflect(reflect(x)) == x` for all x.
    pub fn reflect(&self, index: usize) -> usize {
        self.mapping[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_reflector_rejected() {
        assert_eq!(
            Reflector::new("Q").unwrap_err(),
            EnigmaError::UnknownReflector("Q".to_string())
        );
    }

    #[test]
    fn test_reflect_known_values() {
        // UKW-B sends A to Y and Y back to A.
        let reflector = Reflector::new("B").unwrap();
        assert_eq!(reflector.reflect(0), 24);
        assert_eq!(reflector.reflect(24), 0);
    }

    #[test]
    fn test_involution_for_every_type() {
        for name in ["A", "B", "C"] {
            let reflector = Reflector::new(name).unwrap();
            for x in 0..alphabet::LEN {
                assert_eq!(
                    reflector.reflect(reflector.reflect(x)),
                    x,
                    "reflector {} not involutive at {}",
                    name,
                    x
                );
            }
        }
    }

    #[test]
    fn test_no_fixed_points() {
        for name in ["A", "B", "C"] {
            let reflector = Reflector::new(name).unwrap();
            for x in 0..alphabet::LEN {
                assert_ne!(reflector.reflect(x), x);
            }
        }
    }
}
