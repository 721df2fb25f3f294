//! Rotor: rotating substitution unit.
//!
//! Each rotor combines a fixed internal wiring permutation with a mutable
//! rotational position and a fixed ring setting. The signal enters through
//! a contact shifted by the rotor's effective rotation, passes through the
//! wiring, and exits shifted back — once forward on the way to the
//! reflector and once backward through the inverse wiring on the way out.

use crate::alphabet;
use crate::error::EnigmaError;
use crate::wiring;

/// A single rotor slot: wiring, inverse wiring, notches, ring setting, and
/// the current rotational position.
///
/// Only `position` mutates after construction, and only through
/// [`step`](Self::step) or [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct Rotor {
    wiring: [usize; alphabet::LEN],
    inverse: [usize; alphabet::LEN],
    notches: Vec<usize>,
    ring_setting: usize,
    position: usize,
    start_position: usize,
}

impl Rotor {
    /// Creates a rotor of the named historical type.
    ///
    /// # Parameters
    /// - `name`: Rotor type from the fixed wiring table (`"I"` .. `"VIII"`).
    /// - `ring_setting`: Ring-setting letter (`'A'` = no offset).
    /// - `position`: Starting-position letter shown in the rotor window.
    ///
    /// # Errors
    /// - [`EnigmaError::UnknownRotor`] if `name` is not in the table.
    /// - [`EnigmaError::InvalidLetter`] if `ring_setting` or `position` is
    ///   not an alphabet letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Rotor;
    ///
    /// let rotor = Rotor::new("I", 'A', 'Q').unwrap();
    /// assert!(rotor.is_at_notch());
    /// assert!(Rotor::new("XYZ", 'A', 'A').is_err());
    /// ```
    pub fn new(name: &str, ring_setting: char, position: char) -> Result<Self, EnigmaError> {
        let (perm, notch_letters) =
            wiring::rotor(name).ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))?;
        let ring = alphabet::index_of(ring_setting)
            .ok_or(EnigmaError::InvalidLetter(ring_setting))?;
        let start = alphabet::index_of(position).ok_or(EnigmaError::InvalidLetter(position))?;

        // Wiring table strings are uppercase A..Z permutations (checked by
        // the wiring module's tests), so byte arithmetic is safe here.
        let mut forward = [0usize; alphabet::LEN];
        let mut inverse = [0usize; alphabet::LEN];
        for (i, b) in perm.bytes().enumerate() {
            let j = (b - b'A') as usize;
            forward[i] = j;
            inverse[j] = i;
        }
        let notches = notch_letters.bytes().map(|b| (b - b'A') as usize).collect();

        Ok(Rotor {
            wiring: forward,
            inverse,
            notches,
            ring_setting: ring,
            position: start,
            start_position: start,
        })
    }

    /// Effective rotation of the wiring relative to the entry contacts.
    ///
    /// The position advances the wiring; the ring setting rotates the
    /// wiring backwards relative to the letter markings.
    fn shift(&self) -> usize {
        alphabet::sub(self.position, self.ring_setting)
    }

    /// Substitutes a letter index on the forward pass (towards the reflector).
    ///
    /// # Parameters
    /// - `index`: Letter index in 0..26.
    ///
    /// # Returns
    /// The substituted index, in 0..26.
    pub fn forward(&self, index: usize) -> usize {
        let shift = self.shift();
        alphabet::sub(self.wiring[alphabet::add(index, shift)], shift)
    }

    /// Substitutes a letter index on the backward pass (from the reflector).
    ///
    /// Uses the precomputed inverse wiring with the same shift algebra, so
    /// `backward(forward(x)) == x` for every position and ring setting.
    ///
    /// # Parameters
    /// - `index`: Letter index in 0..26.
    ///
    /// # Returns
    /// The substituted index, in 0..26.
    pub fn backward(&self, index: usize) -> usize {
        let shift = self.shift();
        alphabet::sub(self.inverse[alphabet::add(index, shift)], shift)
    }

    /// Whether the rotor currently sits on one of its turnover notches.
    ///
    /// The carry signal originates from the position *before* the rotor's
    /// own advance; the orchestrator samples this prior to stepping.
    pub fn is_at_notch(&self) -> bool {
        self.notches.contains(&self.position)
    }

    /// Advances the rotor by one position, wrapping Z back to A.
    pub fn step(&mut self) {
        self.position = alphabet::add(self.position, 1);
    }

    /// Returns the letter currently shown in the rotor window.
    pub fn position(&self) -> char {
        alphabet::char_at(self.position)
    }

    /// Returns the rotor to its configured starting position.
    pub(crate) fn reset(&mut self) {
        self.position = self.start_position;
    }
}
