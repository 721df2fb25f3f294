//! Enigma: orchestrator for rotor stepping and the substitution path.
//!
//! Owns the rotor bank, plugboard, and reflector. For every alphabet
//! letter the machine first advances the rotors — reproducing the
//! odometer-style carry chain and the double-step anomaly — and then
//! pushes the letter through the full bidirectional signal path.

use crate::alphabet;
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Minimum number of rotor slots in a machine.
const MIN_ROTORS: usize = 3;

/// Construction settings for an [`Enigma`] machine.
///
/// All fields are validated eagerly by [`Enigma::new`]; on any error no
/// machine is produced.
#[derive(Debug, Clone)]
pub struct EnigmaSettings {
    /// Rotor type names, leftmost (slowest) rotor first, e.g.
    /// `["I", "II", "III"]`. At least three are required.
    pub rotor_types: Vec<String>,
    /// Starting-position letters, one per rotor, same order.
    pub rotor_positions: String,
    /// Ring-setting letters, one per rotor, same order.
    pub ring_settings: String,
    /// Whitespace-separated plugboard pair tokens, e.g. `"AZ BS"`. May be
    /// empty.
    pub plugboard: String,
    /// Reflector type name, e.g. `"B"`.
    pub reflector: String,
}

impl EnigmaSettings {
    /// Convenience constructor from borrowed strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::EnigmaSettings;
    ///
    /// let settings = EnigmaSettings::new(&["I", "II", "III"], "AAA", "AAA", "AZ BS", "B");
    /// assert_eq!(settings.rotor_types.len(), 3);
    /// ```
    pub fn new(
        rotor_types: &[&str],
        rotor_positions: &str,
        ring_settings: &str,
        plugboard: &str,
        reflector: &str,
    ) -> Self {
        EnigmaSettings {
            rotor_types: rotor_types.iter().map(|s| s.to_string()).collect(),
            rotor_positions: rotor_positions.to_string(),
            ring_settings: ring_settings.to_string(),
            plugboard: plugboard.to_string(),
            reflector: reflector.to_string(),
        }
    }
}

/// The assembled cipher machine.
///
/// Rotor positions mutate on every alphabet letter processed; plugboard,
/// reflector, and rotor wirings are fixed after construction. Encoding and
/// decoding are the same operation on a machine in the same state, so a
/// fresh decryption needs a second instance built from the same settings,
/// or a [`reset`](Self::reset).
#[derive(Debug)]
pub struct Enigma {
    rotors: Vec<Rotor>,
    plugboard: Plugboard,
    reflector: Reflector,
}

impl Enigma {
    /// Assembles a machine from the given settings.
    ///
    /// # Parameters
    /// - `settings`: Rotor types, starting positions, ring settings,
    ///   plugboard pairs, and reflector type.
    ///
    /// # Errors
    /// Returns [`EnigmaError`] for unknown rotor or reflector names,
    /// malformed plugboard pairs, non-letter position or ring characters,
    /// fewer than three rotors, or position/ring sequences whose length
    /// does not match the number of rotor slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Enigma, EnigmaSettings};
    ///
    /// let settings = EnigmaSettings::new(&["I", "II", "III"], "ADV", "AAA", "", "B");
    /// let machine = Enigma::new(&settings).unwrap();
    /// assert_eq!(machine.rotor_positions(), "ADV");
    /// ```
    pub fn new(settings: &EnigmaSettings) -> Result<Self, EnigmaError> {
        let slots = settings.rotor_types.len();
        if slots < MIN_ROTORS {
            return Err(EnigmaError::TooFewRotors(slots));
        }

        let positions: Vec<char> = settings.rotor_positions.chars().collect();
        if positions.len() != slots {
            return Err(EnigmaError::SettingsLengthMismatch {
                what: "starting positions",
                expected: slots,
                got: positions.len(),
            });
        }
        let rings: Vec<char> = settings.ring_settings.chars().collect();
        if rings.len() != slots {
            return Err(EnigmaError::SettingsLengthMismatch {
                what: "ring settings",
                expected: slots,
                got: rings.len(),
            });
        }

        let mut rotors = Vec::with_capacity(slots);
        for (i, name) in settings.rotor_types.iter().enumerate() {
            rotors.push(Rotor::new(name, rings[i], positions[i])?);
        }
        let plugboard = Plugboard::new(&settings.plugboard)?;
        let reflector = Reflector::new(&settings.reflector)?;

        Ok(Enigma {
            rotors,
            plugboard,
            reflector,
        })
    }

    /// Encodes a text; decoding is the identical operation.
    ///
    /// Alphabet letters are uppercase-normalized, stepped, and substituted.
    /// Every other character passes through unchanged without advancing any
    /// rotor. Rotor state persists across calls: a second call continues
    /// from wherever the rotors left off.
    ///
    /// # Parameters
    /// - `text`: Any sequence of characters; never fails.
    ///
    /// # Returns
    /// The ciphertext (or plaintext, when fed ciphertext in the same
    /// machine state).
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Enigma, EnigmaSettings};
    ///
    /// let settings = EnigmaSettings::new(&["I", "II", "III"], "AAA", "AAA", "", "B");
    /// let mut machine = Enigma::new(&settings).unwrap();
    /// assert_eq!(machine.encode("AAAAA"), "BDZGO");
    /// ```
    pub fn encode(&mut self, text: &str) -> String {
        text.chars()
            .map(|c| match alphabet::index_of(c) {
                Some(index) => {
                    self.step_rotors();
                    alphabet::char_at(self.signal_path(index))
                }
                None => c,
            })
            .collect()
    }

    /// Returns all rotors to their configured starting positions.
    pub fn reset(&mut self) {
        for rotor in &mut self.rotors {
            rotor.reset();
        }
    }

    /// Returns the current rotor window letters, leftmost rotor first.
    pub fn rotor_positions(&self) -> String {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Advances the rotors for one keypress.
    ///
    /// Notch states are sampled once before any rotor moves; the carry
    /// signal always originates from a rotor's position prior to its own
    /// advance.
    ///
    /// The rightmost rotor steps on every keypress. The second-from-right
    /// rotor steps on the rightmost rotor's notch (normal carry) and steps
    /// itself when sitting on its own notch — the mechanical double-step —
    /// dragging the rotor to its left along. Rotors further left receive a
    /// plain carry chain: each steps when its right neighbour stepped while
    /// on a notch.
    fn step_rotors(&mut self) {
        let slots = self.rotors.len();
        let right = slots - 1;
        let middle = slots - 2;

        let at_notch: Vec<bool> = self.rotors.iter().map(Rotor::is_at_notch).collect();
        let mut stepped = vec![false; slots];

        self.rotors[right].step();
        stepped[right] = true;

        if at_notch[right] {
            self.rotors[middle].step();
            stepped[middle] = true;
        }
        if at_notch[middle] {
            self.rotors[middle].step();
            self.rotors[middle - 1].step();
            stepped[middle] = true;
            stepped[middle - 1] = true;
        }

        // Plain carry chain for machines with more than three rotors.
        for i in (0..middle.saturating_sub(1)).rev() {
            if stepped[i + 1] && at_notch[i + 1] {
                self.rotors[i].step();
                stepped[i] = true;
            }
        }
    }

    /// Pushes one letter index through the full substitution path.
    fn signal_path(&self, index: usize) -> usize {
        let mut current = self.plugboard.substitute(index);
        for rotor in self.rotors.iter().rev() {
            current = rotor.forward(current);
        }
        current = self.reflector.reflect(current);
        for rotor in self.rotors.iter() {
            current = rotor.backward(current);
        }
        self.plugboard.substitute(current)
    }
}
