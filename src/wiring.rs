//! Fixed historical wiring tables for rotors and reflectors.
//!
//! Module-level constant data only; the tables are read once during
//! component construction and never mutated. Wirings match the Wehrmacht /
//! Kriegsmarine Enigma I rotor set and the UKW-A/B/C reflectors.

/// Rotor table entries: `(name, wiring permutation, notch letters)`.
///
/// The wiring string lists, for each entry contact A..Z, the exit contact
/// of the internal wiring. Notch letters are the window positions at which
/// the rotor carries the next rotor along; VI, VII and VIII carry two
/// notches each.
const ROTORS: &[(&str, &str, &str)] = &[
    ("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"),
    ("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"),
    ("III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"),
    ("IV", "ESOVPZJAYQUIRHXLNFTGKDCMWB", "J"),
    ("V", "VZBRGITYUPSDNHLXAWMJQOFECK", "Z"),
    ("VI", "JPGVOUMFYQBENHZRDKASXLICTW", "ZM"),
    ("VII", "NZJHGRCXMYSWBOUFAIVLPEKQDT", "ZM"),
    ("VIII", "FKQHTLXOCBJSPDZRAMEWNIUYGV", "ZM"),
];

/// Reflector table entries: `(name, wiring permutation)`.
///
/// Every reflector wiring is an involution with no fixed points — a letter
/// never reflects to itself. New entries must preserve that property.
const REFLECTORS: &[(&str, &str)] = &[
    ("A", "EJMZALYXVBWFCRQUONTSPIKHGD"),
    ("B", "YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    ("C", "FVPJIAOYEDRZXWGCTKUQSBNMHL"),
];

/// Looks up a rotor type by name.
///
/// # Returns
/// `Some((wiring, notch letters))` for a known rotor name, else `None`.
pub(crate) fn rotor(name: &str) -> Option<(&'static str, &'static str)> {
    ROTORS
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|&(_, wiring, notches)| (wiring, notches))
}

/// Looks up a reflector type by name.
///
/// # Returns
/// `Some(wiring)` for a known reflector name, else `None`.
pub(crate) fn reflector(name: &str) -> Option<&'static str> {
    REFLECTORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, wiring)| wiring)
}
