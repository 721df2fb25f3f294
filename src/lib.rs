//! Enigma cipher machine simulator.
//!
//! Simulates the electromechanical Enigma: a reciprocal, rotor-based
//! polyalphabetic substitution cipher. Each keypress first advances the
//! rotors (including the historical double-step anomaly), then pushes the
//! letter through a bidirectional chain of reversible substitutions.
//!
//! # Architecture
//!
//! ```text
//! Plugboard   (involutive letter-pair swap — entry and exit stage)
//!     ↓
//! Rotors      (rightmost/fastest → leftmost/slowest, forward pass;
//!              each applies wiring offset by position and ring setting)
//!     ↓
//! Reflector   (fixed involution — turns the signal back)
//!     ↓
//! Rotors      (leftmost → rightmost, backward pass through inverse wiring)
//!     ↓
//! Plugboard
//! ```
//!
//! Because the reflector is an involution and every rotor pass is undone
//! on the way back, the machine is reciprocal: encryption and decryption
//! are the same operation given identical rotor state.
//!
//! # Examples
//!
//! Encrypt and decrypt a message with two identically configured machines:
//!
//! ```
//! use enigma::{Enigma, EnigmaSettings};
//!
//! let settings = EnigmaSettings::new(&["I", "II", "III"], "AAA", "AAA", "", "B");
//!
//! let mut encoder = Enigma::new(&settings).unwrap();
//! let mut decoder = Enigma::new(&settings).unwrap();
//!
//! let ciphertext = encoder.encode("HELLO WORLD");
//! assert_eq!(decoder.encode(&ciphertext), "HELLO WORLD");
//! ```

#![deny(clippy::all)]

pub mod error;

mod alphabet;
mod enigma;
mod plugboard;
mod reflector;
mod rotor;
mod wiring;

pub use enigma::{Enigma, EnigmaSettings};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
