//! Pitch Classes
//!
//! The twelve chromatic pitch classes shared by the lattice and the chord
//! recognizer, with the fixed ordered name table and the mod-12 conversions.

use std::fmt::Display;
use thiserror::Error;

/// Number of pitch classes per octave.
pub(crate) const SEMITONES: usize = 12;

/// Canonical sharp spellings, indexed by semitone.
const NOTE_NAMES: [&str; SEMITONES] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Errors when converting note names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NoteError {
    /// The name is not one of the twelve chromatic note names.
    #[error("unknown note name `{name}`")]
    InvalidNoteName {
        /// The rejected input.
        name: String,
    },
}

/// Twelve chromatic pitch classes
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoteName {
    /// C
    C,
    /// C sharp / D flat
    Cs,
    /// D
    D,
    /// D sharp / E flat
    Ds,
    /// E
    E,
    /// F
    F,
    /// F sharp / G flat
    Fs,
    /// G
    G,
    /// G sharp / A flat
    Gs,
    /// A
    A,
    /// A sharp / B flat
    As,
    /// B
    B,
}

impl NoteName {
    /// Reduce a signed semitone count to its pitch class.
    ///
    /// Total for every input; negative counts reduce like positives
    /// (`-1` is `B`, `-12` is `C`).
    pub const fn from_semitone(semitone: i32) -> NoteName {
        match semitone.rem_euclid(12) {
            0 => NoteName::C,
            1 => NoteName::Cs,
            2 => NoteName::D,
            3 => NoteName::Ds,
            4 => NoteName::E,
            5 => NoteName::F,
            6 => NoteName::Fs,
            7 => NoteName::G,
            8 => NoteName::Gs,
            9 => NoteName::A,
            10 => NoteName::As,
            _ => NoteName::B,
        }
    }

    /// Parse a canonical sharp spelling (`"C"`, `"C#"`, ..., `"B"`).
    ///
    /// Anything outside the fixed twelve-name table is rejected; an
    /// out-of-range sentinel would silently corrupt downstream mask math.
    pub fn from_name(name: &str) -> Result<NoteName, NoteError> {
        match name {
            "C" => Ok(NoteName::C),
            "C#" => Ok(NoteName::Cs),
            "D" => Ok(NoteName::D),
            "D#" => Ok(NoteName::Ds),
            "E" => Ok(NoteName::E),
            "F" => Ok(NoteName::F),
            "F#" => Ok(NoteName::Fs),
            "G" => Ok(NoteName::G),
            "G#" => Ok(NoteName::Gs),
            "A" => Ok(NoteName::A),
            "A#" => Ok(NoteName::As),
            "B" => Ok(NoteName::B),
            other => Err(NoteError::InvalidNoteName {
                name: other.to_string(),
            }),
        }
    }

    /// Semitone index in `0..12`.
    pub const fn semitone(self) -> u8 {
        self as u8
    }

    /// Canonical sharp spelling.
    pub const fn as_str(self) -> &'static str {
        NOTE_NAMES[self as usize]
    }
}

impl Display for NoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
