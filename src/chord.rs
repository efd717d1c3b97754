//! Chord Recognizer
//!
//! Maps an unordered set of pitch classes to a canonical root and quality by
//! exact bitmask matching over all 12 rotations of a fixed quality
//! dictionary.

use std::fmt::Display;

use crate::note::{NoteError, NoteName, SEMITONES};

/// Number of chord qualities
const NUM_CHORD_KINDS: usize = 33;

/// Supported chord qualities in dictionary order; on an exact mask match the
/// first root (ascending from C) and first entry in this order win.
const CHORD_KINDS: [ChordKind; NUM_CHORD_KINDS] = [
    ChordKind::Major,
    ChordKind::Minor,
    ChordKind::Major7,
    ChordKind::Minor7,
    ChordKind::Dominant7,
    ChordKind::Dominant7Flat5,
    ChordKind::Dominant7Sharp5,
    ChordKind::MinorMajor7,
    ChordKind::HalfDiminished7,
    ChordKind::Dominant7Flat9,
    ChordKind::FlatFive,
    ChordKind::PowerFifth,
    ChordKind::Sixth,
    ChordKind::MinorSixth,
    ChordKind::SixNine,
    ChordKind::Ninth,
    ChordKind::NinthFlat5,
    ChordKind::NinthSharp5,
    ChordKind::MinorNinth,
    ChordKind::MajorNinth,
    ChordKind::AddNine,
    ChordKind::Dominant7Sharp9,
    ChordKind::Eleventh,
    ChordKind::MinorEleventh,
    ChordKind::Thirteenth,
    ChordKind::MajorThirteenth,
    ChordKind::Diminished,
    ChordKind::Augmented,
    ChordKind::Diminished7,
    ChordKind::SuspendedSecond,
    ChordKind::SuspendedFourth,
    ChordKind::Dominant7Sus4,
    ChordKind::NinthSus4,
];

/// Semitone offsets above the root, matching `CHORD_KINDS` order
const CHORD_INTERVALS: [&[u8]; NUM_CHORD_KINDS] = [
    &[0, 4, 7],
    &[0, 3, 7],
    &[0, 4, 7, 11],
    &[0, 3, 7, 10],
    &[0, 4, 7, 10],
    &[0, 4, 6, 10],
    &[0, 4, 8, 10],
    &[0, 3, 7, 11],
    &[0, 3, 6, 10],
    &[0, 1, 4, 7, 10],
    &[0, 4, 6],
    &[0, 7],
    &[0, 4, 7, 9],
    &[0, 3, 7, 9],
    &[0, 2, 4, 7, 9],
    &[0, 2, 4, 7, 10],
    &[0, 2, 4, 6, 10],
    &[0, 2, 4, 8],
    &[0, 2, 3, 7, 10],
    &[0, 2, 4, 7, 11],
    &[0, 2, 4, 7],
    &[0, 3, 4, 7, 10],
    &[0, 2, 4, 5, 7, 10],
    &[0, 2, 3, 5, 7, 10],
    &[0, 2, 5, 9, 10],
    &[0, 2, 4, 7, 9, 11],
    &[0, 3, 6],
    &[0, 4, 8],
    &[0, 3, 6, 9],
    &[0, 2, 7],
    &[0, 5, 7],
    &[0, 5, 7, 10],
    &[0, 2, 5, 7, 10],
];

/// Supported chord qualities
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChordKind {
    /// Major triad (C-E-G)
    Major,
    /// Minor triad (C-Eb-G)
    Minor,
    /// Major seventh (C-E-G-B)
    Major7,
    /// Minor seventh (C-Eb-G-Bb)
    Minor7,
    /// Dominant seventh (C-E-G-Bb)
    Dominant7,
    /// Dominant seventh, flat fifth
    Dominant7Flat5,
    /// Dominant seventh, sharp fifth
    Dominant7Sharp5,
    /// Minor triad with a major seventh
    MinorMajor7,
    /// Half-diminished seventh (C-Eb-Gb-Bb)
    HalfDiminished7,
    /// Dominant seventh, flat ninth
    Dominant7Flat9,
    /// Major third with a flat fifth
    FlatFive,
    /// Power chord (C-G)
    PowerFifth,
    /// Major sixth (C-E-G-A)
    Sixth,
    /// Minor sixth (C-Eb-G-A)
    MinorSixth,
    /// Six-nine (C-D-E-G-A)
    SixNine,
    /// Dominant ninth
    Ninth,
    /// Dominant ninth, flat fifth
    NinthFlat5,
    /// Dominant ninth, sharp fifth
    NinthSharp5,
    /// Minor ninth
    MinorNinth,
    /// Major ninth
    MajorNinth,
    /// Major triad with an added ninth
    AddNine,
    /// Dominant seventh, sharp ninth
    Dominant7Sharp9,
    /// Dominant eleventh
    Eleventh,
    /// Minor eleventh
    MinorEleventh,
    /// Dominant thirteenth
    Thirteenth,
    /// Major thirteenth
    MajorThirteenth,
    /// Diminished triad (C-Eb-Gb)
    Diminished,
    /// Augmented triad (C-E-G#)
    Augmented,
    /// Diminished seventh (C-Eb-Gb-A)
    Diminished7,
    /// Suspended second (C-D-G)
    SuspendedSecond,
    /// Suspended fourth (C-F-G)
    SuspendedFourth,
    /// Dominant seventh, suspended fourth
    Dominant7Sus4,
    /// Dominant ninth, suspended fourth
    NinthSus4,
}

impl ChordKind {
    /// Dictionary label, as it appears in a chord name (e.g. `maj7`).
    pub const fn label(self) -> &'static str {
        match self {
            ChordKind::Major => "major",
            ChordKind::Minor => "minor",
            ChordKind::Major7 => "maj7",
            ChordKind::Minor7 => "m7",
            ChordKind::Dominant7 => "7",
            ChordKind::Dominant7Flat5 => "7b5",
            ChordKind::Dominant7Sharp5 => "7#5",
            ChordKind::MinorMajor7 => "m#7",
            ChordKind::HalfDiminished7 => "m7b5",
            ChordKind::Dominant7Flat9 => "7b9",
            ChordKind::FlatFive => "b5",
            ChordKind::PowerFifth => "5",
            ChordKind::Sixth => "6",
            ChordKind::MinorSixth => "m6",
            ChordKind::SixNine => "69",
            ChordKind::Ninth => "9",
            ChordKind::NinthFlat5 => "9b5",
            ChordKind::NinthSharp5 => "9#5",
            ChordKind::MinorNinth => "m9",
            ChordKind::MajorNinth => "maj9",
            ChordKind::AddNine => "add9",
            ChordKind::Dominant7Sharp9 => "7#9",
            ChordKind::Eleventh => "11",
            ChordKind::MinorEleventh => "m11",
            ChordKind::Thirteenth => "13",
            ChordKind::MajorThirteenth => "maj13",
            ChordKind::Diminished => "dim",
            ChordKind::Augmented => "aug",
            ChordKind::Diminished7 => "dim7",
            ChordKind::SuspendedSecond => "sus2",
            ChordKind::SuspendedFourth => "sus4",
            ChordKind::Dominant7Sus4 => "7sus4",
            ChordKind::NinthSus4 => "9sus4",
        }
    }
}

impl Display for ChordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A chord identified from a set of pitch classes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Chord {
    /// Root pitch class.
    pub root: NoteName,
    /// Quality from the fixed dictionary.
    pub quality: ChordKind,
}

impl Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.root, self.quality)
    }
}

/// Exact-match chord recognizer over the fixed quality dictionary.
#[derive(Debug, Clone)]
pub struct ChordRecognizer {
    masks: [u16; NUM_CHORD_KINDS],
}

impl ChordRecognizer {
    /// Create a recognizer; the 12-bit mask of every dictionary entry is
    /// precomputed from its interval offsets.
    pub fn new() -> Self {
        let mut masks = [0u16; NUM_CHORD_KINDS];
        for (mask, intervals) in masks.iter_mut().zip(CHORD_INTERVALS) {
            for &offset in intervals {
                *mask |= 1 << offset;
            }
        }
        ChordRecognizer { masks }
    }

    /// Identify the chord spelled by `notes`, if any.
    ///
    /// Every candidate root in `0..12` is tried in ascending order; the
    /// input's rotated mask must equal a dictionary mask exactly (no
    /// supersets, no subsets). Duplicate notes set the same bit twice and
    /// have no effect. Empty input returns `None` without scanning.
    pub fn recognize(&self, notes: &[NoteName]) -> Option<Chord> {
        if notes.is_empty() {
            return None;
        }
        for root in 0..SEMITONES as u8 {
            let mut input_mask: u16 = 0;
            for note in notes {
                input_mask |= 1 << ((note.semitone() + 12 - root) % 12);
            }
            for (kind, mask) in CHORD_KINDS.iter().zip(self.masks) {
                if input_mask == mask {
                    return Some(Chord {
                        root: NoteName::from_semitone(root as i32),
                        quality: *kind,
                    });
                }
            }
        }
        None
    }

    /// Parse `names` and identify their chord.
    ///
    /// The whole lookup is rejected on the first unknown note name.
    pub fn recognize_names(&self, names: &[&str]) -> Result<Option<Chord>, NoteError> {
        let notes = names
            .iter()
            .map(|name| NoteName::from_name(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.recognize(&notes))
    }
}

impl Default for ChordRecognizer {
    fn default() -> Self {
        ChordRecognizer::new()
    }
}
