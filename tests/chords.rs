//! Integration tests for pitch-class conversions and chord recognition.

use tonnetz_explorer::{ChordKind, ChordRecognizer, NoteError, NoteName};

const ALL_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

#[test]
fn note_name_round_trips() {
    for (semitone, name) in ALL_NAMES.iter().enumerate() {
        let note = NoteName::from_name(name).unwrap();
        assert_eq!(note.semitone() as usize, semitone);
        assert_eq!(note.as_str(), *name);
        assert_eq!(NoteName::from_semitone(semitone as i32), note);
    }
}

#[test]
fn semitone_reduction_handles_any_integer() {
    for s in -60i32..60 {
        let expected = s.rem_euclid(12) as u8;
        assert_eq!(NoteName::from_semitone(s).semitone(), expected);
    }
    assert_eq!(NoteName::from_semitone(-1), NoteName::B);
    assert_eq!(NoteName::from_semitone(-12), NoteName::C);
    assert_eq!(NoteName::from_semitone(13), NoteName::Cs);
}

#[test]
fn unknown_names_are_rejected() {
    for bad in ["H", "Db", "c", "", "C##"] {
        assert!(matches!(
            NoteName::from_name(bad),
            Err(NoteError::InvalidNoteName { .. })
        ));
    }
}

#[test]
fn recognizes_c_major() {
    let recognizer = ChordRecognizer::new();
    let chord = recognizer
        .recognize(&[NoteName::C, NoteName::E, NoteName::G])
        .unwrap();
    assert_eq!(chord.root, NoteName::C);
    assert_eq!(chord.quality, ChordKind::Major);
    assert_eq!(chord.to_string(), "C major");
}

#[test]
fn symmetric_diminished_seventh_resolves_to_lowest_root() {
    // dim7 is rotationally symmetric; every member note is a valid root,
    // and the ascending root scan settles on C.
    let recognizer = ChordRecognizer::new();
    let chord = recognizer
        .recognize(&[NoteName::C, NoteName::Ds, NoteName::Fs, NoteName::A])
        .unwrap();
    assert_eq!(chord.to_string(), "C dim7");
}

#[test]
fn two_note_input_matches_only_the_power_fifth() {
    let recognizer = ChordRecognizer::new();
    assert_eq!(recognizer.recognize(&[NoteName::C, NoteName::E]), None);

    let power = recognizer
        .recognize(&[NoteName::C, NoteName::G])
        .unwrap();
    assert_eq!(power.quality, ChordKind::PowerFifth);
    assert_eq!(power.to_string(), "C 5");
}

#[test]
fn empty_input_returns_none() {
    let recognizer = ChordRecognizer::new();
    assert_eq!(recognizer.recognize(&[]), None);
}

#[test]
fn duplicates_are_idempotent() {
    let recognizer = ChordRecognizer::new();
    let deduped = recognizer.recognize(&[NoteName::C, NoteName::E, NoteName::G]);
    let duplicated = recognizer.recognize(&[
        NoteName::C,
        NoteName::C,
        NoteName::E,
        NoteName::G,
        NoteName::G,
    ]);
    assert_eq!(deduped, duplicated);
}

#[test]
fn first_root_wins_over_later_interpretations() {
    let recognizer = ChordRecognizer::new();

    // {C,F,G} is C sus4, but also G sus2 when rooted at G; C is tried first.
    let sus = recognizer
        .recognize(&[NoteName::C, NoteName::F, NoteName::G])
        .unwrap();
    assert_eq!(sus.to_string(), "C sus4");

    // {C,E,G,A} is C 6, but also A m7; C is tried first.
    let sixth = recognizer
        .recognize(&[NoteName::C, NoteName::E, NoteName::G, NoteName::A])
        .unwrap();
    assert_eq!(sixth.to_string(), "C 6");
}

#[test]
fn major_triads_match_at_every_root() {
    let recognizer = ChordRecognizer::new();
    for root in 0..12 {
        let notes = [
            NoteName::from_semitone(root),
            NoteName::from_semitone(root + 4),
            NoteName::from_semitone(root + 7),
        ];
        let chord = recognizer.recognize(&notes).unwrap();
        assert_eq!(chord.root, NoteName::from_semitone(root));
        assert_eq!(chord.quality, ChordKind::Major);
    }
}

#[test]
fn recognize_names_parses_and_rejects() {
    let recognizer = ChordRecognizer::new();

    let chord = recognizer.recognize_names(&["C", "D#", "G"]).unwrap();
    assert_eq!(chord.unwrap().to_string(), "C minor");

    // one bad name rejects the whole lookup
    assert!(matches!(
        recognizer.recognize_names(&["C", "X#", "G"]),
        Err(NoteError::InvalidNoteName { .. })
    ));
}

#[test]
fn non_chordal_cluster_matches_nothing() {
    let recognizer = ChordRecognizer::new();
    assert_eq!(
        recognizer.recognize(&[NoteName::C, NoteName::Cs, NoteName::D]),
        None
    );
}
