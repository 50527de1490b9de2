//! Data model for the events handed to the numbered-notation layout engine.
//!
//! These structures capture the already-resolved musical information the
//! host notation engine supplies: pitches, durations, and the key context.
//! The engine itself never mutates them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing model values from raw host data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("key fifths {0} outside -7..=7")]
    KeyOutOfRange(i32),
    #[error("tonal pitch class {0} outside -1..=33")]
    TpcOutOfRange(i32),
}

/// Diatonic note letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Step {
    /// Semitone offset of the natural step within an octave (C = 0).
    pub fn semitone(&self) -> i32 {
        match self {
            Step::C => 0,
            Step::D => 2,
            Step::E => 4,
            Step::F => 5,
            Step::G => 7,
            Step::A => 9,
            Step::B => 11,
        }
    }

    /// Tonal pitch class of the natural step (circle-of-fifths encoding).
    fn natural_tpc(&self) -> i32 {
        match self {
            Step::C => 14,
            Step::D => 16,
            Step::E => 18,
            Step::F => 13,
            Step::G => 15,
            Step::A => 17,
            Step::B => 19,
        }
    }
}

/// Pitch of one note, as resolved by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pitch {
    /// Note name: A–G
    pub step: Step,
    /// Octave number (middle C = C4)
    pub octave: i32,
    /// Chromatic alteration: -1 = flat, 1 = sharp
    #[serde(default)]
    pub alter: i32,
}

impl Pitch {
    pub fn new(step: Step, octave: i32, alter: i32) -> Self {
        Self { step, octave, alter }
    }

    /// Convert pitch to MIDI note number. Middle C (C4) = 60.
    pub fn midi(&self) -> i32 {
        (self.octave + 1) * 12 + self.step.semitone() + self.alter
    }

    /// Tonal pitch class in circle-of-fifths encoding.
    pub fn tpc(&self) -> Tpc {
        // Each sharp moves seven positions along the circle of fifths.
        Tpc(self.step.natural_tpc() + 7 * self.alter)
    }
}

/// Tonal pitch class: position on the circle of fifths, from F♭♭ (-1)
/// through the naturals F,C,G,D,A,E,B (13..=19) up to B♯♯ (33).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tpc(pub i32);

impl Tpc {
    pub const MIN: Tpc = Tpc(-1);
    pub const MAX: Tpc = Tpc(33);

    pub const F: Tpc = Tpc(13);
    pub const C: Tpc = Tpc(14);
    pub const G: Tpc = Tpc(15);
    pub const D: Tpc = Tpc(16);
    pub const A: Tpc = Tpc(17);
    pub const E: Tpc = Tpc(18);
    pub const B: Tpc = Tpc(19);

    pub fn from_raw(value: i32) -> Result<Tpc, ModelError> {
        if value < Tpc::MIN.0 || value > Tpc::MAX.0 {
            return Err(ModelError::TpcOutOfRange(value));
        }
        Ok(Tpc(value))
    }
}

/// Major-key context, identified by its count of sharps (positive) or
/// flats (negative) in the signature. Serialized as the bare fifths
/// count; deserialization goes through the same range validation as
/// [`Key::from_fifths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Key {
    fifths: i32,
}

impl TryFrom<i32> for Key {
    type Error = ModelError;

    fn try_from(fifths: i32) -> Result<Key, ModelError> {
        Key::from_fifths(fifths)
    }
}

impl From<Key> for i32 {
    fn from(key: Key) -> i32 {
        key.fifths
    }
}

impl Key {
    pub const MIN_FIFTHS: i32 = -7;
    pub const MAX_FIFTHS: i32 = 7;

    /// C major.
    pub const C: Key = Key { fifths: 0 };

    pub fn from_fifths(fifths: i32) -> Result<Key, ModelError> {
        if !(Key::MIN_FIFTHS..=Key::MAX_FIFTHS).contains(&fifths) {
            return Err(ModelError::KeyOutOfRange(fifths));
        }
        Ok(Key { fifths })
    }

    pub fn fifths(&self) -> i32 {
        self.fifths
    }

    /// The key's tonic pitch in the middle octave (octave #4).
    /// C major answers middle C (60).
    pub fn reference_pitch(&self) -> i32 {
        // Indexed from C♭ (-7) to C♯ (+7).
        const KEY_NOTE_PITCH: [i32; 15] = [
            71, 66, 61, 68, 63, 70, 65, 60, 67, 62, 69, 64, 71, 66, 61,
        ];
        KEY_NOTE_PITCH[(self.fifths - Key::MIN_FIFTHS) as usize]
    }
}

impl Default for Key {
    fn default() -> Self {
        Key::C
    }
}

/// Rhythmic value of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duration {
    Whole,
    Half,
    Quarter,
    Eighth,
    #[serde(rename = "16th")]
    Sixteenth,
    #[serde(rename = "32nd")]
    ThirtySecond,
    #[serde(rename = "64th")]
    SixtyFourth,
}

impl Duration {
    /// Number of beam levels this duration participates in
    /// (eighth = 1, sixteenth = 2, ...).
    pub fn hooks(&self) -> usize {
        match self {
            Duration::Whole | Duration::Half | Duration::Quarter => 0,
            Duration::Eighth => 1,
            Duration::Sixteenth => 2,
            Duration::ThirtySecond => 3,
            Duration::SixtyFourth => 4,
        }
    }

    /// Number of duration dashes drawn after the digit: a whole note is
    /// extended by three dashes, a half note by one.
    pub fn dash_count(&self) -> u32 {
        match self {
            Duration::Whole => 3,
            Duration::Half => 1,
            _ => 0,
        }
    }
}

/// A single note-chord or rest within a beamed group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupEvent {
    /// Whether this event is a rest
    #[serde(default)]
    pub rest: bool,
    /// Sounding pitches; empty for rests. Order is irrelevant — layout
    /// sorts by sounding pitch.
    #[serde(default)]
    pub pitches: Vec<Pitch>,
    /// Rhythmic value
    pub duration: Duration,
}

impl GroupEvent {
    pub fn note(pitches: Vec<Pitch>, duration: Duration) -> Self {
        Self { rest: false, pitches, duration }
    }

    pub fn rest(duration: Duration) -> Self {
        Self { rest: true, pitches: Vec::new(), duration }
    }
}

/// The payload a host passes across the FFI boundary: one beamed group
/// plus its key context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRequest {
    #[serde(default)]
    pub key: Key,
    pub events: Vec<GroupEvent>,
}
