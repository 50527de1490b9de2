//! Key-relative pitch numbering.
//!
//! Maps a tonal pitch class to the 1–7 scale-degree digit and an absolute
//! pitch to the signed octave offset shown as dots above or below the
//! digit. Both are pure table lookups over the key context; nothing is
//! cached between layout passes since the host may change pitch or key at
//! any time.

use crate::model::{Key, Tpc};

/// Scale-degree digits for the circle-of-fifths cycle F,C,G,D,A,E,B.
const DEGREE_BY_FIFTH: [u8; 7] = [4, 1, 5, 2, 6, 3, 7];

/// Scale-degree digit (1–7) of `tpc` in `key`.
///
/// The index is the tpc's circle-of-fifths distance from the key's tonic,
/// reduced mod 7; enharmonic respellings land on the degree the host
/// spelled, not the sounding one.
pub fn degree_number(tpc: Tpc, key: Key) -> u8 {
    let index = (tpc.0 - Tpc::MIN.0) - (key.fifths() - Key::MIN_FIFTHS);
    DEGREE_BY_FIFTH[index.rem_euclid(7) as usize]
}

/// Signed octave offset of `pitch` relative to `key`'s middle octave:
/// 0 for the reference octave, negative below, positive above.
///
/// Floor division, so a pitch one semitone below the reference tonic is
/// already octave -1.
pub fn octave_offset(pitch: i32, key: Key) -> i32 {
    const PITCH_DELTA_OCTAVE: i32 = 12;
    (pitch - key.reference_pitch()).div_euclid(PITCH_DELTA_OCTAVE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn c_major_degree_cycle_follows_fifths() {
        // F,C,G,D,A,E,B reduce to degrees 4,1,5,2,6,3,7 in that order.
        let expected = [
            (Tpc::F, 4),
            (Tpc::C, 1),
            (Tpc::G, 5),
            (Tpc::D, 2),
            (Tpc::A, 6),
            (Tpc::E, 3),
            (Tpc::B, 7),
        ];
        for (tpc, degree) in expected {
            assert_eq!(degree_number(tpc, Key::C), degree, "tpc {:?}", tpc);
        }
    }

    #[test]
    fn g_major_degrees_shift_with_the_tonic() {
        let g_major = Key::from_fifths(1).unwrap();
        assert_eq!(degree_number(Tpc::G, g_major), 1);
        assert_eq!(degree_number(Tpc::A, g_major), 2);
        assert_eq!(degree_number(Tpc::D, g_major), 5);
        // F♯ is the leading tone of G major.
        let f_sharp = Tpc(Tpc::F.0 + 7);
        assert_eq!(degree_number(f_sharp, g_major), 7);
    }

    #[test]
    fn flat_key_degrees() {
        let f_major = Key::from_fifths(-1).unwrap();
        assert_eq!(degree_number(Tpc::F, f_major), 1);
        let b_flat = Tpc(Tpc::B.0 - 7);
        assert_eq!(degree_number(b_flat, f_major), 4);
    }

    #[test]
    fn octave_boundary_uses_floor_division() {
        // Middle-octave reference for C major is pitch 60.
        assert_eq!(octave_offset(60, Key::C), 0);
        assert_eq!(octave_offset(59, Key::C), -1);
        assert_eq!(octave_offset(71, Key::C), 0);
        assert_eq!(octave_offset(72, Key::C), 1);
        assert_eq!(octave_offset(48, Key::C), -1);
        assert_eq!(octave_offset(47, Key::C), -2);
    }

    #[test]
    fn octave_offset_respects_key_reference() {
        let g_major = Key::from_fifths(1).unwrap();
        assert_eq!(g_major.reference_pitch(), 67);
        assert_eq!(octave_offset(67, g_major), 0);
        assert_eq!(octave_offset(66, g_major), -1);
        assert_eq!(octave_offset(79, g_major), 1);
    }

    #[test]
    fn key_reference_pitches_sit_in_the_middle_octave() {
        let expected = [(0, 60), (1, 67), (-1, 65), (2, 62), (-2, 70)];
        for (fifths, pitch) in expected {
            let key = Key::from_fifths(fifths).unwrap();
            assert_eq!(key.reference_pitch(), pitch, "key fifths {}", fifths);
        }
    }
}
