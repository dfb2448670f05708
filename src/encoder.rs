//! Turns a melody into the record table the playback routine consumes.
//!
//! Each scored note becomes two records: a note-on carrying the pitch byte,
//! then a note-off (pitch 0x00) one inter-note pause later. Times are stored
//! as cumulative end times in 16 ms ticks, so the player only compares the
//! current tick against the next record's end field.

use std::fmt;

use crate::note::Note;

/// Gap inserted between notes so repeated pitches re-articulate, in ms.
pub const INTER_NOTE_PAUSE_MS: i64 = 16;

/// The encoder's time unit: one tick per 16 ms.
pub const MS_PER_TICK: i64 = 16;

/// One table entry: pitch byte and cumulative end time in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub pitch: u8,
    pub end: u16,
}

/// End-of-tune marker. The end field 0xffff is reserved for this record, which
/// caps usable melody time at 65534 ticks (about 17 minutes).
pub const SENTINEL: Record = Record {
    pitch: 0x00,
    end: 0xffff,
};

/// Encoding failure: a melody entry whose spelling is not one of the 17
/// recognized note names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeError {
    pub index: usize,
    pub spelling: String,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "melody entry {}: unrecognized note '{}'",
            self.index, self.spelling
        )
    }
}

impl std::error::Error for EncodeError {}

/// Truncating conversion from milliseconds to ticks. The truncation (rather
/// than rounding) matches the tables already burned into firmware, so keep it.
fn encode_end(time_ms: i64) -> u16 {
    (time_ms / MS_PER_TICK) as u16
}

/// Encode one melody at the given tempo. Returns the full table including the
/// trailing sentinel, or the first bad note name. The running end time only
/// ever advances, so ticks come out monotonically non-decreasing.
///
/// The 16-bit tick ceiling is not checked here; melodies long enough to reach
/// the sentinel value are out of scope for a buzzer jingle.
pub fn encode(melody: &[(&str, f64)], tempo_bpm: u32) -> Result<Vec<Record>, EncodeError> {
    let ms_per_whole = 60.0 / tempo_bpm as f64 * 4.0 * 1000.0;

    let mut records = Vec::with_capacity(melody.len() * 2 + 1);
    let mut end_time_ms: i64 = 0;

    for (index, (spelling, duration)) in melody.iter().enumerate() {
        let note = Note::parse(spelling).ok_or_else(|| EncodeError {
            index,
            spelling: (*spelling).to_string(),
        })?;

        end_time_ms += (duration * ms_per_whole).round() as i64 - INTER_NOTE_PAUSE_MS;
        records.push(Record {
            pitch: note.pitch_byte(),
            end: encode_end(end_time_ms),
        });

        end_time_ms += INTER_NOTE_PAUSE_MS;
        records.push(Record {
            pitch: 0x00,
            end: encode_end(end_time_ms),
        });
    }

    records.push(SENTINEL);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tune;

    #[test]
    fn test_single_quarter_note_at_96_bpm() {
        // ms_per_whole = 60/96*4*1000 = 2500, so a quarter note ends at
        // 625 ms: on at (625-16)/16 = 38 ticks, off at 625/16 = 39 ticks.
        let records = encode(&[("B4", 0.25)], 96).unwrap();
        assert_eq!(
            records,
            vec![
                Record {
                    pitch: 0x4b,
                    end: 0x0026
                },
                Record {
                    pitch: 0x00,
                    end: 0x0027
                },
                SENTINEL,
            ]
        );
    }

    #[test]
    fn test_empty_melody_is_just_the_sentinel() {
        assert_eq!(encode(&[], 96).unwrap(), vec![SENTINEL]);
    }

    #[test]
    fn test_two_records_per_note_plus_sentinel() {
        let tune = tune::find("tune1").unwrap();
        let records = encode(tune.melody, tune.tempo_bpm).unwrap();
        assert_eq!(records.len(), 60 * 2 + 1);
        assert_eq!(*records.last().unwrap(), SENTINEL);
    }

    #[test]
    fn test_ticks_monotonic() {
        let tune = tune::find("tune1").unwrap();
        let records = encode(tune.melody, tune.tempo_bpm).unwrap();
        for pair in records[..records.len() - 1].windows(2) {
            assert!(pair[0].end <= pair[1].end);
        }
    }

    #[test]
    fn test_on_records_carry_pitch_off_records_are_zero() {
        let records = encode(&[("C4", 0.25), ("G4", 0.25)], 96).unwrap();
        assert_eq!(records[0].pitch, 0x40);
        assert_eq!(records[1].pitch, 0x00);
        assert_eq!(records[2].pitch, 0x47);
        assert_eq!(records[3].pitch, 0x00);
    }

    #[test]
    fn test_doubling_tempo_halves_ticks() {
        let melody = &[("B4", 0.25), ("C5", 0.5), ("D5", 0.25)];
        let slow = encode(melody, 96).unwrap();
        let fast = encode(melody, 192).unwrap();
        // Halving is modulo tick truncation and the fixed pause, so allow one
        // tick of slack on each comparison.
        for (s, f) in slow.iter().zip(&fast).take(slow.len() - 1) {
            let expected = s.end / 2;
            assert!(
                f.end >= expected.saturating_sub(1) && f.end <= expected + 1,
                "slow {} fast {}",
                s.end,
                f.end
            );
        }
    }

    #[test]
    fn test_unknown_note_aborts() {
        let err = encode(&[("B4", 0.25), ("H4", 0.25)], 96).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.spelling, "H4");
    }

    #[test]
    fn test_tick_ceiling_is_not_enforced() {
        // 65534 ticks is the last usable end time before the reserved
        // sentinel value. A single note ending at 1048560 ms lands there;
        // anything longer collides with 0xffff. Documented, not validated.
        assert_eq!(encode_end(65534 * MS_PER_TICK), 0xfffe);
        assert_eq!(encode_end(65535 * MS_PER_TICK), 0xffff);
    }
}
