//! Musical note names, pitch-byte packing, and frequency lookup.
//!
//! A pitch byte packs the octave digit into the high nibble and the semitone
//! class into the low nibble, so 0x40 is middle C (C4) and 0x49 is A4 = 440 Hz.
//! The zero byte is reserved for "note off" in tune tables.

use std::fmt;

/// Musical note names (chromatic scale)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteName {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl NoteName {
    /// Semitone class within an octave (C=0, B=11)
    pub fn semitone(self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::CSharp => 1,
            NoteName::D => 2,
            NoteName::DSharp => 3,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::FSharp => 6,
            NoteName::G => 7,
            NoteName::GSharp => 8,
            NoteName::A => 9,
            NoteName::ASharp => 10,
            NoteName::B => 11,
        }
    }

    /// Look up a note-name spelling. All 17 spellings are accepted: the seven
    /// naturals, five sharps, and the five enharmonic flats (Db = C#, etc.).
    pub fn from_name(name: &str) -> Option<NoteName> {
        match name {
            "C" => Some(NoteName::C),
            "C#" | "Db" => Some(NoteName::CSharp),
            "D" => Some(NoteName::D),
            "D#" | "Eb" => Some(NoteName::DSharp),
            "E" => Some(NoteName::E),
            "F" => Some(NoteName::F),
            "F#" | "Gb" => Some(NoteName::FSharp),
            "G" => Some(NoteName::G),
            "G#" | "Ab" => Some(NoteName::GSharp),
            "A" => Some(NoteName::A),
            "A#" | "Bb" => Some(NoteName::ASharp),
            "B" => Some(NoteName::B),
            _ => None,
        }
    }

    /// Reverse lookup for display. Sharps are the canonical spelling.
    pub fn name(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::CSharp => "C#",
            NoteName::D => "D",
            NoteName::DSharp => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::FSharp => "F#",
            NoteName::G => "G",
            NoteName::GSharp => "G#",
            NoteName::A => "A",
            NoteName::ASharp => "A#",
            NoteName::B => "B",
        }
    }
}

/// Frequencies for the 10th octave, in Hz. Lower octaves halve per step, so a
/// right shift by (10 - octave) recovers any octave's frequency. The tenth
/// octave itself is beyond both human hearing and the speaker.
const FREQ_OCTAVE_10: [u32; 12] = [
    16744, 17740, 18795, 19912, 21096, 22350, 23679, 25087, 26580, 28160, 29834, 31609,
];

/// A pitched note: name plus octave digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub name: NoteName,
    pub octave: u8,
}

impl Note {
    /// Parse a spelling like `"B4"`, `"C#5"`, or `"Eb3"`: a note letter, an
    /// optional accidental, and a single octave digit.
    pub fn parse(s: &str) -> Option<Note> {
        let octave_at = s.len().checked_sub(1)?;
        let octave = s.get(octave_at..)?.parse::<u8>().ok()?;
        let name = NoteName::from_name(s.get(..octave_at)?)?;
        Some(Note { name, octave })
    }

    /// Pack into a pitch byte: octave in the high nibble, semitone class in
    /// the low nibble.
    pub fn pitch_byte(self) -> u8 {
        (self.octave << 4) | self.name.semitone()
    }

    /// Unpack a pitch byte. Returns None for low nibbles 12-15 or octaves
    /// above 9, which no valid note produces.
    pub fn from_pitch_byte(byte: u8) -> Option<Note> {
        let semitone = byte & 0xf;
        let octave = byte >> 4;
        if semitone >= 12 || octave > 9 {
            return None;
        }
        let name = match semitone {
            0 => NoteName::C,
            1 => NoteName::CSharp,
            2 => NoteName::D,
            3 => NoteName::DSharp,
            4 => NoteName::E,
            5 => NoteName::F,
            6 => NoteName::FSharp,
            7 => NoteName::G,
            8 => NoteName::GSharp,
            9 => NoteName::A,
            10 => NoteName::ASharp,
            _ => NoteName::B,
        };
        Some(Note { name, octave })
    }

    /// Frequency in Hz, derived from the octave-10 table.
    pub fn frequency(self) -> u32 {
        FREQ_OCTAVE_10[self.name.semitone() as usize] >> (10 - u32::from(self.octave))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name.name(), self.octave)
    }
}
