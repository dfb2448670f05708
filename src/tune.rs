//! Built-in tune definitions: title, C identifier, tempo, and melody.
//!
//! A melody is an ordered list of (note-name, duration) pairs, durations in
//! whole notes (1.0 = one full measure at 4 beats). The tables are hardcoded;
//! the generator never mutates them.

/// One tune as it will appear in the generated C file.
#[derive(Debug, Clone, Copy)]
pub struct Tune {
    /// Human-readable title, emitted as a comment above the table.
    pub title: &'static str,
    /// C identifier for the generated array.
    pub var_name: &'static str,
    /// Beats per minute.
    pub tempo_bpm: u32,
    /// (note-name spelling, duration in whole notes) pairs, in playback order.
    pub melody: &'static [(&'static str, f64)],
}

impl Tune {
    /// Playing time in milliseconds at the tune's own tempo.
    pub fn duration_ms(&self) -> u32 {
        let ms_per_whole = 60.0 / self.tempo_bpm as f64 * 4.0 * 1000.0;
        let whole_notes: f64 = self.melody.iter().map(|(_, d)| d).sum();
        (whole_notes * ms_per_whole).round() as u32
    }
}

/// The main theme of Beethoven's ninth, four phrases.
const ODE_TO_JOY: &[(&str, f64)] = &[
    ("B4", 0.25),
    ("B4", 0.25),
    ("C5", 0.25),
    ("D5", 0.25),
    ("D5", 0.25),
    ("C5", 0.25),
    ("B4", 0.25),
    ("A4", 0.25),
    ("G4", 0.25),
    ("G4", 0.25),
    ("A4", 0.25),
    ("B4", 0.25),
    ("B4", 0.375),
    ("A4", 0.125),
    ("A4", 0.50),
    // phrase 2
    ("B4", 0.25),
    ("B4", 0.25),
    ("C5", 0.25),
    ("D5", 0.25),
    ("D5", 0.25),
    ("C5", 0.25),
    ("B4", 0.25),
    ("A4", 0.25),
    ("G4", 0.25),
    ("G4", 0.25),
    ("A4", 0.25),
    ("B4", 0.25),
    ("A4", 0.375),
    ("G4", 0.125),
    ("G4", 0.50),
    // phrase 3
    ("A4", 0.50),
    ("B4", 0.25),
    ("G4", 0.25),
    ("A4", 0.25),
    ("B4", 0.125),
    ("C5", 0.125),
    ("B4", 0.25),
    ("G4", 0.25),
    ("A4", 0.25),
    ("A4", 0.25),
    ("B4", 0.25),
    ("A4", 0.25),
    ("G4", 0.375),
    ("A4", 0.125),
    ("D5", 0.50),
    // phrase 4
    ("B4", 0.25),
    ("B4", 0.25),
    ("C5", 0.25),
    ("D5", 0.25),
    ("D5", 0.25),
    ("C5", 0.25),
    ("B4", 0.25),
    ("A4", 0.25),
    ("G4", 0.25),
    ("G4", 0.25),
    ("A4", 0.25),
    ("B4", 0.25),
    ("A4", 0.375),
    ("G4", 0.125),
    ("G4", 0.50),
];

const BUILTIN: &[Tune] = &[Tune {
    title: "Ode To Joy",
    var_name: "tune1",
    tempo_bpm: 96,
    melody: ODE_TO_JOY,
}];

/// All tunes that go into the generated file, in output order.
pub fn builtin() -> &'static [Tune] {
    BUILTIN
}

/// Look up a built-in tune by its C identifier or title.
pub fn find(name: &str) -> Option<&'static Tune> {
    BUILTIN
        .iter()
        .find(|t| t.var_name == name || t.title.eq_ignore_ascii_case(name))
}
