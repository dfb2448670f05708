//! Renders encoded tune tables as the C source file the firmware compiles in.
//!
//! The output is built as one string before anything is written, so an
//! encoding error never leaves a partial file behind. The header comment and
//! layout are kept byte-identical to what the legacy generator produced, so
//! regenerating the checked-in file produces no spurious diff.

use crate::encoder::{self, EncodeError, Record};
use crate::tune::Tune;

/// Fixed preamble: provenance comment plus the include that supplies the
/// TuneData struct (a byte and a 16-bit word), which is an external contract.
const HEADER: &str = "\
// Generated tunes file.
//
// The code to generate this file is in make_tables.py. Do not edit by hand -
// change and re-run the python instead.

#include \"decls.h\"
";

/// One record line: pitch as two lowercase hex digits (octave digit then
/// semitone class), end time as four.
fn record_line(record: Record) -> String {
    format!("  {{0x{:02x}, 0x{:04x}}},\n", record.pitch, record.end)
}

/// Render one tune's table: title comment, array declaration, record lines
/// ending with the sentinel, closing brace.
pub fn render_tune(tune: &Tune) -> Result<String, EncodeError> {
    let records = encoder::encode(tune.melody, tune.tempo_bpm)?;

    let mut out = format!("// {}\n", tune.title);
    out.push_str(&format!("TuneData {}[] = {{\n", tune.var_name));
    for record in records {
        out.push_str(&record_line(record));
    }
    out.push_str("};\n");
    Ok(out)
}

/// Render the complete generated file for a set of tunes, in order.
pub fn render(tunes: &[Tune]) -> Result<String, EncodeError> {
    let mut out = String::from(HEADER);
    for tune in tunes {
        out.push('\n');
        out.push_str(&render_tune(tune)?);
    }
    Ok(out)
}
