mod emit;
mod encoder;
mod note;
mod tune;

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use crate::encoder::MS_PER_TICK;
use crate::note::Note;

#[derive(Parser)]
#[command(name = "tunegen", about = "Generates C tune tables for the speaker firmware")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the tunes source file
    Gen {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Override tempo (BPM) for every tune
        #[arg(long)]
        tempo: Option<u32>,
    },

    /// List the built-in tunes
    List,

    /// Decode one tune's table and display it record by record
    Show {
        /// Tune name (C identifier or title)
        tune: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Gen { out, tempo } => {
            let mut tunes = tune::builtin().to_vec();
            if let Some(bpm) = tempo {
                for t in &mut tunes {
                    t.tempo_bpm = bpm;
                }
            }

            let text = render_tunes(&tunes);
            match out {
                Some(path) => {
                    if let Err(e) = fs::write(&path, &text) {
                        eprintln!("Error writing {}: {}", path.display(), e);
                        std::process::exit(1);
                    }
                    eprintln!("Wrote {} tune(s) to {}", tunes.len(), path.display());
                }
                None => print!("{}", text),
            }
        }
        Command::List => {
            for t in tune::builtin() {
                println!(
                    "{:8} {} ({} BPM, {} notes, {:.1}s)",
                    t.var_name,
                    t.title,
                    t.tempo_bpm,
                    t.melody.len(),
                    t.duration_ms() as f64 / 1000.0
                );
            }
        }
        Command::Show { tune: name } => {
            let t = tune::find(&name).unwrap_or_else(|| {
                eprintln!("No such tune: {} (try 'tunegen list')", name);
                std::process::exit(1);
            });
            show_tune(t);
        }
    }
}

fn render_tunes(tunes: &[tune::Tune]) -> String {
    emit::render(tunes).unwrap_or_else(|e| {
        eprintln!("Encode error: {}", e);
        std::process::exit(1);
    })
}

fn show_tune(t: &tune::Tune) {
    let records = encoder::encode(t.melody, t.tempo_bpm).unwrap_or_else(|e| {
        eprintln!("Encode error: {}", e);
        std::process::exit(1);
    });

    println!("// {} ({} BPM)", t.title, t.tempo_bpm);
    for record in records {
        let end_ms = i64::from(record.end) * MS_PER_TICK;
        if record == encoder::SENTINEL {
            println!("  tick {:>5}  end of tune", record.end);
        } else if record.pitch == 0x00 {
            println!("  tick {:>5}  {:>7} ms  off", record.end, end_ms);
        } else {
            match Note::from_pitch_byte(record.pitch) {
                Some(note) => println!(
                    "  tick {:>5}  {:>7} ms  {:<4} ({} Hz)",
                    record.end,
                    end_ms,
                    note.to_string(),
                    note.frequency()
                ),
                None => println!("  tick {:>5}  {:>7} ms  ?0x{:02x}", record.end, end_ms, record.pitch),
            }
        }
    }
}
