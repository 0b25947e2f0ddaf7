use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use tonec::{render, translate, Options};

/// Fixed output location consumed by the tone player.
const OUTPUT_PATH: &str = "output.txt";

/// Compile a text file of note annotations into tone-player code.
#[derive(Parser)]
#[command(name = "tonec", version, about, long_about = None)]
struct Cli {
    /// Path to the text file containing notes
    path: PathBuf,

    /// Duration of a single beat in milliseconds
    #[arg(
        short,
        long,
        default_value_t = 100,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    beat: u32,

    /// Octave shift (e.g. +1, -2)
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    octave_shift: i32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;

    let opts = Options {
        beat_ms: cli.beat,
        octave_shift: cli.octave_shift,
    };
    let directives = translate(&text, &opts)
        .with_context(|| format!("failed to translate {}", cli.path.display()))?;

    fs::write(OUTPUT_PATH, render(&directives))
        .with_context(|| format!("failed to write {}", OUTPUT_PATH))?;

    println!("{} directive(s) -> {}", directives.len(), OUTPUT_PATH);

    Ok(())
}
