// src/main.rs

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use grf2mot::converter::convert_file;

#[derive(Parser)]
#[command(name = "grf2mot")]
#[command(version)]
#[command(about = "Convert QTM force-plate TSV exports to OpenSim .mot ground reaction files", long_about = None)]
struct Cli {
    /// Input TSV file(s); each produces a .mot file next to it
    #[arg(required = true, value_name = "FILE")]
    input: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut failures = 0usize;
    for path in &cli.input {
        println!("Converting {}", path.display());
        match convert_file(path) {
            Ok(output_path) => println!("{} Done!", output_path.display()),
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} conversions failed", failures, cli.input.len());
    }
    Ok(())
}
