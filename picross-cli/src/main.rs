use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use picross_core::{
    MARIOS_PICROSS, Puzzle, RomLayout, identify, md5_hex, read_puzzles, write_puzzles,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "picross-cli")]
#[command(about = "Mario's Picross puzzle extract/insert – CLI tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Accept ROMs that are not a known Mario's Picross dump
    #[arg(long, global = true)]
    skip_check: bool,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a file is a known Mario's Picross ROM
    Verify {
        /// Path to the ROM
        rom: PathBuf,
    },

    /// List every puzzle stored in the ROM
    List {
        /// Path to the ROM
        rom: PathBuf,
    },

    /// Print a single puzzle
    Show {
        /// Path to the ROM
        rom: PathBuf,

        /// Puzzle number, 0 is the tutorial
        index: usize,
    },

    /// Dump the puzzle table as raw records
    Export {
        /// Path to the ROM
        rom: PathBuf,

        /// Path to write the records to
        out_records: PathBuf,
    },

    /// Write raw records back into a copy of the ROM
    Import {
        /// Path to the original ROM
        rom: PathBuf,

        /// Records file, as written by `export`; the first record is kept from the ROM
        records: PathBuf,

        /// Path to write the patched ROM to
        out_rom: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("picross_cli={}", level).parse()?)
                .add_directive(format!("picross_core={}", level).parse()?),
        )
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        Commands::Verify { rom } => cmd_verify(&rom)?,
        Commands::List { rom } => cmd_list(&rom, cli.skip_check)?,
        Commands::Show { rom, index } => cmd_show(&rom, index, cli.skip_check)?,
        Commands::Export { rom, out_records } => cmd_export(&rom, &out_records, cli.skip_check)?,
        Commands::Import {
            rom,
            records,
            out_rom,
        } => cmd_import(&rom, &records, &out_rom, cli.skip_check)?,
    }

    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Reads a ROM and resolves its layout
fn load_rom(path: &Path, skip_check: bool) -> Result<(Vec<u8>, RomLayout)> {
    let data =
        fs::read(path).with_context(|| format!("Failed to read ROM: {}", path.display()))?;

    info!("len(rom)={}", data.len());

    match identify(&file_name(path), &data) {
        Ok(known) => {
            info!("recognized {} ({})", known.file_name, known.region);
            Ok((data, known.layout))
        }
        Err(e) if skip_check => {
            warn!("{}; continuing anyway", e);
            Ok((data, MARIOS_PICROSS))
        }
        Err(e) => Err(e).context("Pass --skip-check to use this file anyway"),
    }
}

fn load_puzzles(path: &Path, skip_check: bool) -> Result<Vec<Puzzle>> {
    let (rom, layout) = load_rom(path, skip_check)?;
    let puzzles = layout
        .read_puzzles(&rom)
        .context("Failed to read puzzle table")?;
    Ok(puzzles)
}

fn cmd_verify(rom_path: &Path) -> Result<()> {
    let data =
        fs::read(rom_path).with_context(|| format!("Failed to read ROM: {}", rom_path.display()))?;

    println!("[info] size={}  md5={}", data.len(), md5_hex(&data));

    let known = identify(&file_name(rom_path), &data)?;
    println!(
        "[ok] {} is a known Mario's Picross ROM ({})",
        rom_path.display(),
        known.region
    );

    Ok(())
}

fn cmd_list(rom_path: &Path, skip_check: bool) -> Result<()> {
    let puzzles = load_puzzles(rom_path, skip_check)?;

    for (index, puzzle) in puzzles.iter().enumerate() {
        println!(
            "#{:<3} {:>2}x{:<2} {:>3} filled{}",
            index,
            puzzle.width,
            puzzle.height,
            puzzle.filled_count(),
            if index == 0 { "  (tutorial)" } else { "" }
        );
    }

    Ok(())
}

fn cmd_show(rom_path: &Path, index: usize, skip_check: bool) -> Result<()> {
    let puzzles = load_puzzles(rom_path, skip_check)?;

    let Some(puzzle) = puzzles.get(index) else {
        bail!(
            "Puzzle #{} does not exist, the ROM has {} puzzles",
            index,
            puzzles.len()
        );
    };

    println!("Puzzle #{} ({}x{})", index, puzzle.width, puzzle.height);
    print!("{}", puzzle);

    Ok(())
}

fn cmd_export(rom_path: &Path, out_path: &Path, skip_check: bool) -> Result<()> {
    let puzzles = load_puzzles(rom_path, skip_check)?;
    let records = write_puzzles(&puzzles);

    fs::write(out_path, &records)
        .with_context(|| format!("Failed to write records file: {}", out_path.display()))?;

    println!(
        "[ok] wrote {} puzzles ({} bytes) -> {}",
        puzzles.len(),
        records.len(),
        out_path.display()
    );

    Ok(())
}

fn cmd_import(
    rom_path: &Path,
    records_path: &Path,
    out_path: &Path,
    skip_check: bool,
) -> Result<()> {
    let (mut rom, layout) = load_rom(rom_path, skip_check)?;

    let records = fs::read(records_path)
        .with_context(|| format!("Failed to read records file: {}", records_path.display()))?;
    let puzzles = read_puzzles(&records).context("Failed to decode records")?;

    if puzzles.len() < 2 {
        bail!("Records file holds no puzzles besides the tutorial");
    }

    layout
        .insert_puzzles(&mut rom, &puzzles[1..])
        .context("Failed to insert puzzles")?;

    fs::write(out_path, &rom)
        .with_context(|| format!("Failed to write ROM: {}", out_path.display()))?;

    println!(
        "[ok] inserted {} puzzles -> {}",
        puzzles.len() - 1,
        out_path.display()
    );

    Ok(())
}
