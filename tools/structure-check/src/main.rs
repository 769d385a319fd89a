use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use structure_check::config::{CheckSpec, Manifest, ReadFaultPolicy};
use structure_check::error::CheckError;
use structure_check::{OutputFormat, RunOptions};

#[derive(Debug, Parser)]
#[command(name = "structure-check", about = "Check a project's file layout and main module content")]
struct Cli {
    /// Project root; defaults to the enclosing git checkout, else the current directory
    #[arg(long)]
    root_dir: Option<PathBuf>,

    /// JSON file overriding the default file and substring lists
    #[arg(long)]
    manifest: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Report an unreadable content target as a failed check instead of aborting
    #[arg(long)]
    lenient_read: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn build_spec(cli: &Cli) -> Result<CheckSpec, CheckError> {
    let manifest = match &cli.manifest {
        Some(path) => Manifest::load(path)?,
        None => Manifest::default(),
    };
    let root = match &cli.root_dir {
        Some(dir) => dir.clone(),
        None => CheckSpec::discover()?,
    };

    let mut spec = CheckSpec::from_root(&root).apply_manifest(manifest);
    if cli.lenient_read {
        spec.read_fault_policy = ReadFaultPolicy::Failure;
    }
    Ok(spec)
}

fn main() {
    let cli = Cli::parse();

    let spec = match build_spec(&cli) {
        Ok(spec) => spec,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    let options = RunOptions {
        format: match cli.format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        },
        color: true,
        debug_timing: std::env::var("STRUCTURE_CHECK_TIMING").is_ok(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = structure_check::run_all(&mut out, &spec, options);
    if let Err(err) = &outcome {
        eprintln!("Error: {err}");
    }

    process::exit(structure_check::exit_code(&outcome));
}
