use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;

/// Report which images contain the pure-green chroma-key marker.
#[derive(Parser, Debug)]
#[command(name = "color-check", version)]
struct Cli {
    /// Text report to write, one line per input image.
    report: PathBuf,

    /// Images to scan.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    paintgrid::init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let entries = paintgrid::scan_files(cli.inputs.as_slice())?;

    let f = File::create(&cli.report)
        .with_context(|| format!("create report '{}'", cli.report.display()))?;
    paintgrid::write_report(BufWriter::new(f), &entries)?;

    let hits = entries.iter().filter(|e| e.contains).count();
    tracing::info!(scanned = entries.len(), hits, "scan complete");
    eprintln!("wrote {}", cli.report.display());
    Ok(())
}
