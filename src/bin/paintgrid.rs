use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use paintgrid::{ConvertOptions, FrameLibrary, FrameSelector, SizePolicy};

/// Convert an image into a tiled painting, optionally inside a green-screened frame.
#[derive(Parser, Debug)]
#[command(name = "paintgrid", version)]
struct Cli {
    /// Input image (96x64 unless --allow-oversize).
    input: PathBuf,

    /// Output PNG path.
    output: PathBuf,

    /// Frame to apply: `0` for none, otherwise the NAME in `frame_<NAME>.png`.
    #[arg(allow_hyphen_values = true)]
    frame: String,

    /// Directory holding the frame images.
    #[arg(long, default_value = FrameLibrary::DEFAULT_DIR)]
    frames_dir: PathBuf,

    /// Accept inputs larger than 96x64 and crop them to the top-left region.
    #[arg(long)]
    allow_oversize: bool,

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
    let frame = FrameSelector::parse(&cli.frame)?;
    let opts = ConvertOptions {
        frames: FrameLibrary::new(cli.frames_dir),
        size_policy: if cli.allow_oversize {
            SizePolicy::AtLeast
        } else {
            SizePolicy::Exact
        },
    };

    let report = paintgrid::convert(&cli.input, &cli.output, &frame, &opts)
        .with_context(|| format!("convert '{}'", cli.input.display()))?;

    eprintln!("wrote {}", report.output.display());
    Ok(())
}
